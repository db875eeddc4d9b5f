//! Command-line arguments that turn into tool input.

use clap::Args;
use serde_json::{Map, Value, json};

/// Arguments for `websets create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// What to search for, in natural language
    pub query: String,

    /// Number of items to find
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Criterion every item must satisfy
    #[arg(long)]
    pub criteria: Option<String>,

    /// Expected entity type (company, person, article, ...)
    #[arg(long)]
    pub entity: Option<String>,

    /// Enrichment as DESCRIPTION or DESCRIPTION=FORMAT (repeatable)
    #[arg(long = "enrichment", value_parser = parse_enrichment)]
    pub enrichments: Vec<(String, String)>,

    /// Metadata as KEY=VALUE (repeatable)
    #[arg(long = "metadata", value_parser = parse_key_val)]
    pub metadata: Vec<(String, String)>,

    /// Return the webset id immediately instead of waiting for items
    #[arg(long)]
    pub no_wait: bool,
}

impl CreateArgs {
    /// Tool input for `create_webset`; unset options are left out.
    pub fn into_json(self) -> Value {
        let mut input = Map::new();
        input.insert("query".into(), json!(self.query));
        if let Some(count) = self.count {
            input.insert("count".into(), json!(count));
        }
        if let Some(criteria) = self.criteria {
            input.insert("criteria".into(), json!(criteria));
        }
        if let Some(entity) = self.entity {
            input.insert("entity".into(), json!(entity));
        }
        if !self.enrichments.is_empty() {
            let list: Vec<Value> = self
                .enrichments
                .into_iter()
                .map(|(description, format)| json!({ "description": description, "format": format }))
                .collect();
            input.insert("enrichments".into(), Value::Array(list));
        }
        if !self.metadata.is_empty() {
            let map: Map<String, Value> = self
                .metadata
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect();
            input.insert("metadata".into(), Value::Object(map));
        }
        input.insert("waitForCompletion".into(), json!(!self.no_wait));
        Value::Object(input)
    }
}

/// Arguments for `websets items`.
#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Webset identifier
    pub webset_id: String,

    /// Page size
    #[arg(long)]
    pub limit: Option<u32>,

    /// Cursor from a previous page's nextCursor
    #[arg(long)]
    pub cursor: Option<String>,
}

impl ItemsArgs {
    /// Tool input for `list_webset_items`.
    pub fn into_json(self) -> Value {
        let mut input = Map::new();
        input.insert("websetId".into(), json!(self.webset_id));
        if let Some(limit) = self.limit {
            input.insert("limit".into(), json!(limit));
        }
        if let Some(cursor) = self.cursor {
            input.insert("cursor".into(), json!(cursor));
        }
        Value::Object(input)
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let k = k.trim();
    if k.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((k.to_string(), v.to_string()))
}

fn parse_enrichment(s: &str) -> Result<(String, String), String> {
    let (description, format) = match s.rsplit_once('=') {
        Some((d, f)) if !f.trim().is_empty() && !f.contains(' ') => (d, f.trim()),
        _ => (s, "text"),
    };
    let description = description.trim();
    if description.is_empty() {
        return Err("enrichment description must not be empty".to_string());
    }
    Ok((description.to_string(), format.to_string()))
}
