#![deny(warnings)]
#![deny(clippy::all)]

//! Exa WebSets tools: submit a webset, optionally wait for it to finish,
//! and return the items it found.

pub mod error;
pub mod manage;
pub mod poll;
pub mod tools;
pub mod types;
pub mod workflow;

use exa_websets::{Client, ExaConfig};

pub use error::WebsetError;
pub use poll::PollOptions;

/// Shared state for the websets tools.
///
/// Holds the WebSets client and the polling policy; cheap to share behind an
/// `Arc` across concurrent calls.
pub struct WebsetTools {
    /// Exa WebSets API client
    pub(crate) exa: Client<ExaConfig>,
    /// How long `create_webset` waits for completion
    pub(crate) poll: PollOptions,
}

impl WebsetTools {
    /// Create a `WebsetTools` configured from the environment.
    ///
    /// Reads `EXA_API_KEY`, `EXA_BASE_URL` and the poll overrides described
    /// on [`PollOptions::from_env`]. A missing key is reported when a tool is
    /// called, not here.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exa: Client::new(),
            poll: PollOptions::from_env(),
        }
    }

    /// Use the given client instead of the environment-configured one.
    #[must_use]
    pub fn with_client(mut self, exa: Client<ExaConfig>) -> Self {
        self.exa = exa;
        self
    }

    /// Override the polling policy.
    #[must_use]
    pub const fn with_poll(mut self, poll: PollOptions) -> Self {
        self.poll = poll;
        self
    }

    /// The polling policy in effect.
    #[must_use]
    pub const fn poll(&self) -> PollOptions {
        self.poll
    }
}

impl Default for WebsetTools {
    fn default() -> Self {
        Self::new()
    }
}

pub use tools::build_registry;
