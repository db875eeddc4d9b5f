//! API resource implementations for the WebSets client

/// Webset items API resource
pub mod items;
/// Websets API resource
pub mod websets;

pub use items::Items;
pub use websets::Websets;

/// Base path of the websets collection
pub const WEBSETS_PATH: &str = "/websets/v0/websets";

/// Percent-encode a caller-supplied id so it stays a single path segment.
///
/// Empty, `.` and `..` are rejected because URL normalization would drop or
/// resolve them into a different endpoint even after encoding.
pub(crate) fn segment<'a>(
    name: &str,
    value: &'a str,
) -> Result<std::borrow::Cow<'a, str>, crate::error::ExaError> {
    if matches!(value, "" | "." | "..") {
        return Err(crate::error::ExaError::InvalidArgument(format!(
            "{name} {value:?} is not a valid path segment"
        )));
    }
    Ok(urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_escapes_separators() {
        assert_eq!(segment("id", "ws_1").unwrap(), "ws_1");
        assert_eq!(segment("id", "a/b").unwrap(), "a%2Fb");
        assert_eq!(segment("id", "x?y#z").unwrap(), "x%3Fy%23z");
    }

    #[test]
    fn segment_rejects_dot_segments() {
        for bad in ["", ".", ".."] {
            assert!(matches!(
                segment("id", bad),
                Err(crate::error::ExaError::InvalidArgument(_))
            ));
        }
    }
}
