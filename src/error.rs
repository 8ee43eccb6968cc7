use std::path::PathBuf;

use thiserror::Error;

/// Misuse of a [`RotatingSelector`](crate::selector::RotatingSelector).
///
/// These are programming errors in the calling code: indicators are
/// generated from `page_count`, so a correct caller never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("page index {index} is out of range (page count is {page_count})")]
    InvalidIndex { index: usize, page_count: usize },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("auto-advance interval must be longer than zero")]
    ZeroInterval,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file")]
    Parse(#[from] toml::de::Error),

    #[error("testimonial by {author} has rating {rating}, expected 1 to 5")]
    InvalidRating { author: String, rating: u8 },
}

/// Failures talking to a selector hosted by [`crate::driver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("selector task has been unmounted")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_names_both_numbers() {
        let err = SelectorError::InvalidIndex { index: 7, page_count: 3 };
        assert_eq!(err.to_string(), "page index 7 is out of range (page count is 3)");
    }

    #[test]
    fn driver_error_is_transparent_over_selector_error() {
        let err = DriverError::from(SelectorError::ZeroPageSize);
        assert_eq!(err.to_string(), "page size must be at least 1");
    }
}
