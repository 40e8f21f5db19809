//! Error types for the cikadu-query crate.
//!
//! Evaluating a query never fails. The only error here comes from strict
//! parsing of a sort key name; lenient query construction turns it into
//! "no sort".

/// Errors produced while parsing query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The sort key name is not one of the recognised names.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Convenience type alias for cikadu-query results.
pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_sort_key() {
        let err = QueryError::UnknownSortKey("popularity".into());
        assert_eq!(err.to_string(), "unknown sort key: popularity");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryError>();
    }
}
