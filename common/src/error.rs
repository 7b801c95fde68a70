//! Error types for the mailroom libraries.

/// Errors raised by donor and collection operations.
///
/// Every variant is returned at the point the bad input is seen; nothing in
/// the core retries or recovers.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MailroomError {
    /// A name or amount failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
    },

    /// A lookup key that can never name a donor.
    #[error("Donor key '{key}' is not a usable donor name")]
    InvalidKey {
        /// The rejected key, untrimmed
        key: String,
    },

    /// Lookup of a donor that is not in the collection.
    #[error("Name '{name}' is not in the donor collection")]
    NotFound {
        /// The requested name, untrimmed
        name: String,
    },

    /// A gift index outside `[-gifts, gifts)`.
    #[error("Donor '{name}' has donated '{gifts}' times, so gift # '{index}' is out of range")]
    Range {
        /// Donor the letter was requested for
        name: String,
        /// Number of gifts on record
        gifts: usize,
        /// The rejected index
        index: isize,
    },

    /// I/O error while writing letters or report output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MailroomError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type alias for mailroom operations.
pub type Result<T> = std::result::Result<T, MailroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_names_donor_and_index() {
        let err = MailroomError::Range {
            name: "Alice".into(),
            gifts: 3,
            index: 5,
        };
        assert_eq!(
            err.to_string(),
            "Donor 'Alice' has donated '3' times, so gift # '5' is out of range"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: MailroomError = io.into();
        assert!(matches!(err, MailroomError::Io(_)));
    }
}
