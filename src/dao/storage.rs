use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not serve the request (query or insert failure).
    #[error("{message}")]
    Unavailable {
        /// Human readable description including the backend error chain.
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// The backend refused to store the record.
    #[error("{message}")]
    Rejected {
        /// Human readable description including the backend error chain.
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// A persisted record could not be mapped to the game model.
    #[error("{message}")]
    Corrupted {
        /// Human readable description including the backend error chain.
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message: describe_chain(&source),
            source: Box::new(source),
        }
    }

    /// Construct an error for writes the backend refused.
    pub fn rejected(source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Rejected {
            message: describe_chain(&source),
            source: Box::new(source),
        }
    }

    /// Construct an error for records the backend returned but the model rejects.
    pub fn corrupted(source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Corrupted {
            message: describe_chain(&source),
            source: Box::new(source),
        }
    }
}

/// Flatten an error and its sources into a single `a: b: c` line.
fn describe_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        message.push_str(": ");
        message.push_str(&source.to_string());
        current = source.source();
    }
    message
}
