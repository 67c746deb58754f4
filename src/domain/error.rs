// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Every request-level failure is one of these variants.
// None of them is fatal to the process: the application layer
// turns each into a `success: false` response and moves on.
//
// ModelError is what the Trainable Model collaborator raises.
// The orchestrator wraps it into CoreError without rewording
// so the collaborator's message reaches the caller unchanged.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use thiserror::Error;

/// Errors surfaced by the dataset registry, codec and orchestrators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Architecture, parameter or dataset text that is not well formed
    #[error("{0}")]
    Parse(String),

    /// The dataset name is neither cached nor present in storage
    #[error("unknown data set '{0}'")]
    DatasetNotFound(String),

    /// The collaborator failed while partitioning or training
    #[error("{0}")]
    TrainingFailed(String),

    /// A required inference field is missing or unusable
    #[error("{0}")]
    InvalidInput(String),

    /// The dataset exists but could not be read
    #[error("cannot read data set '{name}': {message}")]
    Storage { name: String, message: String },
}

/// Result alias used throughout the core layers.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Short machine-readable tag, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_)           => "parse",
            Self::DatasetNotFound(_) => "dataset_not_found",
            Self::TrainingFailed(_)  => "training_failed",
            Self::InvalidInput(_)    => "invalid_input",
            Self::Storage { .. }     => "storage",
        }
    }
}

/// Failures raised by a Trainable Model implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The architecture description cannot be turned into a model
    #[error("invalid architecture: {0}")]
    Architecture(String),

    /// An input or data row does not have the width the model expects
    #[error("expected {expected} values, got {actual}")]
    Width { expected: usize, actual: usize },

    /// Anything else that went wrong inside the model
    #[error("{0}")]
    Other(String),
}

impl From<ModelError> for CoreError {
    fn from(e: ModelError) -> Self {
        CoreError::TrainingFailed(e.to_string())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_message_is_carried_verbatim() {
        let e: CoreError = ModelError::Other("weights exploded".into()).into();
        assert_eq!(e, CoreError::TrainingFailed("weights exploded".into()));
        assert_eq!(e.to_string(), "weights exploded");
    }

    #[test]
    fn test_dataset_not_found_message_names_the_dataset() {
        let e = CoreError::DatasetNotFound("iris.csv".into());
        assert!(e.to_string().contains("iris.csv"));
        assert_eq!(e.kind(), "dataset_not_found");
    }
}
