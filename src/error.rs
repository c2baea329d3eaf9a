use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Failures of the dispatch pipeline. All of them are terminal: the
/// computation is deterministic, so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid payload - unknown powerplant type: '{0}'")]
    UnknownPlantType(String),

    #[error("No solution found for load {load} MW with the available plants")]
    NoFeasibleSolution { load: f64 },
}

impl DispatchError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::InvalidPayload(_) => "InvalidPayload",
            DispatchError::UnknownPlantType(_) => "UnknownPlantType",
            DispatchError::NoFeasibleSolution { .. } => "NoFeasibleSolution",
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(error: serde_json::Error) -> Self {
        DispatchError::InvalidPayload(error.to_string())
    }
}

impl From<validator::ValidationErrors> for DispatchError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DispatchError::InvalidPayload(errors.to_string())
    }
}
