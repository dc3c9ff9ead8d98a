use thiserror::Error;

/// Errors raised while loading data, building a tree or predicting with it.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The caller handed over data that breaks an invariant of the algorithm.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record reached a node that has no branch for its value.
    #[error("No branch for value '{value}' of attribute '{attribute}'")]
    UnseenValue { attribute: String, value: String },

    #[error("Tree wasn't built yet.")]
    NotFitted,

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),
}

impl TreeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TreeError::InvalidInput(reason.into())
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
