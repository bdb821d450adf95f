use core::fmt::Debug;

/// Programmer errors raised by the decision core.
///
/// None of these are retried. An error aborts the current tick for the call chain that raised it;
/// sibling agents keep ticking (see [`crate::tick_agents`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("blackboard type mismatch for key `{key}`: stored {actual}, requested {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("no edge from {from} to {to}")]
    InvalidEdge { from: String, to: String },

    #[error("precondition failed: {0}")]
    Precondition(String),
}

impl AiError {
    pub fn precondition(message: impl Into<String>) -> Self {
        AiError::Precondition(message.into())
    }

    pub fn invalid_edge(from: impl Debug, to: impl Debug) -> Self {
        AiError::InvalidEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

pub type AiResult<T> = Result<T, AiError>;
