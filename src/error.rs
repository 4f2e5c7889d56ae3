use thiserror::Error;

/// Rejected mutator configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutatorError {
    /// A member name was empty or only whitespace
    #[error("mutator member name is empty")]
    EmptyName,
}
