use thiserror::Error;

/// The one kind of failure a submission can run into. Each variant names the
/// condition that was violated, and its message is shown to the user as is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Mean (µ) and Standard Deviation (σ) must be numeric values.")]
    NonNumericParameters,

    #[error("Standard deviation (σ) must be greater than zero.")]
    NonPositiveStdDev,

    #[error("{name} must be a numeric value.")]
    NonNumericOperand { name: &'static str },

    #[error("Please enter a value for x.")]
    MissingX,

    #[error("Both a and b values must be provided.")]
    MissingBounds,

    #[error("a must be less than or equal to b.")]
    BoundsOutOfOrder,

    #[error("Unknown query `{0}`")]
    UnknownQuery(String),
}
