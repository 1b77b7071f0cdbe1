//! Error type shared by the crate.

/// Errors raised when a run is set up with invalid inputs.
///
/// The evolutionary loop itself is total over valid inputs; every variant
/// here is a contract violation caught before the first generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A [`Knapsack`](crate::knapsack::Knapsack) instance is malformed.
    #[error("invalid knapsack instance: {0}")]
    InvalidInstance(String),
}
