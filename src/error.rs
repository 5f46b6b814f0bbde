use thiserror::Error;

/// Possible errors that arise due to issues with the input data or a pre-built tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmstError {
    #[error("Input vectors have mismatched dimensions: {0}")]
    WrongDimension(String),
    #[error("Non finite coordinate: {0}")]
    NonFiniteCoordinate(String),
    #[error("The tree does not match the dataset: {0}")]
    MismatchedTree(String),
}
