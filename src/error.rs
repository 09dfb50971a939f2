use thiserror::Error;

/// Top-level error type for the geocut library.
#[derive(Debug, Error)]
pub enum GeocutError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}

/// Errors raised by intersection and splitting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("{operation} of a {first} and a {second} is not implemented")]
    UnsupportedOperands {
        operation: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

/// Errors raised while building a coordinate transformation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("not enough target basis vectors given")]
    NotEnoughBasisVectors,

    #[error("non orthogonal target basis vectors given")]
    NonOrthogonalBasis,

    #[error("target basis is not right-handed")]
    NotRightHanded,

    #[error("target basis vectors are linearly dependent")]
    SingularBasis,

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the tolerance configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("invalid tolerance: atol = {atol}, rtol = {rtol} (both must be finite and >= 0)")]
    Invalid { atol: f64, rtol: f64 },

    #[error("tolerance has already been configured")]
    AlreadyConfigured,
}

/// Convenience type alias for results using [`GeocutError`].
pub type Result<T> = std::result::Result<T, GeocutError>;
