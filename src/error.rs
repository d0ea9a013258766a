use thiserror::Error;

/// Top-level error type for the arbmesh kernel.
#[derive(Debug, Error)]
pub enum ArbmeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("vertex index {index} is out of range [1, 8]")]
    VertexIndexOutOfRange { index: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to meshing operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to the solid registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("solid not found: {0}")]
    SolidNotFound(String),

    #[error("a solid named \"{0}\" is already registered")]
    DuplicateName(String),
}

/// Convenience type alias for results using [`ArbmeshError`].
pub type Result<T> = std::result::Result<T, ArbmeshError>;
