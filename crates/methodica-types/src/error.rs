use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MethodicaError {
    #[error("Zero pivot in column {column}: adjacent row exchange left it zero")]
    SingularPivot { column: usize },

    #[error("Zero diagonal entry at row {row} during back substitution")]
    SingularDiagonal { row: usize },

    #[error("Not enough samples: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

pub type MethodicaResult<T> = Result<T, MethodicaError>;
