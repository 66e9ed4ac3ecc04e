use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

/// Failure classes for one transcription run.
///
/// Every variant is terminal: a run either returns a complete roster or one
/// of these and no output at all.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The export is missing a sheet or column the template contract requires.
    #[error("Structural error: {0}")]
    Structure(String),

    /// A room or rate field could not be parsed to its numeric type.
    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
