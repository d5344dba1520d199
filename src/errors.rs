use thiserror::Error;

use crate::exitcode;

/// Everything that can go wrong between reading the input and printing
/// the balance report. All variants are fatal; there is no recovery path.
#[derive(Error, Debug)]
pub enum ScaleError {
    #[error("failed to read input: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("line {line}: failed to read scale name")]
    MissingScaleName { line: usize },

    #[error("line {line}: missing left and/or right pan for scale '{name}'")]
    MissingPans { line: usize, name: String },

    #[error("line {line}: invalid mass or scale name '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: invalid mass '{token}': not an unsigned 64-bit integer")]
    InvalidMass { line: usize, token: String },

    #[error("line {line}: duplicate scale name '{name}'")]
    DuplicateScale { line: usize, name: String },

    #[error("no scales described in input")]
    EmptyTree,

    #[error("multiple or zero ill-formed scales, cannot determine root: [{names}]")]
    AmbiguousRoot { names: String },

    #[error("ill-formed scale '{name}' is not a root scale")]
    NotARoot { name: String },

    #[error("effective weight of scale '{0}' exceeds the unsigned 64-bit range")]
    WeightOverflow(String),

    // The remaining variants indicate that validation let something
    // through; they are defects, not user errors.
    #[error("unknown scale '{0}' referenced during balancing")]
    UnknownScale(String),

    #[error("duplicate balance entry for scale '{0}'")]
    DuplicateEntry(String),
}

/// Result type for parsing and balancing operations.
pub type ScaleResult<T> = Result<T, ScaleError>;

impl ScaleError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaleError::FileRead(_) => exitcode::NOINPUT,
            ScaleError::UnknownScale(_) | ScaleError::DuplicateEntry(_) => exitcode::SOFTWARE,
            _ => exitcode::DATAERR,
        }
    }
}
