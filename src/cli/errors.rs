use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Conflicting arguments: {first} cannot be combined with {second}")]
    Conflict {
        first: &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Scale(#[from] imgscale::Error),
}
