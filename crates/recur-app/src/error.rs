use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RecurError(#[from] recur_engine::RecurError),

    #[error(transparent)]
    CoreError(#[from] recur_core::CoreError),

    #[error("Failed to read {}: {source}", path.display())]
    OptionsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule {0:?}, expected measure=unit[,unit...]")]
    InvalidRuleSpec(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
