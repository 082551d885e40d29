use miette::Diagnostic;
use thiserror::Error;

/// Main error type for worldmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    #[error("IO error: {0}")]
    #[diagnostic(code(worldmap::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(worldmap::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(worldmap::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A map failed structural checks and cannot be compiled.
    #[error("Map '{map_id}': {message}")]
    #[diagnostic(code(worldmap::structure))]
    Structural {
        map_id: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(worldmap::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(worldmap::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl MapError {
    /// Shorthand for a structural failure without help text.
    pub fn structural(map_id: impl Into<String>, message: impl Into<String>) -> Self {
        MapError::Structural {
            map_id: map_id.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Attach help text to a structural or parse error. Other variants pass through.
    pub fn with_help(self, text: impl Into<String>) -> Self {
        match self {
            MapError::Structural {
                map_id, message, ..
            } => MapError::Structural {
                map_id,
                message,
                help: Some(text.into()),
            },
            MapError::Parse { message, .. } => MapError::Parse {
                message,
                help: Some(text.into()),
            },
            other => other,
        }
    }

    /// Whether this error came from structural map validation.
    pub fn is_structural(&self) -> bool {
        matches!(self, MapError::Structural { .. })
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
