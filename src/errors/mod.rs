use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomizerError {
    // Startup errors
    #[error("{kind} directory not found: {}", .path.display())]
    MissingRoot {
        kind: String,
        path: PathBuf,
    },

    // Configuration errors
    #[error("configuration error at '{}': {reason}", .path.display())]
    Configuration {
        path: PathBuf,
        reason: String,
    },

    // File operation errors
    #[error("file operation '{operation}' failed for '{}': {reason}", .file_path.display())]
    FileOperation {
        file_path: PathBuf,
        operation: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CustomizerError {
    pub fn missing_root(kind: &str, path: &Path) -> Self {
        Self::MissingRoot {
            kind: kind.to_string(),
            path: path.to_path_buf(),
        }
    }

    pub fn config_error(path: &Path, reason: &str) -> Self {
        Self::Configuration {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &Path, operation: &str, reason: &str) -> Self {
        Self::FileOperation {
            file_path: file_path.to_path_buf(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::FileOperation { .. } => true,
            Self::Configuration { .. } => true,
            Self::MissingRoot { .. } => false,
            Self::Io(_) | Self::Json(_) | Self::Toml(_) => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingRoot { .. } => ErrorSeverity::Critical,
            Self::Io(_) => ErrorSeverity::High,
            Self::Configuration { .. } | Self::Toml(_) => ErrorSeverity::High,
            Self::Json(_) => ErrorSeverity::Medium,
            Self::FileOperation { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRoot { .. } => {
                format!("{}\n💡 Make sure both the Jitsi Meet and YunoHost directories exist", self)
            }
            Self::Configuration { .. } | Self::Toml(_) => {
                format!("{}\n💡 Check the configuration file syntax", self)
            }
            Self::FileOperation { .. } => {
                format!("{}\n💡 Check file permissions and path", self)
            }
            Self::Io(_) | Self::Json(_) => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for customizer operations
pub type CustomizerResult<T> = Result<T, CustomizerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &CustomizerError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} ❌ {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Fix the problem above and run the customizer again");
        }
    }
}
