use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // Blue - informational
    Warning, // Yellow - recoverable
    Error,   // Red - operation failed
}

/// Domain-specific errors for Patternbook
#[derive(Error, Debug)]
pub enum PatternbookError {
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Config I/O failed for '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Window operation failed: {0}")]
    Window(String),
}

#[allow(dead_code)]
impl PatternbookError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigParse(_) => ErrorSeverity::Warning,
            Self::ConfigIo { .. } => ErrorSeverity::Warning,
            Self::UnknownRoute(_) => ErrorSeverity::Info,
            Self::Window(_) => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigParse(e) => format!("Invalid config format: {}", e),
            Self::ConfigIo { path, .. } => format!("Could not read or write {}", path),
            Self::UnknownRoute(route) => format!("No such page: {}", route),
            Self::Window(msg) => msg.clone(),
        }
    }
}

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, PatternbookError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use patternbook::error::ResultExt;
///
/// // Silently log and continue if config fails to load
/// let config = load_config().log_err();
///
/// // Log as warning for expected failures
/// let saved = save_config(&config).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// Use for "impossible" states that should crash during development
/// but gracefully degrade in production.
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}
