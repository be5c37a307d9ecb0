use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Mail API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{path}:{line}: expected {expected} columns, found {found}")]
    MalformedRow {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate participant: {name} <{email}>")]
    DuplicateParticipant { name: String, email: String },

    #[error("No valid pairing found satisfying constraints after {attempts} attempts")]
    InfeasibleConstraints { attempts: u32 },

    #[error("Could not locate mail credentials via any method")]
    MissingCredentials,

    #[error("Mail API returned status {status} for {recipient}")]
    MailApiError { status: u16, recipient: String },

    #[error("{failed} of {total} notification emails failed to send")]
    DispatchIncomplete { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Generation,
    Persistence,
    Transport,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::ConfigError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::MissingCredentials => ErrorCategory::Configuration,
            SantaError::CsvError(_)
            | SantaError::MalformedRow { .. }
            | SantaError::DuplicateParticipant { .. } => ErrorCategory::Input,
            SantaError::InfeasibleConstraints { .. } => ErrorCategory::Generation,
            SantaError::IoError(_) | SantaError::SerializationError(_) => {
                ErrorCategory::Persistence
            }
            SantaError::TransportError(_)
            | SantaError::MailApiError { .. }
            | SantaError::DispatchIncomplete { .. } => ErrorCategory::Transport,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Input | ErrorCategory::Generation => ErrorSeverity::High,
            ErrorCategory::Persistence => ErrorSeverity::High,
            ErrorCategory::Transport => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::MissingCredentials => {
                "No mail API credentials found in the environment or credentials file".to_string()
            }
            SantaError::InfeasibleConstraints { .. } => {
                "Could not find a valid pairing; the blacklist may be too restrictive for this group".to_string()
            }
            SantaError::DispatchIncomplete { failed, total } => {
                format!("Sent {} of {} emails; see the log for the failures", total - failed, total)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags, the SANTA_MAIL_API_KEY variable and the credentials file"
            }
            ErrorCategory::Input => {
                "Check that the participant and blacklist files are two-column CSV with no header row"
            }
            ErrorCategory::Generation => {
                "Remove blacklist entries or add participants, then run gen again"
            }
            ErrorCategory::Persistence => {
                "Check that the pairings file exists, is readable and was written with the same key phrase"
            }
            ErrorCategory::Transport => {
                "Check the mail API endpoint and credentials, then re-run the email command"
            }
        }
    }
}
