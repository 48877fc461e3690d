//! Log entries and their kinds.

use serde::Serialize;

use folio_platform::SystemTime;

/// Kind of a log line. Drives the style class of the rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// A direct user gesture.
    #[default]
    Interaction,
    /// Something the desktop did in response.
    System,
    Success,
    Error,
}

impl LogKind {
    /// Style class tag for rendered lines.
    pub fn class(self) -> &'static str {
        match self {
            Self::Interaction => "interaction-log",
            Self::System => "system-log",
            Self::Success => "success-log",
            Self::Error => "error-log",
        }
    }
}

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: SystemTime,
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(timestamp: SystemTime, message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            timestamp,
            message: message.into(),
            kind,
        }
    }

    /// Rendered text: `[HH:MM:SS] message`.
    pub fn line(&self) -> String {
        format!(
            "[{:02}:{:02}:{:02}] {}",
            self.timestamp.hour, self.timestamp.minute, self.timestamp.second, self.message
        )
    }
}
