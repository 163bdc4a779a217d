use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the board. `text` doubles as the identifier within the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    // Aliases accept lists written by the older Spanish-language page
    #[default]
    #[serde(alias = "Pendiente")]
    Pending,
    #[serde(alias = "En progreso")]
    InProgress,
    #[serde(alias = "Completado")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Value used in `<select>` options and in the persisted record.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" | "Pendiente" => Ok(TaskStatus::Pending),
            "InProgress" | "En progreso" => Ok(TaskStatus::InProgress),
            "Completed" | "Completado" => Ok(TaskStatus::Completed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TaskStatus::Pending,
        }
    }

    pub fn with_status(text: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    /// Reference page for the task: spaces become underscores, anything
    /// unsafe in a URL path is percent-escaped.
    pub fn lookup_url(&self, base_url: &str) -> String {
        let mut url = String::with_capacity(base_url.len() + self.text.len());
        url.push_str(base_url);
        for byte in self.text.replace(' ', "_").bytes() {
            if is_path_safe(byte) {
                url.push(byte as char);
            } else {
                url.push_str(&format!("%{:02X}", byte));
            }
        }
        url
    }
}

fn is_path_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'_' | b'-' | b'.' | b'~' | b'(' | b')' | b',' | b'\'' | b'!' | b'*' | b':' | b'@'
        )
}
