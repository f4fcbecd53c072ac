use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Board column a task belongs to. The four variants are the four columns,
/// in the order they appear on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Review,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Review => "review",
            Status::Completed => "completed",
        }
    }

    /// Column headers shown by the UI shell.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Review => "Review",
            Status::Completed => "Completed",
        }
    }

    /// Fixed board order.
    pub fn all() -> &'static [Status] {
        &[
            Status::Todo,
            Status::InProgress,
            Status::Review,
            Status::Completed,
        ]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in_progress" => Ok(Status::InProgress),
            "review" => Ok(Status::Review),
            "completed" => Ok(Status::Completed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}
