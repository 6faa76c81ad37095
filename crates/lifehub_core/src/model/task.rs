//! Agenda task domain model.
//!
//! # Invariants
//! - `priority` is one of the three closed levels.
//! - `completed` toggles independently of all other fields and
//!   defaults to false when absent from a payload.

use crate::model::payload::{self, ValidationError};
use crate::repo::{sort_date, Entity, EntryId, SortKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Urgency level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// One persisted agenda task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub completed: bool,
    pub priority: Priority,
}

/// Validated creation/update payload for a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub time: Option<String>,
    pub completed: bool,
    pub priority: Priority,
}

/// Validates a raw task payload.
pub fn validate(raw: &Value) -> Result<TaskFields, ValidationError> {
    let map = payload::object(raw)?;
    let priority_text = payload::required_text(map, "priority")?;
    let priority = Priority::parse(&priority_text).ok_or(ValidationError::UnknownVariant {
        field: "priority",
        value: priority_text,
    })?;
    Ok(TaskFields {
        title: payload::required_text(map, "title")?,
        description: payload::optional_text(map, "description")?,
        date: payload::required_text(map, "date")?,
        time: payload::optional_text(map, "time")?,
        completed: payload::optional_bool(map, "completed", false)?,
        priority,
    })
}

impl Entity for Task {
    const KIND: &'static str = "task";
    type Fields = TaskFields;

    fn assemble(id: EntryId, fields: TaskFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            date: fields.date,
            time: fields.time,
            completed: fields.completed,
            priority: fields.priority,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Date(sort_date(&self.date))
    }
}
