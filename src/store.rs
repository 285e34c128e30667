//! JSON persistence for the task list.
//!
//! The whole list is rewritten on every mutation and read back wholesale at
//! startup. A missing file is not an error; a malformed file is logged and
//! treated as empty so the app always starts.

use std::path::Path;

use thiserror::Error;

use crate::core::task::Task;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn to_json(tasks: &[Task]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

pub fn from_json(content: &str) -> Result<Vec<Task>, StoreError> {
    Ok(serde_json::from_str(content)?)
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let content = to_json(tasks)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load the task list, returning an empty list when the file does not exist.
pub fn load_tasks(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match from_json(&content) {
        Ok(tasks) => tasks,
        Err(e) => {
            log::error!("Failed to parse {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Adapter for optional `YYYY-MM-DD` fields. A malformed value reads as absent.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse().ok()))
    }
}

/// Adapter for optional `YYYY-MM-DDTHH:MM:SS` fields. A malformed value reads as absent.
/// Minute-precision values (`YYYY-MM-DDTHH:MM`, written by older task files when
/// seconds are zero) are accepted on read.
pub mod iso_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    fn parse(s: &str) -> Option<NaiveDateTime> {
        s.parse()
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").ok())
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| parse(&s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{Priority, Task};
    use chrono::{NaiveDate, NaiveDateTime};

    fn due(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reminder(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn round_trip_all_fields() {
        let tasks = vec![Task {
            text: "Buy milk".into(),
            priority: Priority::Low,
            category: "Personal".into(),
            due_date: Some(due(2024, 6, 1)),
            reminder_date_time: Some(reminder("2024-06-01T09:30:00")),
            completed: true,
        }];
        let json = to_json(&tasks).unwrap();
        let loaded = from_json(&json).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn round_trip_without_optionals() {
        let tasks = vec![Task::new("Call dentist", Priority::High, "Personal", None, None)];
        let json = to_json(&tasks).unwrap();
        assert!(!json.contains("dueDate"));
        assert!(!json.contains("reminderDateTime"));
        let loaded = from_json(&json).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn serialized_form_is_pretty_camel_case() {
        let tasks = vec![Task {
            text: "Buy milk".into(),
            priority: Priority::Low,
            category: "Personal".into(),
            due_date: Some(due(2024, 6, 1)),
            reminder_date_time: Some(reminder("2024-06-01T09:30:00")),
            completed: false,
        }];
        let json = to_json(&tasks).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"dueDate\": \"2024-06-01\""));
        assert!(json.contains("\"reminderDateTime\": \"2024-06-01T09:30:00\""));
        assert!(json.contains("\"priority\": \"Low\""));
        assert!(json.contains("\"completed\": false"));
    }

    #[test]
    fn empty_list_serializes_as_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let json = r#"[{"text": "Bare task", "priority": "High"}]"#;
        let tasks = from_json(json).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].category, "Other");
        assert!(!tasks[0].completed);
        assert!(tasks[0].due_date.is_none());
        assert!(tasks[0].reminder_date_time.is_none());
    }

    #[test]
    fn loads_legacy_file_spellings() {
        // Older task files write the priority upper-case and drop the
        // seconds from reminder timestamps when they are zero.
        let json = r#"[{
            "text": "Buy milk",
            "priority": "HIGH",
            "category": "Personal",
            "dueDate": "2024-06-01",
            "reminderDateTime": "2024-06-01T09:30",
            "completed": false
        }]"#;
        let tasks = from_json(json).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].due_date, Some(due(2024, 6, 1)));
        assert_eq!(
            tasks[0].reminder_date_time,
            Some(reminder("2024-06-01T09:30:00"))
        );
    }

    #[test]
    fn legacy_priority_spellings_cover_all_variants() {
        let json = r#"[
            {"text": "a", "priority": "HIGH"},
            {"text": "b", "priority": "MEDIUM"},
            {"text": "c", "priority": "LOW"}
        ]"#;
        let tasks = from_json(json).unwrap();
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[1].priority, Priority::Medium);
        assert_eq!(tasks[2].priority, Priority::Low);
    }

    #[test]
    fn malformed_dates_read_as_absent() {
        let json = r#"[{
            "text": "Check tyres",
            "priority": "Medium",
            "category": "Other",
            "dueDate": "next tuesday",
            "reminderDateTime": "soon",
            "completed": false
        }]"#;
        let tasks = from_json(json).unwrap();
        assert!(tasks[0].due_date.is_none());
        assert!(tasks[0].reminder_date_time.is_none());
    }

    #[test]
    fn null_dates_read_as_absent() {
        let json = r#"[{"text": "t", "priority": "Low", "dueDate": null, "reminderDateTime": null}]"#;
        let tasks = from_json(json).unwrap();
        assert!(tasks[0].due_date.is_none());
        assert!(tasks[0].reminder_date_time.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(from_json("not json").is_err());
    }
}
