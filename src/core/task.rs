use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    // Aliases accept the upper-case spelling older task files use
    #[serde(alias = "HIGH")]
    High,
    #[default]
    #[serde(alias = "MEDIUM")]
    Medium,
    #[serde(alias = "LOW")]
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Sort weight, heaviest first.
    pub fn weight(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::High => "⚠",
            Self::Medium => "➖",
            Self::Low => "✔",
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::High => "#ef4444",
            Self::Medium => "#facc15",
            Self::Low => "#22c55e",
        }
    }
}

fn default_category() -> String {
    "Other".to_string()
}

/// Fall back to "Other" when the category input is blank.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default_category()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::store::iso_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::store::iso_date_time"
    )]
    pub reminder_date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        text: impl Into<String>,
        priority: Priority,
        category: impl AsRef<str>,
        due_date: Option<NaiveDate>,
        reminder_date_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            text: text.into(),
            priority,
            category: normalize_category(category.as_ref()),
            due_date,
            reminder_date_time,
            completed: false,
        }
    }
}

/// The single view predicate: one category, matched case-insensitively, or everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => task.category.eq_ignore_ascii_case(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_task_defaults() {
        let task = Task::new("Buy milk", Priority::Low, "Personal", None, None);
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.category, "Personal");
        assert!(!task.completed);
        assert!(task.due_date.is_none());
        assert!(task.reminder_date_time.is_none());
    }

    #[test]
    fn blank_category_becomes_other() {
        assert_eq!(normalize_category(""), "Other");
        assert_eq!(normalize_category("   "), "Other");
        assert_eq!(normalize_category(" Work "), "Work");

        let task = Task::new("Ship it", Priority::High, "  ", None, None);
        assert_eq!(task.category, "Other");
    }

    #[test]
    fn priority_metadata() {
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::High.symbol(), "⚠");
        assert_eq!(Priority::High.color_hex(), "#ef4444");
        assert_eq!(Priority::Medium.weight(), 2);
        assert_eq!(Priority::Low.weight(), 1);
        assert_eq!(Priority::Low.color_hex(), "#22c55e");
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn filter_matches_case_insensitively() {
        let task = Task::new("Read paper", Priority::Medium, "Study", None, None);
        assert!(CategoryFilter::All.matches(&task));
        assert!(CategoryFilter::Category("study".into()).matches(&task));
        assert!(CategoryFilter::Category("STUDY".into()).matches(&task));
        assert!(!CategoryFilter::Category("Work".into()).matches(&task));
    }

    #[test]
    fn filter_all_returns_every_task() {
        let tasks = vec![
            Task::new("a", Priority::High, "Work", None, None),
            Task::new("b", Priority::Low, "Personal", Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()), None),
        ];
        let visible: Vec<&Task> = tasks.iter().filter(|t| CategoryFilter::All.matches(t)).collect();
        assert_eq!(visible.len(), 2);
    }
}
