use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u64 = 1;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("tick")
}

fn default_categories() -> Vec<String> {
    vec![
        "Work".into(),
        "Personal".into(),
        "Study".into(),
        "Other".into(),
    ]
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TickConfig {
    pub data_directory: PathBuf,
    pub categories: Vec<String>,
    pub debug_logging: bool,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_dir(),
            categories: default_categories(),
            debug_logging: false,
        }
    }
}

impl TickConfig {
    pub fn tasks_path(&self) -> PathBuf {
        self.data_directory.join("tasks.json")
    }

    /// Choices for the category filter dropdown: "All" followed by the presets.
    pub fn filter_options(&self) -> Vec<String> {
        let mut options = vec!["All".to_string()];
        options.extend(self.categories.iter().cloned());
        options
    }

    /// Ensure the data directory exists.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)
    }
}
