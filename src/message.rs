use crate::core::task::Priority;

#[derive(Debug, Clone)]
pub enum Message {
    // New-task form
    TextInputChanged(String),
    CategoryInputChanged(String),
    SetPriority(Priority),
    DueInputChanged(String),
    ReminderDateInputChanged(String),
    ReminderTimeSelected(usize),
    AddTask,

    // Task list (indices address the unfiltered list)
    ToggleCompleted(usize),
    DeleteTask(usize),

    // Category filter
    FilterSelected(usize),
}
