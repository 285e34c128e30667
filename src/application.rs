use cosmic::app::{Core, Task as CosmicTask};
use cosmic::widget::text;
use cosmic::{Application, Element, executor};

use crate::config::TickConfig;
use crate::core::task::{CategoryFilter, Priority, Task, normalize_category};
use crate::message::Message;
use crate::pages;
use crate::store;

pub struct Flags {
    pub config: TickConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

pub struct Tick {
    core: Core,
    config: TickConfig,
    cosmic_config: cosmic::cosmic_config::Config,

    // Data
    tasks: Vec<Task>,
    filter: CategoryFilter,

    // New-task form state
    text_input: String,
    category_input: String,
    priority_input: Priority,
    due_input: String,
    reminder_date_input: String,
    reminder_time: Option<usize>,
}

impl Application for Tick {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.tick.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;
        let cosmic_config = flags.cosmic_config;

        if let Err(e) = config.ensure_dirs() {
            log::error!("Failed to create data directory: {}", e);
        }

        let tasks = store::load_tasks(&config.tasks_path());
        log::info!("Loaded {} tasks", tasks.len());

        let category_input = config
            .categories
            .first()
            .cloned()
            .unwrap_or_else(|| "Other".to_string());

        let app = Self {
            core,
            config,
            cosmic_config,
            tasks,
            filter: CategoryFilter::All,
            text_input: String::new(),
            category_input,
            priority_input: Priority::default(),
            due_input: String::new(),
            reminder_date_input: String::new(),
            reminder_time: None,
        };

        (app, CosmicTask::none())
    }

    fn header_center(&self) -> Vec<Element<'_, Message>> {
        vec![text::title4("Enhanced To-Do List").into()]
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::TextInputChanged(value) => {
                self.text_input = value;
            }

            Message::CategoryInputChanged(value) => {
                self.category_input = value;
            }

            Message::SetPriority(priority) => {
                self.priority_input = priority;
            }

            Message::DueInputChanged(value) => {
                self.due_input = value;
            }

            Message::ReminderDateInputChanged(value) => {
                self.reminder_date_input = value;
            }

            Message::ReminderTimeSelected(index) => {
                self.reminder_time = Some(index);
            }

            Message::AddTask => {
                let text = self.text_input.trim().to_string();
                if !text.is_empty() {
                    let category = normalize_category(&self.category_input);
                    let due = parse_date_input(&self.due_input);
                    // A reminder needs both a date and a time slot
                    let reminder = match (
                        parse_date_input(&self.reminder_date_input),
                        self.reminder_time,
                    ) {
                        (Some(date), Some(slot)) => {
                            pages::tasks::reminder_slot_time(slot).map(|t| date.and_time(t))
                        }
                        _ => None,
                    };

                    self.tasks
                        .push(Task::new(text, self.priority_input, category, due, reminder));
                    self.text_input.clear();
                    self.due_input.clear();
                    self.reminder_date_input.clear();
                    self.reminder_time = None;
                    self.save_tasks();
                }
            }

            Message::ToggleCompleted(index) => {
                if let Some(task) = self.tasks.get_mut(index) {
                    task.completed = !task.completed;
                    self.save_tasks();
                }
            }

            Message::DeleteTask(index) => {
                if index < self.tasks.len() {
                    self.tasks.remove(index);
                    self.save_tasks();
                }
            }

            Message::FilterSelected(index) => {
                let options = self.config.filter_options();
                self.filter = match options.get(index) {
                    Some(option) if index > 0 => CategoryFilter::Category(option.clone()),
                    _ => CategoryFilter::All,
                };
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let form = pages::tasks::TaskFormCtx {
            text: &self.text_input,
            category: &self.category_input,
            priority: self.priority_input,
            due: &self.due_input,
            reminder_date: &self.reminder_date_input,
            reminder_time: self.reminder_time,
        };

        pages::tasks::tasks_view(
            &self.tasks,
            &self.filter,
            self.config.filter_options(),
            &form,
            &self.config.categories,
        )
    }
}

impl Tick {
    fn save_tasks(&self) {
        if let Err(e) = store::save_tasks(&self.config.tasks_path(), &self.tasks) {
            log::error!("Failed to save tasks: {}", e);
        }
    }
}

/// Parse a `YYYY-MM-DD` form field; anything unparseable counts as no date.
fn parse_date_input(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
