use chrono::NaiveTime;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, row, scrollable, text, text_input};
use cosmic::Element;

use crate::components::task_row::task_grid;
use crate::core::task::{CategoryFilter, Priority, Task};
use crate::message::Message;

/// New-task form state, borrowed from the application for rendering.
pub struct TaskFormCtx<'a> {
    pub text: &'a str,
    pub category: &'a str,
    pub priority: Priority,
    pub due: &'a str,
    pub reminder_date: &'a str,
    pub reminder_time: Option<usize>,
}

/// Half-hour reminder slots, "00:00" through "23:30".
pub fn reminder_slot_labels() -> Vec<String> {
    (0..24)
        .flat_map(|hour| [format!("{hour:02}:00"), format!("{hour:02}:30")])
        .collect()
}

pub fn reminder_slot_time(index: usize) -> Option<NaiveTime> {
    let hour = (index / 2) as u32;
    let minute = if index % 2 == 0 { 0 } else { 30 };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn priority_button(
    label: &str,
    value: Priority,
    current: Priority,
) -> Element<'static, Message> {
    let btn = if current == value {
        button::suggested(label.to_string())
    } else {
        button::standard(label.to_string())
    };
    btn.on_press(Message::SetPriority(value)).into()
}

fn form_view(form: &TaskFormCtx, categories: &[String]) -> Element<'static, Message> {
    let text_field = text_input::text_input("Enter new task", form.text.to_string())
        .on_input(Message::TextInputChanged)
        .on_submit(|_| Message::AddTask)
        .width(Length::Fill);

    let category_field = text_input::text_input("Category", form.category.to_string())
        .on_input(Message::CategoryInputChanged)
        .width(Length::Fixed(140.0));

    let mut priority_row = row().spacing(4);
    for priority in Priority::ALL {
        priority_row = priority_row.push(priority_button(priority.label(), priority, form.priority));
    }

    let row1 = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text_field)
        .push(category_field)
        .push(priority_row);

    let due_field = text_input::text_input("Due YYYY-MM-DD", form.due.to_string())
        .on_input(Message::DueInputChanged)
        .width(Length::Fixed(150.0));

    let reminder_date_field =
        text_input::text_input("Remind YYYY-MM-DD", form.reminder_date.to_string())
            .on_input(Message::ReminderDateInputChanged)
            .width(Length::Fixed(150.0));

    let time_dropdown = dropdown(
        reminder_slot_labels(),
        form.reminder_time,
        Message::ReminderTimeSelected,
    )
    .width(Length::Shrink);

    let row2 = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(due_field)
        .push(reminder_date_field)
        .push(time_dropdown)
        .push(button::suggested("Add Task").on_press(Message::AddTask));

    // Category presets as one-tap fills for the category input
    let mut preset_row = row().spacing(4);
    for category in categories {
        let category = category.clone();
        preset_row = preset_row.push(
            button::custom(text::caption(category.clone()).size(11.0))
                .padding([2, 8])
                .class(cosmic::theme::Button::Text)
                .on_press(Message::CategoryInputChanged(category)),
        );
    }

    column()
        .spacing(8)
        .push(row1)
        .push(preset_row)
        .push(row2)
        .into()
}

fn filter_view(filter: &CategoryFilter, options: Vec<String>) -> Element<'static, Message> {
    let selected = match filter {
        CategoryFilter::All => Some(0),
        CategoryFilter::Category(category) => options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(category)),
    };

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::caption("View:"))
        .push(dropdown(options, selected, Message::FilterSelected).width(Length::Shrink))
        .into()
}

pub fn tasks_view(
    tasks: &[Task],
    filter: &CategoryFilter,
    filter_options: Vec<String>,
    form: &TaskFormCtx,
    categories: &[String],
) -> Element<'static, Message> {
    let visible: Vec<(usize, &Task)> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .collect();

    let mut content = column()
        .spacing(8)
        .push(form_view(form, categories))
        .push(filter_view(filter, filter_options));

    if visible.is_empty() {
        content = content.push(
            container(text::body("Nothing here. Add a task above."))
                .padding(32)
                .center_x(Length::Fill),
        );
    } else {
        content = content.push(task_grid(visible.into_iter()));
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_eight_half_hour_slots() {
        let labels = reminder_slot_labels();
        assert_eq!(labels.len(), 48);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[1], "00:30");
        assert_eq!(labels[47], "23:30");
    }

    #[test]
    fn slot_index_maps_to_time() {
        assert_eq!(reminder_slot_time(0), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(reminder_slot_time(19), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(reminder_slot_time(47), NaiveTime::from_hms_opt(23, 30, 0));
        assert_eq!(reminder_slot_time(48), None);
    }
}
