use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::task::{Priority, Task};
use crate::message::Message;

// Column widths for consistent alignment
const COL_PRI: f32 = 32.0;
const COL_CHECK: f32 = 28.0;
const COL_CAT: f32 = 110.0;
const COL_DUE: f32 = 96.0;
const COL_REMINDER: f32 = 140.0;
const COL_DELETE: f32 = 40.0;

fn col(width: f32, content: impl Into<Element<'static, Message>>) -> Element<'static, Message> {
    container(content).width(Length::Fixed(width)).into()
}

fn col_fill(content: impl Into<Element<'static, Message>>) -> Element<'static, Message> {
    container(content).width(Length::Fill).into()
}

fn header_row() -> Element<'static, Message> {
    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(col(COL_PRI, text::caption("Pri")))
        .push(col(COL_CHECK, text::caption("")))
        .push(col_fill(text::caption("Task")))
        .push(col(COL_CAT, text::caption("Category")))
        .push(col(COL_DUE, text::caption("Due")))
        .push(col(COL_REMINDER, text::caption("Reminder")))
        .push(col(COL_DELETE, text::caption("")))
        .width(Length::Fill)
        .into()
}

/// Build a column with header + task rows, all columns aligned via fixed widths.
/// Each item carries its index into the unfiltered list so messages stay valid
/// while a category filter is active.
pub fn task_grid<'a>(
    tasks: impl Iterator<Item = (usize, &'a Task)>,
) -> Element<'static, Message> {
    let mut content = column()
        .spacing(4)
        .width(Length::Fill)
        .push(header_row());

    for (index, task) in tasks {
        content = content.push(task_row(index, task));
    }

    content.into()
}

fn priority_class(priority: Priority) -> theme::Button {
    match priority {
        Priority::High => theme::Button::Destructive,
        Priority::Medium => theme::Button::Standard,
        Priority::Low => theme::Button::Text,
    }
}

fn task_row(index: usize, task: &Task) -> Element<'static, Message> {
    // 1. Priority symbol, styled by severity
    let pri: Element<'static, Message> = col(COL_PRI,
        button::custom(text::body(task.priority.symbol()).size(12.0))
            .padding([2, 6])
            .class(priority_class(task.priority)),
    );

    // 2. Completion checkbox
    let check: Element<'static, Message> = col(COL_CHECK,
        checkbox("", task.completed)
            .on_toggle(move |_| Message::ToggleCompleted(index)),
    );

    // 3. Task text, dimmed once completed
    let label: Element<'static, Message> = if task.completed {
        col_fill(text::caption(task.text.clone()))
    } else {
        col_fill(text::body(task.text.clone()))
    };

    // 4. Category tag
    let category: Element<'static, Message> =
        col(COL_CAT, text::caption(format!("[{}]", task.category)));

    // 5. Due date
    let due: Element<'static, Message> = match task.due_date {
        Some(date) => col(COL_DUE, text::caption(format!("Due: {}", date.format("%b %d")))),
        None => col(COL_DUE, text::caption("")),
    };

    // 6. Reminder
    let reminder: Element<'static, Message> = match task.reminder_date_time {
        Some(dt) => col(COL_REMINDER, text::caption(format!("🔔 {}", dt.format("%b %d %H:%M")))),
        None => col(COL_REMINDER, text::caption("")),
    };

    // 7. Delete button
    let delete: Element<'static, Message> = col(COL_DELETE,
        button::icon(icon::from_name("edit-delete-symbolic"))
            .on_press(Message::DeleteTask(index)),
    );

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(pri)
        .push(check)
        .push(label)
        .push(category)
        .push(due)
        .push(reminder)
        .push(delete)
        .width(Length::Fill)
        .into()
}
