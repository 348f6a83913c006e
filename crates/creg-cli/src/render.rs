//! Terminal rendering of the registration state.
//!
//! Everything here redraws from [`AppState`]; nothing mutates it.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use creg_app::{AppState, CatalogStatus, Notice, NoticeLevel};
use creg_model::Course;
use creg_validate::CreditState;

/// Print the course table, the pending registration and any notices.
pub fn print_registration(state: &AppState) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_registration(&mut out, state)
}

/// Write the registration screen to `out`.
pub fn write_registration<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    if let Some(name) = state.student_name() {
        writeln!(out, "Student: {name}")?;
    }
    match &state.status {
        CatalogStatus::Loaded => {
            let visible = state.visible_courses();
            writeln!(
                out,
                "{}",
                course_table(&visible, |course| state.is_selected(&course.code))
            )?;
            writeln!(out)?;
            writeln!(out, "Pending Registration")?;
            writeln!(out, "{}", pending_table(state))?;
            writeln!(out, "{}", status_table(state))?;
        }
        CatalogStatus::Loading => writeln!(out, "Loading courses...")?,
        CatalogStatus::Failed(_) => {}
    }
    for line in notice_lines(&state.notices) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Available courses, one row each, with a `+`/`-` action column.
pub fn course_table<F>(courses: &[&Course], is_selected: F) -> Table
where
    F: Fn(&Course) -> bool,
{
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Course Name"),
        header_cell("Credit Hours"),
        header_cell("Type"),
        header_cell("Section"),
        header_cell("Action"),
    ]);
    apply_course_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for course in courses {
        table.add_row(vec![
            Cell::new(&course.code)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(course_label(course)),
            Cell::new(course.credits),
            text_cell(&course.course_type),
            text_cell(&course.section),
            action_cell(is_selected(course)),
        ]);
    }
    table
}

/// Courses in the current registration, numbered for `--remove`.
pub fn pending_table(state: &AppState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Code"),
        header_cell("Course Name"),
        header_cell("Credit Hours"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, course) in state.current_courses().iter().enumerate() {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(&course.code),
            Cell::new(&course.name),
            Cell::new(course.credits),
        ]);
    }
    table
}

/// Credit summary panel.
pub fn status_table(state: &AppState) -> Table {
    let validation = state.validation();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table.add_row(vec![Cell::new(format!(
        "{} Subjects Selected",
        validation.selected_count
    ))]);
    table.add_row(vec![state_cell(&validation.status_text, validation.state)]);
    if validation.has_message() {
        table.add_row(vec![state_cell(&validation.message, validation.state)]);
    }
    let register = if validation.can_register {
        Cell::new("Register for Courses: available")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("Register for Courses: unavailable")
    };
    table.add_row(vec![register]);
    table
}

/// One line per notice, prefixed with its level.
pub fn notice_lines(notices: &[Notice]) -> Vec<String> {
    notices
        .iter()
        .map(|notice| format!("{}: {}", level_label(notice.level()), notice.text()))
        .collect()
}

fn level_label(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    }
}

fn course_label(course: &Course) -> String {
    let mut label = course.name.clone();
    for extra in [&course.lecturer, &course.schedule] {
        if !extra.is_empty() {
            label.push('\n');
            label.push_str(extra);
        }
    }
    label
}

fn apply_course_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn state_cell(text: &str, state: CreditState) -> Cell {
    match state {
        CreditState::None => Cell::new(text),
        CreditState::Success => Cell::new(text).fg(Color::Green),
        CreditState::Warning => Cell::new(text).fg(Color::Yellow),
        CreditState::Error => Cell::new(text)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn action_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("-").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new("+").fg(Color::Green)
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_label_stacks_lecturer_and_schedule() {
        let course = Course::new("A", "Algorithms", 3)
            .with_lecturer("Dr. Tan")
            .with_schedule("Mon 9:00");
        assert_eq!(course_label(&course), "Algorithms\nDr. Tan\nMon 9:00");
        assert_eq!(course_label(&Course::new("B", "Biology", 4)), "Biology");
    }

    #[test]
    fn notice_lines_carry_level() {
        let lines = notice_lines(&[
            Notice::AlreadyAdded {
                code: "A".to_string(),
            },
            Notice::Submitted { total_credits: 9 },
        ]);
        assert_eq!(
            lines,
            vec![
                "warning: Course already added!",
                "info: Registration submitted."
            ]
        );
    }
}
