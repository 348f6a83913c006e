//! Course selection handler.
//!
//! Handles:
//! - Toggling a course by code
//! - Adding a course by code
//! - Removing a registered course by position
//!
//! The overflow policy applies to every addition regardless of mode. Under
//! `Block` an over-maximum addition is refused with a notice; under `Flag`
//! it is accepted and shows up as an error state after revalidation.

use creg_model::{Course, OverflowPolicy};
use creg_validate::{add_course, remove_course, toggle};

use super::{Effect, MessageHandler};
use crate::message::CourseMessage;
use crate::notice::Notice;
use crate::settings::SelectionMode;
use crate::state::AppState;

pub struct CourseHandler;

impl MessageHandler<CourseMessage> for CourseHandler {
    fn handle(&self, state: &mut AppState, msg: CourseMessage) -> Effect {
        if !state.status.is_loaded() {
            tracing::warn!(?msg, status = ?state.status, "Ignoring course action without a catalog");
            return Effect::None;
        }

        match msg {
            CourseMessage::Toggle(code) => handle_toggle(state, &code),
            CourseMessage::Add(code) => handle_add(state, &code),
            CourseMessage::Remove(index) => handle_remove(state, index),
        }

        state.revalidate();
        Effect::None
    }
}

// =============================================================================
// HANDLER FUNCTIONS
// =============================================================================

fn handle_toggle(state: &mut AppState, code: &str) {
    let Some(course) = lookup(state, code) else {
        return;
    };

    match state.mode() {
        SelectionMode::Toggle => toggle_selection(state, &course),
        SelectionMode::List => {
            match state.registered.iter().position(|c| c.code == course.code) {
                Some(index) => handle_remove(state, index),
                None => add_to_list(state, &course),
            }
        }
    }
}

fn handle_add(state: &mut AppState, code: &str) {
    let Some(course) = lookup(state, code) else {
        return;
    };

    match state.mode() {
        SelectionMode::Toggle => {
            if state.selection.contains(&course.code) {
                tracing::warn!(code = %course.code, "Course already added");
                state.push_notice(Notice::AlreadyAdded { code: course.code });
            } else {
                toggle_selection(state, &course);
            }
        }
        SelectionMode::List => add_to_list(state, &course),
    }
}

fn handle_remove(state: &mut AppState, index: usize) {
    match state.mode() {
        SelectionMode::Toggle => {
            // Positions follow the pending list, which is in catalog order.
            let code = state.current_courses().get(index).map(|c| c.code.clone());
            match code {
                Some(code) => {
                    state.selection.remove(&code);
                }
                None => tracing::warn!(index, "Remove index out of range"),
            }
        }
        SelectionMode::List => {
            state.registered = remove_course(&state.registered, index).registered;
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn lookup(state: &mut AppState, code: &str) -> Option<Course> {
    let course = state.catalog.find(code).cloned();
    if course.is_none() {
        tracing::warn!(code, "Course not found in catalog");
        state.push_notice(Notice::UnknownCourse {
            code: code.to_string(),
        });
    }
    course
}

fn toggle_selection(state: &mut AppState, course: &Course) {
    let outcome = toggle(
        state.catalog.courses(),
        &state.selection,
        course,
        state.band,
        state.options().overflow,
    );
    if outcome.rejected {
        state.push_notice(Notice::MaximumExceeded {
            code: course.code.clone(),
            max: state.band.max(),
        });
    }
    state.selection = outcome.selection;
}

fn add_to_list(state: &mut AppState, course: &Course) {
    let outcome = add_course(&state.registered, course);
    if outcome.already_added {
        state.push_notice(Notice::AlreadyAdded {
            code: course.code.clone(),
        });
        return;
    }

    if state.options().overflow == OverflowPolicy::Block {
        let current = state
            .registered
            .iter()
            .fold(0u32, |sum, c| sum.saturating_add(c.credits));
        if state.band.is_above(current.saturating_add(course.credits)) {
            tracing::warn!(
                code = %course.code,
                max = state.band.max(),
                "Rejected addition above maximum credits"
            );
            state.push_notice(Notice::MaximumExceeded {
                code: course.code.clone(),
                max: state.band.max(),
            });
            return;
        }
    }

    tracing::debug!(code = %course.code, "Added course to registration");
    state.registered = outcome.registered;
}
