//! Message handlers.
//!
//! Each handler owns the logic for one message type and works only on
//! [`AppState`]. Side effects that leave the state (submitting a
//! registration) are returned as an [`Effect`] and run by [`crate::App`],
//! so handlers stay deterministic and can be tested without a sink.

mod catalog;
mod course;
mod register;

use crate::state::AppState;
use crate::submit::RegistrationPayload;

pub use catalog::CatalogHandler;
pub use course::CourseHandler;
pub use register::request_registration;

/// Follow-up work requested by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Submit(RegistrationPayload),
}

/// Trait for handling one message type against the application state.
pub trait MessageHandler<M> {
    fn handle(&self, state: &mut AppState, msg: M) -> Effect;
}
