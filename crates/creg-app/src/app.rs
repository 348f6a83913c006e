//! Application driver: dispatches messages and runs effects.

use crate::error::Result;
use crate::handler::{CatalogHandler, CourseHandler, Effect, MessageHandler, request_registration};
use crate::message::Message;
use crate::notice::Notice;
use crate::settings::Settings;
use crate::state::AppState;
use crate::submit::SubmissionSink;

/// Owns the registration state and the submission sink.
pub struct App<S: SubmissionSink> {
    state: AppState,
    sink: S,
}

impl<S: SubmissionSink> App<S> {
    pub fn new(settings: Settings, sink: S) -> Self {
        Self {
            state: AppState::new(settings),
            sink,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (AppState, S) {
        (self.state, self.sink)
    }

    /// Handle one message to completion.
    ///
    /// Only a failing submission sink produces an error; every other outcome
    /// is reported through state and notices.
    pub fn update(&mut self, message: Message) -> Result<()> {
        let effect = match message {
            Message::CatalogLoaded(result) => CatalogHandler.handle(&mut self.state, result),
            Message::Course(msg) => CourseHandler.handle(&mut self.state, msg),
            Message::SearchChanged(query) => {
                self.state.query = query;
                Effect::None
            }
            Message::RegisterClicked => request_registration(&mut self.state),
            Message::DismissNotices => {
                self.state.notices.clear();
                Effect::None
            }
        };
        self.run(effect)
    }

    fn run(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::None => Ok(()),
            Effect::Submit(payload) => match self.sink.submit(&payload) {
                Ok(()) => {
                    tracing::info!(
                        total_credits = payload.total_credits,
                        courses = payload.selected_courses.len(),
                        "Registration submitted"
                    );
                    self.state.push_notice(Notice::Submitted {
                        total_credits: payload.total_credits,
                    });
                    Ok(())
                }
                Err(err) => {
                    tracing::error!(error = %err, "Registration submission failed");
                    self.state.push_notice(Notice::SubmissionFailed {
                        reason: err.to_string(),
                    });
                    Err(err)
                }
            },
        }
    }
}
