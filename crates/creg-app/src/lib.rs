//! Registration state and message handling.
//!
//! Elm-style shim around the pure validator: an owned [`AppState`], a
//! [`Message`] per user action, handlers that update state and recompute
//! validation, and a pluggable [`SubmissionSink`] for confirmed
//! registrations. Rendering is left to the caller, which redraws from
//! [`AppState`] after every [`App::update`].
//!
//! ```
//! use creg_app::{App, LogSink, Message, Settings};
//! use creg_model::{Catalog, Course};
//!
//! let catalog = Catalog::new(None, vec![Course::new("A", "Algorithms", 9)]);
//! let mut app = App::new(Settings::default(), LogSink);
//! app.update(Message::CatalogLoaded(Ok(catalog))).unwrap();
//! app.update(Message::toggle("A")).unwrap();
//! assert!(app.state().validation().can_register);
//! ```

mod app;
mod error;
pub mod handler;
mod message;
mod notice;
mod settings;
mod state;
mod submit;

pub use app::App;
pub use error::{AppError, Result};
pub use message::{CourseMessage, Message};
pub use notice::{Notice, NoticeLevel};
pub use settings::{RegistrationSettings, SelectionMode, Settings};
pub use state::{AppState, CatalogStatus};
pub use submit::{JsonSink, LogSink, RegistrationPayload, SubmissionSink};
