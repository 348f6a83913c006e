//! Registration submission.
//!
//! A confirmed registration is turned into a [`RegistrationPayload`] and
//! handed to a [`SubmissionSink`]. Sinks are pluggable so the same state
//! machine can log, print, or forward to a remote service.

use std::io::Write;

use creg_model::Course;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Payload handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub student_name: Option<String>,
    pub selected_courses: Vec<Course>,
    pub total_credits: u32,
}

/// Destination for confirmed registrations.
pub trait SubmissionSink {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<()>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<()> {
        (**self).submit(payload)
    }
}

/// Emits the payload as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<()> {
        let codes: Vec<&str> = payload
            .selected_courses
            .iter()
            .map(|course| course.code.as_str())
            .collect();
        tracing::info!(
            student = ?payload.student_name,
            courses = ?codes,
            total_credits = payload.total_credits,
            "Submitting registration payload"
        );
        Ok(())
    }
}

/// Writes each payload as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonSink<W> {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, payload)
            .map_err(|err| AppError::submission(err.to_string()))?;
        writeln!(self.writer).map_err(|err| AppError::submission(err.to_string()))?;
        self.writer
            .flush()
            .map_err(|err| AppError::submission(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_sink_writes_camel_case_payload() {
        let payload = RegistrationPayload {
            student_name: Some("Siti".to_string()),
            selected_courses: vec![Course::new("A", "Algorithms", 3)],
            total_credits: 3,
        };
        let mut sink = JsonSink::new(Vec::new());
        sink.submit(&payload).unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["studentName"], "Siti");
        assert_eq!(value["totalCredits"], 3);
        assert_eq!(value["selectedCourses"][0]["code"], "A");
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn boxed_sink_delegates() {
        let payload = RegistrationPayload {
            student_name: None,
            selected_courses: vec![Course::new("B", "Biology", 4)],
            total_credits: 4,
        };
        let mut sink: Box<JsonSink<Vec<u8>>> = Box::new(JsonSink::new(Vec::new()));
        sink.submit(&payload).unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.contains("\"totalCredits\": 4"));
    }

    #[test]
    fn log_sink_accepts_payload() {
        let payload = RegistrationPayload {
            student_name: None,
            selected_courses: Vec::new(),
            total_credits: 0,
        };
        assert!(LogSink.submit(&payload).is_ok());
    }
}
