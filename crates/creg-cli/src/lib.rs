//! Command-line front end for the course registration validator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
