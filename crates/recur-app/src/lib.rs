//! Command-line front end for the recurrence engine.

pub mod cli;
pub mod commands;
pub mod error;
