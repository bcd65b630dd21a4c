//! Terminal front end: argument parsing, rendering and the command handlers.

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
