pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod render;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
