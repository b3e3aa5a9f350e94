//! Workflows behind the command-line subcommands

pub mod orchestration;

pub use orchestration::{run_create_workflow, CreateWorkflowArgs, WorkflowResult};
