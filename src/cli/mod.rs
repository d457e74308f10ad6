pub mod orchestration;

pub use orchestration::{run_release_workflow, ReleaseOutcome, ReleaseWorkflowArgs, WorkflowResult};
