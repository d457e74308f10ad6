//! Terminal output. Status and errors go to stderr; the version is the only stdout line.

use console::style;

use crate::cli::{ReleaseOutcome, WorkflowResult};

/// Format an error message in red.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a status message with a yellow arrow to stderr.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a success message with a green checkmark to stderr.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// One-line human summary of the run.
pub fn summarize(result: &WorkflowResult) -> String {
    match &result.outcome {
        ReleaseOutcome::AlreadyTagged => {
            format!("HEAD is already tagged {}, nothing to do", result.version)
        }
        ReleaseOutcome::Published { previous, bump } => format!(
            "Published tag {} ({} bump from {})",
            result.version,
            bump,
            previous.as_deref().unwrap_or("no previous tag")
        ),
        ReleaseOutcome::Planned { previous, bump } => format!(
            "Dry run: would publish tag {} ({} bump from {})",
            result.version,
            bump,
            previous.as_deref().unwrap_or("no previous tag")
        ),
    }
}

/// Report the outcome: summary on stderr, bare version on stdout.
pub fn display_result(result: &WorkflowResult) {
    match result.outcome {
        ReleaseOutcome::Published { .. } => display_success(&summarize(result)),
        _ => display_status(&summarize(result)),
    }
    println!("{}", result.version);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionBump;

    #[test]
    fn test_format_error_contains_message() {
        assert!(format_error("boom").contains("boom"));
    }

    #[test]
    fn test_summarize_already_tagged() {
        let result = WorkflowResult {
            version: "1.2.3".to_string(),
            outcome: ReleaseOutcome::AlreadyTagged,
        };
        assert_eq!(summarize(&result), "HEAD is already tagged 1.2.3, nothing to do");
    }

    #[test]
    fn test_summarize_published_first_release() {
        let result = WorkflowResult {
            version: "1.1.0".to_string(),
            outcome: ReleaseOutcome::Published {
                previous: None,
                bump: VersionBump::Minor,
            },
        };
        assert_eq!(
            summarize(&result),
            "Published tag 1.1.0 (minor bump from no previous tag)"
        );
    }

    #[test]
    fn test_summarize_dry_run() {
        let result = WorkflowResult {
            version: "2.0.0".to_string(),
            outcome: ReleaseOutcome::Planned {
                previous: Some("1.4.2-3-gabcdef0".to_string()),
                bump: VersionBump::Major,
            },
        };
        assert!(summarize(&result).starts_with("Dry run: would publish tag 2.0.0"));
    }
}
