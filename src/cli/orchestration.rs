//! Main release workflow orchestration
//!
//! Keeps the decision logic out of `main.rs` so it can be driven with a mock
//! repository and a stub hosting client.

use crate::config::{CiEnvironment, Settings};
use crate::domain::{bump_version, is_exact_tag, VersionBump};
use crate::error::Result;
use crate::git::Repository;
use crate::hosting::MergeRequestApi;
use crate::publish::publish_tag;
use crate::resolver::resolve_bump;

/// Arguments for the release workflow that are not part of [Settings]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Resolve and report the version without touching credentials, tags or remotes
    pub dry_run: bool,
}

/// What the workflow ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// HEAD already carries this tag
    AlreadyTagged,
    /// A new tag was created and pushed
    Published { previous: Option<String>, bump: VersionBump },
    /// Dry run: the tag that would have been published
    Planned { previous: Option<String>, bump: VersionBump },
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version printed on stdout
    pub version: String,

    pub outcome: ReleaseOutcome,
}

impl WorkflowResult {
    /// Whether a tag was pushed during this run
    pub fn pushed(&self) -> bool {
        matches!(self.outcome, ReleaseOutcome::Published { .. })
    }
}

/// Main release workflow
///
/// 1. Describe HEAD; an exact tag ends the run
/// 2. Resolve the bump from merge request labels or commit markers
/// 3. Bump the described version, or the initial version when there are no tags
/// 4. Publish the tag (skipped on dry run)
///
/// The caller has already validated the CI environment, so no git or network
/// call can happen with incomplete configuration.
pub fn run_release_workflow<R, A>(
    args: &ReleaseWorkflowArgs,
    ci: &CiEnvironment,
    settings: &Settings,
    repo: &R,
    api: &A,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    A: MergeRequestApi + ?Sized,
{
    let described = repo.describe_tags()?;

    if let Some(latest) = described.as_deref() {
        if is_exact_tag(latest) {
            tracing::info!(tag = %latest, "HEAD is already tagged");
            return Ok(WorkflowResult {
                version: latest.to_string(),
                outcome: ReleaseOutcome::AlreadyTagged,
            });
        }
    }

    let base = match described.as_deref() {
        Some(latest) => latest,
        None => {
            tracing::info!(
                initial = %settings.initial_version,
                "no tags found, starting from the initial version"
            );
            settings.initial_version.as_str()
        }
    };

    let message = repo.last_commit_message()?;
    let decision = resolve_bump(&message, api, &settings.labels)?;
    let version = bump_version(base, decision.bump)?.to_string();
    tracing::info!(from = %base, to = %version, bump = %decision.bump, "computed next version");

    if args.dry_run {
        tracing::info!(%version, "dry run, not publishing");
        return Ok(WorkflowResult {
            version,
            outcome: ReleaseOutcome::Planned {
                previous: described,
                bump: decision.bump,
            },
        });
    }

    publish_tag(repo, ci, settings, &version)?;

    Ok(WorkflowResult {
        version,
        outcome: ReleaseOutcome::Published {
            previous: described,
            bump: decision.bump,
        },
    })
}
