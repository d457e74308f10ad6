//! Bump-reason resolution: merge request labels first, commit message markers second.

use crate::config::LabelSettings;
use crate::domain::{determine_version_bump, extract_merge_request_iid, scan_bump_marker, VersionBump};
use crate::error::{Result, TagError};
use crate::hosting::MergeRequestApi;

/// Where the labels used for the decision came from
#[derive(Debug, Clone, PartialEq)]
pub enum LabelSource {
    /// Labels of the referenced merge request
    MergeRequest { iid: u64, labels: Vec<String> },
    /// At most one marker found in the commit message
    CommitMarker(Option<String>),
}

impl LabelSource {
    pub fn labels(&self) -> Vec<String> {
        match self {
            LabelSource::MergeRequest { labels, .. } => labels.clone(),
            LabelSource::CommitMarker(marker) => marker.iter().cloned().collect(),
        }
    }
}

/// The chosen bump together with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct BumpDecision {
    pub bump: VersionBump,
    pub source: LabelSource,
}

/// Collects labels for the HEAD commit.
///
/// A message without a merge request reference falls back silently. A hosting
/// failure is logged as a warning and also falls back. Any other error is
/// returned.
pub fn collect_labels<A: MergeRequestApi + ?Sized>(message: &str, api: &A) -> Result<LabelSource> {
    match extract_merge_request_iid(message) {
        Ok(iid) => match api.merge_request_labels(iid) {
            Ok(labels) => return Ok(LabelSource::MergeRequest { iid, labels }),
            Err(TagError::HostingApi(reason)) => {
                tracing::warn!(
                    iid,
                    "cannot read merge request labels, using commit message markers: {}",
                    reason
                );
            }
            Err(e) => return Err(e),
        },
        Err(TagError::CommitParse(reason)) => {
            tracing::debug!("no merge request referenced: {}", reason);
        }
        Err(e) => return Err(e),
    }

    let marker = scan_bump_marker(message)?;
    Ok(LabelSource::CommitMarker(marker))
}

/// Resolves the bump for the HEAD commit message.
pub fn resolve_bump<A: MergeRequestApi + ?Sized>(
    message: &str,
    api: &A,
    settings: &LabelSettings,
) -> Result<BumpDecision> {
    let source = collect_labels(message, api)?;
    let bump = determine_version_bump(&source.labels(), settings);

    tracing::info!(%bump, source = ?source, "resolved version bump");
    Ok(BumpDecision { bump, source })
}
