use regex::Regex;

use crate::config::LabelSettings;
use crate::domain::version::VersionBump;
use crate::error::{Result, TagError};

/// `group/project!123` style merge request reference.
const MERGE_REQUEST_REFERENCE: &str = r"\S*/\S*!(\d+)";

/// Markers recognised in a commit message when no merge request can be consulted.
const BUMP_MARKER: &str = r"(?i)(-bump-minor-|-bump-major-)";

/// Extracts the merge request iid from a commit message.
///
/// Uses the first `path/like!<digits>` token, as written by the hosting platform
/// in its merge commit messages ("See merge request group/app!42").
pub fn extract_merge_request_iid(message: &str) -> Result<u64> {
    let re = Regex::new(MERGE_REQUEST_REFERENCE)
        .map_err(|e| TagError::commit_parse(format!("Invalid reference pattern: {}", e)))?;

    let captures = re.captures(message).ok_or_else(|| {
        TagError::commit_parse(format!(
            "Unable to extract merge request from commit message: {}",
            message.trim()
        ))
    })?;

    captures[1].parse::<u64>().map_err(|e| {
        TagError::commit_parse(format!(
            "Invalid merge request id '{}': {}",
            &captures[1], e
        ))
    })
}

/// Returns the first bump marker in a commit message, lower-cased.
pub fn scan_bump_marker(message: &str) -> Result<Option<String>> {
    let re = Regex::new(BUMP_MARKER)
        .map_err(|e| TagError::commit_parse(format!("Invalid marker pattern: {}", e)))?;

    Ok(re.find(message).map(|m| m.as_str().to_lowercase()))
}

/// Picks the bump from a set of labels.
///
/// Minor wins over major when both are present; anything else is a patch.
pub fn determine_version_bump(labels: &[String], settings: &LabelSettings) -> VersionBump {
    let has_any = |candidates: &[String]| labels.iter().any(|label| candidates.contains(label));

    if has_any(settings.minor.as_slice()) {
        VersionBump::Minor
    } else if has_any(settings.major.as_slice()) {
        VersionBump::Major
    } else {
        VersionBump::Patch
    }
}
