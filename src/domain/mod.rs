//! Domain logic - pure release rules independent of git and the hosting API

pub mod labels;
pub mod version;

pub use labels::{determine_version_bump, extract_merge_request_iid, scan_bump_marker};
pub use version::{bump_version, is_exact_tag, parse_version, VersionBump};
