use crate::error::{Result, TagError};
use semver::{BuildMetadata, Prerelease, Version};

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl std::fmt::Display for VersionBump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}

/// Returns true when `describe` output names a tag sitting exactly on HEAD.
///
/// Describe appends `-<distance>-g<hash>` when HEAD is ahead of the tag, so any
/// `-` means the commit is not released yet. A pre-release tag such as
/// `1.0.0-rc1` therefore also counts as "not tagged".
pub fn is_exact_tag(describe: &str) -> bool {
    !describe.contains('-')
}

/// Parses a version string, tolerating surrounding whitespace.
pub fn parse_version(text: &str) -> Result<Version> {
    let trimmed = text.trim();
    Version::parse(trimmed).map_err(|e| {
        TagError::version_parse(format!("Invalid semantic version '{}': {}", trimmed, e))
    })
}

/// Computes the next clean version from the latest describe output.
///
/// Increments the chosen component and resets lower ones to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// Pre-release and build metadata on the input (the describe suffix) are dropped.
pub fn bump_version(latest: &str, bump_type: VersionBump) -> Result<Version> {
    let mut version = parse_version(latest)?;

    match bump_type {
        VersionBump::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
        }
        VersionBump::Minor => {
            version.minor += 1;
            version.patch = 0;
        }
        VersionBump::Patch => {
            version.patch += 1;
        }
    }
    version.pre = Prerelease::EMPTY;
    version.build = BuildMetadata::EMPTY;

    Ok(version)
}
