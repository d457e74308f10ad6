//! Tag publisher: credentials, push URL, tag, push.

use crate::config::{CiEnvironment, Settings};
use crate::credentials::{write_netrc, NetrcEntry};
use crate::error::Result;
use crate::git::Repository;

/// Creates `tag` at HEAD and pushes it to the configured remote.
///
/// Steps run in order and the first failure aborts; nothing is rolled back.
pub fn publish_tag<R: Repository + ?Sized>(
    repo: &R,
    ci: &CiEnvironment,
    settings: &Settings,
    tag: &str,
) -> Result<()> {
    let netrc_path = settings.netrc_path()?;
    write_netrc(&netrc_path, &NetrcEntry::from_env(ci))?;

    repo.set_push_url(&settings.remote, &ci.repository_url)?;
    tracing::debug!(remote = %settings.remote, "push URL updated");

    repo.create_tag(tag)?;
    tracing::info!(%tag, "created tag");

    repo.push_tag(&settings.remote, tag)?;
    tracing::info!(%tag, remote = %settings.remote, "pushed tag");

    Ok(())
}
