//! Machine credentials file (`.netrc`) used by `git push`.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::CiEnvironment;
use crate::error::Result;

/// A single `machine` entry.
#[derive(Clone, PartialEq)]
pub struct NetrcEntry {
    pub machine: String,
    pub login: String,
    pub password: String,
}

impl NetrcEntry {
    pub fn from_env(ci: &CiEnvironment) -> Self {
        NetrcEntry {
            machine: ci.server_host.clone(),
            login: ci.username.clone(),
            password: ci.password.clone(),
        }
    }

    /// File content for this entry
    pub fn render(&self) -> String {
        format!(
            "machine {}\n\tlogin {}\n\tpassword {}\n",
            self.machine, self.login, self.password
        )
    }
}

impl fmt::Debug for NetrcEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetrcEntry")
            .field("machine", &self.machine)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Writes `entry` as the only content of the credentials file at `path`.
///
/// Existing content is replaced, never merged. On Unix the file ends up with
/// mode 0600 even if it existed before with wider permissions.
pub fn write_netrc(path: &Path, entry: &NetrcEntry) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(entry.render().as_bytes())?;
    file.sync_all()?;

    tracing::debug!(path = %path.display(), machine = %entry.machine, "wrote credentials file");
    Ok(())
}
