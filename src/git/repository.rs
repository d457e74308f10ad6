use crate::error::{Result, TagError};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorClass, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            TagError::version_control(format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Wrap an already opened git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Directory the `git` binary should run in
    fn command_dir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }
}

impl super::Repository for Git2Repository {
    fn describe_tags(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            // "no reference found" and "no tags can describe" both land here
            Err(e) if e.class() == ErrorClass::Describe => {
                tracing::debug!("describe found no tags: {}", e.message());
                return Ok(None);
            }
            Err(e) => {
                return Err(TagError::version_control(format!(
                    "Cannot describe HEAD: {}",
                    e.message()
                )))
            }
        };

        let described = describe.format(Some(&DescribeFormatOptions::new()))?;
        Ok(Some(described))
    }

    fn last_commit_message(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| {
                TagError::version_control(format!("Cannot read HEAD commit: {}", e.message()))
            })?;

        Ok(String::from_utf8_lossy(head.message_bytes()).into_owned())
    }

    fn set_push_url(&self, remote: &str, url: &str) -> Result<()> {
        self.repo.remote_set_pushurl(remote, Some(url)).map_err(|e| {
            TagError::version_control(format!(
                "Cannot set push URL for remote '{}': {}",
                remote,
                e.message()
            ))
        })
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| {
                TagError::version_control(format!("Cannot create tag '{}': {}", name, e.message()))
            })?;

        Ok(())
    }

    /// Pushes through the `git` binary so that the credentials file and any
    /// configured credential helpers are honoured; libgit2 reads neither.
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        let refspec = format!("refs/tags/{}", tag_name);

        let output = Command::new("git")
            .arg("-C")
            .arg(self.command_dir())
            .args(["push", remote, &refspec])
            .output()
            .map_err(|e| TagError::version_control(format!("Failed to run git push: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TagError::version_control(format!(
                "Failed to push tag '{}' to '{}' (exit code {}): {}",
                tag_name,
                remote,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(())
    }
}
