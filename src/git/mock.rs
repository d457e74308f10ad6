use crate::error::{Result, TagError};
use crate::git::Repository;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Mutating calls are recorded so tests can assert what the workflow did.
pub struct MockRepository {
    described: Option<String>,
    message: String,
    push_urls: Mutex<HashMap<String, String>>,
    created_tags: Mutex<Vec<String>>,
    pushed_tags: Mutex<Vec<(String, String)>>,
    fail_push: bool,
}

impl MockRepository {
    /// Create a new mock repository without tags
    pub fn new(message: impl Into<String>) -> Self {
        MockRepository {
            described: None,
            message: message.into(),
            push_urls: Mutex::new(HashMap::new()),
            created_tags: Mutex::new(Vec::new()),
            pushed_tags: Mutex::new(Vec::new()),
            fail_push: false,
        }
    }

    /// Set what `describe_tags` returns
    pub fn with_described(mut self, described: impl Into<String>) -> Self {
        self.described = Some(described.into());
        self
    }

    /// Make every push fail
    pub fn with_failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Tags created so far
    pub fn created_tags(&self) -> Vec<String> {
        lock(&self.created_tags).clone()
    }

    /// `(remote, tag)` pairs pushed so far
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        lock(&self.pushed_tags).clone()
    }

    /// Push URL configured for a remote
    pub fn push_url(&self, remote: &str) -> Option<String> {
        lock(&self.push_urls).get(remote).cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Repository for MockRepository {
    fn describe_tags(&self) -> Result<Option<String>> {
        Ok(self.described.clone())
    }

    fn last_commit_message(&self) -> Result<String> {
        Ok(self.message.clone())
    }

    fn set_push_url(&self, remote: &str, url: &str) -> Result<()> {
        lock(&self.push_urls).insert(remote.to_string(), url.to_string());
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let mut tags = lock(&self.created_tags);
        if tags.iter().any(|tag| tag == name) {
            return Err(TagError::version_control(format!(
                "Tag '{}' already exists",
                name
            )));
        }
        tags.push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        if self.fail_push {
            return Err(TagError::version_control(format!(
                "Push of '{}' rejected",
                tag_name
            )));
        }
        lock(&self.pushed_tags).push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }
}
