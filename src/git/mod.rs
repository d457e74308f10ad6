//! Git operations abstraction layer
//!
//! The release workflow only needs a handful of repository operations, so they
//! are captured by the [Repository] trait. Implementations:
//!
//! - [repository::Git2Repository]: the real repository, via `git2` plus the
//!   `git` binary for pushing
//! - [mock::MockRepository]: an in-memory stand-in that records what was done
//!
//! ```rust
//! # use ci_semver_tag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> ci_semver_tag::Result<()> {
//! match repo.describe_tags()? {
//!     Some(described) => println!("latest: {}", described),
//!     None => println!("no tags yet"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Common git operation trait for abstraction
///
/// All methods return [crate::error::Result<T>]; implementations map their
/// underlying failures to [crate::error::TagError::VersionControl].
pub trait Repository {
    /// Describe HEAD using the nearest reachable tag (lightweight tags included).
    ///
    /// # Returns
    /// * `Ok(Some("1.2.3"))` - HEAD is exactly tagged
    /// * `Ok(Some("1.2.3-4-gabcdef0"))` - HEAD is 4 commits past the tag
    /// * `Ok(None)` - No tag is reachable from HEAD
    /// * `Err` - Any other repository failure
    fn describe_tags(&self) -> Result<Option<String>>;

    /// Full message of the HEAD commit
    fn last_commit_message(&self) -> Result<String>;

    /// Set the push URL of the named remote
    fn set_push_url(&self, remote: &str, url: &str) -> Result<()>;

    /// Create a lightweight tag at HEAD
    ///
    /// Fails if a tag of that name already exists.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to the named remote
    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()>;
}
