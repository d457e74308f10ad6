//! Hosting platform access
//!
//! Only merge request labels are ever read. [MergeRequestApi] is the seam the
//! bump resolver depends on; [gitlab::GitLabClient] is the real implementation.

pub mod gitlab;

pub use gitlab::GitLabClient;

use crate::error::Result;

/// Read access to merge request metadata
pub trait MergeRequestApi {
    /// Labels attached to the merge request with the given project-local iid
    ///
    /// Every failure (authentication, lookup, decoding) is reported as
    /// [crate::error::TagError::HostingApi].
    fn merge_request_labels(&self, iid: u64) -> Result<Vec<String>>;
}
