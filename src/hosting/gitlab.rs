use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::CiEnvironment;
use crate::error::{Result, TagError};
use crate::hosting::MergeRequestApi;

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

#[derive(Debug, Deserialize)]
struct CurrentUser {
    username: String,
}

#[derive(Debug, Deserialize)]
struct Project {
    id: u64,
    #[serde(default)]
    path_with_namespace: String,
}

#[derive(Debug, Deserialize)]
struct MergeRequest {
    iid: u64,
    #[serde(default)]
    labels: Vec<String>,
}

/// Blocking GitLab v4 REST client authenticated with a private token
///
/// Construction never fails. A bad server URL or HTTP client setup error is
/// kept and returned from the first request as [TagError::HostingApi], so it
/// takes the same fallback path as any other hosting failure.
pub struct GitLabClient {
    connection: std::result::Result<Connection, String>,
    project_id: String,
    token: String,
}

struct Connection {
    http: Client,
    base_url: Url,
}

impl Connection {
    fn open(base_url: &str) -> std::result::Result<Self, String> {
        let parsed = Url::parse(base_url)
            .map_err(|e| format!("Invalid hosting URL '{}': {}", base_url, e))?;
        if parsed.cannot_be_a_base() {
            return Err(format!("Hosting URL '{}' cannot be a base", base_url));
        }
        let http = Client::builder()
            .user_agent(concat!("ci-semver-tag/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| format!("Cannot build HTTP client: {}", e))?;

        Ok(Connection {
            http,
            base_url: parsed,
        })
    }
}

impl GitLabClient {
    /// Create a client for an explicit server, project and token
    pub fn new(base_url: &str, project_id: impl Into<String>, token: impl Into<String>) -> Self {
        GitLabClient {
            connection: Connection::open(base_url),
            project_id: project_id.into(),
            token: token.into(),
        }
    }

    /// Create a client from the CI environment; the token is `NPA_PASSWORD`
    pub fn from_env(ci: &CiEnvironment) -> Self {
        Self::new(&ci.hosting_base_url(), ci.project_id.clone(), ci.password.clone())
    }

    fn connection(&self) -> Result<&Connection> {
        self.connection
            .as_ref()
            .map_err(|reason| TagError::hosting_api(reason.clone()))
    }

    /// Build `<base>/api/v4/<segments...>`, encoding each segment (a project
    /// path such as `group/app` becomes `group%2Fapp`).
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.connection()?.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TagError::hosting_api("Hosting URL cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "v4"])
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "hosting API request");

        let response = self
            .connection()?
            .http
            .get(url.clone())
            .header(TOKEN_HEADER, &self.token)
            .send()
            .map_err(|e| TagError::hosting_api(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TagError::hosting_api(format!(
                "GET {} returned HTTP {}",
                url, status
            )));
        }

        response
            .json::<T>()
            .map_err(|e| TagError::hosting_api(format!("Cannot decode response from {}: {}", url, e)))
    }

    /// Verify the token by fetching the current user
    pub fn authenticate(&self) -> Result<()> {
        let user: CurrentUser = self.get_json(&["user"])?;
        tracing::debug!(username = %user.username, "authenticated to hosting API");
        Ok(())
    }
}

impl MergeRequestApi for GitLabClient {
    fn merge_request_labels(&self, iid: u64) -> Result<Vec<String>> {
        self.authenticate()?;

        let project: Project = self.get_json(&["projects", &self.project_id])?;
        tracing::debug!(
            project_id = project.id,
            path = %project.path_with_namespace,
            "resolved project"
        );

        let project_id = project.id.to_string();
        let iid_str = iid.to_string();
        let merge_request: MergeRequest =
            self.get_json(&["projects", &project_id, "merge_requests", &iid_str])?;

        tracing::info!(
            iid = merge_request.iid,
            labels = ?merge_request.labels,
            "merge request labels"
        );
        Ok(merge_request.labels)
    }
}
