use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::envelope::User;

/// HTTP endpoint paths served by pairdiff.
pub mod endpoints {
    pub const ROOT: &str = "/";
    pub const HEALTH: &str = "/health";
    /// Everything else is a comparison path: `[mode/]host/path/{a,b}`.
    pub const COMPARE: &str = "/*path";
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Static description of the service, attached to every response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescription {
    pub name: String,
    pub description: String,
    pub url: String,
    pub endpoints: BTreeMap<String, String>,
    pub site: String,
    pub repo: String,
}

impl ApiDescription {
    /// Describe a deployment reachable at `site` (no trailing slash).
    pub fn for_site(site: &str) -> Self {
        let site = site.trim_end_matches('/');
        let mut endpoints = BTreeMap::new();
        endpoints.insert("diff".to_string(), format!("{site}/:url"));
        Self {
            name: "pairdiff".into(),
            description: "Structural diff between two JSON resources named by one URL".into(),
            url: format!("{site}/api"),
            endpoints,
            site: site.to_string(),
            repo: env!("CARGO_PKG_REPOSITORY").into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootResponse {
    pub api: ApiDescription,
    pub getting_started: Vec<String>,
    pub examples: BTreeMap<String, String>,
    pub user: User,
}

impl RootResponse {
    pub fn new(api: ApiDescription, user: User) -> Self {
        let mut examples = BTreeMap::new();
        examples.insert(
            "diff".to_string(),
            format!(
                "{}/listings.do/api/Listing/{{b4990a25-bb49-4ab3-8a09-6d9488370c71,27ee2a85-3e1f-4c11-932c-e0cd5d516331}}",
                api.site
            ),
        );
        examples.insert(
            "updated".to_string(),
            format!("{}/updated/bucket.do/read/{{file1,file2}}", api.site),
        );
        let getting_started = vec![
            "Put the two differing parts of the URL in one {a,b} group.".to_string(),
            "Prefix the path with added/, deleted/, updated/ or detailed/ to pick a view.".to_string(),
        ];
        Self { api, getting_started, examples, user }
    }
}
