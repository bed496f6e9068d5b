use crate::config::RevisionLookupConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;
use xjs_engine::{Error, Result, RevisionLookup, RevisionTable};

/// Charm store revision endpoint, asked once with every charm id as a
/// repeated `id` query parameter
pub struct CharmStoreClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct RevisionEntry {
    #[serde(rename = "Revision")]
    revision: Option<i64>,
}

type RevisionResponse = BTreeMap<String, Option<RevisionEntry>>;

impl CharmStoreClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("xjs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(lookup_error)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &RevisionLookupConfig) -> Result<Self> {
        Self::new(&config.endpoint, Duration::from_secs(config.timeout_secs))
    }
}

impl RevisionLookup for CharmStoreClient {
    fn latest_revisions(&self, ids: &[String]) -> Result<RevisionTable> {
        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("id", id.as_str())).collect();

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query)
            .send()
            .map_err(lookup_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Lookup(format!(
                "{} answered {}",
                self.endpoint, status
            )));
        }

        let body: RevisionResponse = response.json().map_err(lookup_error)?;
        let table = into_table(body);
        debug!(requested = ids.len(), answered = table.len(), "charm store revisions");
        Ok(table)
    }
}

/// Ids without a usable `Revision` are left out: "no newer revision known"
fn into_table(body: RevisionResponse) -> RevisionTable {
    body.into_iter()
        .filter_map(|(id, entry)| entry.and_then(|e| e.revision).map(|rev| (id, rev)))
        .collect()
}

fn lookup_error(err: reqwest::Error) -> Error {
    Error::Lookup(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_keeps_only_known_revisions() {
        let body: RevisionResponse = serde_json::from_str(
            r#"{
                "cs:bionic/keystone": {"Revision": 301},
                "cs:bionic/ntp": {"Id": "cs:bionic/ntp-33"},
                "cs:bionic/gone": null
            }"#,
        )
        .unwrap();

        let table = into_table(body);
        assert_eq!(table.len(), 1);
        assert_eq!(table["cs:bionic/keystone"], 301);
    }

    #[test]
    fn test_unreachable_endpoint_is_a_lookup_error() {
        let client =
            CharmStoreClient::new("http://127.0.0.1:9/meta", Duration::from_millis(200)).unwrap();
        let err = client
            .latest_revisions(&["cs:bionic/ntp".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::Lookup(_)));
    }
}
