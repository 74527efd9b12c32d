use serde::{Deserialize, Deserializer};
use std::fmt;

/// Connection settings of the Nexus deployment views are registered against.
///
/// Sourced from `TOKEN`, `NEXUS`, `ORG`, `PROJECT` and `VERIFY_SSL`.
#[derive(Clone, Deserialize)]
pub struct NexusSettings {
    pub token: String,
    /// Base URL of the Nexus API, e.g. `https://nexus.example.org/v1`.
    #[serde(rename = "nexus")]
    pub endpoint: String,
    pub org: String,
    pub project: String,
    #[serde(deserialize_with = "int_flag")]
    pub verify_ssl: bool,
}

impl NexusSettings {
    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}

impl fmt::Debug for NexusSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NexusSettings")
            .field("token", &"***")
            .field("endpoint", &self.endpoint)
            .field("org", &self.org)
            .field("project", &self.project)
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}

/// Integer flag, `0` is false. Environment values arrive as strings.
fn int_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value != 0),
        Raw::Text(text) => text.trim().parse::<i64>().map(|value| value != 0).map_err(|_| {
            serde::de::Error::custom(format!("expected an integer flag, found '{text}'"))
        }),
    }
}
