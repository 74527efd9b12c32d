use crate::error::{NexusError, NexusErrorExt, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rescs_domain::config::NexusSettings;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Characters left as-is by form encoding, as in `application/x-www-form-urlencoded`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'.').remove(b'-').remove(b'~');

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Form-encodes `value` for use as a single path segment (space becomes `+`).
#[must_use]
pub fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM).to_string().replace("%20", "+")
}

/// Status and body of a create or update call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusResponse {
    pub status: StatusCode,
    /// Parsed JSON body, or the raw text as a JSON string when it is not JSON.
    pub body: Value,
}

impl NexusResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    async fn read(response: Response) -> Result<Self> {
        let status = response.status();
        let text = response.text().await.context("Reading response body")?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(Self { status, body })
    }
}

impl fmt::Display for NexusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.body)
    }
}

/// Views API client bound to one organisation and project.
#[derive(Clone)]
pub struct NexusClient {
    client: Client,
    base_url: String,
    org: String,
    project: String,
    token: String,
}

impl fmt::Debug for NexusClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NexusClient")
            .field("base_url", &self.base_url)
            .field("org", &self.org)
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl NexusClient {
    /// Builds the HTTP client. Certificate checks follow `verify_ssl`.
    ///
    /// # Errors
    /// Returns [`NexusError::Http`] when the TLS backend cannot be initialised.
    pub fn new(settings: &NexusSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!settings.verify_ssl)
            .build()
            .context("Building HTTP client")?;

        if !settings.verify_ssl {
            warn!("TLS certificate verification is disabled");
        }

        Ok(Self {
            client,
            base_url: settings.base_url().to_owned(),
            org: settings.org.clone(),
            project: settings.project.clone(),
            token: settings.token.clone(),
        })
    }

    /// `{nexus}/views/{org}/{project}`
    #[must_use]
    pub fn views_url(&self) -> String {
        format!("{}/views/{}/{}", self.base_url, self.org, self.project)
    }

    /// Resource IRI Nexus assigns to a view of the project.
    #[must_use]
    pub fn resource_iri(&self, view_id: &str) -> String {
        format!("{}/resources/{}/{}/_/{view_id}", self.base_url, self.org, self.project)
    }

    /// URL of the update call for `view_id` at revision `rev`.
    #[must_use]
    pub fn update_url(&self, view_id: &str, rev: u64) -> String {
        format!("{}/{}?rev={rev}", self.views_url(), form_encode(&self.resource_iri(view_id)))
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.token)
    }

    /// Fetches a view by id; `None` when Nexus answers 404.
    ///
    /// # Errors
    /// Any other non-success status is [`NexusError::Status`].
    pub async fn fetch_view(&self, id: &str) -> Result<Option<Value>> {
        let url = format!("{}/{}", self.views_url(), form_encode(id));
        debug!(%url, "Fetching view");

        let response = self.request(self.client.get(&url)).send().await.context(url.clone())?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NexusError::Status { status: status.as_u16(), body, context: Some(url.into()) });
        }

        let text = response.text().await.context("Reading view")?;
        let view = serde_json::from_str(&text).context(url)?;
        Ok(Some(view))
    }

    /// Registers a new view.
    ///
    /// # Errors
    /// Only transport failures; a rejected view is returned as a response.
    pub async fn create_view(&self, view: &Value) -> Result<NexusResponse> {
        let url = self.views_url();
        debug!(%url, "Creating view");

        let response =
            self.request(self.client.post(&url)).json(view).send().await.context(url)?;
        Ok(report(NexusResponse::read(response).await?))
    }

    /// Replaces the view `id` currently at revision `rev`.
    ///
    /// # Errors
    /// Only transport failures; a rejected view is returned as a response.
    pub async fn update_view(&self, id: &str, rev: u64, view: &Value) -> Result<NexusResponse> {
        let url = self.update_url(id, rev);
        debug!(%url, "Updating view");

        let response = self.request(self.client.put(&url)).json(view).send().await.context(url)?;
        Ok(report(NexusResponse::read(response).await?))
    }
}

fn report(response: NexusResponse) -> NexusResponse {
    if !response.is_success() {
        warn!(status = response.status.as_u16(), body = %response.body, "Nexus rejected the view");
    }
    response
}
