// ABOUTME: Blocking HTTP client for the Traduora API
// ABOUTME: Authenticates once, lists project locales, downloads exports

use crate::{
    auth::{password_grant, Session},
    config::Config,
    model::{TokenResponse, TranslationsResponse},
    util::truncate_str,
    Error, Result,
};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("traduora-sync/", env!("CARGO_PKG_VERSION"), " (Rust)");
const TOKEN_ENDPOINT: &str = "/api/v1/auth/token";

pub struct ApiClient<'a> {
    client: Client,
    config: &'a Config,
    session: Session,
}

impl<'a> ApiClient<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(ApiClient {
            client,
            config,
            session: Session::default(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    fn translations_endpoint(&self) -> String {
        format!("/api/v1/projects/{}/translations", self.config.project_id)
    }

    fn exports_endpoint(&self) -> String {
        format!("/api/v1/projects/{}/exports", self.config.project_id)
    }

    pub fn authenticate(&mut self) -> Result<()> {
        debug!(endpoint = TOKEN_ENDPOINT, "requesting access token");

        let response = self
            .client
            .post(self.url(TOKEN_ENDPOINT))
            .header("Accept", "application/json")
            .json(&password_grant(&self.config.email, &self.config.password))
            .send()
            .map_err(|e| Error::AuthenticationFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().unwrap_or_default();
            return Err(Error::AuthenticationFailed(format!(
                "status {}: {}",
                status.as_u16(),
                truncate_str(&message, 100)
            )));
        }

        let token: TokenResponse = response
            .json()
            .map_err(|e| Error::AuthenticationFailed(format!("malformed token response: {}", e)))?;

        self.session.store(token.access_token);
        Ok(())
    }

    fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Response> {
        let bearer = self.session.bearer()?;
        debug!(endpoint, ?query, "GET");

        let response = self
            .client
            .get(self.url(endpoint))
            .header("Authorization", bearer)
            .query(query)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().unwrap_or_default();
            return Err(Error::RequestFailed {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                message: truncate_str(&message, 100),
            });
        }

        Ok(response)
    }

    /// Locale codes in the order the server returned them.
    pub fn get_available_locales(&self) -> Result<Vec<String>> {
        let endpoint = self.translations_endpoint();
        let response = self.get(&endpoint, &[])?;
        let status = response.status().as_u16();

        let body = response.text()?;
        let parsed: TranslationsResponse =
            serde_json::from_str(&body).map_err(|e| Error::RequestFailed {
                endpoint: endpoint.clone(),
                status,
                message: format!("malformed locale listing: {}", e),
            })?;

        Ok(parsed.into_codes())
    }

    /// Raw export body. Bytes that are not valid UTF-8 yield an empty string.
    pub fn download_strings(&self, locale: &str) -> Result<String> {
        let endpoint = self.exports_endpoint();
        let response = self.get(
            &endpoint,
            &[
                ("locale", locale),
                ("format", self.config.format.as_str()),
                ("untranslated", "false"),
            ],
        )?;

        let bytes = response.bytes()?;
        Ok(String::from_utf8(bytes.to_vec()).unwrap_or_else(|e| {
            warn!(locale, error = %e, "export is not valid UTF-8, using empty content");
            String::new()
        }))
    }
}
