//! Voice Type and Get functions
//!
//! Use [get_voices_list] function to get all voices for a language code.
//! Use [get_voices_list_async] function to get all voices for a language code
//! asynchronously.
//! Both need a Google Cloud API key, see [load_api_key](crate::env_file::load_api_key).

use crate::{
    constants,
    error::{Error, Result},
};

/// Voice get from the Google Cloud Text-to-Speech voices API.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub name: String,
    pub ssml_gender: Option<String>,
    #[serde(default)]
    pub language_codes: Vec<String>,
    pub natural_sample_rate_hertz: Option<u32>,
}

impl Voice {
    /// Gender as reported by the service, or the
    /// [UNKNOWN](constants::UNKNOWN_GENDER) sentinel when absent.
    pub fn gender_label(&self) -> &str {
        self.ssml_gender
            .as_deref()
            .unwrap_or(constants::UNKNOWN_GENDER)
    }
}

#[derive(Debug, serde::Deserialize)]
struct VoicesResponse {
    // The service omits the array entirely for unknown language codes.
    #[serde(default)]
    voices: Vec<Voice>,
}

/// Client for the voices-list endpoint.
///
/// [VoicesClient::new] talks to the real service; the endpoint can be
/// overridden for tests.
#[derive(Debug, Clone)]
pub struct VoicesClient {
    endpoint: String,
}

impl Default for VoicesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VoicesClient {
    pub fn new() -> Self {
        Self {
            endpoint: constants::VOICES_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Get all voices for `language_code` synchronously.
    #[cfg(feature = "blocking")]
    pub fn get_voices_list(&self, api_key: &str, language_code: &str) -> Result<Vec<Voice>> {
        tracing::debug!(language_code, "requesting voices list");
        let response = reqwest::blocking::Client::new()
            .get(&self.endpoint)
            .query(&[("key", api_key), ("languageCode", language_code)])
            .send()?;
        let status = response.status();
        parse_response(status, response.text()?)
    }

    /// Get all voices for `language_code` asynchronously.
    pub async fn get_voices_list_async(
        &self,
        api_key: &str,
        language_code: &str,
    ) -> Result<Vec<Voice>> {
        tracing::debug!(language_code, "requesting voices list");
        let response = reqwest::Client::new()
            .get(&self.endpoint)
            .query(&[("key", api_key), ("languageCode", language_code)])
            .send()
            .await?;
        let status = response.status();
        parse_response(status, response.text().await?)
    }
}

/// Get all voices for `language_code` from the real service.
#[cfg(feature = "blocking")]
pub fn get_voices_list(api_key: &str, language_code: &str) -> Result<Vec<Voice>> {
    VoicesClient::new().get_voices_list(api_key, language_code)
}

/// Get all voices for `language_code` from the real service asynchronously.
pub async fn get_voices_list_async(api_key: &str, language_code: &str) -> Result<Vec<Voice>> {
    VoicesClient::new()
        .get_voices_list_async(api_key, language_code)
        .await
}

fn parse_response(status: reqwest::StatusCode, body: String) -> Result<Vec<Voice>> {
    if status != reqwest::StatusCode::OK {
        return Err(Error::Remote {
            status: status.as_u16(),
            body,
        });
    }
    let response: VoicesResponse = serde_json::from_str(&body)?;
    tracing::debug!(count = response.voices.len(), "voices list received");
    Ok(response.voices)
}
