// Hand-crafted async HTTP client for the SimplyPrint filament inventory
// endpoints.
//
// Paths: {company_id}/filament/GetFilament, {company_id}/filament/type/Get
// Auth: X-API-KEY header

use std::collections::HashMap;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::model::{Filament, FilamentId, Material, MaterialId};
use crate::transport::TransportConfig;

/// Fallback when the vendor envelope reports failure without a message.
const GENERIC_API_ERROR: &str = "SimplyPrint API returned an error.";

const FILAMENTS_ENDPOINT: &str = "filament/GetFilament";
const MATERIALS_ENDPOINT: &str = "filament/type/Get";

// ── Client ──────────────────────────────────────────────────────────

/// Async client for the SimplyPrint filament inventory API.
///
/// Both endpoints are plain JSON GETs under the company id path segment,
/// authenticated by an API key. One attempt per call: retries are the
/// caller's business.
#[derive(Debug)]
pub struct SimplyPrintClient {
    http: reqwest::Client,
    base_url: Url,
    company_id: String,
}

impl SimplyPrintClient {
    // ── Constructors ────────────────────────────────────────────────

    /// Build from an API token and transport config.
    ///
    /// Injects `X-API-KEY` (marked sensitive, so it never shows up in
    /// debug output) and `Accept: application/json` as default headers
    /// on every request.
    pub fn new(
        base_url: &Url,
        api_token: &secrecy::SecretString,
        company_id: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut token_value =
            HeaderValue::from_str(api_token.expose_secret()).map_err(|e| {
                Error::ClientBuild(format!("API token is not a valid header value: {e}"))
            })?;
        token_value.set_sensitive(true);
        headers.insert("X-API-KEY", token_value);

        let http = transport.build_client_with_headers(headers)?;
        Self::from_reqwest(base_url, company_id, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    ///
    /// `base_url` must be an http(s) URL; anything else (`mailto:`,
    /// `data:` and friends) has no path segments to extend and is
    /// rejected with `ClientBuild`.
    pub fn from_reqwest(
        base_url: &Url,
        company_id: impl Into<String>,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::ClientBuild(format!(
                "base URL must be http(s), got: {base_url}"
            )));
        }
        Ok(Self {
            http,
            base_url: base_url.clone(),
            company_id: company_id.into(),
        })
    }

    // ── URL builder ─────────────────────────────────────────────────

    /// Join the company id and endpoint path onto the base URL.
    ///
    /// Stray slashes on any part are stripped, so the result carries
    /// single separators and no trailing slash.
    fn endpoint_url(&self, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            // Construction rejects non-http(s) base URLs, and http(s)
            // URLs always have path segments.
            let mut segments = url
                .path_segments_mut()
                .expect("http(s) URLs have path segments");
            segments.pop_if_empty();
            for part in [self.company_id.as_str(), endpoint] {
                segments.extend(part.split('/').filter(|s| !s.is_empty()));
            }
        }
        url
    }

    // ── Response pipeline ───────────────────────────────────────────

    /// GET an endpoint and run the response through the validation
    /// pipeline: transport, HTTP status, JSON decode, error envelope.
    async fn get(&self, endpoint: &str) -> Result<Value, Error> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {url}");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Unreachable { source })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|source| Error::Unreachable { source })?;

        parse_envelope(body)
    }

    // ── Fetch operations ────────────────────────────────────────────

    /// Fetch every filament spool, keyed by its own `id` field.
    ///
    /// The envelope keys spools by arbitrary strings; those keys are
    /// ignored. Duplicate ids keep the last record seen. One
    /// undecodable entry fails the whole call; partial results are
    /// never returned.
    pub async fn fetch_filaments(&self) -> Result<HashMap<FilamentId, Filament>, Error> {
        let payload = self.get(FILAMENTS_ENDPOINT).await?;

        let entries = payload
            .get("filament")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::MalformedResponse {
                reason: "`filament` field missing or not an object".to_owned(),
            })?;

        let mut filaments = HashMap::with_capacity(entries.len());
        for (key, entry) in entries {
            let filament = Filament::decode(entry).map_err(|e| Error::MalformedResponse {
                reason: format!("filament entry `{key}`: {e}"),
            })?;
            filaments.insert(filament.id, filament);
        }

        Ok(filaments)
    }

    /// Fetch every material definition, keyed by its own `id` field.
    ///
    /// Same rules as `fetch_filaments`, against the `data` array.
    pub async fn fetch_materials(&self) -> Result<HashMap<MaterialId, Material>, Error> {
        let payload = self.get(MATERIALS_ENDPOINT).await?;

        let entries = payload
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::MalformedResponse {
                reason: "`data` field missing or not an array".to_owned(),
            })?;

        let mut materials = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let material = Material::decode(entry).map_err(|e| Error::MalformedResponse {
                reason: format!("material entry {index}: {e}"),
            })?;
            materials.insert(material.id, material);
        }

        Ok(materials)
    }
}

// ── Envelope parsing ────────────────────────────────────────────────

/// Steps three and four of the pipeline: decode the body as JSON, then
/// unwrap the vendor error envelope. SimplyPrint reports application
/// failures inside a 200 response as `{"status": false, "message": …}`;
/// only a boolean `false` counts, and a missing, empty, or non-string
/// message falls back to a generic one.
fn parse_envelope(body: String) -> Result<Value, Error> {
    let payload: Value = serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::InvalidPayload {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })?;

    if payload.get("status").and_then(Value::as_bool) == Some(false) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map_or_else(|| GENERIC_API_ERROR.to_owned(), str::to_owned);
        return Err(Error::Api { message });
    }

    Ok(payload)
}
