//! REST client for the annotator service.
//!
//! Each detector is a `POST /annotators/{detector}` taking a multipart body
//! with an `image` part (PNG) and a `params` part (JSON) and answering with
//! the PNG control image. Segment anything answers
//! `POST /annotators/segment_anything/masks` with its raw mask annotations.
//! Failures are surfaced as-is; nothing here retries.

use std::time::Duration;

use muse_core::processors::segmentation::SegmentAnnotation;
use reqwest::multipart::{Form, Part};

use crate::request::{sam_params, RemoteRequest};

/// HTTP client for one annotator service.
#[derive(Clone)]
pub struct AnnotatorClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the annotator service layer.
#[derive(Debug, thiserror::Error)]
pub enum AnnotatorError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Annotator API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered 2xx with a body we could not use.
    #[error("Invalid annotator response: {0}")]
    Decode(String),
}

impl AnnotatorClient {
    /// Create a client with its own connection pool.
    ///
    /// * `base_url` - e.g. `http://localhost:8189`, no trailing slash needed.
    /// * `timeout` - upper bound for a whole detector call, model load included.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AnnotatorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a detector over a PNG-encoded image and return the PNG result.
    pub async fn annotate(
        &self,
        request: &RemoteRequest,
        png: Vec<u8>,
    ) -> Result<Vec<u8>, AnnotatorError> {
        let url = format!("{}/annotators/{}", self.base_url, request.detector);
        tracing::debug!(detector = request.detector, "Calling annotator");

        let response = self
            .client
            .post(url)
            .multipart(image_form(png, &request.params)?)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(AnnotatorError::Decode(format!(
                "{} returned an empty image",
                request.detector
            )));
        }
        Ok(bytes.to_vec())
    }

    /// Generate segment anything masks for a PNG-encoded image.
    pub async fn segment_masks(
        &self,
        png: Vec<u8>,
    ) -> Result<Vec<SegmentAnnotation>, AnnotatorError> {
        let url = format!("{}/annotators/segment_anything/masks", self.base_url);
        tracing::debug!("Requesting segment anything masks");

        let response = self
            .client
            .post(url)
            .multipart(image_form(png, &sam_params())?)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AnnotatorError::Decode(e.to_string()))
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or an
    /// [`AnnotatorError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AnnotatorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AnnotatorError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

fn image_form(png: Vec<u8>, params: &serde_json::Value) -> Result<Form, AnnotatorError> {
    let image = Part::bytes(png)
        .file_name("image.png")
        .mime_str("image/png")?;
    let params = Part::text(params.to_string()).mime_str("application/json")?;
    Ok(Form::new().part("image", image).part("params", params))
}
