use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use crate::api::error::ApiError;
use crate::api::types::{AnswerResponse, AskRequest};
use crate::config::ApiConfig;
use crate::upload::{SelectedFile, UPLOAD_MIME};

pub const ASK_PATH: &str = "/api/agent/ask";
pub const SUMMARIZE_PATH: &str = "/api/summarize-file";

/// Thin wrapper over `reqwest::Client` bound to one backend base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the agent a question. Returns the `answer` field as sent.
    pub async fn ask(&self, question: &str) -> Result<Option<String>, ApiError> {
        let url = self.url(ASK_PATH);
        tracing::debug!(%url, "sending question");

        let response = self
            .client
            .post(&url)
            .json(&AskRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        Self::read_answer(url, response).await
    }

    /// Upload `file` for summarization. Returns the `answer` field as sent.
    pub async fn summarize_file(&self, file: &SelectedFile) -> Result<Option<String>, ApiError> {
        let url = self.url(SUMMARIZE_PATH);
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|source| ApiError::ReadFile {
                path: file.path().to_path_buf(),
                source,
            })?;
        tracing::debug!(%url, file = file.name(), size = bytes.len(), "uploading file");

        let part = Part::bytes(bytes)
            .file_name(file.name().to_string())
            .mime_str(UPLOAD_MIME)
            .map_err(ApiError::Form)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        Self::read_answer(url, response).await
    }

    async fn read_answer(url: String, response: Response) -> Result<Option<String>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body: AnswerResponse = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })?;
        Ok(body.answer)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
