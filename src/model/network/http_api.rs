use super::{ActivityApi, ActivityPayload, ApiError, CreatedActivity, ItemUpload};
use crate::config::Config;
use crate::model::BearerToken;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::{File, FormData};

/// Browser implementation of [`ActivityApi`] on top of `fetch`.
///
/// Activities are sent as JSON, items as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpActivityApi {
    activities_url: String,
    items_url: String,
}

impl HttpActivityApi {
    pub fn new(config: &Config) -> Self {
        Self {
            activities_url: config.activities_url(),
            items_url: config.items_url(),
        }
    }

    fn post(url: &str, token: Option<&BearerToken>) -> RequestBuilder {
        let request = Request::post(url);
        match token {
            Some(token) => request.header("Authorization", &token.header_value()),
            None => request,
        }
    }

    pub fn item_form(upload: &ItemUpload<File>) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
        for (name, value) in upload.text_parts() {
            form.append_with_str(name, value)
                .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
        }
        for (name, file) in upload.file_parts() {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(|e| ApiError::Transport(format!("{:?}", e)))?;
        }
        Ok(form)
    }
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Rejected { status, body });
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    type File = File;

    async fn create_activity(
        &self,
        payload: &ActivityPayload,
        token: Option<&BearerToken>,
    ) -> Result<CreatedActivity, ApiError> {
        let request = Self::post(&self.activities_url, token)
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body = read_json(response).await?;
        log::debug!("Activity response: {}", body);
        CreatedActivity::from_json(body)
    }

    async fn create_item(
        &self,
        upload: &ItemUpload<File>,
        token: Option<&BearerToken>,
    ) -> Result<Value, ApiError> {
        let form = Self::item_form(upload)?;
        let request = Self::post(&self.items_url, token)
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(response).await
    }
}
