use super::{ActivityPayload, ApiError, CreatedActivity, ItemUpload};
use crate::model::{BearerToken, FileHandle};
use async_trait::async_trait;
use serde_json::Value;

/// The two backend calls a submission needs.
#[async_trait(?Send)]
pub trait ActivityApi {
    type File: FileHandle;

    async fn create_activity(
        &self,
        payload: &ActivityPayload,
        token: Option<&BearerToken>,
    ) -> Result<CreatedActivity, ApiError>;

    async fn create_item(
        &self,
        upload: &ItemUpload<Self::File>,
        token: Option<&BearerToken>,
    ) -> Result<Value, ApiError>;
}
