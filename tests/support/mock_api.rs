use activity_form::model::network::{
    ActivityApi, ActivityPayload, ApiError, CreatedActivity, ItemUpload,
};
use activity_form::model::{BearerToken, FileHandle};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;

/// File handle standing in for a browser `File`.
#[derive(Debug, Clone, PartialEq)]
pub struct MockFile(pub String);

impl MockFile {
    pub fn new(name: &str) -> Self {
        MockFile(name.to_string())
    }
}

impl FileHandle for MockFile {
    fn file_name(&self) -> String {
        self.0.clone()
    }
}

/// How the mock backend answers the activity call.
#[derive(Debug, Clone)]
pub enum ActivityBehavior {
    Created(Value),
    Status(u16),
    Unreachable,
}

/// In-memory backend that records every call it receives.
pub struct MockApi {
    activity: ActivityBehavior,
    failing_items: Vec<String>,
    pub activity_calls: RefCell<Vec<(ActivityPayload, Option<String>)>>,
    pub item_calls: RefCell<Vec<(ItemUpload<MockFile>, Option<String>)>>,
}

impl MockApi {
    pub fn new(activity: ActivityBehavior) -> Self {
        Self {
            activity,
            failing_items: Vec::new(),
            activity_calls: RefCell::new(Vec::new()),
            item_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn created(id: &str) -> Self {
        Self::new(ActivityBehavior::Created(json!({
            "id": id,
            "description": "created",
        })))
    }

    /// Item calls whose text matches fail with a transport error.
    pub fn failing_item(mut self, text: &str) -> Self {
        self.failing_items.push(text.to_string());
        self
    }
}

#[async_trait(?Send)]
impl ActivityApi for MockApi {
    type File = MockFile;

    async fn create_activity(
        &self,
        payload: &ActivityPayload,
        token: Option<&BearerToken>,
    ) -> Result<CreatedActivity, ApiError> {
        self.activity_calls
            .borrow_mut()
            .push((payload.clone(), token.map(BearerToken::header_value)));

        match &self.activity {
            ActivityBehavior::Created(body) => CreatedActivity::from_json(body.clone()),
            ActivityBehavior::Status(status) => Err(ApiError::Rejected {
                status: *status,
                body: "{\"detail\": \"invalid\"}".to_string(),
            }),
            ActivityBehavior::Unreachable => {
                Err(ApiError::Transport("Failed to fetch".to_string()))
            }
        }
    }

    async fn create_item(
        &self,
        upload: &ItemUpload<MockFile>,
        token: Option<&BearerToken>,
    ) -> Result<Value, ApiError> {
        self.item_calls
            .borrow_mut()
            .push((upload.clone(), token.map(BearerToken::header_value)));

        if self.failing_items.contains(&upload.text) {
            return Err(ApiError::Transport("connection reset".to_string()));
        }

        let files: Vec<&str> = upload.file_parts().into_iter().map(|(name, _)| name).collect();
        Ok(json!({
            "activity": upload.activity,
            "text": upload.text,
            "text_translation": upload.text_translation,
            "files": files,
        }))
    }
}
