use super::network::{ActivityApi, ActivityId, ActivityPayload, ApiError, ItemUpload};
use super::{ActivityDraft, BearerToken};
use futures::future::{self, Either};
use futures::pin_mut;
use futures_timer::Delay;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit activity. Please try again.";

/// What the backend returned for a fully created activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReport {
    pub activity_id: ActivityId,
    pub activity: Value,
    pub items: Vec<Value>,
}

impl SubmissionReport {
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.activity.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Failed to create activity: {0}")]
    Activity(#[source] ApiError),
    #[error("Failed to create item {index} ({failed} of the items failed): {source}")]
    Item {
        index: usize,
        failed: usize,
        #[source]
        source: ApiError,
    },
    #[error("Submission timed out after {0:?}")]
    TimedOut(Duration),
}

impl SubmitError {
    /// The text shown to the user. Details only go to the log.
    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILED_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    Success(SubmissionReport),
    Error(String),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Editing => "editing",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success(_) => "showing a successful submission",
            SubmissionState::Error(_) => "showing a failed submission",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Success(_) | SubmissionState::Error(_))
    }
}

impl From<Result<SubmissionReport, SubmitError>> for SubmissionState {
    fn from(result: Result<SubmissionReport, SubmitError>) -> Self {
        match result {
            Ok(report) => SubmissionState::Success(report),
            Err(error) => SubmissionState::Error(error.user_message().to_string()),
        }
    }
}

/// Creates the activity, then all of its items concurrently.
///
/// Item calls only start once the activity id is known. All item calls are
/// awaited; if any of them failed the whole submission fails and the lowest
/// failing index is reported.
pub async fn submit_activity<A>(
    api: &A,
    draft: &ActivityDraft<A::File>,
    token: Option<&BearerToken>,
) -> Result<SubmissionReport, SubmitError>
where
    A: ActivityApi,
{
    let payload = ActivityPayload::from(draft);
    let created = api
        .create_activity(&payload, token)
        .await
        .map_err(SubmitError::Activity)?;
    log::info!(
        "Created activity {}, uploading {} items",
        created.id,
        draft.items.len()
    );

    let uploads: Vec<ItemUpload<A::File>> = draft
        .items
        .iter()
        .map(|item| ItemUpload::new(&created.id, item))
        .collect();
    let results = future::join_all(uploads.iter().map(|upload| api.create_item(upload, token))).await;

    let mut items = Vec::with_capacity(results.len());
    let mut first_failure = None;
    let mut failed = 0;
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(item) => items.push(item),
            Err(error) => {
                log::error!("Item {} of activity {} failed: {}", index, created.id, error);
                failed += 1;
                first_failure.get_or_insert((index, error));
            }
        }
    }

    if let Some((index, source)) = first_failure {
        return Err(SubmitError::Item {
            index,
            failed,
            source,
        });
    }

    Ok(SubmissionReport {
        activity_id: created.id,
        activity: created.body,
        items,
    })
}

/// [`submit_activity`] bounded by an optional deadline.
pub async fn submit_with_timeout<A>(
    api: &A,
    draft: &ActivityDraft<A::File>,
    token: Option<&BearerToken>,
    timeout: Option<Duration>,
) -> Result<SubmissionReport, SubmitError>
where
    A: ActivityApi,
{
    let Some(limit) = timeout else {
        return submit_activity(api, draft, token).await;
    };

    let submission = submit_activity(api, draft, token);
    let deadline = Delay::new(limit);
    pin_mut!(submission, deadline);

    match future::select(submission, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(SubmitError::TimedOut(limit)),
    }
}
