use super::network::ActivityApi;
use super::submission::submit_with_timeout;
use super::{
    ActivityDraft, BearerToken, DraftCommand, DraftCommandHandler, FieldPath, FieldValue,
    FileHandle, FormError, LocalDraftCommandHandler, Requirement, SubmissionReport,
    SubmissionState, SubmitError, SubmitGuard,
};
use crate::config::Config;
use std::time::Duration;

/// Frozen copy of what gets sent when a submission starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest<F> {
    pub draft: ActivityDraft<F>,
    pub token: Option<BearerToken>,
}

/// Owner of the draft, the token and the submission state.
///
/// Edits are only accepted while editing. A finished submission stays on
/// screen until [`ActivityForm::reset`] starts over with a fresh draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm<F> {
    draft: ActivityDraft<F>,
    token_input: String,
    rejection: Option<FormError>,
    state: SubmissionState,
    guard: SubmitGuard,
    handler: LocalDraftCommandHandler,
}

impl<F: FileHandle> ActivityForm<F> {
    pub fn new(guard: SubmitGuard) -> Self {
        Self {
            draft: ActivityDraft::new(),
            token_input: String::new(),
            rejection: None,
            state: SubmissionState::Editing,
            guard,
            handler: LocalDraftCommandHandler,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SubmitGuard::new(config.require_token))
    }

    pub fn draft(&self) -> &ActivityDraft<F> {
        &self.draft
    }

    /// The token text exactly as typed.
    pub fn token_input(&self) -> &str {
        &self.token_input
    }

    pub fn token(&self) -> Option<BearerToken> {
        BearerToken::parse(&self.token_input)
    }

    /// The last edit the draft refused, cleared by the next accepted one.
    pub fn rejection(&self) -> Option<&FormError> {
        self.rejection.as_ref()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn guard(&self) -> SubmitGuard {
        self.guard
    }

    fn ensure_editing(&self, action: &'static str) -> Result<(), FormError> {
        if self.state == SubmissionState::Editing {
            Ok(())
        } else {
            Err(FormError::InvalidTransition {
                action,
                state: self.state.name(),
            })
        }
    }

    pub fn set_token(&mut self, raw: &str) -> Result<(), FormError> {
        self.ensure_editing("change the token")?;
        self.token_input = raw.to_string();
        Ok(())
    }

    pub fn handle_command(&mut self, command: DraftCommand<F>) -> Result<(), FormError> {
        self.ensure_editing("edit the draft")?;
        match self.handler.handle_command(&self.draft, command) {
            Ok(draft) => {
                self.draft = draft;
                self.rejection = None;
                Ok(())
            }
            Err(err) => {
                self.rejection = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Applies an edit addressed by input name, e.g. `items.1.text`.
    pub fn apply_field_edit(&mut self, path: &str, value: FieldValue<F>) -> Result<(), FormError> {
        let path = path.parse::<FieldPath>().inspect_err(|err| {
            self.rejection = Some(err.clone());
        })?;
        self.handle_command(DraftCommand::edit(path, value))
    }

    pub fn missing(&self) -> Vec<Requirement> {
        self.guard.missing(&self.draft, self.token().as_ref())
    }

    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Editing && self.missing().is_empty()
    }

    /// The request [`ActivityForm::begin_submit`] would send, without changing state.
    pub fn submission_request(&self) -> Result<SubmissionRequest<F>, FormError> {
        self.ensure_editing("submit")?;
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(FormError::Incomplete(missing));
        }
        Ok(SubmissionRequest {
            draft: self.draft.submission_snapshot(),
            token: self.token(),
        })
    }

    pub fn begin_submit(&mut self) -> Result<SubmissionRequest<F>, FormError> {
        let request = self.submission_request()?;
        log::info!(
            "Submitting {} activity with {} items",
            request
                .draft
                .activity_type
                .map(|activity_type| activity_type.as_str())
                .unwrap_or_default(),
            request.draft.items.len()
        );
        self.state = SubmissionState::Submitting;
        Ok(request)
    }

    pub fn complete(
        &mut self,
        result: Result<SubmissionReport, SubmitError>,
    ) -> Result<(), FormError> {
        if self.state != SubmissionState::Submitting {
            return Err(FormError::InvalidTransition {
                action: "complete a submission",
                state: self.state.name(),
            });
        }
        match &result {
            Ok(report) => log::info!("Activity {} submitted", report.activity_id),
            Err(error) => log::error!("Submission failed: {}", error),
        }
        self.state = SubmissionState::from(result);
        Ok(())
    }

    /// Back to editing with a fresh draft. The token is kept.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if !self.state.is_terminal() {
            return Err(FormError::InvalidTransition {
                action: "reset",
                state: self.state.name(),
            });
        }
        self.draft = ActivityDraft::new();
        self.rejection = None;
        self.state = SubmissionState::Editing;
        Ok(())
    }

    /// Runs a whole submission against `api` and returns the terminal state.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        timeout: Option<Duration>,
    ) -> Result<&SubmissionState, FormError>
    where
        A: ActivityApi<File = F>,
    {
        let request = self.begin_submit()?;
        let result =
            submit_with_timeout(api, &request.draft, request.token.as_ref(), timeout).await;
        self.complete(result)?;
        Ok(&self.state)
    }
}

impl<F: FileHandle> Default for ActivityForm<F> {
    fn default() -> Self {
        Self::new(SubmitGuard::default())
    }
}
