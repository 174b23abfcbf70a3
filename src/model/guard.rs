use super::{ActivityDraft, BearerToken, Requirement};

/// Client-side completeness check gating the submit button.
///
/// The backend stays the source of truth for real validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitGuard {
    pub require_token: bool,
}

impl SubmitGuard {
    pub fn new(require_token: bool) -> Self {
        Self { require_token }
    }

    pub fn missing<F>(
        &self,
        draft: &ActivityDraft<F>,
        token: Option<&BearerToken>,
    ) -> Vec<Requirement> {
        let mut missing = Vec::new();
        if draft.activity_type.is_none() {
            missing.push(Requirement::Type);
        }
        if draft.description.trim().is_empty() {
            missing.push(Requirement::Description);
        }
        if draft.challenge.is_none() {
            missing.push(Requirement::Challenge);
        }
        if self.require_token && token.is_none() {
            missing.push(Requirement::Token);
        }
        missing
    }

    pub fn can_submit<F>(&self, draft: &ActivityDraft<F>, token: Option<&BearerToken>) -> bool {
        self.missing(draft, token).is_empty()
    }
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new(true)
    }
}
