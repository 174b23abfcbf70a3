use super::{ActivityDraft, DraftCommand, FileHandle, FormError};

pub trait DraftCommandHandler<F>
where
    F: FileHandle,
{
    /// Applies `command` and returns the resulting draft. `draft` is left as it was.
    fn handle_command(
        &self,
        draft: &ActivityDraft<F>,
        command: DraftCommand<F>,
    ) -> Result<ActivityDraft<F>, FormError>;
}
