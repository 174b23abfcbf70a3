use crate::model::{ActivityDraft, DraftCommand, DraftCommandHandler, FileHandle, FormError};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalDraftCommandHandler;

impl<F> DraftCommandHandler<F> for LocalDraftCommandHandler
where
    F: FileHandle,
{
    fn handle_command(
        &self,
        draft: &ActivityDraft<F>,
        command: DraftCommand<F>,
    ) -> Result<ActivityDraft<F>, FormError> {
        let mut next = draft.clone();
        match command {
            DraftCommand::EditField { path, value } => {
                next.apply_field_edit(path, value)?;
            }
            DraftCommand::ChangeType { activity_type } => {
                next.change_type(activity_type);
            }
            DraftCommand::AddItem => {
                next.add_item();
            }
            DraftCommand::RemoveItem { index } => {
                if next.remove_item(index).is_none() {
                    log::debug!("Ignoring removal of missing item {}", index);
                }
            }
        }
        Ok(next)
    }
}
