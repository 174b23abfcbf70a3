use crate::model::{ActivityForm, DraftCommand, SubmissionReport, SubmitError};
use std::rc::Rc;
use web_sys::File;
use yew::prelude::*;

pub enum FormAction {
    Command(DraftCommand<File>),
    SetToken(String),
    BeginSubmit,
    Complete(Result<SubmissionReport, SubmitError>),
    Reset,
}

impl Reducible for ActivityForm<File> {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let (result, records_rejection) = match action {
            FormAction::Command(command) => (next.handle_command(command), true),
            FormAction::SetToken(raw) => (next.set_token(&raw), false),
            FormAction::BeginSubmit => (next.begin_submit().map(|_| ()), false),
            FormAction::Complete(result) => (next.complete(result), false),
            FormAction::Reset => (next.reset(), false),
        };
        match result {
            Ok(()) => Rc::new(next),
            Err(err) => {
                log::warn!("Form action rejected: {}", err);
                // A refused edit still re-renders so inputs snap back to the draft.
                if records_rejection {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}
