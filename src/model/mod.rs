mod activity_type;
mod command;
mod draft;
mod error;
mod field;
mod file;
mod form;
mod guard;
mod handler;
mod local_handler;
pub mod network;
mod submission;
mod token;

pub use activity_type::{ActivityType, ItemPolicy, UnknownActivityType};
pub use command::DraftCommand;
pub use draft::{ActivityDraft, FieldValue, ItemDraft, ItemId};
pub use error::{FormError, Requirement};
pub use field::{is_visible, visible_fields, Field, FieldPath};
pub use file::FileHandle;
pub use form::{ActivityForm, SubmissionRequest};
pub use guard::SubmitGuard;
pub use handler::DraftCommandHandler;
pub use local_handler::LocalDraftCommandHandler;
pub use submission::{
    submit_activity, submit_with_timeout, SubmissionReport, SubmissionState, SubmitError,
    SUBMIT_FAILED_MESSAGE,
};
pub use token::BearerToken;
