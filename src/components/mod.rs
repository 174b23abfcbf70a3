mod activity_form;
mod form_reducer;
mod item_fields;
mod submission_result;
mod submit_latch;

pub use activity_form::{ActivityFormComp, ActivityFormProps};
pub use form_reducer::FormAction;
pub use item_fields::{ItemFieldsComp, ItemFieldsProps};
pub use submission_result::{SubmissionResultComp, SubmissionResultProps};
pub use submit_latch::SubmitLatch;
