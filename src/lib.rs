#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod model;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::model::network::HttpActivityApi;
    pub use crate::model::network::{ActivityApi, ActivityId, ApiError};
    pub use crate::model::ActivityDraft;
    pub use crate::model::ActivityForm;
    pub use crate::model::ActivityType;
    pub use crate::model::BearerToken;
    pub use crate::model::DraftCommand;
    pub use crate::model::FieldValue;
    pub use crate::model::FileHandle;
    pub use crate::model::FormError;
    pub use crate::model::ItemDraft;
    pub use crate::model::SubmissionReport;
    pub use crate::model::SubmissionState;
    pub use crate::model::SubmitError;
}
