mod activity_api;
mod error;
#[cfg(feature = "yew")]
mod http_api;
mod payload;

pub use activity_api::ActivityApi;
pub use error::ApiError;
#[cfg(feature = "yew")]
pub use http_api::HttpActivityApi;
pub use payload::{ActivityId, ActivityPayload, CreatedActivity, ItemUpload};
