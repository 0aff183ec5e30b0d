pub mod submitter;

pub use crate::domain::model::{BookSubmission, SubmitOutcome, SubmitResponse};
pub use crate::domain::ports::{BookApi, ConfigProvider, FormSource, PageHost};
pub use crate::utils::error::Result;
