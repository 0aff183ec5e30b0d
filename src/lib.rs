pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{form::FieldMap, host::ConsoleHost, http::HttpBookApi};
pub use crate::config::AppConfig;
pub use crate::core::submitter::{FormFieldIds, FormSubmitter};
pub use crate::domain::model::{BookSubmission, SubmitOutcome};
pub use crate::utils::error::{Result, SubmitError};
