//! Feedback Board - a browser feedback form with a paginated read-back view
//!
//! Core modules:
//! - `sanitize`: Markup escaping for free-text fields
//! - `validate`: Per-field form validation
//! - `persistence`: Append-only feedback list in a storage slot
//! - `submit`: Form submission (validate, sanitize, store)
//! - `pagination`: Page cursor and view model for the board
//! - `platform`: Browser/native storage and time
//! - `ui`: DOM wiring (wasm32 only)

pub mod error;
pub mod pagination;
pub mod persistence;
pub mod platform;
pub mod record;
pub mod sanitize;
pub mod settings;
pub mod submit;
pub mod ui;
pub mod validate;

pub use error::StoreError;
pub use pagination::{PAGE_SIZE, PageDirection, Paginator, RenderedPage};
pub use persistence::FeedbackStore;
pub use record::{FeedbackList, FeedbackRecord};
pub use sanitize::sanitize;
pub use settings::Settings;
pub use submit::{FeedbackForm, SubmissionHandler, SubmitOutcome};
pub use validate::{EmailRule, FeedbackField, FieldError, validate};
