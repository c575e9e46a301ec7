//! Form submission
//!
//! `Idle -> Validating -> Idle` (errors) or
//! `Idle -> Validating -> Persisting -> Idle` (saved). The store is only
//! touched once every field has passed validation.

use crate::error::StoreError;
use crate::persistence::FeedbackStore;
use crate::platform::{self, StorageBackend};
use crate::record::FeedbackRecord;
use crate::sanitize::sanitize;
use crate::validate::{EmailRule, FieldError, validate};

/// Raw (untrimmed, unsanitized) form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FeedbackForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Where the handler is in processing a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Persisting,
}

/// Result of one submit
#[derive(Debug)]
pub enum SubmitOutcome {
    /// One or more fields failed; nothing was stored
    Invalid(Vec<FieldError>),
    /// Record was appended to the store
    Saved(FeedbackRecord),
    /// Input was valid but the write failed
    NotSaved {
        record: FeedbackRecord,
        error: StoreError,
    },
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }

    /// Field errors to annotate (empty unless `Invalid`)
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SubmitOutcome::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

/// Validates, sanitizes, timestamps, and stores submitted feedback
pub struct SubmissionHandler<S: StorageBackend> {
    store: FeedbackStore<S>,
    email_rule: EmailRule,
    clock: fn() -> String,
    state: SubmissionState,
}

impl<S: StorageBackend> SubmissionHandler<S> {
    pub fn new(store: FeedbackStore<S>, email_rule: EmailRule) -> Self {
        Self {
            store,
            email_rule,
            clock: platform::timestamp,
            state: SubmissionState::Idle,
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &FeedbackStore<S> {
        &self.store
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    fn transition(&mut self, next: SubmissionState) {
        log::debug!("Submission {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Handle one form submit
    pub fn submit(&mut self, form: &FeedbackForm) -> SubmitOutcome {
        self.transition(SubmissionState::Validating);

        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();

        let errors = validate(name, email, message, self.email_rule);
        if !errors.is_empty() {
            log::info!("Feedback rejected ({} invalid fields)", errors.len());
            self.transition(SubmissionState::Idle);
            return SubmitOutcome::Invalid(errors);
        }

        self.transition(SubmissionState::Persisting);
        let record = FeedbackRecord::new(
            sanitize(name),
            sanitize(email),
            sanitize(message),
            (self.clock)(),
        );

        let outcome = match self.store.append(record.clone()) {
            Ok(()) => SubmitOutcome::Saved(record),
            Err(error) => {
                log::error!("Failed to save feedback: {}", error);
                SubmitOutcome::NotSaved { record, error }
            }
        };
        self.transition(SubmissionState::Idle);
        outcome
    }
}
