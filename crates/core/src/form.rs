//! Generic CRUD form lifecycle.
//!
//! [`EntityForm`] drives one form session for any [`FormSchema`]:
//!
//! 1. [`mount`](EntityForm::mount) fetches the record when editing.
//! 2. The caller edits [`values_mut`](EntityForm::values_mut) and may
//!    [`select_file`](EntityForm::select_file) for the image input.
//! 3. [`submit`](EntityForm::submit) validates, encodes the image, and issues
//!    exactly one create or update call.
//!
//! Every failure is reported once through the [`Notifier`] and recorded in
//! [`FormStatus::Error`]; nothing propagates to the caller.

use std::sync::Arc;

use validator::ValidationErrors;

use crate::api::EntityApi;
use crate::image::{self, Preview, SelectedFile};
use crate::notify::{Notice, Notifier, IMAGE_ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::schema::{FormMode, FormSchema};
use crate::types::DbId;

/// Shared API handle for the collection behind schema `S`.
pub type SharedApi<S> = Arc<
    dyn EntityApi<Record = <S as FormSchema>::Record, Payload = <S as FormSchema>::Payload>,
>;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Fetching,
    Submitting,
    /// The last fetch or submit failed. Submission stays enabled.
    Error,
}

/// Result of a call to [`EntityForm::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created,
    Updated(DbId),
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The image or the request failed; the user has been notified.
    Failed,
    /// A network call is still outstanding.
    Busy,
}

pub struct EntityForm<S: FormSchema> {
    api: SharedApi<S>,
    notifier: Arc<dyn Notifier>,
    mode: FormMode,
    status: FormStatus,
    values: S::Values,
    errors: Option<ValidationErrors>,
    preview: Preview,
    selected: Option<SelectedFile>,
    record: Option<S::Record>,
}

impl<S: FormSchema> EntityForm<S> {
    /// Build a form in its default state. `id` selects edit mode.
    pub fn new(api: SharedApi<S>, notifier: Arc<dyn Notifier>, id: Option<DbId>) -> Self {
        Self {
            api,
            notifier,
            mode: FormMode::from_id(id),
            status: FormStatus::Idle,
            values: S::initial_values(),
            errors: None,
            preview: Preview::Placeholder,
            selected: None,
            record: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Busy affordance: a fetch or submit is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FormStatus::Fetching | FormStatus::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn values(&self) -> &S::Values {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut S::Values {
        &mut self.values
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Record loaded by [`mount`](Self::mount), if any.
    pub fn record(&self) -> Option<&S::Record> {
        self.record.as_ref()
    }

    /// Field errors from the last validation.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Load the record being edited. No-op in create mode.
    ///
    /// On failure the values stay at their defaults and one error notice
    /// is emitted.
    pub async fn mount(&mut self) {
        let FormMode::Edit(id) = self.mode else {
            return;
        };

        self.status = FormStatus::Fetching;
        tracing::debug!(entity = S::ENTITY, id, "Fetching record for edit");

        match self.api.get(id).await {
            Ok(record) => {
                self.values = S::values_from_record(&record);
                self.preview = S::stored_image(&record)
                    .filter(|src| !src.is_empty())
                    .map(|src| Preview::Stored(src.to_string()))
                    .unwrap_or_default();
                self.record = Some(record);
                self.status = FormStatus::Idle;
            }
            Err(e) => {
                tracing::warn!(entity = S::ENTITY, id, error = %e, "Failed to fetch record");
                self.status = FormStatus::Error;
                self.notifier.notify(Notice::from_api_error(&e));
            }
        }
    }

    /// Choose a file for the image input.
    ///
    /// The preview only switches to the file when its type is an image.
    pub fn select_file(&mut self, file: SelectedFile) {
        *S::image_value_mut(&mut self.values) = file.name();
        if file.is_image() {
            self.preview = Preview::Local(file.object_url());
        } else {
            tracing::debug!(
                entity = S::ENTITY,
                content_type = ?file.content_type(),
                "Selected file is not an image, preview unchanged"
            );
        }
        self.selected = Some(file);
    }

    /// Drop the current file selection.
    pub fn clear_file(&mut self) {
        S::image_value_mut(&mut self.values).clear();
        self.selected = None;
    }

    /// Check the values against the rule set for the current mode.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        let result = S::validate(&self.values, self.mode);
        self.errors = result.as_ref().err().cloned();
        result
    }

    /// Validate and send the form.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            tracing::debug!(entity = S::ENTITY, status = ?self.status, "Submit ignored while busy");
            return SubmitOutcome::Busy;
        }
        if let Err(errors) = self.validate() {
            return SubmitOutcome::Invalid(errors);
        }

        self.status = FormStatus::Submitting;

        let image = match self.selected.as_ref() {
            Some(file) => match image::encode_data_url(file).await {
                Ok(encoded) => {
                    self.preview = Preview::Stored(encoded.clone());
                    Some(encoded)
                }
                Err(e) => {
                    tracing::warn!(entity = S::ENTITY, error = %e, "Failed to encode image");
                    self.preview = Preview::Placeholder;
                    self.status = FormStatus::Error;
                    self.notifier.notify(Notice::error(IMAGE_ERROR_MESSAGE));
                    return SubmitOutcome::Failed;
                }
            },
            None => None,
        };

        let payload = S::payload(&self.values, image, self.mode);
        let result = match self.mode {
            FormMode::Create => self.api.create(&payload).await,
            FormMode::Edit(id) => self.api.update(id, &payload).await,
        };

        match result {
            Ok(()) => {
                self.status = FormStatus::Idle;
                self.notifier.notify(Notice::success(SUCCESS_MESSAGE));
                match self.mode {
                    FormMode::Create => {
                        tracing::info!(entity = S::ENTITY, "Record created");
                        self.reset();
                        SubmitOutcome::Created
                    }
                    FormMode::Edit(id) => {
                        tracing::info!(entity = S::ENTITY, id, "Record updated");
                        SubmitOutcome::Updated(id)
                    }
                }
            }
            Err(e) => {
                tracing::error!(entity = S::ENTITY, mode = ?self.mode, error = %e, "Submit failed");
                self.status = FormStatus::Error;
                self.notifier.notify(Notice::from_api_error(&e));
                SubmitOutcome::Failed
            }
        }
    }

    /// Back to default values, no selection, placeholder preview.
    pub fn reset(&mut self) {
        self.values = S::initial_values();
        self.errors = None;
        self.selected = None;
        self.preview = Preview::Placeholder;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
