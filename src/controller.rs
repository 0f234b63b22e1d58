use crate::domain::{Field, NewSubmission, SubmissionOutcome, ValidationResult};
use crate::render::render;
use crate::submit_client::SubmitClient;
use crate::view::{FormView, TriggerState};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl FormState {
    pub fn accepts_trigger(self) -> bool {
        !matches!(self, FormState::Validating | FormState::Submitting)
    }
}

/// What a single trigger of the form led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// A submission was already running.
    Ignored,
    Invalid(ValidationResult),
    Completed(SubmissionOutcome),
}

pub struct SubmissionController<V> {
    client: SubmitClient,
    view: V,
    warmup_delay: Duration,
    state: Mutex<FormState>,
}

impl<V: FormView> SubmissionController<V> {
    pub fn new(client: SubmitClient, view: V, warmup_delay: Duration) -> Self {
        view.set_trigger(TriggerState::READY);
        view.set_progress(false);
        Self {
            client,
            view,
            warmup_delay,
            state: Mutex::new(FormState::Idle),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> FormState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: FormState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Moves to `Validating` unless a submission is already underway.
    fn try_begin(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.accepts_trigger() {
            *state = FormState::Validating;
            true
        } else {
            false
        }
    }

    /// Typing into a field drops the stale error shown under it.
    pub fn on_field_input(&self, field: Field) {
        self.view.clear_field_error(field);
    }

    #[tracing::instrument(name = "Handling form submission", skip(self))]
    pub async fn handle_submit(&self) -> SubmitReport {
        if !self.try_begin() {
            tracing::debug!("Submission already in flight, ignoring trigger");
            return SubmitReport::Ignored;
        }

        let input = self.view.read_input();
        self.view.clear_messages();
        let submission = match NewSubmission::parse(&input) {
            Ok(submission) => submission,
            Err(result) => {
                tracing::info!(
                    email_error = ?result.email_error,
                    url_error = ?result.url_error,
                    "Form input rejected"
                );
                self.view.show_field_errors(&result);
                self.set_state(FormState::Idle);
                return SubmitReport::Invalid(result);
            }
        };

        let busy = BusyGuard::engage(self);
        tokio::time::sleep(self.warmup_delay).await;

        let outcome = SubmissionOutcome::from(self.client.submit(&submission).await);
        self.view.set_progress(false);
        self.view.show_panel(&render(&outcome));
        if outcome.is_success() {
            self.view.reset_form();
            busy.finish(FormState::Succeeded);
        } else {
            busy.finish(FormState::Failed);
        }

        tracing::info!(outcome = ?outcome, "Submission finished");
        SubmitReport::Completed(outcome)
    }
}

/// Holds the form in `Submitting`. Dropping it restores the trigger, even
/// when the submitting future is dropped before completing.
struct BusyGuard<'a, V: FormView> {
    controller: &'a SubmissionController<V>,
    end_state: FormState,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    fn engage(controller: &'a SubmissionController<V>) -> Self {
        controller.set_state(FormState::Submitting);
        controller.view.set_trigger(TriggerState::BUSY);
        controller.view.set_progress(true);
        Self {
            controller,
            end_state: FormState::Idle,
        }
    }

    fn finish(mut self, end_state: FormState) {
        self.end_state = end_state;
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        if self.end_state == FormState::Idle {
            self.controller.view.set_progress(false);
        }
        self.controller.view.set_trigger(TriggerState::READY);
        self.controller.set_state(self.end_state);
    }
}
