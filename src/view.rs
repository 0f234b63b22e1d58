use crate::domain::{Field, FormInput, ValidationResult};
use crate::render::MessagePanel;

pub const READY_LABEL: &str = "Analyze Article";
pub const BUSY_LABEL: &str = "Processing...";

/// How the submit trigger looks: clickable or not, its label, and the
/// spinner inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerState {
    pub enabled: bool,
    pub label: &'static str,
    pub loader_visible: bool,
}

impl TriggerState {
    pub const READY: TriggerState = TriggerState {
        enabled: true,
        label: READY_LABEL,
        loader_visible: false,
    };

    pub const BUSY: TriggerState = TriggerState {
        enabled: false,
        label: BUSY_LABEL,
        loader_visible: true,
    };
}

/// The widgets a `SubmissionController` drives.
///
/// Methods take `&self` so the controller can share one view between
/// overlapping triggers; implementations keep their own interior state.
pub trait FormView: Send + Sync {
    fn read_input(&self) -> FormInput;

    fn show_field_errors(&self, result: &ValidationResult);

    fn clear_field_error(&self, field: Field);

    /// Clears both field errors and the message area.
    fn clear_messages(&self);

    fn set_trigger(&self, trigger: TriggerState);

    /// The indeterminate progress bar under the trigger.
    fn set_progress(&self, active: bool);

    fn show_panel(&self, panel: &MessagePanel);

    fn reset_form(&self);
}
