use crate::domain::{Field, FormInput, ValidationResult};
use crate::render::MessagePanel;
use crate::view::{FormView, TriggerState};
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// A `FormView` that writes feedback as plain text lines.
pub struct TerminalView<W> {
    input: Mutex<FormInput>,
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            input: Mutex::new(FormInput::default()),
            out: Mutex::new(out),
        }
    }

    pub fn set_input(&self, input: FormInput) {
        *self.input.lock().unwrap_or_else(PoisonError::into_inner) = input;
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                tracing::warn!(error.cause_chain = ?e, "Failed to write to terminal");
                return;
            }
        }
        if let Err(e) = out.flush() {
            tracing::warn!(error.cause_chain = ?e, "Failed to flush terminal");
        }
    }
}

impl<W: Write + Send> FormView for TerminalView<W> {
    fn read_input(&self) -> FormInput {
        self.input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn show_field_errors(&self, result: &ValidationResult) {
        let lines: Vec<String> = [Field::Email, Field::ArticleUrl]
            .into_iter()
            .filter_map(|field| {
                result.error_for(field).map(|error| match field {
                    Field::Email => format!("  email: {}", error),
                    Field::ArticleUrl => format!("  article url: {}", error),
                })
            })
            .collect();
        self.write_lines(lines.iter().map(String::as_str));
    }

    // Printed lines cannot be taken back.
    fn clear_field_error(&self, _field: Field) {}

    fn clear_messages(&self) {}

    fn set_trigger(&self, trigger: TriggerState) {
        if !trigger.enabled {
            self.write_lines([trigger.label]);
        }
    }

    fn set_progress(&self, _active: bool) {}

    fn show_panel(&self, panel: &MessagePanel) {
        let heading = format!("{} {}", panel.icon(), panel.heading());
        let body: Vec<String> = panel.lines().into_iter().map(|l| format!("  {}", l)).collect();
        self.write_lines(std::iter::once(heading.as_str()).chain(body.iter().map(String::as_str)));
    }

    fn reset_form(&self) {
        self.set_input(FormInput::default());
    }
}
