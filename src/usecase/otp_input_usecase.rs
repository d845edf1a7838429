use tracing::{debug, trace};

use crate::domain::model::OtpBuffer;
use crate::domain::primitive::{Capacity, CellView, CharPattern};
use crate::interface_adapter::port::HostFieldPort;

type ChangeCallback = Box<dyn FnMut(&str)>;
type TouchedCallback = Box<dyn FnMut()>;

/// Input event policy for one widget instance.
///
/// Translates widget events into model mutations, applying pattern
/// validation and the capacity/paste-sanitization policy, then mirrors the
/// joined value into the host field and decides what the outside world gets
/// to hear: the change callback carries either the full code (complete) or
/// the empty string (incomplete - partial codes are never leaked), the
/// touched callback fires on blur, and the complete callback fires exactly
/// once per incomplete-to-complete transition.
pub struct OtpInputUsecase<H: HostFieldPort> {
    buffer: OtpBuffer,
    pattern: CharPattern,
    host_field: H,
    on_change: ChangeCallback,
    on_touched: TouchedCallback,
    on_complete: ChangeCallback,
    was_complete: bool,
}

impl<H: HostFieldPort> OtpInputUsecase<H> {
    pub fn new(capacity: Capacity, pattern: CharPattern, host_field: H) -> Self {
        Self {
            buffer: OtpBuffer::new(capacity),
            pattern,
            host_field,
            on_change: Box::new(|_| {}),
            on_touched: Box::new(|| {}),
            on_complete: Box::new(|_| {}),
            was_complete: false,
        }
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// One character arrived (keystroke). Rejected silently unless it
    /// matches the validation pattern. Typing over a filled cell overwrites
    /// it and moves forward; typing on an empty cell appends.
    pub fn insert_character(&mut self, ch: char) {
        if self.buffer.is_disabled() {
            return;
        }
        if !self.pattern.matches(ch) {
            trace!(character = %ch, "rejected character not matching pattern");
            // resync the host field with the unchanged model
            let value = self.buffer.joined_value();
            self.host_field.set_value(&value);
            return;
        }

        let selected = self.buffer.selected_cell().unwrap_or(0);
        if self.buffer.character_at(selected).is_some() {
            self.buffer.replace_character(ch, selected);
            self.buffer.focus_next_cell();
        } else {
            self.buffer.push_character(ch);
        }

        let value = self.mirror_value();
        self.notify_change(&value);
    }

    pub fn move_selection_left(&mut self) {
        self.buffer.move_selection_left();
    }

    pub fn move_selection_right(&mut self) {
        self.buffer.move_selection_right();
    }

    /// Backspace/delete policy.
    ///
    /// At the rightmost cell with a full buffer this pops (shrink by one and
    /// refocus the new end). Otherwise the selected cell is removed if it
    /// holds a character; an empty selected cell deletes the previous cell
    /// instead and resnaps the cursor to the end of the filled run.
    pub fn delete(&mut self) {
        if self.buffer.is_disabled() {
            return;
        }
        let previous = self.buffer.joined_value();
        let selected = self.buffer.selected_cell().unwrap_or(0);

        if selected == self.buffer.capacity().last_index() && self.buffer.is_full() {
            self.buffer.pop_character();
        } else {
            let has_char = self.buffer.character_at(selected).is_some();
            let index_to_remove = if has_char {
                selected
            } else {
                selected.saturating_sub(1)
            };
            self.buffer.remove_character_at(index_to_remove);
            if !has_char {
                self.buffer.focus_input_cell();
            }
        }

        let value = self.mirror_value();
        if value != previous {
            self.was_complete = false;
            (self.on_change)("");
        }
    }

    /// Paste policy: strip dashes and whitespace, truncate to capacity,
    /// then accept all-or-nothing against the pattern. An accepted paste
    /// replaces every symbol already entered.
    pub fn paste(&mut self, text: &str) {
        if self.buffer.is_disabled() {
            return;
        }
        if text.is_empty() {
            return;
        }

        let previous = self.buffer.joined_value();
        let sanitized: String = text
            .chars()
            .filter(|ch| *ch != '-' && !ch.is_whitespace())
            .take(self.buffer.capacity().value())
            .collect();

        if sanitized.chars().any(|ch| !self.pattern.matches(ch)) {
            debug!("rejected paste containing characters not matching pattern");
            return;
        }

        self.buffer.clear();
        for ch in sanitized.chars() {
            self.buffer.push_character(ch);
        }

        let value = self.mirror_value();
        if value != previous {
            self.notify_change(&value);
        }
    }

    /// The host field gained focus: snap selection to the input cell.
    pub fn focus(&mut self) {
        self.host_field.set_focused(true);
        self.buffer.focus_input_cell();
    }

    /// The host field lost focus: drop selection and notify the touched
    /// callback. While disabled only the attribute bookkeeping happens.
    pub fn blur(&mut self) {
        self.host_field.set_focused(false);
        if self.buffer.is_disabled() {
            return;
        }
        self.buffer.clear_selection();
        (self.on_touched)();
    }

    // =========================================================================
    // Form binding entry points
    // =========================================================================

    /// Seed the model from an externally supplied string. Accepted only if
    /// the length equals the capacity and every character matches the
    /// pattern; anything else clears to empty. Fires no callbacks (the
    /// external authority already knows the value).
    pub fn write_value(&mut self, code: &str) {
        let expected = self.buffer.capacity().value();
        let accepted = code.chars().count() == expected
            && code.chars().all(|ch| self.pattern.matches(ch));

        if accepted {
            self.buffer.seed(code.chars());
            self.host_field.set_value(code);
            self.was_complete = true;
        } else {
            if !code.is_empty() {
                debug!("rejected external value, clearing to empty");
            }
            self.buffer.seed(std::iter::empty());
            self.host_field.set_value("");
            self.was_complete = false;
        }

        // a focused selection must stay inside the new filled range
        if self.buffer.selected_cell().is_some() {
            self.buffer.focus_input_cell();
        }
    }

    /// Disable authority: mirrors into the model and the host field.
    pub fn set_disabled_state(&mut self, disabled: bool) {
        self.buffer.set_disabled(disabled);
        self.host_field.set_disabled(disabled);
    }

    pub fn register_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Box::new(callback);
    }

    pub fn register_on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.on_touched = Box::new(callback);
    }

    pub fn register_on_complete(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_complete = Box::new(callback);
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn capacity(&self) -> Capacity {
        self.buffer.capacity()
    }

    pub fn joined_value(&self) -> String {
        self.buffer.joined_value()
    }

    pub fn selected_cell(&self) -> Option<usize> {
        self.buffer.selected_cell()
    }

    pub fn is_disabled(&self) -> bool {
        self.buffer.is_disabled()
    }

    pub fn is_complete(&self) -> bool {
        self.buffer.is_full()
    }

    pub fn cells(&self) -> Vec<CellView> {
        self.buffer.cells()
    }

    pub fn cell_view(&self, index: usize) -> CellView {
        self.buffer.cell_view(index)
    }

    pub fn host_field(&self) -> &H {
        &self.host_field
    }

    // =========================================================================
    // Private helpers
    // =========================================================================

    /// Write the joined value into the host field and return it.
    fn mirror_value(&mut self) -> String {
        let value = self.buffer.joined_value();
        self.host_field.set_value(&value);
        value
    }

    /// Change notification policy: the full code when complete, the empty
    /// string otherwise. The complete callback is edge-triggered.
    fn notify_change(&mut self, value: &str) {
        if self.buffer.is_full() {
            (self.on_change)(value);
            if !self.was_complete {
                self.was_complete = true;
                debug!("code complete");
                (self.on_complete)(value);
            }
        } else {
            self.was_complete = false;
            (self.on_change)("");
        }
    }
}
