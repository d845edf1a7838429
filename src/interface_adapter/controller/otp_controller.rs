use crate::domain::primitive::CellView;
use crate::interface_adapter::port::HostFieldPort;
use crate::usecase::otp_input_usecase::OtpInputUsecase;

/// Widget events (infrastructure-independent).
///
/// Each variant maps to a usecase method. Event sources (e.g. the crossterm
/// translation layer) convert raw input into `InputEvent`s, and
/// `OtpController::handle` forwards them.
pub enum InputEvent {
    /// One character arrived from a keystroke.
    Insert(char),
    ArrowLeft,
    ArrowRight,
    /// Backspace or forward delete.
    Delete,
    /// Raw clipboard text, sanitized and validated by the usecase.
    Paste(String),
    Focus,
    Blur,
}

/// Thin controller that translates `InputEvent`s into usecase calls and
/// carries the form-binding entry points (`write_value`,
/// `set_disabled_state`, the `register_*` hooks).
///
/// Lives in `interface_adapter` so it has no dependency on infrastructure
/// (ratatui, crossterm). Rendering layers read the widget through the
/// accessors; they never mutate it.
pub struct OtpController<H: HostFieldPort> {
    usecase: OtpInputUsecase<H>,
}

impl<H: HostFieldPort> OtpController<H> {
    pub fn new(usecase: OtpInputUsecase<H>) -> Self {
        Self { usecase }
    }

    /// Dispatch one widget event to the underlying usecase.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Insert(ch) => self.usecase.insert_character(ch),
            InputEvent::ArrowLeft => self.usecase.move_selection_left(),
            InputEvent::ArrowRight => self.usecase.move_selection_right(),
            InputEvent::Delete => self.usecase.delete(),
            InputEvent::Paste(text) => self.usecase.paste(&text),
            InputEvent::Focus => self.usecase.focus(),
            InputEvent::Blur => self.usecase.blur(),
        }
    }

    // =========================================================================
    // Form binding
    // =========================================================================

    pub fn write_value(&mut self, code: &str) {
        self.usecase.write_value(code);
    }

    pub fn set_disabled_state(&mut self, disabled: bool) {
        self.usecase.set_disabled_state(disabled);
    }

    pub fn register_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.usecase.register_on_change(callback);
    }

    pub fn register_on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.usecase.register_on_touched(callback);
    }

    pub fn register_on_complete(&mut self, callback: impl FnMut(&str) + 'static) {
        self.usecase.register_on_complete(callback);
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// Read accessor for rendering layers.
    pub fn usecase(&self) -> &OtpInputUsecase<H> {
        &self.usecase
    }

    /// Mutable accessor for operations outside of `handle`, such as
    /// re-registering callbacks after setup.
    pub fn usecase_mut(&mut self) -> &mut OtpInputUsecase<H> {
        &mut self.usecase
    }

    pub fn cells(&self) -> Vec<CellView> {
        self.usecase.cells()
    }

    pub fn value(&self) -> String {
        self.usecase.joined_value()
    }

    pub fn selected_cell(&self) -> Option<usize> {
        self.usecase.selected_cell()
    }

    pub fn is_complete(&self) -> bool {
        self.usecase.is_complete()
    }

    pub fn is_disabled(&self) -> bool {
        self.usecase.is_disabled()
    }
}
