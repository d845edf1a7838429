use crate::domain::primitive::InputModeHint;
use crate::interface_adapter::port::HostFieldPort;

/// Displayed attributes of the hidden text field.
#[derive(Debug, Clone)]
pub struct HostAttributes {
    pub id: String,
    pub inputmode: InputModeHint,
    pub aria_label: Option<String>,
}

/// In-memory stand-in for the raw text field backing the widget.
///
/// Holds the mirrored value plus the attributes a host environment displays.
/// The field always advertises `type="one-time-code"` and
/// `autocomplete="one-time-code"` so platform OTP autofill can target it.
pub struct HiddenTextField {
    value: String,
    attributes: HostAttributes,
    disabled: bool,
    focused: bool,
}

impl HiddenTextField {
    pub const INPUT_TYPE: &'static str = "one-time-code";
    pub const AUTOCOMPLETE: &'static str = "one-time-code";

    pub fn new(attributes: HostAttributes) -> Self {
        Self {
            value: String::new(),
            attributes,
            disabled: false,
            focused: false,
        }
    }

    pub fn attributes(&self) -> &HostAttributes {
        &self.attributes
    }
}

impl HostFieldPort for HiddenTextField {
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
