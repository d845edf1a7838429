use std::sync::atomic::{AtomicU32, Ordering};

use crate::domain::primitive::{Capacity, CharPattern, InputModeHint};
use crate::infrastructure::host::{HiddenTextField, HostAttributes};
use crate::interface_adapter::controller::otp_controller::OtpController;
use crate::interface_adapter::port::HostFieldPort;
use crate::shared::error::OtpError;
use crate::usecase::otp_input_usecase::OtpInputUsecase;

static NEXT_WIDGET_ID: AtomicU32 = AtomicU32::new(1);

fn next_widget_id() -> String {
    format!("otp-input-{}", NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
}

/// Wires a widget instance together: usecase, host-field adapter, controller.
///
/// `disabled` is the standalone disable authority. Combining it with
/// `managed_by_form` is a setup error reported by `build` - the two
/// authorities would otherwise race over the widget's disabled state, so
/// form-managed widgets must be disabled through `set_disabled_state`.
pub struct OtpInputBuilder {
    capacity: usize,
    pattern: CharPattern,
    inputmode: InputModeHint,
    aria_label: Option<String>,
    id: Option<String>,
    disabled: Option<bool>,
    managed_by_form: bool,
}

impl OtpInputBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pattern: CharPattern::digits(),
            inputmode: InputModeHint::default(),
            aria_label: None,
            id: None,
            disabled: None,
            managed_by_form: false,
        }
    }

    pub fn pattern(mut self, pattern: CharPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn inputmode(mut self, inputmode: InputModeHint) -> Self {
        self.inputmode = inputmode;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Standalone disable authority (widgets without a form binding).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Declare that a form binding owns this widget's value and disabled
    /// state (`write_value` / `set_disabled_state`).
    pub fn managed_by_form(mut self) -> Self {
        self.managed_by_form = true;
        self
    }

    /// Build with the default in-memory host field.
    pub fn build(mut self) -> Result<OtpController<HiddenTextField>, OtpError> {
        let attributes = HostAttributes {
            id: self.id.take().unwrap_or_else(next_widget_id),
            inputmode: self.inputmode,
            aria_label: self.aria_label.take(),
        };
        self.build_with_host(HiddenTextField::new(attributes))
    }

    /// Build with a caller-supplied host-field adapter.
    pub fn build_with_host<H: HostFieldPort>(
        self,
        host_field: H,
    ) -> Result<OtpController<H>, OtpError> {
        if self.managed_by_form && self.disabled.is_some() {
            return Err(OtpError::DisabledAuthorityConflict);
        }
        let capacity = Capacity::new(self.capacity)?;

        let mut usecase = OtpInputUsecase::new(capacity, self.pattern, host_field);
        if let Some(disabled) = self.disabled {
            usecase.set_disabled_state(disabled);
        }
        Ok(OtpController::new(usecase))
    }
}
