/// Hidden text field port.
///
/// Defines the boundary between usecase and infrastructure for the raw text
/// field backing the widget. The usecase mirrors the joined buffer value
/// into it and keeps its disabled/focused attributes in sync. Concrete
/// implementations (e.g., HiddenTextField) live in infrastructure.
pub trait HostFieldPort {
    /// Mirror the joined buffer value into the field.
    fn set_value(&mut self, value: &str);

    /// The currently mirrored value.
    fn value(&self) -> &str;

    /// Reflect the widget's disabled state on the field.
    fn set_disabled(&mut self, disabled: bool);

    fn is_disabled(&self) -> bool;

    /// Focus bookkeeping for accessibility attributes; updated even while
    /// the widget is disabled.
    fn set_focused(&mut self, focused: bool);

    fn is_focused(&self) -> bool;
}
