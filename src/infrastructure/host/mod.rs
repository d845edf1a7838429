pub mod hidden_text_field;

pub use hidden_text_field::{HiddenTextField, HostAttributes};
