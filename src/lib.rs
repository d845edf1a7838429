//! Accessible one-time-code input widget for terminal applications.
//!
//! A fixed-length row of character cells backed by a single hidden text
//! field. The core is headless: a buffer/selection model plus an event
//! policy layer handling keystrokes, arrow navigation, deletion, paste
//! sanitization and an external form-binding contract. Infrastructure
//! adapters translate crossterm events and render the cells with ratatui.
//!
//! ```no_run
//! use otp_input::{InputEvent, OtpInputBuilder};
//!
//! let mut otp = OtpInputBuilder::new(6).build().unwrap();
//! otp.register_on_complete(|code| println!("entered: {code}"));
//! otp.handle(InputEvent::Focus);
//! otp.handle(InputEvent::Insert('1'));
//! ```

pub mod domain;
pub mod usecase;
pub mod interface_adapter;
pub mod infrastructure;
pub mod shared;

pub use domain::model::OtpBuffer;
pub use domain::primitive::{Capacity, CellView, CharPattern, InputModeHint};
pub use infrastructure::host::{HiddenTextField, HostAttributes};
pub use infrastructure::tui::event::translate_event;
pub use infrastructure::tui::widgets::render_cell_row;
pub use interface_adapter::adapter::OtpInputBuilder;
pub use interface_adapter::controller::{InputEvent, OtpController};
pub use interface_adapter::port::HostFieldPort;
pub use shared::error::OtpError;
pub use usecase::OtpInputUsecase;
