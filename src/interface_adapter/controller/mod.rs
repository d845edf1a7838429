pub mod otp_controller;

pub use otp_controller::{InputEvent, OtpController};
