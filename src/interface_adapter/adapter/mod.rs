pub mod otp_input_builder;

pub use otp_input_builder::OtpInputBuilder;
