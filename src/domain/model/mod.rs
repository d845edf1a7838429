pub mod otp_buffer;

pub use otp_buffer::OtpBuffer;
