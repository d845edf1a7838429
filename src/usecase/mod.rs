pub mod otp_input_usecase;

pub use otp_input_usecase::OtpInputUsecase;
