pub mod host_field_port;

pub use host_field_port::HostFieldPort;
