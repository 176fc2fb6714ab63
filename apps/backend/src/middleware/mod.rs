pub mod access_control;
pub mod cors;
pub mod request_trace;
pub mod structured_logger;

pub use access_control::AccessControlHeaders;
pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, REQUEST_ID_HEADER};
pub use structured_logger::StructuredLogger;
