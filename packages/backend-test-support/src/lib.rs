//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: logging
//! initialization and error-envelope assertions.

pub mod envelope;
pub mod logging;
