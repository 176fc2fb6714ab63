#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod state;

// Re-export only what current tests actually import
pub use app_builder::create_test_app;
pub use state::{test_state, test_state_with_deferred_keys, test_state_without_db};
