pub mod app_builder;
pub mod factory;

// Re-export only what current tests actually import
pub use app_builder::create_test_app;
pub use factory::{round_json, valid_scores};
