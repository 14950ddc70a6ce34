pub mod app;
pub mod tracing;

// re-export extras
pub use actix_web_extras as extras;
