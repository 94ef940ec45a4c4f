//! Tiffin App - customer and provider screens over the tiffin backend
//!
//! # Module layout
//!
//! ```text
//! tiffin-app/src/
//! ├── config.rs      # environment configuration
//! ├── logger.rs      # tracing subscriber setup
//! ├── context.rs     # session, theme and settings shared by screens
//! ├── failure.rs     # silent vs alerted failures, per-panel results
//! └── screens/       # one controller per screen
//! ```

pub mod config;
pub mod context;
pub mod failure;
pub mod logger;
pub mod screens;

pub use config::Config;
pub use context::{AppContext, Settings};
pub use failure::{Failure, Loadable, ScreenResult};
pub use logger::{init_logger, init_logger_with_file};
pub use screens::{Landing, Route};

