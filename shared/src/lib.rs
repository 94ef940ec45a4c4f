//! Shared types for the tiffin workspace
//!
//! Wire models, request/response bodies, error codes and the pure logic the
//! screens rely on: order status flow, pricing, menu filtering, chart
//! geometry, validation and theming. No I/O lives here.

pub mod analytics;
pub mod chart;
pub mod client;
pub mod error;
pub mod menu_filter;
pub mod models;
pub mod order;
pub mod theme;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use order::{OrderDraft, OrderStatus, TransitionTable};
pub use serde::{Deserialize, Serialize};
pub use theme::{Theme, ThemeMode};
