//! Order domain logic
//!
//! - [`status`]: order status machine and its transition table
//! - [`money`]: decimal helpers for monetary arithmetic
//! - [`pricing`]: line and grand totals with composition rules
//! - [`draft`]: editable order being composed against a menu

pub mod draft;
pub mod money;
pub mod pricing;
pub mod status;

pub use draft::OrderDraft;
pub use pricing::{PricedOrder, grand_total, line_total, price_items, price_menu_order};
pub use status::{OrderStatus, TransitionTable};
