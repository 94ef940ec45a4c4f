//! Customer tabs

mod favorites;
mod home;
mod menu;
mod orders;
mod providers;

pub use favorites::FavoritesScreen;
pub use home::CustomerHome;
pub use menu::MenuScreen;
pub use orders::{OrderRow, OrdersScreen};
pub use providers::{ProviderRow, ProvidersScreen};
