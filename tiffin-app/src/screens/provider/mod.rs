//! Provider tabs

mod home;
mod menu;
mod orders;

pub use home::ProviderHome;
pub use menu::{MenuEditor, ProviderMenuScreen};
pub use orders::ProviderOrdersScreen;
