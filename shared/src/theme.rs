//! Color palettes and status presentation
//!
//! The theme is resolved once at the application root and handed to screens.
//! [`Theme::status_style`] is the one place that maps an order status to its
//! label, color and icon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};
use crate::order::OrderStatus;

/// Color used for orders that are ready for pickup, in both modes
pub const READY_BLUE: &str = "#2196F3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub brand: &'static str,
    pub brand2: &'static str,
    pub accent: &'static str,
    pub bg: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub danger: &'static str,
}

pub const LIGHT: Palette = Palette {
    brand: "#FF6F00",
    brand2: "#E9A100",
    accent: "#2B8A4B",
    bg: "#FFF8F0",
    surface: "#FFFFFF",
    text: "#2C2C2C",
    muted: "#DDC9B5",
    danger: "#D32F2F",
};

pub const DARK: Palette = Palette {
    brand: "#FF8A33",
    brand2: "#F2B632",
    accent: "#4CAF6E",
    bg: "#1A1410",
    surface: "#2A211B",
    text: "#F5EDE4",
    muted: "#8C7A6B",
    danger: "#EF5350",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("unknown theme: {other}"),
            )),
        }
    }
}

/// How a status is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl StatusStyle {
    /// Translucent badge fill: the status color at ~12% alpha
    pub fn badge_background(&self) -> String {
        format!("{}20", self.color)
    }
}

/// Resolved theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
}

impl Default for Palette {
    fn default() -> Self {
        LIGHT
    }
}

impl Theme {
    pub fn resolve(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        };
        Self { mode, palette }
    }

    pub fn toggled(&self) -> Self {
        Self::resolve(self.mode.toggled())
    }

    pub fn status_style(&self, status: OrderStatus) -> StatusStyle {
        let p = &self.palette;
        let (color, icon) = match status {
            OrderStatus::Pending => (p.brand2, "time-outline"),
            OrderStatus::Confirmed => (p.accent, "checkmark-circle-outline"),
            OrderStatus::Preparing => (p.brand, "restaurant-outline"),
            OrderStatus::Ready => (READY_BLUE, "bag-check-outline"),
            OrderStatus::Delivered => (p.accent, "checkmark-done-circle-outline"),
            OrderStatus::Cancelled => (p.danger, "close-circle-outline"),
        };
        StatusStyle {
            label: status.label(),
            color,
            icon,
        }
    }

    /// Style for an optional status string from the wire; unknown values fall back to muted
    pub fn status_style_for(&self, raw: Option<&str>) -> StatusStyle {
        match raw {
            None => self.status_style(OrderStatus::Pending),
            Some(s) => s.parse().map(|st| self.status_style(st)).unwrap_or(StatusStyle {
                label: "Unknown",
                color: self.palette.muted,
                icon: "help-circle-outline",
            }),
        }
    }
}
