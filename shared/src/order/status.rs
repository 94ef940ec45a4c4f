//! Order status machine
//!
//! pending → confirmed → preparing → ready → delivered, with delivered and
//! cancelled terminal. Which moves are legal is held in a [`TransitionTable`]
//! so the cancellation policy can be widened without touching callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult, ErrorCode};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Next step of the fulfilment flow, `None` for terminal states
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Only pending orders can be cancelled
    pub fn can_cancel(self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Caption of the provider's button that moves an order out of this state
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Confirm Order"),
            OrderStatus::Confirmed => Some("Start Preparing"),
            OrderStatus::Preparing => Some("Mark Ready"),
            OrderStatus::Ready => Some("Mark Delivered"),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("unknown order status: {s}"))
            })
    }
}

/// Allowed status changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    allowed: BTreeSet<(OrderStatus, OrderStatus)>,
}

impl Default for TransitionTable {
    /// Forward steps of the flow plus cancellation while pending
    fn default() -> Self {
        let mut allowed: BTreeSet<_> = OrderStatus::ALL
            .into_iter()
            .filter_map(|from| from.next().map(|to| (from, to)))
            .collect();
        allowed.insert((OrderStatus::Pending, OrderStatus::Cancelled));
        Self { allowed }
    }
}

impl TransitionTable {
    /// Also allow cancelling from `from` (ignored for terminal states)
    pub fn allow_cancel_from(mut self, from: OrderStatus) -> Self {
        if !from.is_terminal() {
            self.allowed.insert((from, OrderStatus::Cancelled));
        }
        self
    }

    pub fn can_transition(&self, from: OrderStatus, to: OrderStatus) -> bool {
        self.allowed.contains(&(from, to))
    }

    pub fn can_cancel(&self, from: OrderStatus) -> bool {
        self.can_transition(from, OrderStatus::Cancelled)
    }

    /// Statuses reachable in one step from `from`
    pub fn targets(&self, from: OrderStatus) -> Vec<OrderStatus> {
        self.allowed
            .iter()
            .filter(|(f, _)| *f == from)
            .map(|(_, to)| *to)
            .collect()
    }

    /// Validate a change, returning the new status
    pub fn transition(&self, from: OrderStatus, to: OrderStatus) -> AppResult<OrderStatus> {
        if self.can_transition(from, to) {
            return Ok(to);
        }
        let code = if to == OrderStatus::Cancelled {
            ErrorCode::OrderNotCancellable
        } else {
            ErrorCode::InvalidStatusTransition
        };
        Err(AppError::new(code)
            .with_detail("from", from.as_str())
            .with_detail("to", to.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_status() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Confirmed));
        assert_eq!(OrderStatus::Confirmed.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_cancel_only_when_pending() {
        for status in OrderStatus::ALL {
            assert_eq!(status.can_cancel(), status == OrderStatus::Pending, "{status}");
        }
    }

    #[test]
    fn test_default_table_matches_flow() {
        let table = TransitionTable::default();
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let expected = from.next() == Some(to)
                    || (to == OrderStatus::Cancelled && from.can_cancel());
                assert_eq!(table.can_transition(from, to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_transition_errors() {
        let table = TransitionTable::default();
        let err = table
            .transition(OrderStatus::Confirmed, OrderStatus::Cancelled)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotCancellable);

        let err = table
            .transition(OrderStatus::Pending, OrderStatus::Ready)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);

        assert_eq!(
            table.transition(OrderStatus::Ready, OrderStatus::Delivered),
            Ok(OrderStatus::Delivered)
        );
    }

    #[test]
    fn test_widened_cancellation() {
        let table = TransitionTable::default()
            .allow_cancel_from(OrderStatus::Confirmed)
            .allow_cancel_from(OrderStatus::Delivered);
        assert!(table.can_cancel(OrderStatus::Confirmed));
        assert!(!table.can_cancel(OrderStatus::Delivered));
        assert_eq!(
            table.targets(OrderStatus::Confirmed),
            vec![OrderStatus::Preparing, OrderStatus::Cancelled]
        );
    }

    #[test]
    fn test_parse_and_serde() {
        assert_eq!("Ready".parse::<OrderStatus>(), Ok(OrderStatus::Ready));
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(OrderStatus::Preparing.action_label(), Some("Mark Ready"));
        assert_eq!(OrderStatus::Delivered.action_label(), None);
    }
}
