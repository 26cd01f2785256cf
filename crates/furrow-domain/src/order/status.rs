//! Order status display labels.
//!
//! This is presentation only. Status transitions happen through store updates
//! and are not validated here.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Colour token used for statuses without a table entry.
pub const FALLBACK_COLOR: &str = "gray";

/// Label and colour token shown for a status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: Cow<'static, str>,
    pub color: &'static str,
}

impl StatusDisplay {
    const fn known(label: &'static str, color: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            color,
        }
    }

    /// Display for a code that is not in any table.
    #[must_use]
    pub fn unknown(code: &str) -> Self {
        Self {
            label: Cow::Owned(humanize_status(code)),
            color: FALLBACK_COLOR,
        }
    }
}

/// Replaces underscores with spaces, e.g. `awaiting_pickup` → `awaiting pickup`.
#[must_use]
pub fn humanize_status(code: &str) -> String {
    code.replace('_', " ")
}

/// Status of an order placed through the current storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    Processing,
    Shipped,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl OrderStatus {
    pub const ALL: [Self; 8] = [
        Self::PendingPayment,
        Self::Processing,
        Self::Shipped,
        Self::OnHold,
        Self::Completed,
        Self::Cancelled,
        Self::Refunded,
        Self::Failed,
    ];

    /// Returns the stored string representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "Pending Payment",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Refunded => "Refunded",
            Self::Failed => "Failed",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::PendingPayment => "yellow",
            Self::Processing => "blue",
            Self::Shipped => "purple",
            Self::OnHold => "orange",
            Self::Completed => "green",
            Self::Cancelled | Self::Failed => "red",
            Self::Refunded => "gray",
        }
    }

    #[must_use]
    pub const fn display(self) -> StatusDisplay {
        StatusDisplay::known(self.label(), self.color())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}

/// Status of an order imported from the previous WooCommerce shop.
///
/// Stored codes may carry WooCommerce's `wc-` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegacyOrderStatus {
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    CheckoutDraft,
}

impl LegacyOrderStatus {
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::Processing,
        Self::OnHold,
        Self::Completed,
        Self::Cancelled,
        Self::Refunded,
        Self::Failed,
        Self::CheckoutDraft,
    ];

    /// Returns the unprefixed string representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
            Self::CheckoutDraft => "checkout-draft",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending Payment",
            Self::Processing => "Processing",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Refunded => "Refunded",
            Self::Failed => "Failed",
            Self::CheckoutDraft => "Draft",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "yellow",
            Self::Processing => "blue",
            Self::OnHold => "orange",
            Self::Completed => "green",
            Self::Cancelled | Self::Failed => "red",
            Self::Refunded | Self::CheckoutDraft => "gray",
        }
    }

    #[must_use]
    pub const fn display(self) -> StatusDisplay {
        StatusDisplay::known(self.label(), self.color())
    }
}

impl fmt::Display for LegacyOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegacyOrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let code = s.strip_prefix("wc-").unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == code)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}

/// Badge for a current-order status code, humanized when unknown.
#[must_use]
pub fn order_status_display(code: &str) -> StatusDisplay {
    code.parse::<OrderStatus>()
        .map_or_else(|_| StatusDisplay::unknown(code), OrderStatus::display)
}

/// Badge for a legacy-order status code, humanized when unknown.
#[must_use]
pub fn legacy_order_status_display(code: &str) -> StatusDisplay {
    code.parse::<LegacyOrderStatus>()
        .map_or_else(|_| StatusDisplay::unknown(code), LegacyOrderStatus::display)
}
