//! Payment status presentation: status → icon, color, badge and label.

use super::PaymentStatus;

/// Icon shown next to the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    XCircle,
}

impl StatusIcon {
    /// Text glyph used by the plain-text renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIcon::CheckCircle => "✔",
            StatusIcon::Clock => "◷",
            StatusIcon::XCircle => "✖",
        }
    }
}

/// Semantic color of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Green,
    Yellow,
    Red,
    Gray,
}

impl StatusTone {
    /// Utility classes for the badge background and text.
    pub fn color_class(&self) -> &'static str {
        match self {
            StatusTone::Green => {
                "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400"
            }
            StatusTone::Yellow => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/30 dark:text-yellow-400"
            }
            StatusTone::Red => "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400",
            StatusTone::Gray => {
                "bg-gray-100 text-gray-800 dark:bg-gray-900/30 dark:text-gray-400"
            }
        }
    }
}

/// Badge visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

/// Display configuration for one payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusConfig {
    pub icon: StatusIcon,
    pub tone: StatusTone,
    pub badge_variant: BadgeVariant,
    pub label: &'static str,
}

impl StatusConfig {
    pub fn color_class(&self) -> &'static str {
        self.tone.color_class()
    }
}

const COMPLETED: StatusConfig = StatusConfig {
    icon: StatusIcon::CheckCircle,
    tone: StatusTone::Green,
    badge_variant: BadgeVariant::Default,
    label: "Completed",
};

const PENDING: StatusConfig = StatusConfig {
    icon: StatusIcon::Clock,
    tone: StatusTone::Yellow,
    badge_variant: BadgeVariant::Secondary,
    label: "Pending",
};

const FAILED: StatusConfig = StatusConfig {
    icon: StatusIcon::XCircle,
    tone: StatusTone::Red,
    badge_variant: BadgeVariant::Destructive,
    label: "Failed",
};

const UNKNOWN: StatusConfig = StatusConfig {
    icon: StatusIcon::Clock,
    tone: StatusTone::Gray,
    badge_variant: BadgeVariant::Outline,
    label: "Unknown",
};

impl PaymentStatus {
    /// Map this status to its display configuration. Total over all values.
    pub fn config(&self) -> StatusConfig {
        match self {
            PaymentStatus::Completed => COMPLETED,
            PaymentStatus::Pending => PENDING,
            PaymentStatus::Failed => FAILED,
            PaymentStatus::Unknown(_) => UNKNOWN,
        }
    }

    /// Class of the thin accent bar at the top of the payment card.
    ///
    /// Anything that is neither completed nor pending gets the red bar,
    /// unknown statuses included.
    pub fn accent_class(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "bg-green-500",
            PaymentStatus::Pending => "bg-yellow-500",
            PaymentStatus::Failed | PaymentStatus::Unknown(_) => "bg-red-500",
        }
    }
}

/// Map a raw status string to its display configuration.
pub fn status_config(raw: &str) -> StatusConfig {
    PaymentStatus::from(raw).config()
}
