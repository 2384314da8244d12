use serde::{Deserialize, Serialize};

use stocklens_core::ItemId;

/// Alert category.
///
/// The engine only generates `LowStock` alerts; `Expiry` and `Reorder` rows
/// are owned by the external store and carried here so its rows can be
/// classified and rendered with the same types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    Expiry,
    Reorder,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "low_stock",
            AlertKind::Expiry => "expiry",
            AlertKind::Reorder => "reorder",
        }
    }
}

impl core::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert urgency, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl core::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived alert record.
///
/// Created fresh on every evaluation pass; carries no identity and is never
/// deduplicated here. The external store upserts idempotently by
/// item + kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub item_id: ItemId,
    pub message: String,
    pub is_read: bool,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        severity: AlertSeverity,
        item_id: ItemId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            item_id,
            message: message.into(),
            is_read: false,
        }
    }
}
