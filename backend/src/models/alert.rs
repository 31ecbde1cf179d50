//! Alerts emitted by the rule engine
//!
//! `severity` is the only field meant for machine branching. Title, message
//! and action are display strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity
///
/// Variants are declared in display order, so `rank()` sorts high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Sort key: 0 for high, 2 for low
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single financial-health alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Stable key identifying the rule that produced the alert
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            title: title.into(),
            message: message.into(),
            action: action.into(),
        }
    }
}

/// Stable-sort alerts high → medium → low
pub fn sort_by_severity(alerts: &mut [Alert]) {
    // sort_by_key is stable; equal severities keep evaluation order
    alerts.sort_by_key(|alert| alert.severity.rank());
}
