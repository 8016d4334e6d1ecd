//! Units attached to calculator outputs for display.

use serde::{Deserialize, Serialize};

/// What a computed number represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A money amount.
    Currency,
    /// A percentage (already multiplied by 100).
    Percent,
}
