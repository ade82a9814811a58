//! Hierarchy Configuration
//!
//! [`HierarchyConfig`] bundles every tunable of a batch run:
//!
//! - `max_depth` - Depth ceiling enforced while building the tree
//! - `unresolved_records` - What bulk insertion does with records it cannot place
//! - `commissions` - Personal, level-up and override percentage tables
//! - `ranks` - Decision table used by the rank pass
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```rust
//! use downline_core::config::{HierarchyConfig, UnresolvedRecordPolicy};
//!
//! let config = HierarchyConfig::from_json_str(r#"{"unresolved_records": "warn"}"#).unwrap();
//! assert_eq!(config.unresolved_records, UnresolvedRecordPolicy::Warn);
//! assert_eq!(config.max_depth, 10_000);
//! ```

use crate::models::CommissionSchedule;
use crate::policy::RankDecisionTable;
use crate::tree::HierarchyError;
use serde::{Deserialize, Serialize};

/// Default depth ceiling of a hierarchy
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Handling of records left over once bulk insertion stops making progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedRecordPolicy {
    /// Drop them silently (they are still listed in the insert report)
    #[default]
    Discard,
    /// Drop them and emit one warning per record
    Warn,
    /// Fail the bulk insertion; records already placed stay in the tree
    Reject,
}

/// Configuration of a hierarchy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    pub max_depth: usize,
    pub unresolved_records: UnresolvedRecordPolicy,
    pub commissions: CommissionSchedule,
    pub ranks: RankDecisionTable,
}

impl HierarchyConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, HierarchyError> {
        serde_json::from_str(json).map_err(|e| HierarchyError::invalid_config(e.to_string()))
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            unresolved_records: UnresolvedRecordPolicy::default(),
            commissions: CommissionSchedule::default(),
            ranks: RankDecisionTable::default(),
        }
    }
}
