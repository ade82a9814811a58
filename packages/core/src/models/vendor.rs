//! Vendor Commission Model
//!
//! A [`Vendor`] is a commission-bearing account in the hierarchy. Besides its
//! identity and sales figure it tracks a one-step rank history and a set of
//! labelled commission percentages.
//!
//! # Commission Accounting
//!
//! - **Labelled percentages** (`commission_type`): insertion-ordered, so the
//!   description text is deterministic. Rewriting a label keeps its position.
//! - **Personal commission**: computed on demand from every label that is not
//!   a `level N` override, applied to the vendor's own sales.
//! - **Accumulated commission**: override income from the downline, added by
//!   the commission pass through [`Vendor::add_level_commission`].
//!
//! The reportable total is the sum of both.

use crate::models::commission::{
    level_label, CommissionSchedule, Percentage, LEVEL_UP_LABEL, PERSONAL_LABEL, TRACKED_LEVELS,
};
use crate::models::{Rank, VendorRecord, VendorReport};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Vendor identifier (national id number)
pub type VendorId = u64;

/// Parent id of a vendor without an upline
pub const NO_PARENT: VendorId = 0;

/// Labels of downline overrides, which never count towards personal commission
static LEVEL_LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^level\s\d*$").unwrap());

/// A commission-bearing member of the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    cedula: VendorId,
    parent_id: VendorId,
    name: String,
    previous_rank: Rank,
    current_rank: Rank,
    sales_monthly: f64,
    commission_type: IndexMap<String, Percentage>,
    commission: f64,
}

impl Vendor {
    /// Create a vendor without an upline
    ///
    /// The previous rank starts equal to the current rank, so no level-up
    /// bonus is due until a rank pass promotes the vendor.
    pub fn new(cedula: VendorId, name: impl Into<String>, rank: Rank, sales_monthly: f64) -> Self {
        Self::with_parent(cedula, name, rank, sales_monthly, NO_PARENT)
    }

    /// Create a vendor that declares `parent_id` as its upline
    pub fn with_parent(
        cedula: VendorId,
        name: impl Into<String>,
        rank: Rank,
        sales_monthly: f64,
        parent_id: VendorId,
    ) -> Self {
        Self {
            cedula,
            parent_id,
            name: name.into(),
            previous_rank: rank,
            current_rank: rank,
            sales_monthly,
            commission_type: IndexMap::new(),
            commission: 0.0,
        }
    }

    pub fn cedula(&self) -> VendorId {
        self.cedula
    }

    pub fn parent_id(&self) -> VendorId {
        self.parent_id
    }

    pub fn set_parent_id(&mut self, parent_id: VendorId) {
        self.parent_id = parent_id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn previous_rank(&self) -> Rank {
        self.previous_rank
    }

    pub fn current_rank(&self) -> Rank {
        self.current_rank
    }

    /// Replace the current rank, remembering the old one as previous
    pub fn set_current_rank(&mut self, rank: Rank) {
        self.previous_rank = self.current_rank;
        self.current_rank = rank;
    }

    pub fn sales_monthly(&self) -> f64 {
        self.sales_monthly
    }

    pub fn set_sales_monthly(&mut self, sales_monthly: f64) {
        self.sales_monthly = sales_monthly;
    }

    /// Whether the last rank change was a promotion
    pub fn leveled_up(&self) -> bool {
        self.current_rank > self.previous_rank
    }

    /// Total reportable commission: accumulated downline income plus
    /// personal commission
    pub fn commission(&self) -> f64 {
        self.commission + self.personal_commission()
    }

    /// Override income accumulated from the downline
    pub fn accumulated_commission(&self) -> f64 {
        self.commission
    }

    /// Commission earned on the vendor's own sales
    ///
    /// Sums every positive, non-`level N` percentage applied to the monthly
    /// sales.
    pub fn personal_commission(&self) -> f64 {
        self.commission_type
            .iter()
            .filter(|(label, percentage)| {
                percentage.is_positive() && !LEVEL_LABEL_PATTERN.is_match(label)
            })
            .map(|(_, percentage)| percentage.apply(self.sales_monthly))
            .fold(0.0, |total, amount| total + amount)
    }

    /// Percentage recorded under a label, if any
    pub fn commission_type(&self, label: &str) -> Option<Percentage> {
        self.commission_type.get(label).copied()
    }

    /// Fraction recorded under a label, `0.0` when the label was never set
    pub fn commission_rate(&self, label: &str) -> f64 {
        self.commission_type(label)
            .map_or(0.0, Percentage::as_fraction)
    }

    /// Record a percentage under a label, overwriting any previous value
    pub fn set_commission_type(&mut self, label: impl Into<String>, percentage: Percentage) {
        self.commission_type.insert(label.into(), percentage);
    }

    /// Labelled percentages in assignment order
    pub fn commission_types(&self) -> impl Iterator<Item = (&str, Percentage)> {
        self.commission_type
            .iter()
            .map(|(label, percentage)| (label.as_str(), *percentage))
    }

    /// Add downline override income
    ///
    /// This is an accumulator: call it once per node per commission pass.
    pub fn add_level_commission(&mut self, value: f64) {
        self.commission += value;
    }

    /// Human readable breakdown, e.g. `"20% personal + 1% level 1"`
    ///
    /// Lists every positive percentage in assignment order.
    pub fn commission_description(&self) -> String {
        self.commission_type
            .iter()
            .filter(|(_, percentage)| percentage.is_positive())
            .map(|(label, percentage)| format!("{} {}", percentage, label))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Set the personal percentage for the current rank
    pub fn assign_personal_commission(&mut self, schedule: &CommissionSchedule) {
        let percentage = schedule.personal_rate(self.current_rank);
        self.set_commission_type(PERSONAL_LABEL, percentage);
    }

    /// Set the level-up bonus when the last rank change was a promotion
    ///
    /// Otherwise any bonus left over from an earlier pass is removed.
    pub fn assign_level_up_commission(&mut self, schedule: &CommissionSchedule) {
        if !self.leveled_up() {
            self.commission_type.shift_remove(LEVEL_UP_LABEL);
            return;
        }

        let percentage = schedule.level_up_rate(self.current_rank);
        self.set_commission_type(LEVEL_UP_LABEL, percentage);
    }

    /// Set the override percentages for levels 1 through `max_level`
    ///
    /// Levels beyond [`TRACKED_LEVELS`] are never assigned.
    pub fn assign_level_commission(&mut self, schedule: &CommissionSchedule, max_level: usize) {
        for level in 1..=max_level.min(TRACKED_LEVELS) {
            if let Some(percentage) = schedule.level_rate(level) {
                self.set_commission_type(level_label(level), percentage);
            }
        }
    }

    /// Build the export record for this vendor
    pub fn to_report(&self) -> VendorReport {
        VendorReport {
            name: self.name.clone(),
            previous_rank: self.previous_rank,
            current_rank: self.current_rank,
            commission: self.commission(),
            commission_description: self.commission_description(),
        }
    }
}

impl From<VendorRecord> for Vendor {
    fn from(record: VendorRecord) -> Self {
        Self::with_parent(
            record.cedula,
            record.name,
            record.rank,
            record.sales_monthly,
            record.parent_id,
        )
    }
}

impl From<&VendorRecord> for Vendor {
    fn from(record: &VendorRecord) -> Self {
        Self::from(record.clone())
    }
}
