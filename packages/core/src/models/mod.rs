//! Data Models
//!
//! This module contains the value types the hierarchy works with:
//!
//! - `Rank` - Ordered vendor tiers
//! - `Vendor` - Commission-bearing account with rank history
//! - `Percentage` / `CommissionSchedule` - Fixed rate tables
//! - `VendorRecord` / `VendorReport` - Loader input and exporter output

mod commission;
mod rank;
mod record;
mod vendor;

#[cfg(test)]
mod vendor_test;

pub use commission::{
    level_label, CommissionSchedule, Percentage, RankTable, LEVEL_UP_LABEL, PERSONAL_LABEL,
    TRACKED_LEVELS,
};
pub use rank::Rank;
pub use record::{parse_records, ParsedRecords, RecordError, VendorRecord, VendorReport};
pub use vendor::{Vendor, VendorId, NO_PARENT};
