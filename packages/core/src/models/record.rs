//! Input and Output Records
//!
//! - [`VendorRecord`]: one vendor as delivered by a loader, five ordered
//!   fields `id, name, rank, sales, parent id`
//! - [`VendorReport`]: the per-vendor result handed to an exporter
//!
//! [`parse_records`] is a tab-separated loader for the input side. Lines that
//! do not carry exactly five fields, or whose fields do not parse, are skipped
//! and counted; they never reach the tree.

use crate::models::{Rank, VendorId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Number of tab-separated fields in an input line
pub const RECORD_FIELDS: usize = 5;

/// Errors raised while parsing a single input line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Invalid {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },
}

impl RecordError {
    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }
}

/// A vendor as produced by the loader, before it is placed in the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub cedula: VendorId,
    pub name: String,
    pub rank: Rank,
    pub sales_monthly: f64,
    /// `0` when the vendor has no upline
    pub parent_id: VendorId,
}

impl VendorRecord {
    pub fn new(
        cedula: VendorId,
        name: impl Into<String>,
        rank: Rank,
        sales_monthly: f64,
        parent_id: VendorId,
    ) -> Self {
        Self {
            cedula,
            name: name.into(),
            rank,
            sales_monthly,
            parent_id,
        }
    }
}

impl FromStr for VendorRecord {
    type Err = RecordError;

    /// Parse a tab-separated line: `id \t name \t rank \t sales \t parent`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() != RECORD_FIELDS {
            return Err(RecordError::FieldCount {
                expected: RECORD_FIELDS,
                found: fields.len(),
            });
        }

        let cedula = fields[0]
            .trim()
            .parse::<VendorId>()
            .map_err(|_| RecordError::invalid_field("id", fields[0]))?;
        let name = fields[1].trim().to_string();
        let rank = fields[2]
            .parse::<Rank>()
            .map_err(|_| RecordError::invalid_field("rank", fields[2]))?;
        let sales_monthly = fields[3]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|sales| sales.is_finite())
            .ok_or_else(|| RecordError::invalid_field("sales", fields[3]))?;
        let parent_id = fields[4]
            .trim()
            .parse::<VendorId>()
            .map_err(|_| RecordError::invalid_field("parent id", fields[4]))?;

        Ok(Self {
            cedula,
            name,
            rank,
            sales_monthly,
            parent_id,
        })
    }
}

/// Result of loading a batch of lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    /// Records in input order
    pub records: Vec<VendorRecord>,
    /// Number of non-blank lines that were discarded
    pub skipped: usize,
}

/// Parse every line of `input`, skipping blank and malformed lines
pub fn parse_records(input: &str) -> ParsedRecords {
    let mut parsed = ParsedRecords::default();

    for (line_number, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<VendorRecord>() {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                tracing::debug!("Skipping line {}: {}", line_number + 1, e);
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

/// Per-vendor result for export
///
/// Serialized field names follow the established export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorReport {
    pub name: String,

    #[serde(rename = "prevrank")]
    pub previous_rank: Rank,

    #[serde(rename = "currank")]
    pub current_rank: Rank,

    /// Personal plus accumulated downline commission
    #[serde(rename = "comision")]
    pub commission: f64,

    #[serde(rename = "comisiondesc")]
    pub commission_description: String,
}
