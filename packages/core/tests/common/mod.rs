//! Shared helpers for the integration tests

#![allow(dead_code)]

use anyhow::{Context, Result};
use downline_core::{parse_records, BulkInsertReport, ParsedRecords, Tree, VendorId};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Read and parse a fixture from `tests/fixtures/<name>.txt`
pub fn load_fixture(name: &str) -> Result<ParsedRecords> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures"]
        .iter()
        .collect::<PathBuf>()
        .join(format!("{}.txt", name));

    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;

    Ok(parse_records(&input))
}

/// Build a tree from a fixture with the default configuration
pub fn build_tree(name: &str) -> Result<(Tree, BulkInsertReport)> {
    init_tracing();

    let parsed = load_fixture(name)?;
    let mut tree = Tree::new();
    let report = tree.insert_nodes_from_list(parsed.records, 0)?;

    Ok((tree, report))
}

/// Sum of the sales of every record whose parent chain passes through `ancestor`
///
/// Walks the raw records rather than the tree. Chains that never reach the
/// root sentinel, or that loop, are ignored.
pub fn downline_sales_from_records(parsed: &ParsedRecords, ancestor: VendorId) -> f64 {
    let parents: HashMap<VendorId, VendorId> = parsed
        .records
        .iter()
        .map(|record| (record.cedula, record.parent_id))
        .collect();

    parsed
        .records
        .iter()
        .filter(|record| {
            let mut current = record.parent_id;
            let mut steps = 0;
            let mut passes_ancestor = false;

            while current != 0 && steps <= parents.len() {
                if current == ancestor {
                    passes_ancestor = true;
                }
                match parents.get(&current) {
                    Some(parent) => current = *parent,
                    None => return false,
                }
                steps += 1;
            }

            current == 0 && passes_ancestor
        })
        .map(|record| record.sales_monthly)
        .fold(0.0, |total, sales| total + sales)
}

/// Approximate equality for money amounts
pub fn assert_amount(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}
