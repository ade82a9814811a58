//! Downline Core
//!
//! Rank progression and multi-level commission payouts for a sales
//! hierarchy of vendors.
//!
//! # Architecture
//!
//! - **Arena tree**: vendors live in a single arena indexed by vendor id, so
//!   out-of-order input resolves parents in O(1)
//! - **Iterative traversals**: no recursion, depth bounded by configuration
//! - **Rate tables as data**: personal, level-up and override percentages
//!   come from a [`CommissionSchedule`](models::CommissionSchedule)
//! - **Pluggable ranking**: the rank pass delegates to a
//!   [`RankPolicy`](policy::RankPolicy)
//!
//! # Modules
//!
//! - [`models`] - Rank, Vendor, rate tables, input and output records
//! - [`tree`] - Hierarchy construction, queries and assignment passes
//! - [`policy`] - Rank qualification policies
//! - [`config`] - Batch configuration
//!
//! # Example
//!
//! ```rust
//! use downline_core::{parse_records, Tree};
//!
//! let input = "2\tMateo\tBronce\t250000\t1\n1\tLucia\tPlata\t450000\t0\n";
//! let parsed = parse_records(input);
//!
//! let mut tree = Tree::new();
//! let report = tree.insert_nodes_from_list(parsed.records, 0).unwrap();
//! assert_eq!(report.inserted, 2);
//!
//! tree.process().unwrap();
//! let reports = tree.reports();
//! assert_eq!(reports[0].name, "Lucia");
//! ```

pub mod config;
pub mod models;
pub mod policy;
pub mod tree;

// Re-export commonly used types
pub use config::{HierarchyConfig, UnresolvedRecordPolicy};
pub use models::*;
pub use policy::{RankDecisionTable, RankPolicy};
pub use tree::{BulkInsertReport, DownlineSummary, HierarchyError, NodeId, Tree, TreeNode};
