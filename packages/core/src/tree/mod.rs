//! Vendor Hierarchy
//!
//! The [`Tree`] owns every vendor of a batch and exposes:
//!
//! - construction (`insert`, `insert_nodes_from_list`)
//! - lookup (`find`, `get`)
//! - structural and aggregation queries over a subtree
//! - the rank and commission passes
//!
//! A batch is processed in one go: build, assign ranks, assign commissions,
//! then read the reports. The tree is not meant for incremental updates.

mod assignment;
mod error;
mod hierarchy;
mod node;
mod queries;


pub use assignment::RankSummary;
pub use error::HierarchyError;
pub use hierarchy::{BulkInsertReport, DroppedRecord, Tree};
pub use node::{NodeId, TreeNode};
pub use queries::{Descendants, DownlineSummary};
