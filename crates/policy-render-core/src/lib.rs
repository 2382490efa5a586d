//! Policy Render Core
//!
//! Reads a JSON export of access-control policies and flattens it into three
//! row sets (access, row filter, data mask), then prints them as grid tables.
//!
//! The pipeline is linear and holds no state between invocations:
//!
//! ```text
//! PolicyDocument::from_file -> PolicyTables::from_document -> write_report
//! ```

pub mod error;
pub mod flatten;
pub mod model;
pub mod report;

pub use error::RenderError;
pub use flatten::{PolicyRow, PolicyTables};
pub use model::{
    DataMaskInfo, DataMaskPolicyItem, Policy, PolicyDocument, PolicyId, PolicyItem,
    PolicyItemAccess, PolicyResources, ResourceValues, RowFilterInfo, RowFilterPolicyItem,
};
pub use report::write_report;
