//! Policy export document types.
//!
//! These mirror the JSON produced by a policy export (camelCase keys). Only the
//! fields needed for rendering are modelled; everything else in the export
//! (service name, audit flags, validity schedules, ...) is ignored on parse.
//!
//! # Required keys
//!
//! - `policies` on the document
//! - `id`, `name` and `resources` on every policy
//! - `values` on every resource selector that is present
//! - `rowFilterInfo.filterExpr` on row filter items
//! - `dataMaskInfo.dataMaskType` on data mask items
//!
//! A missing required key fails the whole parse.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::RenderError;

/// Separator used when joining list values into a single cell.
pub const LIST_SEPARATOR: &str = ", ";

/// Access type that subsumes every other access type.
pub const ACCESS_ALL: &str = "all";

/// Top-level policy export.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyDocument {
    pub policies: Vec<Policy>,
}

impl PolicyDocument {
    /// Load a policy document from a JSON file.
    ///
    /// The file is read completely before parsing starts, so the handle is
    /// closed by the time the JSON is decoded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&content)?;

        tracing::info!(
            path = %path.display(),
            policies = document.policies.len(),
            "Loaded policy document"
        );

        Ok(document)
    }

    /// Parse a policy document from JSON content.
    pub fn from_json(content: &str) -> Result<Self, RenderError> {
        serde_json::from_str(content).map_err(RenderError::from)
    }
}

/// A single policy: resource selectors plus up to three kinds of items.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: PolicyId,

    pub name: String,

    pub resources: PolicyResources,

    /// Plain access items.
    #[serde(default)]
    pub policy_items: Vec<PolicyItem>,

    /// Items that restrict visible rows.
    #[serde(default)]
    pub row_filter_policy_items: Vec<RowFilterPolicyItem>,

    /// Items that mask column values.
    #[serde(default)]
    pub data_mask_policy_items: Vec<DataMaskPolicyItem>,
}

/// Policy identifier. Exports normally use integers, but string ids are
/// accepted and shown verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PolicyId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyId::Number(n) => write!(f, "{}", n),
            PolicyId::Text(s) => f.write_str(s),
        }
    }
}

/// Resource selectors of a policy. Each selector is optional; selectors not
/// listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyResources {
    #[serde(default)]
    pub url: Option<ResourceValues>,

    #[serde(default)]
    pub database: Option<ResourceValues>,

    #[serde(default)]
    pub table: Option<ResourceValues>,

    #[serde(default)]
    pub column: Option<ResourceValues>,

    #[serde(default)]
    pub udf: Option<ResourceValues>,
}

impl PolicyResources {
    /// Display cells for url, database, table, column and udf, in that order.
    /// Absent selectors yield an empty string.
    pub fn column_values(&self) -> [String; 5] {
        [
            &self.url,
            &self.database,
            &self.table,
            &self.column,
            &self.udf,
        ]
        .map(|selector| selector.as_ref().map(ResourceValues::joined).unwrap_or_default())
    }
}

/// Values matched by one resource selector.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceValues {
    pub values: Vec<String>,
}

impl ResourceValues {
    pub fn joined(&self) -> String {
        self.values.join(LIST_SEPARATOR)
    }
}

/// Associates users with access types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyItem {
    #[serde(default)]
    pub users: Vec<String>,

    #[serde(default)]
    pub accesses: Vec<PolicyItemAccess>,
}

impl PolicyItem {
    /// Users joined into one cell; no users gives an empty string.
    pub fn users_joined(&self) -> String {
        self.users.join(LIST_SEPARATOR)
    }

    /// Summarize the access types of this item.
    ///
    /// Returns `"all"` if any access has type `all`, otherwise the access types
    /// joined in their original order.
    pub fn access_summary(&self) -> String {
        if self.accesses.iter().any(|a| a.access_type == ACCESS_ALL) {
            return ACCESS_ALL.to_string();
        }

        self.accesses
            .iter()
            .map(|a| a.access_type.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }
}

/// One granted access type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyItemAccess {
    #[serde(rename = "type")]
    pub access_type: String,
}

/// Policy item carrying a row filter expression.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFilterPolicyItem {
    #[serde(flatten)]
    pub item: PolicyItem,

    pub row_filter_info: RowFilterInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFilterInfo {
    pub filter_expr: String,
}

/// Policy item carrying a masking type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMaskPolicyItem {
    #[serde(flatten)]
    pub item: PolicyItem,

    pub data_mask_info: DataMaskInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMaskInfo {
    pub data_mask_type: String,
}
