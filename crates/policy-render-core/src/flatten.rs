//! Flattening of policies into table rows.
//!
//! Every policy contributes a shared prefix (id, name and the five resource
//! cells). Each item then gets its own row: a fresh copy of the prefix followed
//! by the item's cells. Rows never share storage, so items of different kinds
//! in the same policy cannot bleed into each other.

use crate::model::{Policy, PolicyDocument, PolicyItem};

/// Number of cells shared by every row of a policy (id, name, 5 resources).
pub const PREFIX_WIDTH: usize = 7;

/// Cells in an access row: prefix, users, accesses.
pub const ACCESS_ROW_WIDTH: usize = PREFIX_WIDTH + 2;

/// Cells in a row filter or data mask row: access cells plus one expression.
pub const EXPRESSION_ROW_WIDTH: usize = ACCESS_ROW_WIDTH + 1;

/// One output row of display cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyRow(pub Vec<String>);

impl PolicyRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

/// The three row sets of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyTables {
    pub access: Vec<PolicyRow>,
    pub row_filter: Vec<PolicyRow>,
    pub data_mask: Vec<PolicyRow>,
}

impl PolicyTables {
    /// Flatten every policy of a document, in document order.
    pub fn from_document(document: &PolicyDocument) -> Self {
        let mut tables = Self::default();
        for policy in &document.policies {
            tables.push_policy(policy);
        }
        tables
    }

    /// Append the rows contributed by one policy.
    ///
    /// A policy with K plain items, N row filter items and M data mask items
    /// adds K, N and M rows to the respective tables. Policies with no items
    /// add nothing.
    pub fn push_policy(&mut self, policy: &Policy) {
        let prefix = row_prefix(policy);

        self.access.extend(
            policy
                .policy_items
                .iter()
                .map(|item| item_row(&prefix, item, None)),
        );
        self.row_filter.extend(policy.row_filter_policy_items.iter().map(|rf| {
            item_row(&prefix, &rf.item, Some(rf.row_filter_info.filter_expr.as_str()))
        }));
        self.data_mask.extend(policy.data_mask_policy_items.iter().map(|dm| {
            item_row(&prefix, &dm.item, Some(dm.data_mask_info.data_mask_type.as_str()))
        }));

        tracing::debug!(
            policy_id = %policy.id,
            policy = %policy.name,
            access = policy.policy_items.len(),
            row_filter = policy.row_filter_policy_items.len(),
            data_mask = policy.data_mask_policy_items.len(),
            "Flattened policy"
        );
    }
}

fn row_prefix(policy: &Policy) -> Vec<String> {
    let mut prefix = Vec::with_capacity(PREFIX_WIDTH);
    prefix.push(policy.id.to_string());
    prefix.push(policy.name.clone());
    prefix.extend(policy.resources.column_values());
    prefix
}

fn item_row(prefix: &[String], item: &PolicyItem, expression: Option<&str>) -> PolicyRow {
    let mut cells = Vec::with_capacity(EXPRESSION_ROW_WIDTH);
    cells.extend_from_slice(prefix);
    cells.push(item.users_joined());
    cells.push(item.access_summary());
    if let Some(expression) = expression {
        cells.push(expression.to_string());
    }
    PolicyRow(cells)
}
