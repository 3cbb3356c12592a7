//! Grid query types and wire shapes
//!
//! The public types here (`GridQuery`, `Page`, …) are what the rest of the
//! crate programs against. The `Rpc*` shapes at the bottom mirror the remote
//! server's JSON protocol and stay crate-private.

use crate::config::DateRangeFilter;
use crate::types::{JsonValue, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Pages and Queries
// ============================================================================

/// One page of a grid response: the rows it contained plus the total record
/// count the server reported for the whole query.
#[derive(Debug, Clone)]
pub struct Page {
    /// Rows of this page, in server order
    pub rows: Vec<Row>,
    /// Total record count for the query as reported by the server
    pub total: u64,
}

/// The grids this connector knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Affiliates,
    Transactions,
}

impl Entity {
    /// RPC class handling this grid on the server
    pub fn grid_class(self) -> &'static str {
        match self {
            Self::Affiliates => "Pap_Merchants_User_AffiliatesGrid",
            Self::Transactions => "Pap_Merchants_Transaction_TransactionsGrid",
        }
    }

    /// Short name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Affiliates => "affiliates",
            Self::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter operators understood by the grid endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Field falls inside a symbolic date range
    DateRangeIs,
}

impl FilterOperator {
    /// Operator code sent on the wire
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::DateRangeIs => "D=",
        }
    }
}

/// An equality/range filter on a named grid field
#[derive(Debug, Clone)]
pub struct Filter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl Filter {
    /// Filter a date field by a symbolic date range
    pub fn date_range(field: impl Into<String>, range: DateRangeFilter) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::DateRangeIs,
            value: range.wire_code().to_string(),
        }
    }
}

/// Sort direction for a grid query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction code sent on the wire
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Sort key for a grid query
#[derive(Debug, Clone)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    /// Ascending sort on a field
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on a field
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// A complete grid query: entity, column projection, optional filter and sort
#[derive(Debug, Clone)]
pub struct GridQuery {
    pub entity: Entity,
    pub columns: Vec<String>,
    pub filter: Option<Filter>,
    pub sort: Option<Sort>,
}

impl GridQuery {
    /// Query for all columns of an entity, unfiltered and unsorted
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            columns: Vec::new(),
            filter: None,
            sort: None,
        }
    }

    /// Set the column projection
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the filter
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the sort key
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

// ============================================================================
// Wire shapes (crate-private)
// ============================================================================

/// One RPC call as posted to the server endpoint
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub class: &'a str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
    pub params: JsonValue,
}

/// Response of the authentication call
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of a grid page call
#[derive(Debug, Deserialize)]
pub(crate) struct GridResponse {
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub count: u64,
    /// Error the server reported in-band instead of rows
    #[serde(default)]
    pub error: Option<String>,
}
