//! Filter/order/limit builder for the relational API.
//!
//! Renders the backend's query-string dialect (`column=op.value`):
//! `eq`, `neq`, `like`, `ilike`, `ov` (array overlap), `lte`, `gte`, `is.null`,
//! `not.is.null`, a single combined `order` pair, and `limit`/`offset` for
//! pagination. Pattern wildcards are `*`.

use std::fmt;

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read or filter against one table or view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Vec<(String, Direction)>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl Query {
    /// Start a query against `table`.
    #[must_use]
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Table or view name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    #[must_use]
    pub fn eq(self, column: &str, value: &str) -> Self {
        self.filter(column, format!("eq.{value}"))
    }

    #[must_use]
    pub fn neq(self, column: &str, value: &str) -> Self {
        self.filter(column, format!("neq.{value}"))
    }

    /// Case-sensitive pattern match; `*` is the wildcard.
    #[must_use]
    pub fn like(self, column: &str, pattern: &str) -> Self {
        self.filter(column, format!("like.{pattern}"))
    }

    /// Case-insensitive pattern match; `*` is the wildcard.
    #[must_use]
    pub fn ilike(self, column: &str, pattern: &str) -> Self {
        self.filter(column, format!("ilike.{pattern}"))
    }

    /// Array column shares at least one element with `values`.
    #[must_use]
    pub fn overlaps(self, column: &str, values: &[String]) -> Self {
        self.filter(column, format!("ov.{}", array_literal(values)))
    }

    #[must_use]
    pub fn lte(self, column: &str, value: &str) -> Self {
        self.filter(column, format!("lte.{value}"))
    }

    #[must_use]
    pub fn gte(self, column: &str, value: &str) -> Self {
        self.filter(column, format!("gte.{value}"))
    }

    #[must_use]
    pub fn is_null(self, column: &str) -> Self {
        self.filter(column, String::from("is.null"))
    }

    #[must_use]
    pub fn not_null(self, column: &str) -> Self {
        self.filter(column, String::from("not.is.null"))
    }

    /// Append an ordering column. Repeated calls sort by each in turn.
    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order.push((column.to_string(), direction));
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Inclusive row range, rendered as `offset`/`limit`.
    #[must_use]
    pub const fn range(mut self, from: u32, to: u32) -> Self {
        self.offset = Some(from);
        self.limit = Some(to.saturating_sub(from).saturating_add(1));
        self
    }

    fn filter(mut self, column: &str, expr: String) -> Self {
        self.filters.push((column.to_string(), expr));
        self
    }

    /// Query-string pairs in render order: `select`, filters, `order`,
    /// `limit`, `offset`.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 4);
        if let Some(select) = &self.select {
            pairs.push((String::from("select"), select.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, direction)| format!("{column}.{direction}"))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push((String::from("order"), order));
        }
        if let Some(limit) = self.limit {
            pairs.push((String::from("limit"), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push((String::from("offset"), offset.to_string()));
        }
        pairs
    }

    /// Percent-encoded query string (without the leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Render a text array literal, quoting elements with reserved characters.
fn array_literal(values: &[String]) -> String {
    let items = values
        .iter()
        .map(|value| {
            if value
                .chars()
                .any(|c| matches!(c, ',' | '{' | '}' | '"' | '\\' | ' ' | '(' | ')'))
            {
                format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            } else {
                value.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{items}}}")
}
