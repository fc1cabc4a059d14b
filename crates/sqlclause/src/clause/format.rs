use serde::{Deserialize, Serialize};

/// Decoration applied when a [`Clause`](super::Clause) renders its expressions.
///
/// Rendering is `prefix + expressions_prefix + join(expressions, expressions_separator)
/// + expressions_suffix + suffix`. The expression section is left out entirely when a
/// clause has no expressions; the whole clause is left out unless `render_if_empty` is
/// set.
///
/// Empty strings mean "absent". The presets mirror the [`factory`](crate::factory)
/// functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClauseFormat {
    /// Text before everything else.
    pub prefix: String,
    /// Text after everything else.
    pub suffix: String,
    /// Text before the first expression.
    pub expressions_prefix: String,
    /// Text after the last expression.
    pub expressions_suffix: String,
    /// Text between expressions.
    pub expressions_separator: String,
    /// Render `prefix + suffix` even with zero expressions.
    pub render_if_empty: bool,
}

impl ClauseFormat {
    /// Create an empty format (plain concatenation, nothing rendered when empty).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the text before the first expression.
    pub fn with_expressions_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.expressions_prefix = prefix.into();
        self
    }

    /// Set the text after the last expression.
    pub fn with_expressions_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.expressions_suffix = suffix.into();
        self
    }

    /// Set the separator between expressions.
    pub fn with_expressions_separator(mut self, separator: impl Into<String>) -> Self {
        self.expressions_separator = separator.into();
        self
    }

    /// Render `prefix + suffix` even when there are no expressions.
    pub fn with_render_if_empty(mut self, render_if_empty: bool) -> Self {
        self.render_if_empty = render_if_empty;
        self
    }

    // ==================== Presets ====================

    /// `select` column list.
    pub fn select() -> Self {
        Self::column_list("select\n")
    }

    /// `from` with a fixed table expression. Rendered even without expressions.
    pub fn from(table: &str) -> Self {
        Self::new()
            .with_prefix(format!("from\n\t{table}\n"))
            .with_render_if_empty(true)
    }

    /// `where` predicate list joined by `logic`.
    pub fn where_clause(logic: Logic) -> Self {
        Self::predicate_list("where\n", logic)
    }

    /// `having` predicate list joined by `logic`.
    pub fn having(logic: Logic) -> Self {
        Self::predicate_list("having\n", logic)
    }

    /// `group by` column list.
    pub fn group_by() -> Self {
        Self::column_list("group by\n")
    }

    /// `order by` column list.
    pub fn order_by() -> Self {
        Self::column_list("order by\n")
    }

    /// Common table expression named `name`.
    pub fn cte(name: &str) -> Self {
        Self::new()
            .with_prefix(format!(";with {name} as (\n"))
            .with_expressions_prefix("\t")
            .with_expressions_separator("\n\t")
            .with_expressions_suffix("\n")
            .with_suffix(")\n")
    }

    /// `delete from` statement skeleton.
    pub fn delete(table: &str) -> Self {
        Self::new()
            .with_prefix(format!("delete from {table}\n"))
            .with_expressions_separator("\n")
            .with_expressions_suffix("\n")
            .with_render_if_empty(true)
    }

    /// `update ... set` assignment list.
    pub fn update(table: &str) -> Self {
        Self::new()
            .with_prefix(format!("update {table}\n"))
            .with_expressions_prefix("set\n\t")
            .with_expressions_separator(",\n\t")
            .with_expressions_suffix("\n")
    }

    /// `insert into` statement skeleton.
    pub fn insert(table: &str) -> Self {
        Self::new()
            .with_prefix(format!("insert into {table}\n"))
            .with_render_if_empty(true)
    }

    /// Parenthesized insert column list.
    pub fn insert_columns() -> Self {
        Self::parenthesized_list("(\n")
    }

    /// `values (...)` row.
    pub fn values() -> Self {
        Self::parenthesized_list("values\n(\n")
    }

    fn column_list(prefix: &str) -> Self {
        Self::new()
            .with_prefix(prefix)
            .with_expressions_prefix("\t")
            .with_expressions_separator(",\n\t")
            .with_expressions_suffix("\n")
    }

    fn parenthesized_list(prefix: &str) -> Self {
        Self::column_list(prefix).with_suffix(")\n")
    }

    fn predicate_list(prefix: &str, logic: Logic) -> Self {
        Self::new()
            .with_prefix(prefix)
            .with_expressions_prefix("\t(")
            .with_expressions_separator(format!(")\n\t{} (", logic.as_str()))
            .with_expressions_suffix(")\n")
    }
}

/// Boolean operator joining the predicates of a `where`/`having` clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    /// SQL keyword for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl std::fmt::Display for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
