//! The clause composition engine.
//!
//! A [`Clause`] collects SQL text fragments ("expressions") and named parameters, and
//! renders them with the decoration held in its [`ClauseFormat`]. Clauses nest by
//! flattening: adding one clause to another appends its *rendered* text as a single
//! expression and merges its parameters. No clause tree is kept.
//!
//! # Example
//! ```
//! use sqlclause::{Clause, ClauseFormat};
//!
//! let mut c = Clause::with_format(
//!     ClauseFormat::new()
//!         .with_prefix("(")
//!         .with_expressions_separator(", ")
//!         .with_suffix(")"),
//! );
//! c.add("a").add("b").add_keyed("c", "c", false);
//! assert_eq!(c.to_sql(), "(a, b, c)");
//! ```

mod format;

pub use format::{ClauseFormat, Logic};

use crate::collection::OrderedHybridCollection;
use crate::error::{ClauseError, ClauseResult};
use crate::param::Param;
use std::fmt;

/// An ordered set of SQL fragments plus the parameters they reference.
#[derive(Debug, Clone, Default)]
pub struct Clause {
    expressions: OrderedHybridCollection<String, String>,
    params: OrderedHybridCollection<String, Param>,
    format: ClauseFormat,
}

impl Clause {
    /// Create an empty, undecorated clause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an undecorated clause holding one sequenced expression.
    pub fn with_expression(text: &str) -> Self {
        let mut clause = Self::new();
        clause.add(text);
        clause
    }

    /// Create an empty clause with the given decoration.
    pub fn with_format(format: ClauseFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    // ==================== Expressions ====================

    /// Append a sequenced expression. Empty text is ignored.
    pub fn add(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.expressions.add_sequenced(text.to_string());
        }
        self
    }

    /// Add an expression under `key`. Empty text is ignored.
    ///
    /// An existing key is overwritten in place when `overwrite` is true and left
    /// untouched otherwise.
    pub fn add_keyed(&mut self, key: &str, text: &str, overwrite: bool) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if !self
            .expressions
            .add_keyed(key.to_string(), text.to_string(), overwrite)
        {
            trace_event!(key, "keyed expression already present, ignored");
        }
        self
    }

    /// Add a keyed expression together with the parameter it references.
    ///
    /// Both are added or neither is: nothing happens when `text` is empty or when `key`
    /// exists and `overwrite` is false.
    pub fn add_keyed_with_param(
        &mut self,
        key: &str,
        text: &str,
        param: Param,
        overwrite: bool,
    ) -> ClauseResult<&mut Self> {
        self.add_keyed_with_params(key, text, [param], overwrite)
    }

    /// Add a keyed expression together with every parameter it references.
    ///
    /// Same atomicity as [`add_keyed_with_param`](Self::add_keyed_with_param). All
    /// parameter names are checked before anything is added.
    pub fn add_keyed_with_params(
        &mut self,
        key: &str,
        text: &str,
        params: impl IntoIterator<Item = Param>,
        overwrite: bool,
    ) -> ClauseResult<&mut Self> {
        if text.is_empty() || (!overwrite && self.expressions.contains_key(key)) {
            return Ok(self);
        }

        let params: Vec<Param> = params.into_iter().collect();
        for param in &params {
            validate_param(param)?;
        }

        self.expressions
            .add_keyed(key.to_string(), text.to_string(), overwrite);
        for param in params {
            self.insert_param(param);
        }
        Ok(self)
    }

    /// Check if an expression was added under `key`.
    pub fn contains_expression(&self, key: &str) -> bool {
        self.expressions.contains_key(key)
    }

    /// Number of expressions.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Check if the clause has no expressions. Parameters do not count.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Iterate over the raw expressions in rendering order.
    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.expressions.iter().map(String::as_str)
    }

    // ==================== Parameters ====================

    /// Insert a parameter, replacing any parameter with the same name.
    ///
    /// Fails with [`ClauseError::InvalidArgument`] when the parameter has no name.
    pub fn add_param(&mut self, param: Param) -> ClauseResult<&mut Self> {
        validate_param(&param)?;
        self.insert_param(param);
        Ok(self)
    }

    /// Insert several parameters. All names are checked before any is inserted.
    pub fn add_params(
        &mut self,
        params: impl IntoIterator<Item = Param>,
    ) -> ClauseResult<&mut Self> {
        let params: Vec<Param> = params.into_iter().collect();
        for param in &params {
            validate_param(param)?;
        }
        for param in params {
            self.insert_param(param);
        }
        Ok(self)
    }

    /// Check if a parameter named `name` is bound.
    pub fn contains_parameter(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.get_by_key(name)
    }

    /// Snapshot of all parameters, in the order their names were first bound.
    pub fn params(&self) -> Vec<Param> {
        self.params.values().to_vec()
    }

    /// Number of bound parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    fn insert_param(&mut self, param: Param) {
        let name = param.name().to_string();
        if self.params.contains_key(&name) {
            trace_event!(param = %name, "parameter overwritten");
        }
        self.params.add_keyed(name, param, true);
    }

    // ==================== Nesting ====================

    /// Append another clause's rendered SQL as one expression and merge its parameters.
    ///
    /// Only the rendered text is kept; the other clause's decoration is already part of
    /// it. Parameters with the same name are overwritten by `other`'s.
    pub fn add_clause(&mut self, other: &Clause) -> &mut Self {
        self.add(&other.to_sql());
        self.merge_params(other);
        self
    }

    /// Keyed variant of [`add_clause`](Self::add_clause).
    ///
    /// When `key` exists and `overwrite` is false neither the text nor the parameters
    /// of `other` are merged.
    pub fn add_keyed_clause(&mut self, key: &str, other: &Clause, overwrite: bool) -> &mut Self {
        if !overwrite && self.expressions.contains_key(key) {
            trace_event!(key, "keyed clause already present, ignored");
            return self;
        }
        self.add_keyed(key, &other.to_sql(), overwrite);
        self.merge_params(other);
        self
    }

    fn merge_params(&mut self, other: &Clause) {
        for param in &other.params {
            self.insert_param(param.clone());
        }
    }

    // ==================== Rendering ====================

    /// Render the clause.
    ///
    /// Returns an empty string for a clause without expressions unless
    /// `render_if_empty` is set.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    /// Render and split into SQL text and parameters.
    pub fn into_parts(self) -> (String, Vec<Param>) {
        let sql = self.to_sql();
        let params = self.params.iter().cloned().collect();
        (sql, params)
    }

    fn write_sql(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let format = &self.format;
        if self.expressions.is_empty() && !format.render_if_empty {
            return Ok(());
        }

        out.write_str(&format.prefix)?;
        if !self.expressions.is_empty() {
            out.write_str(&format.expressions_prefix)?;
            for (i, expr) in self.expressions.iter().enumerate() {
                if i > 0 {
                    out.write_str(&format.expressions_separator)?;
                }
                out.write_str(expr)?;
            }
            out.write_str(&format.expressions_suffix)?;
        }
        out.write_str(&format.suffix)
    }

    // ==================== Decoration ====================

    /// Decoration used for rendering.
    pub fn format(&self) -> &ClauseFormat {
        &self.format
    }

    /// Mutable decoration, e.g. for dialect extensions rewriting the prefix.
    pub fn format_mut(&mut self) -> &mut ClauseFormat {
        &mut self.format
    }

    /// Text rendered before everything else.
    pub fn prefix(&self) -> &str {
        &self.format.prefix
    }

    /// Replace the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.format.prefix = prefix.into();
        self
    }

    /// Text rendered after everything else.
    pub fn suffix(&self) -> &str {
        &self.format.suffix
    }

    /// Replace the suffix.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.format.suffix = suffix.into();
        self
    }

    /// Text rendered before the first expression.
    pub fn expressions_prefix(&self) -> &str {
        &self.format.expressions_prefix
    }

    /// Replace the text before the first expression.
    pub fn set_expressions_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.format.expressions_prefix = prefix.into();
        self
    }

    /// Text rendered after the last expression.
    pub fn expressions_suffix(&self) -> &str {
        &self.format.expressions_suffix
    }

    /// Replace the text after the last expression.
    pub fn set_expressions_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.format.expressions_suffix = suffix.into();
        self
    }

    /// Text rendered between expressions.
    pub fn expressions_separator(&self) -> &str {
        &self.format.expressions_separator
    }

    /// Replace the separator between expressions.
    pub fn set_expressions_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.format.expressions_separator = separator.into();
        self
    }

    /// Whether `prefix + suffix` render without expressions.
    pub fn render_if_empty(&self) -> bool {
        self.format.render_if_empty
    }

    /// Render `prefix + suffix` even without expressions.
    pub fn set_render_if_empty(&mut self, render_if_empty: bool) -> &mut Self {
        self.format.render_if_empty = render_if_empty;
        self
    }

    /// Emit the rendered clause as a `tracing` event (DEBUG, truncated to 200 chars).
    #[cfg(feature = "tracing")]
    pub fn trace(&self, tag: &str) {
        crate::trace::SqlTrace::default().emit(tag, self);
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sql(f)
    }
}

fn validate_param(param: &Param) -> ClauseResult<()> {
    if param.name().is_empty() {
        return Err(ClauseError::invalid_argument(
            "parameter name cannot be empty",
        ));
    }
    Ok(())
}
