//! Stateful SELECT statement builder.
//!
//! [`SelectStatementBuilder`] owns one clause per SELECT section and composes them in
//! grammatical order on [`build`](SelectStatementBuilder::build). Sections other than
//! `select` and `from` are created on first mutable access and left out until then.
//!
//! # Example
//! ```
//! use sqlclause::SelectStatementBuilder;
//!
//! # fn main() -> sqlclause::ClauseResult<()> {
//! let mut b = SelectStatementBuilder::new("Users u");
//! b.where_mut().add_equals("u.Id", "@id", Some(5))?;
//!
//! let stmt = b.build();
//! assert_eq!(stmt.to_sql(), "select\n\t*\nfrom\n\tUsers u\nwhere\n\t(u.Id = @id)\n");
//! assert_eq!(stmt.params().len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::clause::{Clause, ClauseFormat, Logic};
use crate::error::ClauseResult;
use crate::factory;
use crate::param::SqlValue;

/// Default parameter name for [`SelectStatementBuilder::top_default`].
pub const DEFAULT_TOP_PARAM: &str = "@top";

/// SELECT builder aggregating select/from/where/group by/having/order by clauses.
#[derive(Debug, Clone)]
#[must_use]
pub struct SelectStatementBuilder {
    select: Clause,
    from: Clause,
    where_clause: Option<Clause>,
    group_by: Option<Clause>,
    having: Option<Clause>,
    order_by: Option<Clause>,
    where_logic: Logic,
    having_logic: Logic,
}

impl SelectStatementBuilder {
    /// Create a builder selecting from `table` (any FROM expression, e.g. `"Users u"`).
    pub fn new(table: &str) -> Self {
        Self {
            select: factory::select(std::iter::empty::<&str>()),
            from: factory::from(table),
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            where_logic: Logic::And,
            having_logic: Logic::And,
        }
    }

    /// Join `where` predicates with `logic` instead of `and`.
    ///
    /// Applies to the existing `where` clause too.
    pub fn where_logic(mut self, logic: Logic) -> Self {
        self.where_logic = logic;
        if let Some(clause) = self.where_clause.as_mut() {
            *clause.format_mut() = ClauseFormat::where_clause(logic);
        }
        self
    }

    /// Join `having` predicates with `logic` instead of `and`.
    pub fn having_logic(mut self, logic: Logic) -> Self {
        self.having_logic = logic;
        if let Some(clause) = self.having.as_mut() {
            *clause.format_mut() = ClauseFormat::having(logic);
        }
        self
    }

    // ==================== Sections ====================

    pub fn select(&self) -> &Clause {
        &self.select
    }

    pub fn select_mut(&mut self) -> &mut Clause {
        &mut self.select
    }

    pub fn from(&self) -> &Clause {
        &self.from
    }

    pub fn from_mut(&mut self) -> &mut Clause {
        &mut self.from
    }

    /// The `where` clause, if it was ever accessed mutably.
    pub fn where_clause(&self) -> Option<&Clause> {
        self.where_clause.as_ref()
    }

    /// The `where` clause, created on first access.
    pub fn where_mut(&mut self) -> &mut Clause {
        let logic = self.where_logic;
        self.where_clause
            .get_or_insert_with(|| factory::where_clause(logic))
    }

    pub fn group_by(&self) -> Option<&Clause> {
        self.group_by.as_ref()
    }

    /// The `group by` clause, created on first access.
    pub fn group_by_mut(&mut self) -> &mut Clause {
        self.group_by
            .get_or_insert_with(|| factory::group_by(std::iter::empty::<&str>()))
    }

    pub fn having(&self) -> Option<&Clause> {
        self.having.as_ref()
    }

    /// The `having` clause, created on first access.
    pub fn having_mut(&mut self) -> &mut Clause {
        let logic = self.having_logic;
        self.having.get_or_insert_with(|| factory::having(logic))
    }

    pub fn order_by(&self) -> Option<&Clause> {
        self.order_by.as_ref()
    }

    /// The `order by` clause, created on first access.
    pub fn order_by_mut(&mut self) -> &mut Clause {
        self.order_by
            .get_or_insert_with(|| factory::order_by(std::iter::empty::<&str>()))
    }

    // ==================== Dialect extensions ====================

    /// Limit the row count with `select top(@name)`. `None` is a no-op.
    ///
    /// Rewrites the `select` prefix and binds `name` on the select clause. A later call
    /// replaces the earlier `top(...)`.
    pub fn top<T: SqlValue>(&mut self, value: Option<T>, name: &str) -> ClauseResult<&mut Self> {
        let Some(value) = value else {
            return Ok(self);
        };

        self.select.add_param(value.to_param(name))?;
        let prefix = self.select.prefix().trim_end();
        let keyword = prefix.find(" top(").map_or(prefix, |i| &prefix[..i]).to_string();
        self.select.set_prefix(format!("{keyword} top({name})\n"));
        Ok(self)
    }

    /// [`top`](Self::top) with the parameter name `@top`.
    pub fn top_default<T: SqlValue>(&mut self, value: Option<T>) -> ClauseResult<&mut Self> {
        self.top(value, DEFAULT_TOP_PARAM)
    }

    // ==================== Build ====================

    /// Compose the statement.
    ///
    /// An empty select list becomes `*`. Sections are added in the order select, from,
    /// where, group by, having, order by; untouched lazy sections are skipped. Every call
    /// returns a new clause.
    pub fn build(&mut self) -> Clause {
        if self.select.is_empty() {
            self.select.add("*");
        }

        let mut stmt = Clause::new();
        stmt.add_clause(&self.select).add_clause(&self.from);
        for section in [
            &self.where_clause,
            &self.group_by,
            &self.having,
            &self.order_by,
        ]
        .into_iter()
        .flatten()
        {
            stmt.add_clause(section);
        }

        #[cfg(feature = "tracing")]
        stmt.trace("select");

        stmt
    }
}
