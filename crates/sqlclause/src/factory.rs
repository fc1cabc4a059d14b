//! Clause constructors for each SQL grammar role.
//!
//! Every function returns a [`Clause`] pre-decorated for one statement section. The
//! output format is fixed (lowercase keywords, one expression per line, tab indent) so
//! generated SQL can be diffed byte for byte.
//!
//! # Example
//! ```
//! use sqlclause::factory::{from, select, statement, where_and};
//!
//! let mut w = where_and();
//! w.add("u.Active = 1");
//!
//! let sql = statement([&select(["u.Id", "u.Name"]), &from("Users u"), &w]).to_sql();
//! assert_eq!(
//!     sql,
//!     "select\n\tu.Id,\n\tu.Name\nfrom\n\tUsers u\nwhere\n\t(u.Active = 1)\n"
//! );
//! ```

use crate::clause::{Clause, ClauseFormat, Logic};

fn with_columns<I, S>(format: ClauseFormat, cols: I) -> Clause
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut clause = Clause::with_format(format);
    for col in cols {
        clause.add(col.as_ref());
    }
    clause
}

/// `select` list.
pub fn select<I, S>(cols: I) -> Clause
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    with_columns(ClauseFormat::select(), cols)
}

/// `from` section for `table`; always rendered. Joins can be added as expressions.
pub fn from(table: &str) -> Clause {
    Clause::with_format(ClauseFormat::from(table))
}

/// `where` section joining predicates with `logic`.
pub fn where_clause(logic: Logic) -> Clause {
    Clause::with_format(ClauseFormat::where_clause(logic))
}

/// `where` section joining predicates with `and`.
pub fn where_and() -> Clause {
    where_clause(Logic::And)
}

/// `where` section joining predicates with `or`.
pub fn where_or() -> Clause {
    where_clause(Logic::Or)
}

/// `having` section joining predicates with `logic`.
pub fn having(logic: Logic) -> Clause {
    Clause::with_format(ClauseFormat::having(logic))
}

/// `group by` list.
pub fn group_by<I, S>(cols: I) -> Clause
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    with_columns(ClauseFormat::group_by(), cols)
}

/// `order by` list.
pub fn order_by<I, S>(cols: I) -> Clause
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    with_columns(ClauseFormat::order_by(), cols)
}

/// `;with name as (...)` common table expression.
pub fn cte(name: &str) -> Clause {
    Clause::with_format(ClauseFormat::cte(name))
}

/// `delete from table` skeleton; add a `where` clause to it.
pub fn delete(table: &str) -> Clause {
    Clause::with_format(ClauseFormat::delete(table))
}

/// `update table set ...`; add one `col = @param` assignment per expression.
pub fn update(table: &str) -> Clause {
    Clause::with_format(ClauseFormat::update(table))
}

/// `insert into table`, followed by a column list when `cols` is not empty.
pub fn insert<I, S>(table: &str, cols: I) -> Clause
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut clause = Clause::with_format(ClauseFormat::insert(table));
    let columns = insert_columns(cols);
    if !columns.is_empty() {
        clause.add_clause(&columns);
    }
    clause
}

/// Parenthesized insert column list.
pub fn insert_columns<I, S>(cols: I) -> Clause
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    with_columns(ClauseFormat::insert_columns(), cols)
}

/// `values (...)` row; add one placeholder per expression.
pub fn values() -> Clause {
    Clause::with_format(ClauseFormat::values())
}

/// Concatenate clauses in order into one clause.
///
/// Text is appended as rendered; later clauses overwrite same-named parameters of
/// earlier ones.
pub fn statement<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> Clause {
    let mut stmt = Clause::new();
    for clause in clauses {
        stmt.add_clause(clause);
    }
    stmt
}
