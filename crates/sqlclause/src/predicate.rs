//! Predicate helpers for `where`/`having` clauses.
//!
//! Two layers:
//! - `*_param` methods take a ready [`Param`] and add `column <op> @name` keyed by the
//!   parameter name, together with the parameter.
//! - Typed methods take an `Option<T>` for any [`SqlValue`] and do nothing for `None`:
//!   an absent filter value means "no criterion", never an error.
//!
//! Every helper fails with [`ClauseError::InvalidArgument`](crate::ClauseError) when a
//! parameter name is empty.
//!
//! # Example
//! ```
//! use sqlclause::factory::where_and;
//!
//! # fn main() -> sqlclause::ClauseResult<()> {
//! let name: Option<&str> = Some("ann");
//! let min_age: Option<i32> = None;
//!
//! let mut w = where_and();
//! w.add_equals("u.Name", "@name", name)?
//!     .add_greater_or_equals("u.Age", "@minAge", min_age)?;
//!
//! assert_eq!(w.to_sql(), "where\n\t(u.Name = @name)\n");
//! assert_eq!(w.params().len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::clause::Clause;
use crate::error::ClauseResult;
use crate::param::{Param, SqlValue};

/// Define a `*_param` method and its typed `Option<T>` counterpart for one operator.
macro_rules! comparison_predicates {
    ($($typed:ident / $with_param:ident => $op:literal, $desc:literal;)*) => {
        impl Clause {
            $(
                #[doc = concat!(
                    "Add `column ", $op, " @name` (", $desc, ") for a ready parameter."
                )]
                pub fn $with_param(
                    &mut self,
                    column: &str,
                    param: Param,
                ) -> ClauseResult<&mut Self> {
                    self.add_operator_param(column, $op, param)
                }

                #[doc = concat!("Add `column ", $op, " @name` (", $desc, "). `None` is a no-op.")]
                pub fn $typed<T: SqlValue>(
                    &mut self,
                    column: &str,
                    name: &str,
                    value: Option<T>,
                ) -> ClauseResult<&mut Self> {
                    match value {
                        Some(value) => self.$with_param(column, value.to_param(name)),
                        None => Ok(self),
                    }
                }
            )*
        }
    };
}

comparison_predicates! {
    add_equals / add_equals_param => "=", "equals";
    add_not_equals / add_not_equals_param => "<>", "not equals";
    add_greater / add_greater_param => ">", "greater than";
    add_greater_or_equals / add_greater_or_equals_param => ">=", "greater or equal";
    add_less / add_less_param => "<", "less than";
    add_less_or_equals / add_less_or_equals_param => "<=", "less or equal";
    add_like / add_like_param => "like", "pattern match";
    add_not_like / add_not_like_param => "not like", "negated pattern match";
}

impl Clause {
    fn add_operator_param(
        &mut self,
        column: &str,
        op: &str,
        param: Param,
    ) -> ClauseResult<&mut Self> {
        let key = param.name().to_string();
        let text = format!("{column} {op} {key}");
        self.add_keyed_with_param(&key, &text, param, false)
    }

    // ==================== Between ====================

    /// Add `column between @from and @to`.
    pub fn add_between_params(
        &mut self,
        column: &str,
        from: Param,
        to: Param,
    ) -> ClauseResult<&mut Self> {
        self.add_range_params(column, "between", from, to)
    }

    /// Add `column not between @from and @to`.
    pub fn add_not_between_params(
        &mut self,
        column: &str,
        from: Param,
        to: Param,
    ) -> ClauseResult<&mut Self> {
        self.add_range_params(column, "not between", from, to)
    }

    fn add_range_params(
        &mut self,
        column: &str,
        op: &str,
        from: Param,
        to: Param,
    ) -> ClauseResult<&mut Self> {
        let key = from.name().to_string();
        let text = format!("{column} {op} {key} and {}", to.name());
        self.add_keyed_with_params(&key, &text, [from, to], false)
    }

    /// Add a range predicate, degrading to one bound when the other is `None`.
    ///
    /// | `from` | `to` | SQL |
    /// |---|---|---|
    /// | some | some | `column between @from and @to` |
    /// | some | none | `column >= @from` |
    /// | none | some | `column <= @to` |
    /// | none | none | nothing |
    pub fn add_between<T: SqlValue>(
        &mut self,
        column: &str,
        from_name: &str,
        from: Option<T>,
        to_name: &str,
        to: Option<T>,
    ) -> ClauseResult<&mut Self> {
        match (from, to) {
            (Some(from), Some(to)) => {
                self.add_between_params(column, from.to_param(from_name), to.to_param(to_name))
            }
            (Some(from), None) => {
                self.add_greater_or_equals_param(column, from.to_param(from_name))
            }
            (None, Some(to)) => self.add_less_or_equals_param(column, to.to_param(to_name)),
            (None, None) => Ok(self),
        }
    }

    /// Add a negated range predicate, degrading to one bound when the other is `None`.
    ///
    /// | `from` | `to` | SQL |
    /// |---|---|---|
    /// | some | some | `column not between @from and @to` |
    /// | some | none | `column < @from` |
    /// | none | some | `column > @to` |
    /// | none | none | nothing |
    pub fn add_not_between<T: SqlValue>(
        &mut self,
        column: &str,
        from_name: &str,
        from: Option<T>,
        to_name: &str,
        to: Option<T>,
    ) -> ClauseResult<&mut Self> {
        match (from, to) {
            (Some(from), Some(to)) => {
                self.add_not_between_params(column, from.to_param(from_name), to.to_param(to_name))
            }
            (Some(from), None) => self.add_less_param(column, from.to_param(from_name)),
            (None, Some(to)) => self.add_greater_param(column, to.to_param(to_name)),
            (None, None) => Ok(self),
        }
    }

    // ==================== In ====================

    /// Add `column in (@p1, @p2, ...)` keyed by `key`. An empty list is a no-op.
    pub fn add_in_params(
        &mut self,
        column: &str,
        key: &str,
        params: impl IntoIterator<Item = Param>,
    ) -> ClauseResult<&mut Self> {
        self.add_list_params(column, "in", key, params)
    }

    /// Add `column not in (@p1, @p2, ...)` keyed by `key`. An empty list is a no-op.
    pub fn add_not_in_params(
        &mut self,
        column: &str,
        key: &str,
        params: impl IntoIterator<Item = Param>,
    ) -> ClauseResult<&mut Self> {
        self.add_list_params(column, "not in", key, params)
    }

    fn add_list_params(
        &mut self,
        column: &str,
        op: &str,
        key: &str,
        params: impl IntoIterator<Item = Param>,
    ) -> ClauseResult<&mut Self> {
        let params: Vec<Param> = params.into_iter().collect();
        if params.is_empty() {
            return Ok(self);
        }
        let names: Vec<&str> = params.iter().map(Param::name).collect();
        let text = format!("{column} {op} ({})", names.join(", "));
        self.add_keyed_with_params(key, &text, params, false)
    }

    /// Add `column in (@name1, @name2, ...)`, one parameter per value (1-based suffix).
    ///
    /// `None` and an empty list are no-ops.
    pub fn add_in<T, I>(
        &mut self,
        column: &str,
        name: &str,
        values: Option<I>,
    ) -> ClauseResult<&mut Self>
    where
        T: SqlValue,
        I: IntoIterator<Item = T>,
    {
        match values {
            Some(values) => self.add_in_params(column, name, numbered_params(name, values)),
            None => Ok(self),
        }
    }

    /// Add `column not in (@name1, @name2, ...)`. `None` and an empty list are no-ops.
    pub fn add_not_in<T, I>(
        &mut self,
        column: &str,
        name: &str,
        values: Option<I>,
    ) -> ClauseResult<&mut Self>
    where
        T: SqlValue,
        I: IntoIterator<Item = T>,
    {
        match values {
            Some(values) => self.add_not_in_params(column, name, numbered_params(name, values)),
            None => Ok(self),
        }
    }

    /// [`add_in`](Self::add_in) for a list that is always present.
    pub fn add_in_list<T, I>(
        &mut self,
        column: &str,
        name: &str,
        values: I,
    ) -> ClauseResult<&mut Self>
    where
        T: SqlValue,
        I: IntoIterator<Item = T>,
    {
        self.add_in(column, name, Some(values))
    }

    /// [`add_not_in`](Self::add_not_in) for a list that is always present.
    pub fn add_not_in_list<T, I>(
        &mut self,
        column: &str,
        name: &str,
        values: I,
    ) -> ClauseResult<&mut Self>
    where
        T: SqlValue,
        I: IntoIterator<Item = T>,
    {
        self.add_not_in(column, name, Some(values))
    }

    // ==================== Pattern shortcuts ====================

    /// Add `column like @name` matching values that start with `value`.
    ///
    /// `%` inside `value` is escaped as `\%`. `None` and `""` are no-ops.
    pub fn add_starts_with(
        &mut self,
        column: &str,
        name: &str,
        value: Option<&str>,
    ) -> ClauseResult<&mut Self> {
        let pattern = non_empty(value).map(|v| format!("{}%", escape_like(v)));
        self.add_like(column, name, pattern)
    }

    /// Negated [`add_starts_with`](Self::add_starts_with).
    pub fn add_not_starts_with(
        &mut self,
        column: &str,
        name: &str,
        value: Option<&str>,
    ) -> ClauseResult<&mut Self> {
        let pattern = non_empty(value).map(|v| format!("{}%", escape_like(v)));
        self.add_not_like(column, name, pattern)
    }

    /// Add `column like @name` matching values that end with `value`.
    pub fn add_ends_with(
        &mut self,
        column: &str,
        name: &str,
        value: Option<&str>,
    ) -> ClauseResult<&mut Self> {
        let pattern = non_empty(value).map(|v| format!("%{}", escape_like(v)));
        self.add_like(column, name, pattern)
    }

    /// Negated [`add_ends_with`](Self::add_ends_with).
    pub fn add_not_ends_with(
        &mut self,
        column: &str,
        name: &str,
        value: Option<&str>,
    ) -> ClauseResult<&mut Self> {
        let pattern = non_empty(value).map(|v| format!("%{}", escape_like(v)));
        self.add_not_like(column, name, pattern)
    }

    /// Add `column like @name` matching values that contain `value`.
    pub fn add_contains(
        &mut self,
        column: &str,
        name: &str,
        value: Option<&str>,
    ) -> ClauseResult<&mut Self> {
        let pattern = non_empty(value).map(|v| format!("%{}%", escape_like(v)));
        self.add_like(column, name, pattern)
    }

    /// Negated [`add_contains`](Self::add_contains).
    pub fn add_not_contains(
        &mut self,
        column: &str,
        name: &str,
        value: Option<&str>,
    ) -> ClauseResult<&mut Self> {
        let pattern = non_empty(value).map(|v| format!("%{}%", escape_like(v)));
        self.add_not_like(column, name, pattern)
    }
}

fn numbered_params<T: SqlValue>(name: &str, values: impl IntoIterator<Item = T>) -> Vec<Param> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| value.to_param(format!("{name}{}", i + 1)))
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Escape `%` so it matches literally inside a `like` pattern.
pub fn escape_like(value: &str) -> String {
    value.replace('%', "\\%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::{ParamType, ParamValue};

    fn names(c: &Clause) -> Vec<String> {
        c.params().iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn equals_none_is_noop() {
        let mut c = Clause::new();
        c.add_equals("Id", "@x", None::<i32>).unwrap();
        assert_eq!(c.to_sql(), "");
        assert!(c.params().is_empty());
    }

    #[test]
    fn comparison_operators() {
        let mut c = Clause::new();
        c.set_expressions_separator("|");
        c.add_equals("a", "@a", Some(1))
            .unwrap()
            .add_not_equals("b", "@b", Some(1))
            .unwrap()
            .add_greater("c", "@c", Some(1))
            .unwrap()
            .add_greater_or_equals("d", "@d", Some(1))
            .unwrap()
            .add_less("e", "@e", Some(1))
            .unwrap()
            .add_less_or_equals("f", "@f", Some(1))
            .unwrap()
            .add_like("g", "@g", Some("a%"))
            .unwrap()
            .add_not_like("h", "@h", Some("a%"))
            .unwrap();

        assert_eq!(
            c.to_sql(),
            "a = @a|b <> @b|c > @c|d >= @d|e < @e|f <= @f|g like @g|h not like @h"
        );
        assert_eq!(
            names(&c),
            vec!["@a", "@b", "@c", "@d", "@e", "@f", "@g", "@h"]
        );
    }

    #[test]
    fn same_parameter_name_is_added_once() {
        let mut c = Clause::new();
        c.set_expressions_separator(" and ");
        c.add_equals("a", "@x", Some(1)).unwrap();
        c.add_equals("b", "@x", Some(2)).unwrap();

        assert_eq!(c.to_sql(), "a = @x");
        assert_eq!(c.param("@x").unwrap().value(), &ParamValue::Int32(1));
    }

    #[test]
    fn between_both_bounds() {
        let mut c = Clause::new();
        c.add_between("Id", "@x", Some(1), "@x2", Some(5)).unwrap();
        assert_eq!(c.to_sql(), "Id between @x and @x2");
        assert_eq!(names(&c), vec!["@x", "@x2"]);
    }

    #[test]
    fn between_degrades_to_one_bound() {
        let mut c = Clause::new();
        c.add_between("Id", "@x", Some(5), "@x2", None).unwrap();
        assert_eq!(c.to_sql(), "Id >= @x");
        assert_eq!(names(&c), vec!["@x"]);

        let mut c = Clause::new();
        c.add_between("Id", "@x", None, "@x2", Some(5)).unwrap();
        assert_eq!(c.to_sql(), "Id <= @x2");
        assert_eq!(names(&c), vec!["@x2"]);

        let mut c = Clause::new();
        c.add_between::<i32>("Id", "@x", None, "@x2", None).unwrap();
        assert_eq!(c.to_sql(), "");
        assert!(c.params().is_empty());
    }

    #[test]
    fn not_between_flips_the_remaining_bound() {
        let mut c = Clause::new();
        c.add_not_between("Id", "@x", None, "@x2", Some(5)).unwrap();
        assert_eq!(c.to_sql(), "Id > @x2");
        assert_eq!(names(&c), vec!["@x2"]);

        let mut c = Clause::new();
        c.add_not_between("Id", "@x", Some(5), "@x2", None).unwrap();
        assert_eq!(c.to_sql(), "Id < @x");
        assert_eq!(names(&c), vec!["@x"]);

        let mut c = Clause::new();
        c.add_not_between("Id", "@x", Some(1), "@x2", Some(5)).unwrap();
        assert_eq!(c.to_sql(), "Id not between @x and @x2");

        let mut c = Clause::new();
        c.add_not_between::<i32>("Id", "@x", None, "@x2", None).unwrap();
        assert_eq!(c.to_sql(), "");
    }

    #[test]
    fn in_with_no_values_is_noop() {
        let mut c = Clause::new();
        c.add_in("Id", "@x", Some(Vec::<i32>::new())).unwrap();
        c.add_in("Id", "@x", None::<Vec<i32>>).unwrap();
        c.add_not_in_list("Id", "@y", Vec::<i32>::new()).unwrap();
        assert_eq!(c.to_sql(), "");
        assert!(c.params().is_empty());
    }

    #[test]
    fn in_numbers_parameters_from_one() {
        let mut c = Clause::new();
        c.add_in("Id", "@x", Some([7])).unwrap();
        assert_eq!(c.to_sql(), "Id in (@x1)");
        let params = c.params();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name(), "@x1");
        assert_eq!(params[0].value(), &ParamValue::Int32(7));

        let mut c = Clause::new();
        c.add_not_in_list("Id", "@x", [1i64, 2, 3]).unwrap();
        assert_eq!(c.to_sql(), "Id not in (@x1, @x2, @x3)");
        assert_eq!(names(&c), vec!["@x1", "@x2", "@x3"]);
        assert!(c.contains_expression("@x"));
    }

    #[test]
    fn starts_with_escapes_percent() {
        let mut c = Clause::new();
        c.add_starts_with("Id", "@x", Some("a%b")).unwrap();
        assert_eq!(c.to_sql(), "Id like @x");
        let p = c.param("@x").unwrap();
        assert_eq!(p.value().as_str(), Some("a\\%b%"));
        assert_eq!(p.param_type(), ParamType::Text);
    }

    #[test]
    fn pattern_shortcuts() {
        let mut c = Clause::new();
        c.set_expressions_separator(" and ");
        c.add_ends_with("a", "@a", Some("x")).unwrap();
        c.add_not_starts_with("b", "@b", Some("y")).unwrap();
        c.add_not_ends_with("c", "@c", Some("z")).unwrap();
        c.add_contains("d", "@d", Some("5%")).unwrap();
        c.add_not_contains("e", "@e", Some("w")).unwrap();

        assert_eq!(
            c.to_sql(),
            "a like @a and b not like @b and c not like @c and d like @d and e not like @e"
        );
        let values: Vec<String> = c
            .params()
            .iter()
            .filter_map(|p| p.value().as_str().map(str::to_string))
            .collect();
        assert_eq!(values, vec!["%x", "y%", "%z", "%5\\%%", "%w%"]);
    }

    #[test]
    fn pattern_shortcuts_skip_empty_input() {
        let mut c = Clause::new();
        c.add_starts_with("a", "@a", Some("")).unwrap();
        c.add_ends_with("a", "@a", None).unwrap();
        c.add_contains("a", "@a", Some("")).unwrap();
        assert!(c.is_empty());
        assert!(c.params().is_empty());
    }

    #[test]
    fn empty_parameter_name_is_invalid() {
        let mut c = Clause::new();
        let err = c.add_equals("Id", "", Some(1)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(c.is_empty());
    }
}
