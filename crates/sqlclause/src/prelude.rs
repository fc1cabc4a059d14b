//! Convenient imports for typical `sqlclause` usage.
//!
//! ```ignore
//! use sqlclause::prelude::*;
//! ```

pub use crate::factory::{
    cte, delete, from, group_by, having, insert, insert_columns, order_by, select, statement,
    update, values, where_and, where_clause, where_or,
};
pub use crate::{
    Clause, ClauseError, ClauseFormat, ClauseResult, Logic, Param, ParamType, ParamValue,
    SelectStatementBuilder, SqlValue,
};
