//! # sqlclause
//!
//! Compose parameterized SQL text from small, decorated clauses.
//!
//! ## Features
//!
//! - **Text first**: clauses hold raw SQL fragments; nothing is parsed or validated
//! - **Named parameters**: each clause carries the `@name` parameters its text references,
//!   deduplicated by name
//! - **Keyed fragments**: add-if-absent or overwrite-in-place by key, order preserved
//! - **Composable**: a clause added to another contributes its rendered text and parameters
//! - **Absent means omitted**: typed predicate helpers skip `None` values
//!
//! ## Example
//!
//! ```
//! use sqlclause::SelectStatementBuilder;
//!
//! # fn main() -> sqlclause::ClauseResult<()> {
//! let mut q = SelectStatementBuilder::new("Users u");
//! q.select_mut().add("u.Id").add("u.Name");
//! q.where_mut()
//!     .add_equals("u.Status", "@status", Some("active"))?
//!     .add_in("u.RoleId", "@role", Some([1, 2]))?;
//! q.order_by_mut().add("u.Name");
//!
//! let stmt = q.build();
//! assert_eq!(
//!     stmt.to_sql(),
//!     "select\n\tu.Id,\n\tu.Name\n\
//!      from\n\tUsers u\n\
//!      where\n\t(u.Status = @status)\n\tand (u.RoleId in (@role1, @role2))\n\
//!      order by\n\tu.Name\n"
//! );
//! assert_eq!(stmt.params().len(), 3);
//! # Ok(())
//! # }
//! ```

/// Emit a `trace!` event under the crate target when the `tracing` feature is on.
macro_rules! trace_event {
    ($($field:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "sqlclause", $($field)*);
    };
}

pub mod clause;
pub mod collection;
pub mod error;
pub mod factory;
pub mod param;
pub mod predicate;
pub mod prelude;
pub mod select;

#[cfg(feature = "tracing")]
pub mod trace;

pub use clause::{Clause, ClauseFormat, Logic};
pub use collection::OrderedHybridCollection;
pub use error::{ClauseError, ClauseResult};
pub use param::{Param, ParamType, ParamValue, SqlValue};
pub use predicate::escape_like;
pub use select::SelectStatementBuilder;

#[cfg(feature = "tracing")]
pub use trace::SqlTrace;
