//! # pgcond
//!
//! The condition layer of a PostgreSQL query builder.
//!
//! `pgcond` turns fluent calls such as `where_("age").at_least(18)` into typed
//! [`WhereCondition`] descriptions and appends them, in call order, to a
//! [`StatementAccumulator`]. Rendering SQL text and numbering placeholders is left
//! to the compiler that consumes the finished [`SqlStatement`].
//!
//! ## Features
//!
//! - **One call, one condition**: every predicate appends exactly one description
//!   and hands the context back for chaining
//! - **Column vs. literal**: comparisons against [`col`] become deferred
//!   [`Closure`]s, literals stay [`Value`]s ready for binding
//! - **Negation as data**: `not_between`, `not_like`, `not_in`, `not_null` set a flag
//!   instead of emitting different kinds
//! - **Sub-queries**: `in_` accepts a closure recording a [`SubQuery`] with its own
//!   WHERE chain
//!
//! ## Example
//!
//! ```
//! use pgcond::prelude::*;
//!
//! let stmt = WhereStatement::new()
//!     .where_("age").at_least(18)
//!     .and_where("id").in_([1, 2, 3])
//!     .or_where("parent_id").is(col("other_table.id"))
//!     .and_where("name").not_like("A%")
//!     .into_statement();
//!
//! assert_eq!(stmt.len(), 4);
//! ```

pub mod error;
pub mod expr;
pub mod prelude;
pub mod separator;
pub mod statement;
pub mod value;
pub mod where_builder;
pub mod where_statement;

pub use error::{CondError, CondResult};
pub use expr::{Closure, ExprNode, Expression, SubQuery};
pub use separator::Separator;
pub use statement::{
    CompareOp, InSource, Rhs, SqlStatement, StatementAccumulator, WhereCondition,
};
pub use value::Value;
pub use where_builder::{Operand, Where, col};
pub use where_statement::{StatementContext, WhereStatement};
