//! Convenient imports for typical `pgcond` usage.
//!
//! ```
//! use pgcond::prelude::*;
//! ```

pub use crate::{
    Closure, CompareOp, CondError, CondResult, ExprNode, Expression, InSource, Operand, Rhs,
    Separator, SqlStatement, StatementAccumulator, StatementContext, SubQuery, Value, Where,
    WhereCondition, WhereStatement, col,
};
