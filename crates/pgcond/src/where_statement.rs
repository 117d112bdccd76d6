//! Statement contexts: the objects a WHERE chain starts from and returns to.

use crate::separator::Separator;
use crate::statement::{SqlStatement, StatementAccumulator, WhereCondition};
use crate::where_builder::Where;

/// An object that owns a growing list of WHERE conditions.
///
/// Predicate calls on a [`Where`] builder hand the context back, so chains read as
/// `ctx.where_("a").is(1).or_where("b").is_null()`.
pub trait StatementContext: Sized {
    /// The accumulator the builder appends conditions to.
    fn accumulator(&mut self) -> &mut dyn StatementAccumulator;

    /// Start a condition joined with `AND`.
    fn where_(self, column: impl Into<String>) -> Where<Self> {
        self.and_where(column)
    }

    /// Start a condition joined with `AND`.
    fn and_where(self, column: impl Into<String>) -> Where<Self> {
        Where::new(self).bind(column, Separator::And)
    }

    /// Start a condition joined with `OR`.
    fn or_where(self, column: impl Into<String>) -> Where<Self> {
        Where::new(self).bind(column, Separator::Or)
    }
}

/// The top-level context for one query-building session.
///
/// Owns the [`SqlStatement`]; `into_statement` hands it to the compiler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WhereStatement {
    sql: SqlStatement,
}

impl WhereStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on an existing statement.
    pub fn with_statement(sql: SqlStatement) -> Self {
        Self { sql }
    }

    pub fn statement(&self) -> &SqlStatement {
        &self.sql
    }

    pub fn conditions(&self) -> &[WhereCondition] {
        self.sql.conditions()
    }

    pub fn into_statement(self) -> SqlStatement {
        self.sql
    }
}

impl StatementContext for WhereStatement {
    fn accumulator(&mut self) -> &mut dyn StatementAccumulator {
        &mut self.sql
    }
}
