//! Fluent builder for a single WHERE condition.
//!
//! A [`Where`] is bound to one column and one [`Separator`], receives exactly one
//! predicate call, appends the matching [`WhereCondition`](crate::WhereCondition)
//! to the context's accumulator and hands the context back.
//!
//! # Example
//! ```
//! use pgcond::{col, StatementContext, WhereStatement};
//!
//! let stmt = WhereStatement::new()
//!     .where_("age").at_least(18)
//!     .and_where("name").not_like("A%")
//!     .or_where("parent_id").is(col("other_table.id"))
//!     .and_where("id").in_([1, 2, 3])
//!     .into_statement();
//!
//! assert_eq!(stmt.conditions()[2].separator(), pgcond::Separator::Or);
//! ```

use crate::error::{CondError, CondResult};
use crate::expr::Closure;
use crate::separator::Separator;
use crate::statement::{CompareOp, InSource, Rhs};
use crate::value::Value;
use crate::where_statement::StatementContext;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Unclassified right-hand side of a comparison: a value plus the caller's
/// "this is a column" flag.
///
/// Literals convert via `From`; use [`col`] or [`Operand::column`] to compare
/// against another column.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    value: Value,
    is_column: bool,
}

impl Operand {
    pub fn new(value: impl Into<Value>, is_column: bool) -> Self {
        Self {
            value: value.into(),
            is_column,
        }
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::new(value, false)
    }

    /// Reference to another column (`table.column` is fine).
    pub fn column(name: impl Into<String>) -> Self {
        Self::new(Value::Text(name.into()), true)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_column(&self) -> bool {
        self.is_column
    }

    /// Decide literal vs. column reference.
    ///
    /// Only a text value with the column flag set becomes a deferred column
    /// reference; everything else stays a literal.
    pub fn classify(self) -> Rhs {
        match self.value {
            Value::Text(name) if self.is_column => Rhs::Expr(Closure::column_ref(name)),
            value => Rhs::Literal(value),
        }
    }
}

/// Shorthand for [`Operand::column`].
pub fn col(name: impl Into<String>) -> Operand {
    Operand::column(name)
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::literal(value)
    }
}

macro_rules! impl_operand_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::literal(v)
                }
            }
        )*
    };
}

impl_operand_from!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    &str,
    String,
    &String,
    Uuid,
    DateTime<Utc>,
    serde_json::Value,
);

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::literal(v)
    }
}

fn check_column(column: &str) -> CondResult<()> {
    if column.trim().is_empty() {
        return Err(CondError::EmptyColumn);
    }
    Ok(())
}

/// Builder for one WHERE condition on a bound column.
///
/// Holds the context by value for the duration of a single predicate call.
/// Calling a predicate before [`bind`](Where::bind) panics.
#[derive(Debug)]
pub struct Where<C> {
    column: Option<String>,
    separator: Option<Separator>,
    context: C,
}

#[allow(clippy::wrong_self_convention)]
impl<C: StatementContext> Where<C> {
    /// Create an unbound builder around `context`.
    pub fn new(context: C) -> Self {
        Self {
            column: None,
            separator: None,
            context,
        }
    }

    /// Bind the column and separator for the next predicate call.
    ///
    /// # Panics
    /// If `column` is empty.
    pub fn bind(mut self, column: impl Into<String>, separator: Separator) -> Self {
        let column = column.into();
        if let Err(err) = check_column(&column) {
            panic!("Where::bind: {err}");
        }
        self.column = Some(column);
        self.separator = Some(separator);
        self
    }

    /// Like [`bind`](Where::bind), with the separator given as a token (`"AND"` / `"OR"`).
    ///
    /// # Panics
    /// If `column` is empty or `separator` is not a recognized token.
    pub fn bind_str(self, column: impl Into<String>, separator: &str) -> Self {
        match Separator::parse(separator) {
            Ok(separator) => self.bind(column, separator),
            Err(err) => panic!("Where::bind_str: {err}"),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.column.is_some() && self.separator.is_some()
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn separator(&self) -> Option<Separator> {
        self.separator
    }

    fn take_binding(&mut self) -> (String, Separator) {
        match (self.column.take(), self.separator.take()) {
            (Some(column), Some(separator)) => (column, separator),
            _ => panic!("Where: predicate called before bind(column, separator)"),
        }
    }

    // ==================== Internal emitters ====================

    fn add_condition(mut self, operand: Operand, operator: CompareOp) -> C {
        let (column, separator) = self.take_binding();
        let operand = operand.classify();
        self.context
            .accumulator()
            .add_where_condition(column, operand, operator, separator);
        self.context
    }

    fn add_between_condition(mut self, low: Value, high: Value, negated: bool) -> C {
        let (column, separator) = self.take_binding();
        self.context
            .accumulator()
            .add_where_between_condition(column, low, high, separator, negated);
        self.context
    }

    fn add_like_condition(mut self, pattern: String, negated: bool) -> C {
        let (column, separator) = self.take_binding();
        self.context
            .accumulator()
            .add_where_like_condition(column, pattern, separator, negated);
        self.context
    }

    fn add_in_condition(mut self, source: InSource, negated: bool) -> C {
        let (column, separator) = self.take_binding();
        self.context
            .accumulator()
            .add_where_in_condition(column, source, separator, negated);
        self.context
    }

    fn add_null_condition(mut self, negated: bool) -> C {
        let (column, separator) = self.take_binding();
        self.context
            .accumulator()
            .add_where_null_condition(column, separator, negated);
        self.context
    }

    // ==================== Comparisons ====================

    /// `column = value`
    pub fn is(self, value: impl Into<Operand>) -> C {
        self.add_condition(value.into(), CompareOp::Eq)
    }

    /// `column != value`
    pub fn is_not(self, value: impl Into<Operand>) -> C {
        self.add_condition(value.into(), CompareOp::Ne)
    }

    /// `column < value`
    pub fn less_than(self, value: impl Into<Operand>) -> C {
        self.add_condition(value.into(), CompareOp::Lt)
    }

    /// `column > value`
    pub fn greater_than(self, value: impl Into<Operand>) -> C {
        self.add_condition(value.into(), CompareOp::Gt)
    }

    /// `column >= value`
    pub fn at_least(self, value: impl Into<Operand>) -> C {
        self.add_condition(value.into(), CompareOp::Gte)
    }

    /// `column <= value`
    pub fn at_most(self, value: impl Into<Operand>) -> C {
        self.add_condition(value.into(), CompareOp::Lte)
    }

    // ==================== Range / pattern / set / null ====================

    /// `column BETWEEN low AND high`
    pub fn between(self, low: impl Into<Value>, high: impl Into<Value>) -> C {
        self.add_between_condition(low.into(), high.into(), false)
    }

    /// `column NOT BETWEEN low AND high`
    pub fn not_between(self, low: impl Into<Value>, high: impl Into<Value>) -> C {
        self.add_between_condition(low.into(), high.into(), true)
    }

    /// `column LIKE pattern`
    pub fn like(self, pattern: impl Into<String>) -> C {
        self.add_like_condition(pattern.into(), false)
    }

    /// `column NOT LIKE pattern`
    pub fn not_like(self, pattern: impl Into<String>) -> C {
        self.add_like_condition(pattern.into(), true)
    }

    /// `column IN (...)`: a literal list, or a [`Closure`] recording a sub-query.
    pub fn in_(self, source: impl Into<InSource>) -> C {
        self.add_in_condition(source.into(), false)
    }

    /// `column NOT IN (...)`
    pub fn not_in(self, source: impl Into<InSource>) -> C {
        self.add_in_condition(source.into(), true)
    }

    /// `column IS NULL`
    pub fn is_null(self) -> C {
        self.add_null_condition(false)
    }

    /// `column IS NOT NULL`
    pub fn not_null(self) -> C {
        self.add_null_condition(true)
    }

    // ==================== Aliases ====================

    /// Alias for [`is`](Where::is).
    pub fn eq(self, value: impl Into<Operand>) -> C {
        self.is(value)
    }

    /// Alias for [`is_not`](Where::is_not).
    pub fn ne(self, value: impl Into<Operand>) -> C {
        self.is_not(value)
    }

    /// Alias for [`less_than`](Where::less_than).
    pub fn lt(self, value: impl Into<Operand>) -> C {
        self.less_than(value)
    }

    /// Alias for [`greater_than`](Where::greater_than).
    pub fn gt(self, value: impl Into<Operand>) -> C {
        self.greater_than(value)
    }

    /// Alias for [`at_least`](Where::at_least).
    pub fn gte(self, value: impl Into<Operand>) -> C {
        self.at_least(value)
    }

    /// Alias for [`at_most`](Where::at_most).
    pub fn lte(self, value: impl Into<Operand>) -> C {
        self.at_most(value)
    }

    /// Alias for [`in_`](Where::in_).
    pub fn is_in(self, source: impl Into<InSource>) -> C {
        self.in_(source)
    }
}
