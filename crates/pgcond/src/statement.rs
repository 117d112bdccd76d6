//! Condition descriptions and the statement accumulator that stores them.
//!
//! Every predicate call on a [`Where`](crate::Where) builder ends in exactly one
//! append on a [`StatementAccumulator`]. [`SqlStatement`] is the ordered,
//! append-only implementation handed to the compiler.

use crate::expr::{Closure, Expression};
use crate::separator::Separator;
use crate::value::Value;
use std::fmt;

/// Comparison operator emitted by the comparison predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a comparison after operand classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Rhs {
    /// Bound as a parameter.
    Literal(Value),
    /// Rendered from what the closure records (column reference, sub-query, ...).
    Expr(Closure),
}

impl Rhs {
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Rhs::Literal(v) => Some(v),
            Rhs::Expr(_) => None,
        }
    }

    /// Evaluate a deferred operand; `None` for literals.
    pub fn evaluate(&self) -> Option<Expression> {
        match self {
            Rhs::Literal(_) => None,
            Rhs::Expr(closure) => Some(closure.evaluate()),
        }
    }
}

/// Source of an `IN` / `NOT IN` condition.
#[derive(Debug, Clone, PartialEq)]
pub enum InSource {
    /// A finite list of literals. May be empty; the compiler decides what that means.
    Values(Vec<Value>),
    /// A deferred expression that records a sub-query.
    Subquery(Closure),
}

impl InSource {
    /// Build a sub-query source from a callback.
    pub fn subquery<F>(f: F) -> Self
    where
        F: Fn(&mut Expression) + Send + Sync + 'static,
    {
        InSource::Subquery(Closure::new(f))
    }

    pub fn values(&self) -> Option<&[Value]> {
        match self {
            InSource::Values(v) => Some(v),
            InSource::Subquery(_) => None,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for InSource {
    fn from(values: Vec<T>) -> Self {
        InSource::Values(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for InSource {
    fn from(values: [T; N]) -> Self {
        InSource::Values(values.into_iter().map(Into::into).collect())
    }
}

impl From<Closure> for InSource {
    fn from(closure: Closure) -> Self {
        InSource::Subquery(closure)
    }
}

/// One fully-specified WHERE condition, as handed to the accumulator.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereCondition {
    /// `column <op> operand`
    Comparison {
        column: String,
        operator: CompareOp,
        operand: Rhs,
        separator: Separator,
    },
    /// `column [NOT] BETWEEN low AND high`
    Between {
        column: String,
        low: Value,
        high: Value,
        separator: Separator,
        negated: bool,
    },
    /// `column [NOT] LIKE pattern`
    Pattern {
        column: String,
        pattern: String,
        separator: Separator,
        negated: bool,
    },
    /// `column [NOT] IN (source)`
    Membership {
        column: String,
        source: InSource,
        separator: Separator,
        negated: bool,
    },
    /// `column IS [NOT] NULL`
    NullCheck {
        column: String,
        separator: Separator,
        negated: bool,
    },
}

impl WhereCondition {
    pub fn column(&self) -> &str {
        match self {
            WhereCondition::Comparison { column, .. }
            | WhereCondition::Between { column, .. }
            | WhereCondition::Pattern { column, .. }
            | WhereCondition::Membership { column, .. }
            | WhereCondition::NullCheck { column, .. } => column,
        }
    }

    pub fn separator(&self) -> Separator {
        match self {
            WhereCondition::Comparison { separator, .. }
            | WhereCondition::Between { separator, .. }
            | WhereCondition::Pattern { separator, .. }
            | WhereCondition::Membership { separator, .. }
            | WhereCondition::NullCheck { separator, .. } => *separator,
        }
    }

    /// Negation flag; comparisons are never negated (they use the inverse operator).
    pub fn is_negated(&self) -> bool {
        match self {
            WhereCondition::Comparison { .. } => false,
            WhereCondition::Between { negated, .. }
            | WhereCondition::Pattern { negated, .. }
            | WhereCondition::Membership { negated, .. }
            | WhereCondition::NullCheck { negated, .. } => *negated,
        }
    }

    /// Short name of the condition kind, used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            WhereCondition::Comparison { .. } => "comparison",
            WhereCondition::Between { .. } => "between",
            WhereCondition::Pattern { .. } => "pattern",
            WhereCondition::Membership { .. } => "membership",
            WhereCondition::NullCheck { .. } => "null_check",
        }
    }
}

/// Storage for WHERE conditions, one append operation per condition kind.
///
/// The builder never reads anything back; each call is fire-and-forget.
pub trait StatementAccumulator {
    fn add_where_condition(
        &mut self,
        column: String,
        operand: Rhs,
        operator: CompareOp,
        separator: Separator,
    );

    fn add_where_between_condition(
        &mut self,
        column: String,
        low: Value,
        high: Value,
        separator: Separator,
        negated: bool,
    );

    fn add_where_like_condition(
        &mut self,
        column: String,
        pattern: String,
        separator: Separator,
        negated: bool,
    );

    fn add_where_in_condition(
        &mut self,
        column: String,
        source: InSource,
        separator: Separator,
        negated: bool,
    );

    fn add_where_null_condition(&mut self, column: String, separator: Separator, negated: bool);
}

/// Ordered, append-only list of WHERE conditions for one statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlStatement {
    wheres: Vec<WhereCondition>,
}

impl SqlStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated conditions, in call order.
    pub fn conditions(&self) -> &[WhereCondition] {
        &self.wheres
    }

    pub fn len(&self) -> usize {
        self.wheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wheres.is_empty()
    }

    pub fn into_conditions(self) -> Vec<WhereCondition> {
        self.wheres
    }

    fn push(&mut self, condition: WhereCondition) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            kind = condition.kind(),
            column = condition.column(),
            separator = %condition.separator(),
            negated = condition.is_negated(),
            position = self.wheres.len(),
            "where condition accumulated"
        );
        self.wheres.push(condition);
    }
}

impl StatementAccumulator for SqlStatement {
    fn add_where_condition(
        &mut self,
        column: String,
        operand: Rhs,
        operator: CompareOp,
        separator: Separator,
    ) {
        self.push(WhereCondition::Comparison {
            column,
            operator,
            operand,
            separator,
        });
    }

    fn add_where_between_condition(
        &mut self,
        column: String,
        low: Value,
        high: Value,
        separator: Separator,
        negated: bool,
    ) {
        self.push(WhereCondition::Between {
            column,
            low,
            high,
            separator,
            negated,
        });
    }

    fn add_where_like_condition(
        &mut self,
        column: String,
        pattern: String,
        separator: Separator,
        negated: bool,
    ) {
        self.push(WhereCondition::Pattern {
            column,
            pattern,
            separator,
            negated,
        });
    }

    fn add_where_in_condition(
        &mut self,
        column: String,
        source: InSource,
        separator: Separator,
        negated: bool,
    ) {
        self.push(WhereCondition::Membership {
            column,
            source,
            separator,
            negated,
        });
    }

    fn add_where_null_condition(&mut self, column: String, separator: Separator, negated: bool) {
        self.push(WhereCondition::NullCheck {
            column,
            separator,
            negated,
        });
    }
}
