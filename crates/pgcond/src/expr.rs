//! Deferred expressions.
//!
//! A [`Closure`] is a callback the compiler invokes later with an [`Expression`]
//! handle. It is how a condition says "compare against another column" or
//! "match against a sub-query" without carrying SQL text: the closure records
//! what it wants on the expression and the compiler decides how to render it.
//!
//! ```
//! use pgcond::{Closure, SubQuery, StatementContext};
//!
//! let other_column = Closure::column_ref("orders.user_id");
//!
//! let big_spenders = Closure::new(|expr| {
//!     expr.subquery(
//!         SubQuery::new()
//!             .from(["orders"])
//!             .select(["user_id"])
//!             .where_("total")
//!             .gt(100),
//!     );
//! });
//!
//! assert_eq!(other_column.evaluate().nodes().len(), 1);
//! assert_ne!(big_spenders, other_column);
//! ```

use crate::separator::Separator;
use crate::statement::{SqlStatement, StatementAccumulator, WhereCondition};
use crate::value::Value;
use crate::where_statement::StatementContext;
use std::fmt;
use std::sync::Arc;

/// One recorded piece of an [`Expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// A column reference, possibly qualified (`table.column`).
    Column(String),
    /// A literal to be bound as a parameter.
    Value(Value),
    /// An operator or keyword token placed between other nodes.
    Op(String),
    /// A nested SELECT.
    SubQuery(Box<SubQuery>),
}

/// Expression-builder handle passed to deferred closures.
///
/// Records nodes in call order; rendering them is the compiler's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    nodes: Vec<ExprNode>,
}

impl Expression {
    /// Create an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a column reference.
    pub fn column(&mut self, name: impl Into<String>) -> &mut Self {
        self.nodes.push(ExprNode::Column(name.into()));
        self
    }

    /// Record a literal value.
    pub fn value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.nodes.push(ExprNode::Value(value.into()));
        self
    }

    /// Record an operator token such as `+` or `||`.
    pub fn op(&mut self, op: impl Into<String>) -> &mut Self {
        self.nodes.push(ExprNode::Op(op.into()));
        self
    }

    /// Record a nested sub-query.
    pub fn subquery(&mut self, query: SubQuery) -> &mut Self {
        self.nodes.push(ExprNode::SubQuery(Box::new(query)));
        self
    }

    /// Recorded nodes, in call order.
    pub fn nodes(&self) -> &[ExprNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<ExprNode> {
        self.nodes
    }
}

/// A deferred expression: applied to an [`Expression`] when the statement is compiled.
///
/// Closures are cheap to clone (the callback is shared). Two closures compare
/// equal when applying them records the same nodes, so condition descriptions
/// holding closures can still be compared structurally.
///
/// `Debug` and `PartialEq` both run the callback. A callback with side effects
/// repeats them on every `{:?}` or `==`, and one that records a non-deterministic
/// or NaN value is not equal to itself unless compared against the same clone.
#[derive(Clone)]
pub struct Closure(Arc<dyn Fn(&mut Expression) + Send + Sync>);

impl Closure {
    /// Wrap a callback.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Expression) + Send + Sync + 'static,
    {
        Closure(Arc::new(f))
    }

    /// A closure that records a single column reference.
    pub fn column_ref(column: impl Into<String>) -> Self {
        let column = column.into();
        Closure::new(move |expr| {
            expr.column(column.as_str());
        })
    }

    /// Apply this closure against an expression builder.
    pub fn apply(&self, expr: &mut Expression) {
        (self.0)(expr);
    }

    /// Apply this closure against a fresh expression and return what it recorded.
    pub fn evaluate(&self) -> Expression {
        let mut expr = Expression::new();
        self.apply(&mut expr);
        expr
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Closure").field(&self.evaluate().nodes).finish()
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.evaluate() == other.evaluate()
    }
}

/// A nested `SELECT` used as a membership source or expression node.
///
/// It is a [`StatementContext`] of its own, so its filter is described with the
/// same `where_(..).is(..)` chain as the outer statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubQuery {
    tables: Vec<String>,
    columns: Vec<String>,
    distinct: bool,
    statement: SqlStatement,
}

impl SubQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tables to select from.
    pub fn from<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    /// Set the selected columns. No columns means `*`.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the sub-query as `SELECT DISTINCT`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// The sub-query's own WHERE conditions.
    pub fn conditions(&self) -> &[WhereCondition] {
        self.statement.conditions()
    }

    /// Check whether any condition joined with `separator` was recorded.
    pub fn has_separator(&self, separator: Separator) -> bool {
        self.conditions()
            .iter()
            .any(|c| c.separator() == separator)
    }
}

impl StatementContext for SubQuery {
    fn accumulator(&mut self) -> &mut dyn StatementAccumulator {
        &mut self.statement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{CompareOp, Rhs};

    #[test]
    fn column_ref_records_single_column() {
        let closure = Closure::column_ref("other_table.id");
        let expr = closure.evaluate();
        assert_eq!(expr.nodes(), &[ExprNode::Column("other_table.id".into())]);
    }

    #[test]
    fn closures_compare_by_recorded_nodes() {
        let a = Closure::column_ref("a.id");
        let b = Closure::new(|expr| {
            expr.column("a.id");
        });
        let c = Closure::column_ref("b.id");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn expression_records_in_call_order() {
        let mut expr = Expression::new();
        expr.column("price").op("*").value(2);
        assert_eq!(
            expr.into_nodes(),
            vec![
                ExprNode::Column("price".into()),
                ExprNode::Op("*".into()),
                ExprNode::Value(Value::Int(2)),
            ]
        );
    }

    #[test]
    fn subquery_carries_its_own_conditions() {
        let query = SubQuery::new()
            .from(["orders"])
            .select(["user_id"])
            .distinct()
            .where_("total")
            .gt(100)
            .or_where("status")
            .is("vip");

        assert_eq!(query.tables(), ["orders"]);
        assert_eq!(query.columns(), ["user_id"]);
        assert!(query.is_distinct());
        assert_eq!(query.conditions().len(), 2);
        assert!(query.has_separator(Separator::Or));
        assert_eq!(
            query.conditions()[0],
            WhereCondition::Comparison {
                column: "total".into(),
                operator: CompareOp::Gt,
                operand: Rhs::Literal(Value::Int(100)),
                separator: Separator::And,
            }
        );
    }

    #[test]
    fn debug_shows_recorded_nodes() {
        let closure = Closure::column_ref("x");
        assert_eq!(format!("{closure:?}"), r#"Closure([Column("x")])"#);
    }

    #[test]
    fn debug_and_eq_run_the_callback() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = Arc::clone(&calls);
            Closure::new(move |expr| {
                calls.fetch_add(1, Ordering::SeqCst);
                expr.column("x");
            })
        };

        let _ = format!("{counted:?}");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(counted, Closure::column_ref("x"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // same Arc short-circuits
        assert_eq!(counted, counted.clone());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let nan = Closure::new(|expr| {
            expr.value(f64::NAN);
        });
        let nan_copy = Closure::new(|expr| {
            expr.value(f64::NAN);
        });
        assert_ne!(nan, nan_copy);
        assert_eq!(nan, nan.clone());
    }
}
