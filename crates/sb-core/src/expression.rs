//! Boolean expressions used as join conditions
//!
//! Relations never look inside a condition; they only check whether one is
//! present and ask it to serialize itself. [`Comparison`] and [`Logical`]
//! cover column-to-column predicates; anything else can plug in by
//! implementing [`BoolExpression`].

use std::fmt;
use std::sync::Arc;

use crate::buffer::SqlBuffer;
use crate::column::Column;
use crate::error::BuildResult;

/// A boolean SQL fragment
pub trait BoolExpression: fmt::Debug + Send + Sync {
    /// Write the fragment into `out`
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()>;

    /// `(self AND other)`
    fn and(self, other: impl Into<Condition>) -> Logical
    where
        Self: Sized + 'static,
    {
        Logical::new(LogicalOp::And, self, other)
    }

    /// `(self OR other)`
    fn or(self, other: impl Into<Condition>) -> Logical
    where
        Self: Sized + 'static,
    {
        Logical::new(LogicalOp::Or, self, other)
    }
}

/// Shared handle to a boolean expression
#[derive(Debug, Clone)]
pub struct Condition(Arc<dyn BoolExpression>);

impl Condition {
    /// Write the wrapped expression into `out`
    pub fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        self.0.serialize_sql(out)
    }
}

impl<E: BoolExpression + 'static> From<E> for Condition {
    fn from(expr: E) -> Self {
        Self(Arc::new(expr))
    }
}

/// Comparison operators between two columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => " = ",
            CompareOp::NotEq => " <> ",
            CompareOp::Lt => " < ",
            CompareOp::LtEq => " <= ",
            CompareOp::Gt => " > ",
            CompareOp::GtEq => " >= ",
        }
    }
}

/// `lhs <op> rhs` over two column references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    lhs: Column,
    op: CompareOp,
    rhs: Column,
}

impl Comparison {
    pub fn new(lhs: Column, op: CompareOp, rhs: Column) -> Self {
        Self { lhs, op, rhs }
    }
}

impl BoolExpression for Comparison {
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        self.lhs.serialize_sql(out);
        out.push_str(self.op.symbol());
        self.rhs.serialize_sql(out);
        Ok(())
    }
}

/// Logical connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// Parenthesized `(lhs AND rhs)` / `(lhs OR rhs)`
#[derive(Debug, Clone)]
pub struct Logical {
    op: LogicalOp,
    lhs: Condition,
    rhs: Condition,
}

impl Logical {
    pub fn new(op: LogicalOp, lhs: impl Into<Condition>, rhs: impl Into<Condition>) -> Self {
        Self {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }
}

impl BoolExpression for Logical {
    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        out.push_str("(");
        self.lhs.serialize_sql(out)?;
        match self.op {
            LogicalOp::And => out.push_keyword(" AND "),
            LogicalOp::Or => out.push_keyword(" OR "),
        }
        self.rhs.serialize_sql(out)?;
        out.push_str(")");
        Ok(())
    }
}

#[cfg(test)]
#[path = "expression_test.rs"]
mod tests;
