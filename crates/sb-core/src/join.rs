//! Join composites
//!
//! A [`JoinTable`] combines two relations under a [`JoinKind`] and is itself a
//! relation, so joins nest: `a.inner_join(b, c1).inner_join(c, c2)` builds
//! `((a JOIN b) JOIN c)`. Construction never fails; a missing side or a
//! missing condition surfaces when the join is serialized.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::buffer::SqlBuffer;
use crate::column::Column;
use crate::error::{BuildError, BuildResult};
use crate::expression::Condition;
use crate::relation::{ReadableTable, Relation, TableExpression};

/// Kind of join, deciding the emitted keyword and whether ON is required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    /// Keyword with surrounding spaces, e.g. `" LEFT JOIN "`
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => " JOIN ",
            JoinKind::Left => " LEFT JOIN ",
            JoinKind::Right => " RIGHT JOIN ",
            JoinKind::Full => " FULL JOIN ",
            JoinKind::Cross => " CROSS JOIN ",
        }
    }

    /// Every kind except CROSS needs an ON condition
    pub fn requires_condition(self) -> bool {
        !matches!(self, JoinKind::Cross)
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        };
        f.write_str(s)
    }
}

/// Two relations joined under a kind and optional ON condition
#[derive(Debug, Clone)]
pub struct JoinTable {
    lhs: Option<Relation>,
    rhs: Option<Relation>,
    kind: JoinKind,
    condition: Option<Condition>,
}

impl JoinTable {
    /// Build a join without validating it.
    ///
    /// A condition passed with [`JoinKind::Cross`] is dropped.
    pub fn new(
        lhs: Option<Relation>,
        rhs: Option<Relation>,
        kind: JoinKind,
        condition: Option<Condition>,
    ) -> Self {
        let condition = if kind.requires_condition() {
            condition
        } else {
            None
        };
        Self {
            lhs,
            rhs,
            kind,
            condition,
        }
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    pub fn lhs(&self) -> Option<&Relation> {
        self.lhs.as_ref()
    }

    pub fn rhs(&self) -> Option<&Relation> {
        self.rhs.as_ref()
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

impl TableExpression for JoinTable {
    fn schema_name(&self) -> &str {
        ""
    }

    fn name(&self) -> &str {
        ""
    }

    /// Left columns then right columns; names present on both sides are
    /// returned twice
    fn columns(&self) -> Vec<Column> {
        let mut columns = Vec::new();
        if let Some(lhs) = &self.lhs {
            columns.extend(lhs.columns());
        }
        if let Some(rhs) = &self.rhs {
            columns.extend(rhs.columns());
        }
        columns
    }

    fn serialize_sql(&self, out: &mut SqlBuffer) -> BuildResult<()> {
        let Some(lhs) = &self.lhs else {
            return Err(BuildError::MissingLhs {
                sql: out.as_str().to_string(),
            });
        };
        let Some(rhs) = &self.rhs else {
            return Err(BuildError::MissingRhs {
                sql: out.as_str().to_string(),
            });
        };
        if self.condition.is_none() && self.kind.requires_condition() {
            return Err(BuildError::MissingCondition {
                kind: self.kind.to_string(),
                sql: out.as_str().to_string(),
            });
        }

        lhs.serialize_sql(out)?;
        out.push_keyword(self.kind.keyword());
        rhs.serialize_sql(out)?;

        if let Some(condition) = &self.condition {
            out.push_keyword(" ON ");
            condition.serialize_sql(out)?;
        }

        Ok(())
    }
}

impl ReadableTable for JoinTable {
    fn to_relation(&self) -> Relation {
        Relation::from(self.clone())
    }
}

/// `lhs JOIN rhs ON on`
pub fn inner_join(
    lhs: impl Into<Relation>,
    rhs: impl Into<Relation>,
    on: Option<Condition>,
) -> Relation {
    join(lhs, rhs, JoinKind::Inner, on)
}

/// `lhs LEFT JOIN rhs ON on`
pub fn left_join(
    lhs: impl Into<Relation>,
    rhs: impl Into<Relation>,
    on: Option<Condition>,
) -> Relation {
    join(lhs, rhs, JoinKind::Left, on)
}

/// `lhs RIGHT JOIN rhs ON on`
pub fn right_join(
    lhs: impl Into<Relation>,
    rhs: impl Into<Relation>,
    on: Option<Condition>,
) -> Relation {
    join(lhs, rhs, JoinKind::Right, on)
}

/// `lhs FULL JOIN rhs ON on`
pub fn full_join(
    lhs: impl Into<Relation>,
    rhs: impl Into<Relation>,
    on: Option<Condition>,
) -> Relation {
    join(lhs, rhs, JoinKind::Full, on)
}

/// `lhs CROSS JOIN rhs`
pub fn cross_join(lhs: impl Into<Relation>, rhs: impl Into<Relation>) -> Relation {
    join(lhs, rhs, JoinKind::Cross, None)
}

fn join(
    lhs: impl Into<Relation>,
    rhs: impl Into<Relation>,
    kind: JoinKind,
    on: Option<Condition>,
) -> Relation {
    Relation::from(JoinTable::new(
        Some(lhs.into()),
        Some(rhs.into()),
        kind,
        on,
    ))
}

#[cfg(test)]
#[path = "join_test.rs"]
mod tests;
