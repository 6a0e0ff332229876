//// # Queries
////
//// The nine probability expressions a user can pick from, and the region of
//// the real line each of them refers to.

use crate::error::InvalidInput;
use std::fmt::Display;
use std::str::FromStr;

/// One entry of the query selector, without its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryKind {
    #[default]
    Equals,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    IntervalInclusive,
    IntervalExclusive,
    IntervalRightOpen,
    IntervalLeftOpen,
}

impl QueryKind {
    /// All kinds, in the order the selector lists them.
    pub const ALL: [QueryKind; 9] = [
        QueryKind::Equals,
        QueryKind::LessThan,
        QueryKind::GreaterThan,
        QueryKind::LessOrEqual,
        QueryKind::GreaterOrEqual,
        QueryKind::IntervalInclusive,
        QueryKind::IntervalExclusive,
        QueryKind::IntervalRightOpen,
        QueryKind::IntervalLeftOpen,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            QueryKind::Equals => "P(X = x)",
            QueryKind::LessThan => "P(X < x)",
            QueryKind::GreaterThan => "P(X > x)",
            QueryKind::LessOrEqual => "P(X <= x)",
            QueryKind::GreaterOrEqual => "P(X >= x)",
            QueryKind::IntervalInclusive => "P(a <= X <= b)",
            QueryKind::IntervalExclusive => "P(a < X < b)",
            QueryKind::IntervalRightOpen => "P(a <= X < b)",
            QueryKind::IntervalLeftOpen => "P(a < X <= b)",
        }
    }

    /// Whether the query takes the pair of bounds `a`, `b` rather than a single `x`.
    pub fn is_interval(&self) -> bool {
        matches!(
            self,
            QueryKind::IntervalInclusive
                | QueryKind::IntervalExclusive
                | QueryKind::IntervalRightOpen
                | QueryKind::IntervalLeftOpen
        )
    }
}

impl Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl FromStr for QueryKind {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        QueryKind::ALL
            .iter()
            .copied()
            .find(|k| k.text() == s)
            .ok_or_else(|| InvalidInput::UnknownQuery(s.to_owned()))
    }
}

/// A query together with its operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query {
    Equals(f64),
    LessThan(f64),
    LessOrEqual(f64),
    GreaterThan(f64),
    GreaterOrEqual(f64),
    /// `a <= X <= b`
    IntervalInclusive(f64, f64),
    /// `a < X < b`
    IntervalExclusive(f64, f64),
    /// `a < X <= b`
    IntervalLeftOpen(f64, f64),
    /// `a <= X < b`
    IntervalRightOpen(f64, f64),
}

impl Query {
    /// Builds a single-operand query. Returns `None` for interval kinds.
    pub fn point(kind: QueryKind, x: f64) -> Option<Self> {
        match kind {
            QueryKind::Equals => Some(Query::Equals(x)),
            QueryKind::LessThan => Some(Query::LessThan(x)),
            QueryKind::LessOrEqual => Some(Query::LessOrEqual(x)),
            QueryKind::GreaterThan => Some(Query::GreaterThan(x)),
            QueryKind::GreaterOrEqual => Some(Query::GreaterOrEqual(x)),
            _ => None,
        }
    }

    /// Builds an interval query, enforcing `a <= b`. Returns `Ok(None)` for
    /// single-operand kinds.
    pub fn interval(kind: QueryKind, a: f64, b: f64) -> Result<Option<Self>, InvalidInput> {
        if kind.is_interval() && a > b {
            return Err(InvalidInput::BoundsOutOfOrder);
        }
        Ok(match kind {
            QueryKind::IntervalInclusive => Some(Query::IntervalInclusive(a, b)),
            QueryKind::IntervalExclusive => Some(Query::IntervalExclusive(a, b)),
            QueryKind::IntervalLeftOpen => Some(Query::IntervalLeftOpen(a, b)),
            QueryKind::IntervalRightOpen => Some(Query::IntervalRightOpen(a, b)),
            _ => None,
        })
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Equals(_) => QueryKind::Equals,
            Query::LessThan(_) => QueryKind::LessThan,
            Query::LessOrEqual(_) => QueryKind::LessOrEqual,
            Query::GreaterThan(_) => QueryKind::GreaterThan,
            Query::GreaterOrEqual(_) => QueryKind::GreaterOrEqual,
            Query::IntervalInclusive(..) => QueryKind::IntervalInclusive,
            Query::IntervalExclusive(..) => QueryKind::IntervalExclusive,
            Query::IntervalLeftOpen(..) => QueryKind::IntervalLeftOpen,
            Query::IntervalRightOpen(..) => QueryKind::IntervalRightOpen,
        }
    }

    /// The part of the real line the query is about.
    pub fn region(&self) -> Region {
        match *self {
            Query::Equals(x) => Region::Point(x),
            Query::LessThan(x) => Region::Below {
                x,
                inclusive: false,
            },
            Query::LessOrEqual(x) => Region::Below { x, inclusive: true },
            Query::GreaterThan(x) => Region::Above {
                x,
                inclusive: false,
            },
            Query::GreaterOrEqual(x) => Region::Above { x, inclusive: true },
            Query::IntervalInclusive(a, b) => Region::Between {
                a,
                b,
                lower_inclusive: true,
                upper_inclusive: true,
            },
            Query::IntervalExclusive(a, b) => Region::Between {
                a,
                b,
                lower_inclusive: false,
                upper_inclusive: false,
            },
            Query::IntervalLeftOpen(a, b) => Region::Between {
                a,
                b,
                lower_inclusive: false,
                upper_inclusive: true,
            },
            Query::IntervalRightOpen(a, b) => Region::Between {
                a,
                b,
                lower_inclusive: true,
                upper_inclusive: false,
            },
        }
    }
}

/// Describes what to highlight when drawing the result: a single threshold,
/// or a lower/upper pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Point(f64),
    Below {
        x: f64,
        inclusive: bool,
    },
    Above {
        x: f64,
        inclusive: bool,
    },
    Between {
        a: f64,
        b: f64,
        lower_inclusive: bool,
        upper_inclusive: bool,
    },
}

impl Region {
    /// Whether `t` falls in the shaded area. A point region shades nothing.
    pub fn contains(&self, t: f64) -> bool {
        match *self {
            Region::Point(_) => false,
            Region::Below { x, inclusive } => t < x || (inclusive && t == x),
            Region::Above { x, inclusive } => t > x || (inclusive && t == x),
            Region::Between {
                a,
                b,
                lower_inclusive,
                upper_inclusive,
            } => {
                let above_a = t > a || (lower_inclusive && t == a);
                let below_b = t < b || (upper_inclusive && t == b);
                above_a && below_b
            }
        }
    }

    /// The thresholds that delimit the region, lower first.
    pub fn thresholds(&self) -> (f64, Option<f64>) {
        match *self {
            Region::Point(x) | Region::Below { x, .. } | Region::Above { x, .. } => (x, None),
            Region::Between { a, b, .. } => (a, Some(b)),
        }
    }
}
