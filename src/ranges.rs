//! Closed integer intervals and fusion into a disjoint set.

use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

/// A closed range `[lower, upper]` with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    lower: u64,
    upper: u64,
}

impl Interval {
    pub fn new(lower: u64, upper: u64) -> Option<Self> {
        (lower <= upper).then_some(Self { lower, upper })
    }

    pub fn lower(&self) -> u64 {
        self.lower
    }

    pub fn upper(&self) -> u64 {
        self.upper
    }

    pub fn contains(&self, point: u64) -> bool {
        self.lower <= point && point <= self.upper
    }

    /// Number of integers covered. `[0, u64::MAX]` holds 2^64 of them, hence `u128`.
    pub fn size(&self) -> u128 {
        u128::from(self.upper - self.lower) + 1
    }

    /// Merge two overlapping intervals; `None` if they share no point.
    ///
    /// The checks run in a fixed order: disjoint, containment (either way), overlap from the
    /// left, overlap from the right.
    pub fn fuse(self, other: Interval) -> Option<Interval> {
        let (a, b) = (self, other);
        if a.upper < b.lower || a.lower > b.upper {
            None
        } else if (a.lower >= b.lower && a.upper <= b.upper)
            || (b.lower >= a.lower && b.upper <= a.upper)
        {
            Some(Interval {
                lower: a.lower.min(b.lower),
                upper: a.upper.max(b.upper),
            })
        } else if a.lower < b.lower && a.upper >= b.lower {
            Some(Interval {
                lower: a.lower,
                upper: b.upper,
            })
        } else {
            Some(Interval {
                lower: b.lower,
                upper: a.upper,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("expected '<lower>-<upper>'")]
    MissingSeparator,
    #[error("invalid bound")]
    InvalidBound(#[from] ParseIntError),
    #[error("lower bound {0} exceeds upper bound {1}")]
    Inverted(u64, u64),
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = s
            .trim()
            .split_once('-')
            .ok_or(IntervalError::MissingSeparator)?;
        let lower = lower.trim().parse()?;
        let upper = upper.trim().parse()?;
        Interval::new(lower, upper).ok_or(IntervalError::Inverted(lower, upper))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source} in {raw:?}")]
pub struct ParseError {
    /// 1-based.
    pub line: usize,
    pub raw: String,
    #[source]
    pub source: IntervalError,
}

/// One interval per non-empty line, in input order. Stops at the first malformed line.
pub fn parse_intervals(text: &str) -> Result<Vec<Interval>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Interval>().map_err(|source| ParseError {
                line: i + 1,
                raw: line.to_string(),
                source,
            })
        })
        .collect()
}

/// Linear scan; `intervals` may overlap.
pub fn contains(point: u64, intervals: &[Interval]) -> bool {
    intervals.iter().any(|interval| interval.contains(point))
}

/// Pairwise disjoint intervals covering the same integers as the collection they were fused
/// from. Only [`fuse_all`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointIntervals(Vec<Interval>);

impl DisjointIntervals {
    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, point: u64) -> bool {
        contains(point, &self.0)
    }

    /// Disjoint `u64` intervals cover at most 2^64 integers, so the sum cannot overflow.
    pub fn total_coverage(&self) -> u128 {
        self.0.iter().map(Interval::size).sum()
    }
}

/// Fuse until a pass no longer shrinks the collection.
pub fn fuse_all(mut intervals: Vec<Interval>) -> DisjointIntervals {
    if intervals.len() < 2 {
        return DisjointIntervals(intervals);
    }
    loop {
        let fused = fuse_pass(&intervals);
        if fused.len() == intervals.len() {
            return DisjointIntervals(fused);
        }
        intervals = fused;
    }
}

/// Every interval is tried against every accumulated one. Each accumulated interval it overlaps
/// is replaced by the fusion; an interval that fuses with nothing is appended.
fn fuse_pass(intervals: &[Interval]) -> Vec<Interval> {
    let mut acc = vec![intervals[0]];
    for &interval in intervals {
        let mut fused_any = false;
        let mut next: Vec<Interval> = acc
            .iter()
            .map(|&existing| match interval.fuse(existing) {
                Some(fused) => {
                    fused_any = true;
                    fused
                }
                None => existing,
            })
            .collect();
        if !fused_any {
            next.push(interval);
        }
        acc = next;
    }
    acc
}
