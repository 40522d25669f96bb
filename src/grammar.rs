//! The interval grammar shared by the counting and the coverage engines.
//!
//! A noncrossing acyclic digraph on the nodes `min..=max` is built bottom-up
//! from shorter intervals. Every partial structure falls into exactly one
//! [`Category`]; the grammar has 26 rules that concatenate structures side by
//! side and cover an interval with a single outermost arc between `min` and
//! `max`. The rules are evaluated over a [`Score`], which decides whether
//! derivations are counted or the best one is kept.

use log::trace;
use num::{BigInt, One};

use crate::chart::IntervalChart;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Topped by the arc `min -> max`.
    MinMaxCovered,
    /// Topped by the arc `max -> min`.
    MaxMinCovered,
    /// Two or more `MinMaxCovered` pieces side by side.
    MinMaxConnected,
    /// Two or more `MaxMinCovered` pieces side by side.
    MaxMinConnected,
    /// Two or more covered pieces side by side, not all of the same direction.
    MixConnected,
    /// No arc joins the interval into one piece.
    Unconnected,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::MinMaxCovered,
        Category::MaxMinCovered,
        Category::MinMaxConnected,
        Category::MaxMinConnected,
        Category::MixConnected,
        Category::Unconnected,
    ];
}

use Category::*;

/// Value attached to a chart cell.
///
/// `concat` scores two structures placed side by side, `merge` combines
/// competing derivations of the same cell, and `cover` scores the arc that
/// tops an interval. `Default` is the neutral element of `merge`.
pub trait Score: Clone + Default {
    /// Score of the structure on two adjacent nodes with nothing drawn between them.
    fn unit() -> Self;

    fn concat(&self, other: &Self) -> Self;

    fn merge(self, other: Self) -> Self;

    /// Scores `self` topped by an arc; `admissible` tells whether that arc is wanted.
    fn cover(&self, admissible: bool) -> Self;

    fn accumulate(chart: &mut IntervalChart<Self>, min: usize, max: usize, val: Self) {
        let merged = chart.get(min, max).clone().merge(val);
        chart.set(min, max, merged);
    }
}

/// Number of derivations.
impl Score for BigInt {
    fn unit() -> Self {
        BigInt::one()
    }

    fn concat(&self, other: &Self) -> Self {
        self * other
    }

    fn merge(self, other: Self) -> Self {
        self + other
    }

    fn cover(&self, _admissible: bool) -> Self {
        self.clone()
    }

    fn accumulate(chart: &mut IntervalChart<Self>, min: usize, max: usize, val: Self) {
        chart.add(min, max, val);
    }
}

/// Number of admissible arcs in the best derivation.
impl Score for u32 {
    fn unit() -> Self {
        0
    }

    fn concat(&self, other: &Self) -> Self {
        self + other
    }

    fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    fn cover(&self, admissible: bool) -> Self {
        self + admissible as u32
    }

    fn accumulate(chart: &mut IntervalChart<Self>, min: usize, max: usize, val: Self) {
        chart.update_max(min, max, val);
    }
}

// (target, left, right): left on (min, mid) next to right on (mid, max).
const CONNECT: [(Category, Category, Category); 4] = [
    (MinMaxConnected, MinMaxCovered, MinMaxCovered),
    (MaxMinConnected, MaxMinCovered, MaxMinCovered),
    (MixConnected, MinMaxCovered, MaxMinCovered),
    (MixConnected, MaxMinCovered, MinMaxCovered),
];

const EXTEND: [(Category, Category, Category); 8] = [
    (MinMaxConnected, MinMaxConnected, MinMaxCovered),
    (MixConnected, MinMaxConnected, MaxMinCovered),
    (MixConnected, MaxMinConnected, MinMaxCovered),
    (MaxMinConnected, MaxMinConnected, MaxMinCovered),
    (MixConnected, MixConnected, MinMaxCovered),
    (MixConnected, MixConnected, MaxMinCovered),
    (Unconnected, Unconnected, MinMaxCovered),
    (Unconnected, Unconnected, MaxMinCovered),
];

// Sources topped by `min -> max`, then by `max -> min`.
const COVER_MIN_MAX: [Category; 3] = [MinMaxConnected, MixConnected, Unconnected];
const COVER_MAX_MIN: [Category; 3] = [MaxMinConnected, MixConnected, Unconnected];

/// One chart per [`Category`], filled for every interval of `size` nodes.
#[derive(Clone, Debug)]
pub struct Charts<S: Score> {
    charts: [IntervalChart<S>; 6],
}

impl<S: Score> Charts<S> {
    /// Runs the grammar over all intervals of `size` nodes.
    ///
    /// `admissible(source, target)` gates the covering arcs. Every interval is
    /// filled after all strictly shorter ones.
    pub fn fill<F>(size: usize, admissible: F) -> Charts<S>
    where
        F: Fn(usize, usize) -> bool,
    {
        assert!(size > 0, "the grammar needs at least one node");
        let mut charts = Charts {
            charts: std::array::from_fn(|_| IntervalChart::new(size)),
        };
        if size == 1 {
            charts.seed(0, 0);
            return charts;
        }
        for max in 1..size {
            for min in (0..max).rev() {
                charts.fill_cell(min, max, &admissible);
            }
            trace!("filled all intervals ending at {}", max);
        }
        charts
    }

    pub fn chart(&self, category: Category) -> &IntervalChart<S> {
        &self.charts[category as usize]
    }

    pub fn get(&self, category: Category, min: usize, max: usize) -> &S {
        self.chart(category).get(min, max)
    }

    /// The six category values over the full interval.
    pub fn totals(&self) -> CategoryTotals<S> {
        let last = self.charts[0].size() - 1;
        CategoryTotals {
            values: Category::ALL.map(|c| self.get(c, 0, last).clone()),
        }
    }

    fn seed(&mut self, min: usize, max: usize) {
        S::accumulate(&mut self.charts[Unconnected as usize], min, max, S::unit());
    }

    fn push(&mut self, target: Category, min: usize, max: usize, val: S) {
        S::accumulate(&mut self.charts[target as usize], min, max, val);
    }

    fn fill_cell<F>(&mut self, min: usize, max: usize, admissible: &F)
    where
        F: Fn(usize, usize) -> bool,
    {
        let len = max - min;

        // Two adjacent nodes with nothing between them.
        if len == 1 {
            self.seed(min, max);
        }

        // Rules 01-04: two covered pieces sharing the node `mid`.
        for &(target, left, right) in CONNECT.iter() {
            for mid in (min + 1)..max {
                let val = self.get(left, min, mid).concat(self.get(right, mid, max));
                self.push(target, min, max, val);
            }
        }

        // Rules 05-08: a covered piece and one loose node at either end.
        if len >= 2 {
            for covered in [MinMaxCovered, MaxMinCovered] {
                let val = self.get(covered, min, max - 1).clone();
                self.push(Unconnected, min, max, val);
                let val = self.get(covered, min + 1, max).clone();
                self.push(Unconnected, min, max, val);
            }
        }

        // Rules 09-14 and 18-19: extend a run by one more covered piece.
        for &(target, left, right) in EXTEND.iter() {
            for mid in (min + 2)..max {
                let val = self.get(left, min, mid).concat(self.get(right, mid, max));
                self.push(target, min, max, val);
            }
        }

        // Rules 15-17: a connected run and one loose node at the end.
        if len >= 3 {
            for connected in [MinMaxConnected, MaxMinConnected, MixConnected] {
                let val = self.get(connected, min, max - 1).clone();
                self.push(Unconnected, min, max, val);
            }
        }

        // Rule 20: also applies when `(min, max - 1)` is a single node.
        if len >= 2 {
            let val = self.get(Unconnected, min, max - 1).clone();
            self.push(Unconnected, min, max, val);
        }

        // Rules 21-26: top the interval with an arc.
        let min_max = admissible(min, max);
        for source in COVER_MIN_MAX {
            let val = self.get(source, min, max).cover(min_max);
            self.push(MinMaxCovered, min, max, val);
        }
        let max_min = admissible(max, min);
        for source in COVER_MAX_MIN {
            let val = self.get(source, min, max).cover(max_min);
            self.push(MaxMinCovered, min, max, val);
        }
    }
}

/// Values of the six categories over one interval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotals<S> {
    values: [S; 6],
}

impl<S: Score> CategoryTotals<S> {
    pub fn get(&self, category: Category) -> &S {
        &self.values[category as usize]
    }

    /// All categories merged: the sum of counts, or the best coverage.
    pub fn total(&self) -> S {
        self.values
            .iter()
            .cloned()
            .fold(S::default(), |acc, val| acc.merge(val))
    }
}
