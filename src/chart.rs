use std::ops::AddAssign;

/// Triangular table holding one value per node interval `(min, max)` with
/// `min <= max < size`, stored row after row in a single buffer.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct IntervalChart<T: Clone + Default> {
    size: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> IntervalChart<T> {
    pub fn new(size: usize) -> IntervalChart<T> {
        IntervalChart {
            size,
            data: vec![T::default(); size * (size + 1) / 2],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // Row `min` starts after the rows of all smaller `min`, row `i` holding `size - i` cells.
    fn index(&self, min: usize, max: usize) -> usize {
        assert!(
            min <= max && max < self.size,
            "interval ({}, {}) outside chart of size {}",
            min,
            max,
            self.size
        );
        min * self.size - min * min.saturating_sub(1) / 2 + (max - min)
    }

    pub fn get(&self, min: usize, max: usize) -> &T {
        &self.data[self.index(min, max)]
    }

    pub fn set(&mut self, min: usize, max: usize, val: T) {
        let i = self.index(min, max);
        self.data[i] = val;
    }
}

impl<T: Clone + Default + AddAssign> IntervalChart<T> {
    pub fn add(&mut self, min: usize, max: usize, val: T) {
        let i = self.index(min, max);
        self.data[i] += val;
    }
}

impl<T: Clone + Default + Ord> IntervalChart<T> {
    pub fn update_max(&mut self, min: usize, max: usize, val: T) {
        let i = self.index(min, max);
        if val > self.data[i] {
            self.data[i] = val;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num::BigInt;
    use test_log::test;

    #[test]
    fn test_cells_are_distinct() {
        let n = 7;
        let mut chart: IntervalChart<usize> = IntervalChart::new(n);
        let mut k = 0;
        for min in 0..n {
            for max in min..n {
                k += 1;
                chart.set(min, max, k);
            }
        }
        assert_eq!(k, n * (n + 1) / 2);

        let mut k = 0;
        for min in 0..n {
            for max in min..n {
                k += 1;
                assert_eq!(*chart.get(min, max), k);
            }
        }
    }

    #[test]
    fn test_unset_cells_read_zero() {
        let chart: IntervalChart<BigInt> = IntervalChart::new(4);
        assert_eq!(*chart.get(0, 3), BigInt::from(0));
        assert_eq!(*chart.get(2, 2), BigInt::from(0));
    }

    #[test]
    fn test_add() {
        let mut chart: IntervalChart<BigInt> = IntervalChart::new(3);
        chart.add(0, 2, BigInt::from(5));
        chart.add(0, 2, BigInt::from(7));
        assert_eq!(*chart.get(0, 2), BigInt::from(12));
        assert_eq!(*chart.get(1, 2), BigInt::from(0));
    }

    #[test]
    fn test_update_max() {
        let mut chart: IntervalChart<u32> = IntervalChart::new(3);
        chart.update_max(1, 2, 4);
        chart.update_max(1, 2, 2);
        assert_eq!(*chart.get(1, 2), 4);
        chart.update_max(1, 2, 9);
        assert_eq!(*chart.get(1, 2), 9);
    }

    #[test]
    #[should_panic]
    fn test_reversed_interval_panics() {
        let chart: IntervalChart<u32> = IntervalChart::new(3);
        chart.get(2, 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let mut chart: IntervalChart<u32> = IntervalChart::new(3);
        chart.set(0, 3, 1);
    }
}
