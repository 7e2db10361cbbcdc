//! Bounded history of recent optimization results.
//!
//! Keeps the last [`history::CAPACITY`] `(perimeter, maxArea)` pairs in
//! insertion order and derives running statistics from them on demand.
//! Nothing is maintained incrementally: with at most 20 samples, a full
//! scan per read is cheaper than keeping aggregates coherent.

use std::collections::VecDeque;

use crate::config::history;

/// Running statistics over the current buffer contents.
///
/// All fields are zero while the buffer is empty; that is a valid state,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HistoryStats {
    /// Number of retained samples, `min(total recorded, capacity)`.
    pub count: usize,
    /// Arithmetic mean of the retained perimeters.
    pub mean_perimeter: f64,
    /// Arithmetic mean of the retained areas.
    pub mean_area: f64,
    /// Largest area among the retained samples.
    pub max_area_seen: f64,
}

/// FIFO buffer of recent `(perimeter, maxArea)` pairs.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    samples: VecDeque<(f64, f64)>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(history::CAPACITY),
        }
    }

    /// Appends a sample, evicting the oldest one once capacity is reached.
    pub fn record(&mut self, perimeter: f64, max_area: f64) {
        if self.samples.len() == history::CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back((perimeter, max_area));
    }

    /// Retained samples in insertion order (oldest first).
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Computes the running statistics from the current contents.
    pub fn stats(&self) -> HistoryStats {
        if self.samples.is_empty() {
            return HistoryStats {
                count: 0,
                mean_perimeter: 0.0,
                mean_area: 0.0,
                max_area_seen: 0.0,
            };
        }

        let count = self.samples.len();
        let mut sum_perimeter = 0.0;
        let mut sum_area = 0.0;
        let mut max_area_seen = f64::NEG_INFINITY;
        for &(perimeter, area) in &self.samples {
            sum_perimeter += perimeter;
            sum_area += area;
            max_area_seen = max_area_seen.max(area);
        }

        HistoryStats {
            count,
            mean_perimeter: sum_perimeter / count as f64,
            mean_area: sum_area / count as f64,
            max_area_seen,
        }
    }
}
