//! Iteration observers for the iterative solvers.
//!
//! Solvers report each completed sweep to an [`IterationSink`]. The default
//! [`NullSink`] discards the reports, so an untraced solve does no extra
//! work; [`HistorySink`] retains the full trajectory for inspection.

/// Observer invoked once per completed iteration with the current
/// approximation.
pub trait IterationSink {
    fn record(&mut self, iteration: usize, approx: &[f64]);
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl IterationSink for NullSink {
    fn record(&mut self, _iteration: usize, _approx: &[f64]) {}
}

/// Retains every record as `(iteration, approximation)` pairs.
#[derive(Debug, Default, Clone)]
pub struct HistorySink {
    pub records: Vec<(usize, Vec<f64>)>,
}

impl HistorySink {
    pub fn new() -> Self {
        HistorySink::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Last recorded approximation, if any iteration ran.
    pub fn last(&self) -> Option<&[f64]> {
        self.records.last().map(|(_, approx)| approx.as_slice())
    }
}

impl IterationSink for HistorySink {
    fn record(&mut self, iteration: usize, approx: &[f64]) {
        self.records.push((iteration, approx.to_vec()));
    }
}

impl<F: FnMut(usize, &[f64])> IterationSink for F {
    fn record(&mut self, iteration: usize, approx: &[f64]) {
        self(iteration, approx)
    }
}
