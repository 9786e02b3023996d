//! Sample times at which a trajectory is reported.

use crate::error::{AttractorError, Result};
use serde::Serialize;
use std::ops::Deref;

/// Returns `n` evenly spaced samples over `[start, end]`, endpoint included.
///
/// Every call allocates a fresh vector; `n < 2` yields at most a single sample
/// and is rejected later by [`TimeDomain::new`].
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = end;
            samples
        }
    }
}

/// Validated, strictly increasing sequence of at least two finite sample times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeDomain(Vec<f64>);

impl TimeDomain {
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.len() < 2 {
            return Err(AttractorError::config(format!(
                "Time domain needs at least 2 samples, got {}.",
                samples.len()
            )));
        }
        if let Some(idx) = samples.iter().position(|t| !t.is_finite()) {
            return Err(AttractorError::config(format!(
                "Time domain sample {} is not finite ({}).",
                idx, samples[idx]
            )));
        }
        if let Some(idx) = samples.windows(2).position(|w| w[1] <= w[0]) {
            return Err(AttractorError::config(format!(
                "Time domain must be strictly increasing: t[{}] = {} is not greater than t[{}] = {}.",
                idx + 1,
                samples[idx + 1],
                idx,
                samples[idx]
            )));
        }
        Ok(Self(samples))
    }

    pub fn linspace(start: f64, end: f64, n: usize) -> Result<Self> {
        Self::new(linspace(start, end, n))
    }

    pub fn start(&self) -> f64 {
        self.0[0]
    }

    pub fn end(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for TimeDomain {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for TimeDomain {
    type Error = AttractorError;

    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Self::new(samples)
    }
}
