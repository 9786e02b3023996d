use crate::error::{AttractorError, Result};
use crate::traits::VectorField;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Rössler system: dx = −y − z, dy = x + ay, dz = b + z(x − c).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rossler {
    a: f64,
    b: f64,
    c: f64,
}

impl Rossler {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        super::ensure_finite_params("rossler", &[a, b, c])?;
        Ok(Self { a, b, c })
    }

    pub(crate) fn from_slice(params: &[f64]) -> Result<Self> {
        match params {
            [] => Ok(Self::default()),
            [a, b, c] => Self::new(*a, *b, *c),
            _ => Err(AttractorError::config(format!(
                "rossler expects 3 parameters (a, b, c), got {}.",
                params.len()
            ))),
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl Default for Rossler {
    fn default() -> Self {
        Self {
            a: 0.2,
            b: 0.2,
            c: 5.7,
        }
    }
}

impl VectorField for Rossler {
    fn name(&self) -> &str {
        "rossler"
    }

    fn dimension(&self) -> usize {
        3
    }

    fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        out[0] = -x[1] - x[2];
        out[1] = x[0] + self.a * x[1];
        out[2] = self.b + x[2] * (x[0] - self.c);
    }

    #[rustfmt::skip]
    fn jacobian(&self, x: &[f64]) -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[
                0.0, -1.0, -1.0,
                1.0, self.a, 0.0,
                x[2], 0.0, x[0] - self.c,
            ],
        )
    }
}
