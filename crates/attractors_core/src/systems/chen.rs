use crate::error::{AttractorError, Result};
use crate::traits::VectorField;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Chen system: dx = a(y − x), dy = (c − a)x − xz + cy, dz = xy − bz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chen {
    a: f64,
    b: f64,
    c: f64,
}

impl Chen {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        super::ensure_finite_params("chen", &[a, b, c])?;
        Ok(Self { a, b, c })
    }

    pub(crate) fn from_slice(params: &[f64]) -> Result<Self> {
        match params {
            [] => Ok(Self::default()),
            [a, b, c] => Self::new(*a, *b, *c),
            _ => Err(AttractorError::config(format!(
                "chen expects 3 parameters (a, b, c), got {}.",
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

impl Default for Chen {
    fn default() -> Self {
        Self {
            a: 35.0,
            b: 3.0,
            c: 28.0,
        }
    }
}

impl VectorField for Chen {
    fn name(&self) -> &str {
        "chen"
    }

    fn dimension(&self) -> usize {
        3
    }

    fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        let (px, py, pz) = (x[0], x[1], x[2]);
        out[0] = self.a * (py - px);
        out[1] = (self.c - self.a) * px - px * pz + self.c * py;
        out[2] = px * py - self.b * pz;
    }

    #[rustfmt::skip]
    fn jacobian(&self, x: &[f64]) -> DMatrix<f64> {
        let (px, py, pz) = (x[0], x[1], x[2]);
        DMatrix::from_row_slice(
            3,
            3,
            &[
                -self.a, self.a, 0.0,
                self.c - self.a - pz, self.c, -px,
                py, px, -self.b,
            ],
        )
    }
}
