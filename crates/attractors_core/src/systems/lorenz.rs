//! The Lorenz convection model.

use crate::error::{AttractorError, Result};
use crate::traits::VectorField;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Lorenz system
///
/// dx/dt = σ(y − x)
/// dy/dt = ρx − y − xz
/// dz/dt = xy − βz
///
/// Classical chaos occurs at σ = 10, ρ = 28, β = 8/3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lorenz {
    sigma: f64,
    rho: f64,
    beta: f64,
}

impl Lorenz {
    pub const DEFAULT_INITIAL_STATE: [f64; 3] = [1.0, 0.0, -1.0];
    pub const DEFAULT_TIME_SPAN: (f64, f64) = (0.0, 100.0);
    pub const DEFAULT_SAMPLES: usize = 10_000;

    pub fn new(sigma: f64, rho: f64, beta: f64) -> Result<Self> {
        super::ensure_finite_params("lorenz", &[sigma, rho, beta])?;
        Ok(Self { sigma, rho, beta })
    }

    pub(crate) fn from_slice(params: &[f64]) -> Result<Self> {
        match params {
            [] => Ok(Self::default()),
            [sigma, rho, beta] => Self::new(*sigma, *rho, *beta),
            _ => Err(AttractorError::config(format!(
                "lorenz expects 3 parameters (sigma, rho, beta), got {}.",
                params.len()
            ))),
        }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Fixed points of the flow: the origin, plus the symmetric pair C± when ρ > 1.
    pub fn equilibria(&self) -> Vec<[f64; 3]> {
        let mut points = vec![[0.0, 0.0, 0.0]];
        if self.rho > 1.0 && self.beta > 0.0 {
            let r = (self.beta * (self.rho - 1.0)).sqrt();
            points.push([r, r, self.rho - 1.0]);
            points.push([-r, -r, self.rho - 1.0]);
        }
        points
    }
}

impl Default for Lorenz {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl VectorField for Lorenz {
    fn name(&self) -> &str {
        "lorenz"
    }

    fn dimension(&self) -> usize {
        3
    }

    fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        let (px, py, pz) = (x[0], x[1], x[2]);
        out[0] = self.sigma * (py - px);
        out[1] = self.rho * px - py - px * pz;
        out[2] = px * py - self.beta * pz;
    }

    #[rustfmt::skip]
    fn jacobian(&self, x: &[f64]) -> DMatrix<f64> {
        let (px, py, pz) = (x[0], x[1], x[2]);
        DMatrix::from_row_slice(
            3,
            3,
            &[
                -self.sigma, self.sigma, 0.0,
                self.rho - pz, -1.0, -px,
                py, px, -self.beta,
            ],
        )
    }

    fn divergence(&self, _x: &[f64]) -> f64 {
        -self.sigma - 1.0 - self.beta
    }
}
