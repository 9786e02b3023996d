//! Concrete attractor families.
//!
//! Each family is a plain parameter struct implementing [`VectorField`]. The
//! [`System`] enum dispatches over all of them so callers can pick a family by
//! name at runtime.

mod chen;
mod lorenz;
mod rossler;

pub use chen::Chen;
pub use lorenz::Lorenz;
pub use rossler::Rossler;

use crate::error::{AttractorError, Result};
use crate::traits::VectorField;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Names accepted by [`System::from_name`].
pub const SYSTEM_NAMES: [&str; 3] = ["lorenz", "rossler", "chen"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum System {
    Lorenz(Lorenz),
    Rossler(Rossler),
    Chen(Chen),
}

impl System {
    /// Builds a family by name. An empty `params` slice selects the family defaults.
    pub fn from_name(name: &str, params: &[f64]) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lorenz" => Lorenz::from_slice(params).map(System::Lorenz),
            "rossler" | "rössler" => Rossler::from_slice(params).map(System::Rossler),
            "chen" => Chen::from_slice(params).map(System::Chen),
            other => Err(AttractorError::config(format!(
                "Unknown system '{}'. Expected one of: {}.",
                other,
                SYSTEM_NAMES.join(", ")
            ))),
        }
    }

    fn inner(&self) -> &dyn VectorField {
        match self {
            System::Lorenz(s) => s,
            System::Rossler(s) => s,
            System::Chen(s) => s,
        }
    }
}

impl VectorField for System {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn dimension(&self) -> usize {
        self.inner().dimension()
    }

    fn derivative(&self, t: f64, x: &[f64], out: &mut [f64]) {
        self.inner().derivative(t, x, out)
    }

    fn jacobian(&self, x: &[f64]) -> DMatrix<f64> {
        self.inner().jacobian(x)
    }

    fn divergence(&self, x: &[f64]) -> f64 {
        self.inner().divergence(x)
    }
}

impl From<Lorenz> for System {
    fn from(value: Lorenz) -> Self {
        System::Lorenz(value)
    }
}

impl From<Rossler> for System {
    fn from(value: Rossler) -> Self {
        System::Rossler(value)
    }
}

impl From<Chen> for System {
    fn from(value: Chen) -> Self {
        System::Chen(value)
    }
}

fn ensure_finite_params(family: &str, params: &[f64]) -> Result<()> {
    if let Some(idx) = params.iter().position(|p| !p.is_finite()) {
        return Err(AttractorError::config(format!(
            "{} parameter {} is not finite ({}).",
            family, idx, params[idx]
        )));
    }
    Ok(())
}
