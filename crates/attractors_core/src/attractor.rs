//! Attractor: a vector field integrated from an initial state over a time domain.

use crate::analysis::jacobian_eigenvalues;
use crate::error::{AttractorError, Result};
use crate::solvers::{integrate, IntegrationStats, IntegratorSettings};
use crate::systems::{Chen, Lorenz, Rossler};
use crate::time_domain::{linspace, TimeDomain};
use crate::traits::VectorField;
use nalgebra::DMatrix;
use num_complex::Complex;
use tracing::{debug, warn};

/// A fully integrated trajectory of a [`VectorField`].
///
/// Construction validates the inputs and runs the solver to completion; a value
/// of this type always holds one state per time-domain sample and is never
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct Attractor<F: VectorField> {
    name: String,
    field: F,
    initial_state: Vec<f64>,
    time_domain: TimeDomain,
    settings: IntegratorSettings,
    trajectory: Vec<f64>,
    stats: IntegrationStats,
}

impl<F: VectorField> Attractor<F> {
    /// Integrates `field` with the default [`IntegratorSettings`].
    pub fn new(
        name: impl Into<String>,
        field: F,
        initial_state: Vec<f64>,
        time_domain: Vec<f64>,
    ) -> Result<Self> {
        Self::with_settings(
            name,
            field,
            initial_state,
            time_domain,
            IntegratorSettings::default(),
        )
    }

    pub fn with_settings(
        name: impl Into<String>,
        field: F,
        initial_state: Vec<f64>,
        time_domain: Vec<f64>,
        settings: IntegratorSettings,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AttractorError::config("Attractor name must not be empty."));
        }
        let dim = field.dimension();
        if initial_state.len() != dim {
            return Err(AttractorError::config(format!(
                "Initial state for '{}' has dimension {}, but the {} field has dimension {}.",
                name,
                initial_state.len(),
                field.name(),
                dim
            )));
        }
        let time_domain = TimeDomain::new(time_domain)?;
        settings.validate()?;

        debug!(
            attractor = %name,
            system = field.name(),
            samples = time_domain.len(),
            t_start = time_domain.start(),
            t_end = time_domain.end(),
            "integrating attractor"
        );

        let integration = integrate(&field, &initial_state, &time_domain, &settings)
            .map_err(|err| {
                warn!(attractor = %name, error = %err, "attractor integration failed");
                err
            })?;

        Ok(Self {
            name,
            field,
            initial_state,
            time_domain,
            settings,
            trajectory: integration.trajectory,
            stats: integration.stats,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn dimension(&self) -> usize {
        self.field.dimension()
    }

    pub fn initial_state(&self) -> &[f64] {
        &self.initial_state
    }

    pub fn time_domain(&self) -> &TimeDomain {
        &self.time_domain
    }

    pub fn settings(&self) -> &IntegratorSettings {
        &self.settings
    }

    pub fn stats(&self) -> IntegrationStats {
        self.stats
    }

    /// Number of trajectory samples; always equal to the time-domain length.
    pub fn len(&self) -> usize {
        self.time_domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major trajectory: sample `i` occupies `[i * dim, (i + 1) * dim)`.
    pub fn trajectory(&self) -> &[f64] {
        &self.trajectory
    }

    pub fn state(&self, index: usize) -> Option<&[f64]> {
        let dim = self.dimension();
        self.trajectory.get(index * dim..(index + 1) * dim)
    }

    pub fn final_state(&self) -> &[f64] {
        let dim = self.dimension();
        &self.trajectory[self.trajectory.len() - dim..]
    }

    /// Iterates over `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.time_domain
            .iter()
            .copied()
            .zip(self.trajectory.chunks_exact(self.dimension()))
    }

    /// Jacobian of the field at an arbitrary `position`.
    pub fn jacobian_matrix(&self, position: &[f64]) -> Result<DMatrix<f64>> {
        self.check_position(position)?;
        Ok(self.field.jacobian(position))
    }

    /// Jacobian at every trajectory sample, in time order.
    pub fn jacobian_along_trajectory(&self) -> Vec<DMatrix<f64>> {
        self.trajectory
            .chunks_exact(self.dimension())
            .map(|state| self.field.jacobian(state))
            .collect()
    }

    /// Eigenvalues of the Jacobian at `position`, sorted by descending real part.
    pub fn eigenvalues_at(&self, position: &[f64]) -> Result<Vec<Complex<f64>>> {
        let jacobian = self.jacobian_matrix(position)?;
        Ok(jacobian_eigenvalues(&jacobian))
    }

    fn check_position(&self, position: &[f64]) -> Result<()> {
        let expected = self.dimension();
        if position.len() != expected {
            return Err(AttractorError::DimensionMismatch {
                expected,
                got: position.len(),
            });
        }
        Ok(())
    }
}

impl Attractor<Lorenz> {
    /// Lorenz attractor with default parameters, initial state (1, 0, −1) and
    /// 10 000 samples over [0, 100].
    pub fn lorenz() -> Result<Self> {
        let (start, end) = Lorenz::DEFAULT_TIME_SPAN;
        Self::new(
            "lorenz",
            Lorenz::default(),
            Lorenz::DEFAULT_INITIAL_STATE.to_vec(),
            linspace(start, end, Lorenz::DEFAULT_SAMPLES),
        )
    }
}

impl Attractor<Rossler> {
    pub fn rossler() -> Result<Self> {
        Self::new(
            "rossler",
            Rossler::default(),
            vec![1.0, 1.0, 0.0],
            linspace(0.0, 200.0, 20_000),
        )
    }
}

impl Attractor<Chen> {
    pub fn chen() -> Result<Self> {
        Self::new(
            "chen",
            Chen::default(),
            vec![-10.0, 0.0, 37.0],
            linspace(0.0, 50.0, 10_000),
        )
    }
}
