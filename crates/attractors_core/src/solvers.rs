//! Runge–Kutta integration of a [`VectorField`] over a [`TimeDomain`].

use crate::error::{AttractorError, Result};
use crate::tableau::{Tableau, DOPRI5, RK4, TSIT5};
use crate::time_domain::TimeDomain;
use crate::traits::VectorField;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMethod {
    /// Classic RK4 with a fixed step (`IntegratorSettings::fixed_step`).
    Rk4,
    /// Tsitouras 5(4) with adaptive step control.
    Tsit5,
    /// Dormand–Prince 5(4) with adaptive step control.
    Dopri5,
}

impl IntegrationMethod {
    pub fn tableau(self) -> &'static Tableau {
        match self {
            IntegrationMethod::Rk4 => &RK4,
            IntegrationMethod::Tsit5 => &TSIT5,
            IntegrationMethod::Dopri5 => &DOPRI5,
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rk4" => Ok(IntegrationMethod::Rk4),
            "tsit5" => Ok(IntegrationMethod::Tsit5),
            "dopri5" | "rk45" => Ok(IntegrationMethod::Dopri5),
            other => Err(AttractorError::config(format!(
                "Unknown integration method '{}'.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntegratorSettings {
    pub method: IntegrationMethod,
    pub relative_tolerance: f64,
    pub absolute_tolerance: f64,
    /// First trial step for adaptive methods. Estimated from the field when `None`.
    #[serde(default)]
    pub initial_step: Option<f64>,
    #[serde(default)]
    pub max_step: Option<f64>,
    pub fixed_step: f64,
    pub min_step: f64,
    /// Hard budget on attempted steps (accepted plus rejected) over the whole domain.
    pub max_steps: usize,
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        Self {
            method: IntegrationMethod::Dopri5,
            relative_tolerance: 1e-9,
            absolute_tolerance: 1e-9,
            initial_step: None,
            max_step: None,
            fixed_step: 1e-3,
            min_step: 1e-12,
            max_steps: 2_000_000,
        }
    }
}

impl IntegratorSettings {
    pub fn with_method(method: IntegrationMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(value: f64, what: &str) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AttractorError::config(format!(
                    "{} must be positive and finite, got {}.",
                    what, value
                )))
            }
        }

        positive(self.relative_tolerance, "relative_tolerance")?;
        positive(self.absolute_tolerance, "absolute_tolerance")?;
        positive(self.fixed_step, "fixed_step")?;
        if let Some(h) = self.initial_step {
            positive(h, "initial_step")?;
        }
        if let Some(h) = self.max_step {
            positive(h, "max_step")?;
        }
        if !(self.min_step.is_finite() && self.min_step >= 0.0) {
            return Err(AttractorError::config(format!(
                "min_step must be non-negative and finite, got {}.",
                self.min_step
            )));
        }
        if self.max_steps == 0 {
            return Err(AttractorError::config(
                "max_steps must be greater than zero.",
            ));
        }
        Ok(())
    }
}

/// Work counters for a finished integration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegrationStats {
    pub accepted_steps: usize,
    pub rejected_steps: usize,
    pub evaluations: usize,
}

impl IntegrationStats {
    pub fn attempted_steps(&self) -> usize {
        self.accepted_steps + self.rejected_steps
    }
}

/// Output of [`integrate`]: one state per sample time, stored row-major.
#[derive(Debug, Clone)]
pub struct Integration {
    pub trajectory: Vec<f64>,
    pub stats: IntegrationStats,
}

/// Explicit Runge–Kutta stepper over a borrowed tableau.
pub struct RungeKutta {
    tableau: &'static Tableau,
    stages: Vec<Vec<f64>>,
    tmp: Vec<f64>,
    first_stage_valid: bool,
    evaluations: usize,
}

impl RungeKutta {
    pub fn new(tableau: &'static Tableau, dim: usize) -> Self {
        Self {
            tableau,
            stages: vec![vec![0.0; dim]; tableau.stages()],
            tmp: vec![0.0; dim],
            first_stage_valid: false,
            evaluations: 0,
        }
    }

    pub fn tableau(&self) -> &'static Tableau {
        self.tableau
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Derivative at the current state, as cached by the last attempt.
    pub fn first_stage(&self) -> Option<&[f64]> {
        self.first_stage_valid.then(|| self.stages[0].as_slice())
    }

    /// Computes a trial step of size `h` from `(t, state)` into `out`.
    ///
    /// Returns the RMS error norm scaled by `atol + rtol * max(|y0|, |y1|)` for
    /// embedded tableaus and `0.0` for fixed-step ones. `state` is not modified;
    /// call [`RungeKutta::accept`] once the caller adopts `out`.
    pub fn attempt(
        &mut self,
        field: &impl VectorField,
        t: f64,
        state: &[f64],
        h: f64,
        out: &mut [f64],
        rtol: f64,
        atol: f64,
    ) -> f64 {
        let tableau = self.tableau;
        let dim = state.len();

        if !self.first_stage_valid {
            field.derivative(t, state, &mut self.stages[0]);
            self.evaluations += 1;
            self.first_stage_valid = true;
        }

        for i in 1..tableau.stages() {
            let row = tableau.a[i];
            for k in 0..dim {
                let mut acc = 0.0;
                for (j, &a) in row.iter().enumerate() {
                    acc += a * self.stages[j][k];
                }
                self.tmp[k] = state[k] + h * acc;
            }
            field.derivative(t + tableau.c[i] * h, &self.tmp, &mut self.stages[i]);
            self.evaluations += 1;
        }

        for k in 0..dim {
            let mut acc = 0.0;
            for (j, &b) in tableau.b.iter().enumerate() {
                acc += b * self.stages[j][k];
            }
            out[k] = state[k] + h * acc;
        }

        let Some(weights) = tableau.error else {
            return 0.0;
        };
        let mut sum_sq = 0.0;
        for k in 0..dim {
            let mut err = 0.0;
            for (j, &e) in weights.iter().enumerate() {
                err += e * self.stages[j][k];
            }
            let scale = atol + rtol * state[k].abs().max(out[k].abs());
            let ratio = h * err / scale;
            sum_sq += ratio * ratio;
        }
        (sum_sq / dim as f64).sqrt()
    }

    /// Marks the last trial step as taken.
    pub fn accept(&mut self) {
        if self.tableau.fsal {
            let last = self.stages.len() - 1;
            self.stages.swap(0, last);
        } else {
            self.first_stage_valid = false;
        }
    }
}

/// Integrates `field` from `initial_state` at `times[0]`, sampling the solution
/// at every entry of `times`.
pub fn integrate<F: VectorField>(
    field: &F,
    initial_state: &[f64],
    times: &TimeDomain,
    settings: &IntegratorSettings,
) -> Result<Integration> {
    let dim = field.dimension();
    if dim == 0 {
        return Err(AttractorError::config("Vector field has zero dimension."));
    }
    if initial_state.len() != dim {
        return Err(AttractorError::config(format!(
            "Initial state dimension mismatch. Expected {}, got {}.",
            dim,
            initial_state.len()
        )));
    }
    if let Some(idx) = initial_state.iter().position(|v| !v.is_finite()) {
        return Err(AttractorError::config(format!(
            "Initial state component {} is not finite ({}).",
            idx, initial_state[idx]
        )));
    }
    settings.validate()?;

    let tableau = settings.method.tableau();
    let mut stepper = RungeKutta::new(tableau, dim);
    let mut trajectory = Vec::with_capacity(times.len() * dim);
    trajectory.extend_from_slice(initial_state);

    let mut stats = if tableau.is_adaptive() {
        integrate_adaptive(field, &mut stepper, initial_state, times, settings, &mut trajectory)?
    } else {
        integrate_fixed(field, &mut stepper, initial_state, times, settings, &mut trajectory)?
    };
    stats.evaluations += stepper.evaluations();

    debug!(
        system = field.name(),
        method = tableau.name,
        samples = times.len(),
        accepted = stats.accepted_steps,
        rejected = stats.rejected_steps,
        evaluations = stats.evaluations,
        "integration finished"
    );

    Ok(Integration { trajectory, stats })
}

fn integrate_fixed<F: VectorField>(
    field: &F,
    stepper: &mut RungeKutta,
    initial_state: &[f64],
    times: &TimeDomain,
    settings: &IntegratorSettings,
    trajectory: &mut Vec<f64>,
) -> Result<IntegrationStats> {
    let mut state = initial_state.to_vec();
    let mut candidate = vec![0.0; state.len()];
    let mut stats = IntegrationStats::default();

    for window in times.windows(2) {
        let (t0, t1) = (window[0], window[1]);
        let span = t1 - t0;
        let substeps = (span / settings.fixed_step).ceil().max(1.0);
        let remaining_budget = settings.max_steps - stats.accepted_steps;
        if substeps > remaining_budget as f64 {
            return Err(AttractorError::integration(
                t0,
                format!(
                    "step budget of {} exhausted; interval [{}, {}] needs {} steps of size {}.",
                    settings.max_steps, t0, t1, substeps, settings.fixed_step
                ),
            ));
        }
        let substeps = substeps as usize;
        let h = span / substeps as f64;

        for k in 0..substeps {
            let t = t0 + h * k as f64;
            stepper.attempt(
                field,
                t,
                &state,
                h,
                &mut candidate,
                settings.relative_tolerance,
                settings.absolute_tolerance,
            );
            state.copy_from_slice(&candidate);
            stepper.accept();
            stats.accepted_steps += 1;
            ensure_finite(&state, t + h)?;
        }
        trajectory.extend_from_slice(&state);
    }

    Ok(stats)
}

fn integrate_adaptive<F: VectorField>(
    field: &F,
    stepper: &mut RungeKutta,
    initial_state: &[f64],
    times: &TimeDomain,
    settings: &IntegratorSettings,
    trajectory: &mut Vec<f64>,
) -> Result<IntegrationStats> {
    let rtol = settings.relative_tolerance;
    let atol = settings.absolute_tolerance;
    let exponent = 1.0 / stepper.tableau().order as f64;
    let max_step = settings
        .max_step
        .unwrap_or(f64::INFINITY)
        .min(times.end() - times.start());

    let mut state = initial_state.to_vec();
    let mut candidate = vec![0.0; state.len()];
    let mut stats = IntegrationStats::default();
    let mut t = times.start();
    let mut h = match settings.initial_step {
        Some(h) => h,
        None => initial_step(field, t, &state, rtol, atol, exponent, &mut stats.evaluations),
    }
    .min(max_step);
    let mut last_rejected = false;

    for &target in &times[1..] {
        while t < target {
            if stats.attempted_steps() >= settings.max_steps {
                return Err(AttractorError::integration(
                    t,
                    format!(
                        "step budget of {} exhausted before reaching t = {}.",
                        settings.max_steps, target
                    ),
                ));
            }

            let remaining = target - t;
            let clipped = h >= remaining;
            let h_try = if clipped { remaining } else { h };
            let err = stepper.attempt(field, t, &state, h_try, &mut candidate, rtol, atol);

            if err.is_finite() && err <= 1.0 {
                let t_next = if clipped { target } else { t + h_try };
                if t_next <= t {
                    return Err(AttractorError::integration(
                        t,
                        format!("step size {} no longer advances time.", h_try),
                    ));
                }
                t = t_next;
                state.copy_from_slice(&candidate);
                stepper.accept();
                stats.accepted_steps += 1;
                ensure_finite(&state, t)?;

                let mut factor = if err == 0.0 {
                    MAX_FACTOR
                } else {
                    (SAFETY * err.powf(-exponent)).clamp(MIN_FACTOR, MAX_FACTOR)
                };
                if last_rejected {
                    factor = factor.min(1.0);
                }
                let proposed = h_try * factor;
                // A clipped step says nothing about the step size the dynamics allow.
                h = if clipped { proposed.max(h) } else { proposed }.min(max_step);
                last_rejected = false;
                if h < settings.min_step {
                    return Err(AttractorError::integration(
                        t,
                        format!(
                            "step size {:e} fell below the minimum {:e}.",
                            h, settings.min_step
                        ),
                    ));
                }
            } else {
                stats.rejected_steps += 1;
                let factor = if err.is_finite() {
                    (SAFETY * err.powf(-exponent)).clamp(MIN_FACTOR, 1.0)
                } else {
                    MIN_FACTOR
                };
                h = h_try * factor;
                last_rejected = true;
                if h < settings.min_step {
                    return Err(AttractorError::integration(
                        t,
                        format!(
                            "step size {:e} fell below the minimum {:e} (error norm {}).",
                            h, settings.min_step, err
                        ),
                    ));
                }
            }
        }
        trajectory.extend_from_slice(&state);
    }

    Ok(stats)
}

/// Starting step estimate (Hairer, Nørsett & Wanner, II.4). Costs two field evaluations.
fn initial_step<F: VectorField>(
    field: &F,
    t0: f64,
    y0: &[f64],
    rtol: f64,
    atol: f64,
    exponent: f64,
    evaluations: &mut usize,
) -> f64 {
    let dim = y0.len();
    let scale: Vec<f64> = y0.iter().map(|y| atol + rtol * y.abs()).collect();
    let rms = |values: &[f64]| -> f64 {
        let sum: f64 = values
            .iter()
            .zip(&scale)
            .map(|(v, s)| (v / s) * (v / s))
            .sum();
        (sum / dim as f64).sqrt()
    };

    let mut f0 = vec![0.0; dim];
    field.derivative(t0, y0, &mut f0);
    *evaluations += 1;
    let d0 = rms(y0);
    let d1 = rms(&f0);
    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    };

    let y1: Vec<f64> = y0.iter().zip(&f0).map(|(y, f)| y + h0 * f).collect();
    let mut f1 = vec![0.0; dim];
    field.derivative(t0 + h0, &y1, &mut f1);
    *evaluations += 1;
    let diff: Vec<f64> = f1.iter().zip(&f0).map(|(a, b)| a - b).collect();
    let d2 = rms(&diff) / h0;

    let h1 = if d1.max(d2) <= 1e-15 {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d1.max(d2)).powf(exponent)
    };
    let h = (100.0 * h0).min(h1);
    if h.is_finite() && h > 0.0 {
        h
    } else {
        1e-6
    }
}

fn ensure_finite(state: &[f64], t: f64) -> Result<()> {
    if let Some(idx) = state.iter().position(|v| !v.is_finite()) {
        return Err(AttractorError::integration(
            t,
            format!("state component {} became non-finite ({}).", idx, state[idx]),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{integrate, IntegrationMethod, IntegratorSettings, RungeKutta};
    use crate::error::AttractorError;
    use crate::tableau::{Tableau, DOPRI5, RK4, TSIT5};
    use crate::time_domain::TimeDomain;
    use crate::traits::VectorField;
    use nalgebra::DMatrix;

    /// dx/dt = rate * x
    struct Exponential {
        rate: f64,
    }

    impl VectorField for Exponential {
        fn name(&self) -> &str {
            "exponential"
        }

        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = self.rate * x[0];
        }

        fn jacobian(&self, _x: &[f64]) -> DMatrix<f64> {
            DMatrix::from_element(1, 1, self.rate)
        }
    }

    /// dx/dt = x², which blows up at t = 1 / x0.
    struct Riccati;

    impl VectorField for Riccati {
        fn name(&self) -> &str {
            "riccati"
        }

        fn dimension(&self) -> usize {
            1
        }

        fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = x[0] * x[0];
        }

        fn jacobian(&self, x: &[f64]) -> DMatrix<f64> {
            DMatrix::from_element(1, 1, 2.0 * x[0])
        }
    }

    /// Harmonic oscillator x'' = -x written as a first-order system.
    struct Oscillator;

    impl VectorField for Oscillator {
        fn name(&self) -> &str {
            "oscillator"
        }

        fn dimension(&self) -> usize {
            2
        }

        fn derivative(&self, _t: f64, x: &[f64], out: &mut [f64]) {
            out[0] = x[1];
            out[1] = -x[0];
        }

        fn jacobian(&self, _x: &[f64]) -> DMatrix<f64> {
            DMatrix::from_row_slice(2, 2, &[0.0, 1.0, -1.0, 0.0])
        }
    }

    fn assert_err_contains<T: std::fmt::Debug>(result: crate::error::Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn single_rk4_step_matches_taylor_expansion() {
        let system = Exponential { rate: 1.0 };
        let mut stepper = RungeKutta::new(&RK4, 1);
        let mut out = [0.0];
        let err = stepper.attempt(&system, 0.0, &[1.0], 0.1, &mut out, 1e-6, 1e-6);
        assert_eq!(err, 0.0);
        let h: f64 = 0.1;
        let expected = 1.0 + h + h * h / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
        assert!((out[0] - expected).abs() < 1e-15);
        assert_eq!(stepper.evaluations(), 4);
    }

    #[test]
    fn fsal_reuses_last_stage_after_accept() {
        let system = Exponential { rate: -0.5 };
        let mut stepper = RungeKutta::new(&DOPRI5, 1);
        let mut out = [0.0];
        stepper.attempt(&system, 0.0, &[2.0], 0.05, &mut out, 1e-9, 1e-9);
        assert_eq!(stepper.evaluations(), 7);
        stepper.accept();
        let cached = stepper.first_stage().expect("first stage cached")[0];
        assert!((cached - (-0.5 * out[0])).abs() < 1e-15);

        let state = out;
        stepper.attempt(&system, 0.05, &state, 0.05, &mut out, 1e-9, 1e-9);
        assert_eq!(stepper.evaluations(), 13);
    }

    fn fixed_step_error(tableau: &'static Tableau, steps: usize) -> f64 {
        let system = Exponential { rate: -1.0 };
        let mut stepper = RungeKutta::new(tableau, 1);
        let h = 1.0 / steps as f64;
        let mut state = [1.0];
        let mut out = [0.0];
        for k in 0..steps {
            stepper.attempt(&system, h * k as f64, &state, h, &mut out, 1e-9, 1e-9);
            stepper.accept();
            state = out;
        }
        (state[0] - (-1.0_f64).exp()).abs()
    }

    #[test]
    fn halving_the_step_reduces_error_by_method_order() {
        for tableau in [&RK4, &TSIT5, &DOPRI5] {
            let observed = (fixed_step_error(tableau, 8) / fixed_step_error(tableau, 16)).log2();
            let order = tableau.order as f64;
            assert!(
                (observed - order).abs() < 0.5,
                "{}: observed order {observed}, expected {order}",
                tableau.name
            );
        }
    }

    #[test]
    fn evaluations_include_initial_step_estimate() {
        let system = Exponential { rate: -1.0 };
        let times = TimeDomain::linspace(0.0, 3.0, 4).expect("domain");

        let estimated = integrate(&system, &[1.0], &times, &IntegratorSettings::default())
            .expect("integration should succeed");
        let attempted = estimated.stats.attempted_steps();
        assert_eq!(estimated.stats.evaluations, 2 + 1 + 6 * attempted);

        let given = IntegratorSettings {
            initial_step: Some(0.01),
            ..IntegratorSettings::default()
        };
        let fixed_start = integrate(&system, &[1.0], &times, &given).expect("integration");
        let attempted = fixed_start.stats.attempted_steps();
        assert_eq!(fixed_start.stats.evaluations, 1 + 6 * attempted);

        let rk4 = IntegratorSettings {
            fixed_step: 0.1,
            ..IntegratorSettings::with_method(IntegrationMethod::Rk4)
        };
        let fixed = integrate(&system, &[1.0], &times, &rk4).expect("rk4");
        assert_eq!(fixed.stats.evaluations, 4 * fixed.stats.accepted_steps);
    }

    #[test]
    fn adaptive_methods_track_exponential_decay() {
        let system = Exponential { rate: -1.0 };
        let times = TimeDomain::linspace(0.0, 5.0, 11).expect("domain");
        for method in [IntegrationMethod::Dopri5, IntegrationMethod::Tsit5] {
            let result = integrate(&system, &[1.0], &times, &IntegratorSettings::with_method(method))
                .expect("integration should succeed");
            assert_eq!(result.trajectory.len(), 11);
            for (t, x) in times.iter().zip(&result.trajectory) {
                assert!(
                    (x - (-t).exp()).abs() < 1e-7,
                    "{method:?}: x({t}) = {x}, expected {}",
                    (-t).exp()
                );
            }
            assert!(result.stats.accepted_steps >= 10);
        }
    }

    #[test]
    fn fixed_rk4_hits_every_sample_on_oscillator() {
        let times = TimeDomain::new(vec![0.0, 0.3, 1.0, 2.5, std::f64::consts::PI]).expect("domain");
        let settings = IntegratorSettings {
            fixed_step: 1e-3,
            ..IntegratorSettings::with_method(IntegrationMethod::Rk4)
        };
        let result = integrate(&Oscillator, &[1.0, 0.0], &times, &settings).expect("rk4");
        for (i, t) in times.iter().enumerate() {
            let x = result.trajectory[2 * i];
            let v = result.trajectory[2 * i + 1];
            assert!((x - t.cos()).abs() < 1e-10, "x({t}) = {x}");
            assert!((v + t.sin()).abs() < 1e-10, "v({t}) = {v}");
        }
    }

    #[test]
    fn integration_is_deterministic() {
        let times = TimeDomain::linspace(0.0, 20.0, 200).expect("domain");
        let settings = IntegratorSettings::default();
        let a = integrate(&Oscillator, &[0.3, -1.2], &times, &settings).expect("first run");
        let b = integrate(&Oscillator, &[0.3, -1.2], &times, &settings).expect("second run");
        assert_eq!(a.trajectory, b.trajectory);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn finite_time_blow_up_is_reported() {
        let times = TimeDomain::new(vec![0.0, 0.5, 2.0]).expect("domain");
        let result = integrate(&Riccati, &[1.0], &times, &IntegratorSettings::default());
        match result {
            Err(AttractorError::IntegrationFailure { time, .. }) => {
                assert!(time > 0.5 && time <= 1.0, "failure reported at t = {time}");
            }
            other => panic!("expected integration failure, got {other:?}"),
        }
    }

    #[test]
    fn step_budget_terminates_integration() {
        let times = TimeDomain::linspace(0.0, 100.0, 3).expect("domain");
        let settings = IntegratorSettings {
            max_steps: 10,
            ..IntegratorSettings::default()
        };
        assert_err_contains(
            integrate(&Oscillator, &[1.0, 0.0], &times, &settings),
            "step budget of 10 exhausted",
        );

        let fixed = IntegratorSettings {
            max_steps: 10,
            ..IntegratorSettings::with_method(IntegrationMethod::Rk4)
        };
        assert_err_contains(
            integrate(&Oscillator, &[1.0, 0.0], &times, &fixed),
            "step budget of 10 exhausted",
        );
    }

    #[test]
    fn rejects_invalid_settings_and_inputs() {
        let times = TimeDomain::linspace(0.0, 1.0, 2).expect("domain");
        let system = Exponential { rate: 1.0 };

        let bad_tol = IntegratorSettings {
            relative_tolerance: 0.0,
            ..IntegratorSettings::default()
        };
        assert_err_contains(integrate(&system, &[1.0], &times, &bad_tol), "relative_tolerance");

        let bad_budget = IntegratorSettings {
            max_steps: 0,
            ..IntegratorSettings::default()
        };
        assert_err_contains(integrate(&system, &[1.0], &times, &bad_budget), "max_steps");

        assert_err_contains(
            integrate(&system, &[1.0, 2.0], &times, &IntegratorSettings::default()),
            "Expected 1, got 2",
        );
        assert_err_contains(
            integrate(&system, &[f64::INFINITY], &times, &IntegratorSettings::default()),
            "not finite",
        );
    }

    #[test]
    fn method_names_parse() {
        assert_eq!(IntegrationMethod::from_name("RK4").unwrap(), IntegrationMethod::Rk4);
        assert_eq!(IntegrationMethod::from_name("rk45").unwrap(), IntegrationMethod::Dopri5);
        assert!(IntegrationMethod::from_name("lsoda").is_err());
    }
}
