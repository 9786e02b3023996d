use nalgebra::DMatrix;

/// A continuous-time vector field `dx/dt = f(t, x)` with an exact linearization.
///
/// Implementors hold their structural parameters by value; every method is pure
/// and must not mutate the field.
pub trait VectorField {
    /// Family identifier, e.g. `"lorenz"`.
    fn name(&self) -> &str;

    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field.
    /// t: current time (ignored by autonomous systems)
    /// x: current state, `x.len() == self.dimension()`
    /// out: buffer receiving dx/dt
    fn derivative(&self, t: f64, x: &[f64], out: &mut [f64]);

    /// Analytic Jacobian `J[(i, j)] = ∂f_i/∂x_j` evaluated at `x`.
    fn jacobian(&self, x: &[f64]) -> DMatrix<f64>;

    /// Phase-space volume contraction rate at `x` (trace of the Jacobian).
    fn divergence(&self, x: &[f64]) -> f64 {
        self.jacobian(x).trace()
    }
}

impl<F: VectorField + ?Sized> VectorField for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn derivative(&self, t: f64, x: &[f64], out: &mut [f64]) {
        (**self).derivative(t, x, out)
    }

    fn jacobian(&self, x: &[f64]) -> DMatrix<f64> {
        (**self).jacobian(x)
    }

    fn divergence(&self, x: &[f64]) -> f64 {
        (**self).divergence(x)
    }
}
