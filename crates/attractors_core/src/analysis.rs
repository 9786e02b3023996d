use crate::traits::VectorField;
use nalgebra::DMatrix;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComplexNumber {
    pub re: f64,
    pub im: f64,
}

impl From<Complex<f64>> for ComplexNumber {
    fn from(value: Complex<f64>) -> Self {
        Self {
            re: value.re,
            im: value.im,
        }
    }
}

/// Central-difference Jacobian of `field` at `x` with step `h` per coordinate.
pub fn finite_difference_jacobian<F: VectorField>(field: &F, x: &[f64], h: f64) -> DMatrix<f64> {
    let dim = field.dimension();
    let mut jacobian = DMatrix::zeros(dim, dim);
    let mut shifted = x.to_vec();
    let mut plus = vec![0.0; dim];
    let mut minus = vec![0.0; dim];

    for j in 0..dim {
        shifted[j] = x[j] + h;
        field.derivative(0.0, &shifted, &mut plus);
        shifted[j] = x[j] - h;
        field.derivative(0.0, &shifted, &mut minus);
        shifted[j] = x[j];
        for i in 0..dim {
            jacobian[(i, j)] = (plus[i] - minus[i]) / (2.0 * h);
        }
    }
    jacobian
}

/// Eigenvalues of a square Jacobian, sorted by descending real part.
pub fn jacobian_eigenvalues(jacobian: &DMatrix<f64>) -> Vec<Complex<f64>> {
    let mut values: Vec<Complex<f64>> = jacobian.complex_eigenvalues().iter().copied().collect();
    values.sort_by(|a, b| b.re.partial_cmp(&a.re).unwrap_or(std::cmp::Ordering::Equal));
    values
}

/// Largest absolute component over a row-major trajectory.
pub fn max_abs_component(trajectory: &[f64]) -> f64 {
    trajectory.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}
