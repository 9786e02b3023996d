//! WASM bridge exposing integrated attractors to a JavaScript plotting harness.

use anyhow::Context;
use attractors_core::analysis::ComplexNumber;
use attractors_core::{Attractor, IntegrationMethod, IntegratorSettings, System, VectorField};
use js_sys::Float64Array;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

fn to_js_error(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", err))
}

#[wasm_bindgen]
pub struct WasmAttractor {
    inner: Attractor<System>,
}

#[wasm_bindgen]
impl WasmAttractor {
    /// `system` is one of "lorenz", "rossler", "chen"; an empty `params` array
    /// selects the family defaults. `method` is "dopri5", "tsit5" or "rk4".
    #[wasm_bindgen(constructor)]
    pub fn new(
        system: &str,
        params: Vec<f64>,
        name: String,
        initial_state: Vec<f64>,
        time_domain: Vec<f64>,
        method: &str,
    ) -> Result<WasmAttractor, JsValue> {
        console_error_panic_hook::set_once();

        let build = || -> anyhow::Result<Attractor<System>> {
            let field = System::from_name(system, &params)
                .with_context(|| format!("Failed to build system '{}'", system))?;
            let method = IntegrationMethod::from_name(method)?;
            let attractor = Attractor::with_settings(
                name,
                field,
                initial_state,
                time_domain,
                IntegratorSettings::with_method(method),
            )
            .context("Failed to integrate attractor")?;
            Ok(attractor)
        };

        build().map(|inner| WasmAttractor { inner }).map_err(to_js_error)
    }

    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    pub fn system(&self) -> String {
        self.inner.field().name().to_string()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// Row-major trajectory, `len() * dimension()` values.
    pub fn trajectory(&self) -> Float64Array {
        Float64Array::from(self.inner.trajectory())
    }

    pub fn times(&self) -> Float64Array {
        Float64Array::from(self.inner.time_domain().as_slice())
    }

    /// Row-major Jacobian at `position`.
    pub fn jacobian(&self, position: Vec<f64>) -> Result<Float64Array, JsValue> {
        let jacobian = self
            .inner
            .jacobian_matrix(&position)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let dim = jacobian.nrows();
        let mut flat = Vec::with_capacity(dim * dim);
        for i in 0..dim {
            for j in 0..dim {
                flat.push(jacobian[(i, j)]);
            }
        }
        Ok(Float64Array::from(flat.as_slice()))
    }

    pub fn eigenvalues(&self, position: Vec<f64>) -> Result<JsValue, JsValue> {
        let values: Vec<ComplexNumber> = self
            .inner
            .eigenvalues_at(&position)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .into_iter()
            .map(ComplexNumber::from)
            .collect();
        to_value(&values).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.stats()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
