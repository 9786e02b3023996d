pub mod analysis;
pub mod attractor;
pub mod error;
pub mod solvers;
pub mod systems;
pub mod tableau;
pub mod time_domain;
/// The `attractors_core` crate integrates continuous-time chaotic systems and
/// linearizes them along their trajectories.
///
/// Key components:
/// - **Traits**: `VectorField` (right-hand side, analytic Jacobian, dimension).
/// - **Systems**: Lorenz, Rössler and Chen families, plus the `System` dispatcher.
/// - **Solvers**: Butcher-tableau Runge–Kutta engine (RK4, Tsit5, Dopri5) with
///   adaptive step control and a hard step budget.
/// - **Attractor**: validated construction that integrates over a time domain and
///   serves trajectory and Jacobian queries.
pub mod traits;

pub use attractor::Attractor;
pub use error::{AttractorError, Result};
pub use solvers::{IntegrationMethod, IntegrationStats, IntegratorSettings};
pub use systems::{Chen, Lorenz, Rossler, System};
pub use time_domain::{linspace, TimeDomain};
pub use traits::VectorField;
