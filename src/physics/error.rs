use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("Numerical divergence at t = {time:.3} s, state: {state:?}")]
    NumericalDivergence { time: f64, state: Vec<f64> },

    #[error("Force model '{model}' produced a non-finite force or moment")]
    NonFiniteOutput { model: String },

    #[error("Generalised mass matrix is singular")]
    SingularMassMatrix,
}
