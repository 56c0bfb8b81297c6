//! Fixed quadratic cost model.
//!
//! - [`Quadratic`]: One player's cost as a bivariate quadratic in (h, m)
//! - [`CostModel`]: The immutable human/machine pair every consumer shares

mod model;
mod quadratic;

pub use model::*;
pub use quadratic::*;
