pub mod api;
pub mod dual;
pub mod float;
pub mod hyperdual;
pub mod scalar;
mod traits;

pub use api::{derivative, gradient, mixed_partial, MixedPartials};
pub use dual::Dual;
pub use float::Float;
pub use hyperdual::HyperDual;
pub use scalar::Scalar;

/// Type alias for dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
/// Type alias for hyperdual numbers over `f64`.
pub type HyperDual64 = HyperDual<f64>;
/// Type alias for hyperdual numbers over `f32`.
pub type HyperDual32 = HyperDual<f32>;
