mod tuple2;
mod tuple3;
mod tuple4;
mod tuple4b;

pub use tuple2::{Point2f, Tuple2f, Vector2f};
pub use tuple3::{Point3f, Tuple3f, Vector3f};
pub use tuple4::{Tuple4f, Vector4f};
pub use tuple4b::Tuple4b;

use crate::error::Result;

/// Indexed access to the components of a float tuple, in field order.
pub trait TupleElements {
    /// Number of components.
    const LEN: usize;

    /// Component at `index`.
    fn element(&self, index: usize) -> Result<f32>;

    /// Set the component at `index`.
    fn set_element(&mut self, index: usize, value: f32) -> Result<()>;
}
