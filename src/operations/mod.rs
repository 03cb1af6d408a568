//! CSG (Constructive Solid Geometry) Operations
//!
//! Boolean operations used to fold terrain edits into the planet field.

mod subtraction;
mod union;

pub use subtraction::sdf_subtraction;
pub use union::sdf_union;
