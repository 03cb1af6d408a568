//! Primitive SDF shapes

mod sphere;

pub use sphere::sdf_sphere_at;
