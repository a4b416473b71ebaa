mod core;
mod frame;

pub use core::{Point3, Tolerance, Vec3};
pub use frame::CurveFrame;
