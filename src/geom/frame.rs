//! Orthonormal curve frames for sweeping cross-sections.
//!
//! A frame is built from a tangent and a fixed helper "up" axis. When the
//! tangent runs nearly parallel to the helper the cross product collapses, so
//! an alternate helper axis is substituted; this fallback is part of the
//! contract, not an optimization.

use super::core::{Tolerance, Vec3};

/// Orthonormal `(tangent, normal, binormal)` basis at a curve sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    /// Unit vector pointing along the curve direction.
    pub tangent: Vec3,
    /// Unit vector perpendicular to the tangent.
    pub normal: Vec3,
    /// Unit vector completing the basis (`tangent × normal`, normalized).
    pub binormal: Vec3,
}

impl CurveFrame {
    /// Helper axis used to orient frames; +Z matches the importers' up direction.
    pub const HELPER_UP: Vec3 = Vec3::Z;
    /// Substitute helper for tangents that run along `HELPER_UP`.
    pub const HELPER_ALT: Vec3 = Vec3::X;

    /// Build a frame from a tangent vector using the fixed helper axis.
    ///
    /// The tangent is normalized first; returns `None` only when it cannot be
    /// (zero-length or non-finite input). A tangent parallel to the helper
    /// falls back to [`CurveFrame::HELPER_ALT`] instead of failing.
    #[must_use]
    pub fn from_tangent(tangent: Vec3) -> Option<Self> {
        let tangent = tangent.normalized()?;
        let tol = Tolerance::ZERO_LENGTH;

        let mut normal_raw = tangent.cross(Self::HELPER_UP);
        if tol.is_zero_vec3(normal_raw) {
            normal_raw = tangent.cross(Self::HELPER_ALT);
        }
        // Both helpers cannot be parallel to the same unit tangent.
        let normal = normal_raw.normalized()?;
        let binormal = tangent.cross(normal).normalized()?;

        Some(Self {
            tangent,
            normal,
            binormal,
        })
    }

    /// True when the three axes are unit length and mutually perpendicular
    /// within `tol`.
    #[must_use]
    pub fn is_orthonormal(&self, tol: Tolerance) -> bool {
        let unit = |v: Vec3| tol.approx_eq_f64(v.length(), 1.0);
        let perp = |a: Vec3, b: Vec3| tol.approx_eq_f64(a.dot(b), 0.0);

        unit(self.tangent)
            && unit(self.normal)
            && unit(self.binormal)
            && perp(self.tangent, self.normal)
            && perp(self.tangent, self.binormal)
            && perp(self.normal, self.binormal)
    }
}
