//! Sigma math: clamping, radius derivation, downsample-scale selection.
//!
//! All functions take the standard deviation in local content-space units
//! (or pixels, once scaled) and are pure.

/// Scaled sigmas below this are treated as "no blur".
pub const NEAR_ZERO_SIGMA: f32 = 1e-3;

/// The minimal kernel radius capturing the effective mass of a Gaussian is
/// proportional to sigma by sqrt(3); below half a pixel the kernel collapses
/// to a single tap.
const KERNEL_RADIUS_PER_SIGMA: f32 = 1.732_050_8;

/// Clamp `sigma` to `[0, 500]` and apply the intensity compensation curve.
///
/// The clamp bounds the kernel around 1000x1000 pixels; the quadratic matches
/// the reference renderer's observed falloff, with its minimum placed at the
/// clamp so extreme sigmas stay monotone.
pub fn scale_sigma(sigma: f32) -> f32 {
    let clamped = sigma.clamp(0.0, 500.0);
    const A: f32 = 3.4e-6;
    const B: f32 = -3.4e-3;
    let scalar = 1.0 + B * clamped + A * clamped * clamped;
    clamped * scalar
}

/// Minimal pixel radius capturing the effective kernel mass for `sigma`.
pub fn blur_radius(sigma: f32) -> f32 {
    if sigma > 0.5 {
        (sigma - 0.5) * KERNEL_RADIUS_PER_SIGMA
    } else {
        0.0
    }
}

/// Downsample factor for `sigma`: 1.0 up to sigma 4, then `4 / sigma`.
///
/// Capping the effective post-scale sigma near 4 bounds the convolution tap
/// count regardless of the requested blur strength.
pub fn downsample_scale(sigma: f32) -> f32 {
    if sigma <= 4.0 {
        return 1.0;
    }
    4.0 / sigma
}

#[cfg(test)]
#[path = "../../tests/unit/filter/sigma.rs"]
mod tests;
