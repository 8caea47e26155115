//! The blur filter orchestrator: downsample, blur Y, blur X, compose.

use kurbo::Vec2;

use crate::filter::blur_pass::blur_pass;
use crate::filter::compose::compose_output;
use crate::filter::coverage;
use crate::filter::downsample::downsample_plan;
use crate::filter::sigma::{NEAR_ZERO_SIGMA, blur_radius, downsample_scale, scale_sigma};
use crate::foundation::core::{Affine, BlendMode, Coverage, ISize, Point, Rect, SceneNode, TileMode};
use crate::foundation::error::{HalationError, HalationResult};
use crate::render::input::FilterInput;
use crate::render::snapshot::Snapshot;
use crate::render::subpass::{BlurInfo, SubpassBackend};
use crate::transform::affine::{abs_vec, map_quad, map_vector};

/// A filtered snapshot plus the compositing state it should be drawn with.
#[derive(Clone, Debug)]
pub struct FilteredOutput {
    pub snapshot: Snapshot,
    pub blend: BlendMode,
    pub clip_depth: u32,
}

/// A Gaussian blur with configurable horizontal/vertical spread and
/// edge-tiling behavior.
///
/// The filter holds no state across invocations; [`render`](Self::render) is
/// a pure function of its inputs plus backend effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianBlurFilter {
    sigma_x: f32,
    sigma_y: f32,
    tile_mode: TileMode,
}

impl GaussianBlurFilter {
    /// Both sigmas are local-space standard deviations and must be finite and
    /// nonnegative.
    pub fn new(sigma_x: f32, sigma_y: f32, tile_mode: TileMode) -> HalationResult<Self> {
        for (name, sigma) in [("sigma_x", sigma_x), ("sigma_y", sigma_y)] {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(HalationError::validation(format!(
                    "{name} must be finite and >= 0, got {sigma}"
                )));
            }
        }
        Ok(Self {
            sigma_x,
            sigma_y,
            tile_mode,
        })
    }

    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    fn scaled_sigma(&self) -> (f32, f32) {
        (scale_sigma(self.sigma_x), scale_sigma(self.sigma_y))
    }

    fn blur_radius_vector(&self) -> Vec2 {
        let (sx, sy) = self.scaled_sigma();
        Vec2::new(f64::from(blur_radius(sx)), f64::from(blur_radius(sy)))
    }

    /// Source region that must be available to fill `output_limit` after
    /// blurring. Pure; order-independent of other queries.
    pub fn filter_source_coverage(
        &self,
        effect_transform: Affine,
        output_limit: Coverage,
    ) -> Coverage {
        coverage::source_coverage(self.blur_radius_vector(), effect_transform, output_limit)
    }

    /// Region the filtered output may paint into. Pure; order-independent of
    /// other queries.
    pub fn filter_coverage(
        &self,
        inputs: &[&dyn FilterInput],
        node: &SceneNode,
        effect_transform: Affine,
    ) -> Coverage {
        coverage::filter_coverage(inputs, node, effect_transform, self.blur_radius_vector())
    }

    /// Run the blur chain and return the filtered snapshot.
    ///
    /// `Ok(None)` when there are no inputs or the upstream produces no
    /// snapshot. `coverage` (the pre-computed filter coverage) is accepted
    /// for interface parity and currently unused.
    #[tracing::instrument(skip(self, inputs, backend))]
    pub fn render(
        &self,
        inputs: &[&dyn FilterInput],
        backend: &mut dyn SubpassBackend,
        node: &SceneNode,
        effect_transform: Affine,
        _coverage: Rect,
        coverage_hint: Option<Rect>,
    ) -> HalationResult<Option<FilteredOutput>> {
        let Some(input) = inputs.first() else {
            return Ok(None);
        };

        let (scaled_x, scaled_y) = self.scaled_sigma();
        let radius = Vec2::new(
            f64::from(blur_radius(scaled_x)),
            f64::from(blur_radius(scaled_y)),
        );
        let padding = Vec2::new(radius.x.ceil(), radius.y.ceil());

        // Ask the source for as much of the desired padding as possible. The
        // upstream may ignore the hint, so the downsample pass adds the full
        // transparent gutter either way.
        let expanded_hint =
            expand_coverage_hint(coverage_hint, node.transform * effect_transform, padding);

        let Some(input_snapshot) = input.snapshot(backend, node, expanded_hint)? else {
            return Ok(None);
        };

        if scaled_x < NEAR_ZERO_SIGMA && scaled_y < NEAR_ZERO_SIGMA {
            // No blur to render.
            return Ok(Some(FilteredOutput {
                snapshot: input_snapshot,
                blend: node.blend,
                clip_depth: node.clip_depth,
            }));
        }

        let desired_scale = f64::from(downsample_scale(scaled_x).min(downsample_scale(scaled_y)));
        let source_size = input_snapshot.texture.size().to_vec2();
        let padded_size = source_size + 2.0 * padding;
        let downsampled_size = padded_size * desired_scale;
        let subpass_size = ISize::new(
            downsampled_size.x.round().max(1.0) as u32,
            downsampled_size.y.round().max(1.0) as u32,
        )?;
        let effective_scale = Vec2::new(
            f64::from(subpass_size.width) / padded_size.x,
            f64::from(subpass_size.height) / padded_size.y,
        );

        tracing::debug!(
            ?subpass_size,
            ?padding,
            desired_scale,
            "planning blur subpasses"
        );

        let uvs = calculate_uvs(input.local_transform(node), input_snapshot.texture.size());

        let supports_decal = backend.supports_decal_address_mode();
        let pass1 = backend.render_subpass(&downsample_plan(
            &input_snapshot.texture,
            &input_snapshot.sampler,
            uvs,
            subpass_size,
            padding,
            self.tile_mode,
            supports_decal,
        ))?;

        let pass1_size = pass1.size().to_vec2();
        let pixel_size = Vec2::new(1.0 / pass1_size.x, 1.0 / pass1_size.y);

        let pass2 = blur_pass(
            backend,
            pass1,
            &input_snapshot.sampler,
            self.tile_mode,
            BlurInfo {
                uv_offset: Vec2::new(0.0, pixel_size.y),
                sigma: scaled_y * effective_scale.y as f32,
                radius: radius.y as f32 * effective_scale.y as f32,
                step_size: 1.0,
            },
        )?;

        let pass3 = blur_pass(
            backend,
            pass2,
            &input_snapshot.sampler,
            self.tile_mode,
            BlurInfo {
                uv_offset: Vec2::new(pixel_size.x, 0.0),
                sigma: scaled_x * effective_scale.x as f32,
                radius: radius.x as f32 * effective_scale.x as f32,
                step_size: 1.0,
            },
        )?;

        let snapshot = compose_output(
            pass3,
            input_snapshot.transform,
            padding,
            effective_scale,
            input_snapshot.opacity,
        );
        Ok(Some(FilteredOutput {
            snapshot,
            blend: node.blend,
            clip_depth: node.clip_depth,
        }))
    }
}

/// Grow the caller's coverage hint by the padding, mapped into local space,
/// so the upstream can hand over margin instead of the gutter.
fn expand_coverage_hint(
    coverage_hint: Option<Rect>,
    source_to_local: Affine,
    padding: Vec2,
) -> Option<Rect> {
    let hint = coverage_hint?;
    let transformed = abs_vec(map_vector(source_to_local, padding));
    Some(hint.inflate(transformed.x, transformed.y))
}

/// UV quad of the snapshot texture under the input's local transform.
fn calculate_uvs(local_transform: Affine, texture_size: ISize) -> [Point; 4] {
    let w = f64::from(texture_size.width);
    let h = f64::from(texture_size.height);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(0.0, h),
        Point::new(w, h),
    ];
    let uv_transform = Affine::scale_non_uniform(1.0 / w, 1.0 / h);
    map_quad(uv_transform * local_transform, corners)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/gaussian.rs"]
mod tests;
