use crate::foundation::core::{ISize, Point, Vec2};
use crate::foundation::error::HalationResult;
use crate::render::sampler::SamplerDescriptor;
use crate::render::snapshot::TextureHandle;

/// One vertex of a 4-vertex triangle strip: output position in the unit
/// square, plus the texture coordinate sampled there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadVertex {
    pub position: Point,
    pub uv: Point,
}

/// Per-pass parameters for the directional blur shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurInfo {
    /// Step between taps in UV units. Exactly one component is nonzero; it
    /// selects the convolution axis.
    pub uv_offset: Vec2,
    /// Standard deviation in pixels of the target, after downsample scaling.
    pub sigma: f32,
    /// Tap bound in pixels of the target.
    pub radius: f32,
    /// Multiplier on `uv_offset` per tap; fixed at 1.0.
    pub step_size: f32,
}

/// Which directional-blur program variant a draw uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlurShader {
    Standard,
    /// Emulates decal edge behavior in-shader, for targets without a native
    /// decal sampler address mode.
    DecalFallback,
}

/// A textured-quad blit.
#[derive(Clone, Debug)]
pub struct TextureFillDraw {
    pub texture: TextureHandle,
    pub sampler: SamplerDescriptor,
    pub vertices: [QuadVertex; 4],
}

/// A directional Gaussian blur over the full input texture.
#[derive(Clone, Debug)]
pub struct GaussianBlurDraw {
    pub texture: TextureHandle,
    pub sampler: SamplerDescriptor,
    pub shader: BlurShader,
    pub blur: BlurInfo,
}

#[derive(Clone, Debug)]
pub enum SubpassDraw {
    TextureFill(TextureFillDraw),
    GaussianBlur(GaussianBlurDraw),
}

/// A complete offscreen pass, described as a value.
///
/// The backend allocates a target of exactly `size`, records the draw with an
/// orthographic unit MVP, and returns the populated texture. Passing plans by
/// value (instead of recording through callbacks that capture renderer state
/// by reference) keeps deferred or reordered submission safe.
#[derive(Clone, Debug)]
pub struct SubpassPlan {
    pub label: &'static str,
    pub size: ISize,
    pub draw: SubpassDraw,
}

/// The rendering collaborator that executes [`SubpassPlan`]s.
///
/// Implementations own command submission, pipeline/shader objects and
/// sampler resources (looked up by [`SamplerDescriptor`]); the filter core
/// never touches the device. `render_subpass` records work; actual GPU
/// execution latency is the backend's concern.
pub trait SubpassBackend {
    /// Whether the execution target natively supports the decal sampler
    /// address mode. When it does not, decal-tiled blurs use
    /// [`BlurShader::DecalFallback`].
    fn supports_decal_address_mode(&self) -> bool;

    /// Render `plan` into a fresh offscreen target of `plan.size` and return
    /// the populated texture.
    fn render_subpass(&mut self, plan: &SubpassPlan) -> HalationResult<TextureHandle>;
}
