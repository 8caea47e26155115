//! Halation is a Gaussian blur filter engine for GPU-backed 2D rendering.
//!
//! Given a snapshot of upstream content (a texture, its placement transform, a
//! sampler and an opacity), the engine plans and drives a multi-pass blur:
//!
//! 1. **Downsample**: blit the source into a reduced-resolution target with a
//!    transparent gutter so later convolution never samples across the true
//!    image edge ([`downsample_plan`]).
//! 2. **Blur Y**, then **Blur X**: two separable 1-D Gaussian convolution
//!    subpasses ([`blur_pass`]), strictly sequential.
//! 3. **Compose**: assemble the output snapshot with a transform that undoes
//!    the gutter offset and the downsample scale ([`compose_output`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No GPU ownership**: command submission, shader objects and sampler
//!   caches live behind the [`SubpassBackend`] trait; passes are described by
//!   explicit [`SubpassPlan`] values rather than capture-by-reference
//!   callbacks.
//! - **Transient state**: a filter invocation is a pure function of its
//!   inputs plus backend effects; nothing persists across invocations.
//! - **Absence is not an error**: missing inputs or an empty upstream
//!   snapshot produce `Ok(None)`, never a fault.
#![forbid(unsafe_code)]

mod filter;
mod foundation;
mod render;
mod transform;

pub use filter::blur_pass::blur_pass;
pub use filter::compose::compose_output;
pub use filter::coverage::{filter_coverage, source_coverage};
pub use filter::downsample::downsample_plan;
pub use filter::gaussian::{FilteredOutput, GaussianBlurFilter};
pub use filter::sigma::{NEAR_ZERO_SIGMA, blur_radius, downsample_scale, scale_sigma};
pub use foundation::core::{
    Affine, BlendMode, Coverage, ISize, Point, Rect, SceneNode, TileMode, Vec2,
};
pub use foundation::error::{HalationError, HalationResult};
pub use render::input::FilterInput;
pub use render::sampler::{AddressMode, FilterMode, SamplerDescriptor};
pub use render::snapshot::{Snapshot, Texture, TextureHandle};
pub use render::subpass::{
    BlurInfo, BlurShader, GaussianBlurDraw, QuadVertex, SubpassBackend, SubpassDraw, SubpassPlan,
    TextureFillDraw,
};
pub use transform::affine::{abs_vec, anchor_scale, map_quad, map_vector};
