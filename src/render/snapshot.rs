use std::sync::Arc;

use crate::foundation::core::{Affine, ISize};
use crate::render::sampler::SamplerDescriptor;

/// An image resource owned by the rendering backend. The filter only ever
/// needs its pixel dimensions; everything else stays opaque.
pub trait Texture: std::fmt::Debug + Send + Sync {
    fn size(&self) -> ISize;
}

/// Textures flow through the pass chain as a strict producer/consumer
/// sequence; reference counting lets each intermediate drop as soon as the
/// next pass output supersedes it.
pub type TextureHandle = Arc<dyn Texture>;

/// A renderable unit: an image, where it goes, and how it is sampled.
///
/// `transform` maps image space (pixel coordinates) into local space.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub texture: TextureHandle,
    pub transform: Affine,
    pub sampler: SamplerDescriptor,
    /// In `[0, 1]`; carried through the filter unchanged.
    pub opacity: f32,
}
