use crate::foundation::core::{Affine, Coverage, Rect, SceneNode};
use crate::foundation::error::HalationResult;
use crate::render::snapshot::Snapshot;
use crate::render::subpass::SubpassBackend;

/// The upstream content collaborator a filter reads from.
///
/// This is the boundary to the scene graph: the filter never walks content
/// itself, it asks an input for coverage, transforms, and (at render time) a
/// snapshot of the content's current pixels.
pub trait FilterInput {
    /// Local-space region the content may paint into.
    fn coverage(&self, node: &SceneNode) -> Coverage;

    /// Transform from the content's image space to local space.
    fn local_transform(&self, node: &SceneNode) -> Affine {
        let _ = node;
        Affine::IDENTITY
    }

    /// Full transform of the content: node placement composed with
    /// [`local_transform`](Self::local_transform).
    fn transform(&self, node: &SceneNode) -> Affine {
        node.transform * self.local_transform(node)
    }

    /// Produce the content's current snapshot, optionally limited to
    /// `coverage_limit` in local space.
    ///
    /// `Ok(None)` means the content is empty or fully clipped; that is a
    /// normal outcome, not a fault.
    fn snapshot(
        &self,
        backend: &mut dyn SubpassBackend,
        node: &SceneNode,
        coverage_limit: Option<Rect>,
    ) -> HalationResult<Option<Snapshot>>;
}
