use super::*;
use crate::foundation::core::Rect;
use crate::foundation::error::HalationResult;
use crate::render::snapshot::Snapshot;
use crate::render::subpass::SubpassBackend;

struct FixedInput {
    coverage: Coverage,
    local: Affine,
}

impl FilterInput for FixedInput {
    fn coverage(&self, _node: &SceneNode) -> Coverage {
        self.coverage
    }

    fn local_transform(&self, _node: &SceneNode) -> Affine {
        self.local
    }

    fn snapshot(
        &self,
        _backend: &mut dyn SubpassBackend,
        _node: &SceneNode,
        _coverage_limit: Option<Rect>,
    ) -> HalationResult<Option<Snapshot>> {
        Ok(None)
    }
}

#[test]
fn no_inputs_is_unbounded() {
    let out = filter_coverage(
        &[],
        &SceneNode::default(),
        Affine::IDENTITY,
        Vec2::new(5.0, 5.0),
    );
    assert!(out.is_unbounded());
}

#[test]
fn unbounded_upstream_propagates() {
    let input = FixedInput {
        coverage: Coverage::Unbounded,
        local: Affine::IDENTITY,
    };
    let out = filter_coverage(
        &[&input],
        &SceneNode::default(),
        Affine::IDENTITY,
        Vec2::new(5.0, 5.0),
    );
    assert!(out.is_unbounded());
}

#[test]
fn empty_upstream_is_returned_unchanged() {
    let empty = Rect::new(3.0, 3.0, 3.0, 9.0);
    let input = FixedInput {
        coverage: Coverage::Bounded(empty),
        local: Affine::IDENTITY,
    };
    let out = filter_coverage(
        &[&input],
        &SceneNode::default(),
        Affine::IDENTITY,
        Vec2::new(5.0, 5.0),
    );
    assert_eq!(out, Coverage::Bounded(empty));
}

#[test]
fn identity_transforms_expand_by_radius_per_side() {
    let input = FixedInput {
        coverage: Coverage::Bounded(Rect::new(0.0, 0.0, 100.0, 100.0)),
        local: Affine::IDENTITY,
    };
    let radius = Vec2::new(12.25, 7.5);
    let out = filter_coverage(&[&input], &SceneNode::default(), Affine::IDENTITY, radius);
    let rect = out.bounded().unwrap();
    assert!((rect.x0 - -12.25).abs() < 1e-3);
    assert!((rect.y0 - -7.5).abs() < 1e-3);
    assert!((rect.x1 - 112.25).abs() < 1e-3);
    assert!((rect.y1 - 107.5).abs() < 1e-3);
}

#[test]
fn node_and_effect_transforms_scale_the_radius() {
    let input = FixedInput {
        coverage: Coverage::Bounded(Rect::new(0.0, 0.0, 10.0, 10.0)),
        local: Affine::IDENTITY,
    };
    let node = SceneNode {
        transform: Affine::scale(2.0),
        ..SceneNode::default()
    };
    let out = filter_coverage(&[&input], &node, Affine::scale(3.0), Vec2::new(1.0, 1.0));
    let rect = out.bounded().unwrap();
    // 2x node scale times 3x effect scale => radius 6 per side.
    assert!((rect.x0 - -6.0).abs() < 1e-9);
    assert!((rect.x1 - 16.0).abs() < 1e-9);
}

#[test]
fn source_coverage_expands_the_output_limit() {
    let limit = Coverage::Bounded(Rect::new(0.0, 0.0, 50.0, 50.0));
    let out = source_coverage(Vec2::new(4.0, 2.0), Affine::IDENTITY, limit);
    assert_eq!(out.bounded().unwrap(), Rect::new(-4.0, -2.0, 54.0, 52.0));
}

#[test]
fn source_coverage_keeps_unbounded_limits_unbounded() {
    let out = source_coverage(Vec2::new(4.0, 2.0), Affine::scale(5.0), Coverage::Unbounded);
    assert!(out.is_unbounded());
}

#[test]
fn source_coverage_uses_absolute_transformed_radius() {
    // A flip must not shrink the expansion.
    let limit = Coverage::Bounded(Rect::new(0.0, 0.0, 10.0, 10.0));
    let flipped = Affine::scale_non_uniform(-1.0, 1.0);
    let out = source_coverage(Vec2::new(3.0, 3.0), flipped, limit);
    assert_eq!(out.bounded().unwrap(), Rect::new(-3.0, -3.0, 13.0, 13.0));
}
