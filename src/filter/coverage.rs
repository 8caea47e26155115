//! Pre-render coverage queries: how far the blur spreads content.

use crate::foundation::core::{Affine, Coverage, SceneNode};
use crate::render::input::FilterInput;
use crate::transform::affine::{abs_vec, map_vector};
use kurbo::Vec2;

/// Expand `output_limit` by `blur_radius` mapped through the linear part of
/// `effect_transform`: the source region that must be available so the blur
/// can fill the limit.
pub fn source_coverage(blur_radius: Vec2, effect_transform: Affine, output_limit: Coverage) -> Coverage {
    output_limit.expand(abs_vec(map_vector(effect_transform, blur_radius)))
}

/// Region the filtered output may paint into.
///
/// No inputs, or an upstream without determinable coverage, yields
/// `Unbounded`; an empty upstream region is returned unchanged. Otherwise the
/// upstream rect grows by `blur_radius` mapped through the input and effect
/// transforms.
pub fn filter_coverage(
    inputs: &[&dyn FilterInput],
    node: &SceneNode,
    effect_transform: Affine,
    blur_radius: Vec2,
) -> Coverage {
    let Some(input) = inputs.first() else {
        return Coverage::Unbounded;
    };

    let input_coverage = input.coverage(node);
    if input_coverage.is_unbounded() || input_coverage.is_empty() {
        return input_coverage;
    }

    let radii = abs_vec(map_vector(
        input.transform(node) * effect_transform,
        blur_radius,
    ));
    input_coverage.expand(radii)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/coverage.rs"]
mod tests;
