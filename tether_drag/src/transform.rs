// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor-scale resolution and the drag position calculation.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use tether_scene::{NodeId, Scene};

use crate::session::StartState;

/// Accumulates the effective scale of `node` by walking its ancestor chain.
///
/// Each node contributes its own local scale factors multiplied by its
/// parent's accumulated scale; a missing or stale node contributes `(1, 1)`.
/// The x and y factors are independent, so non-uniform ancestor scaling is
/// reflected per axis.
#[must_use]
pub fn accumulated_scale(scene: &Scene, node: NodeId) -> Vec2 {
    let Some(own) = scene.scale(node) else {
        return Vec2::new(1.0, 1.0);
    };
    let parent = match scene.parent(node) {
        Some(p) => accumulated_scale(scene, p),
        None => Vec2::new(1.0, 1.0),
    };
    Vec2::new(own.x * parent.x, own.y * parent.y)
}

/// Computes the candidate position for a pointer `delta` against a captured
/// start state.
///
/// The pointer delta is rotated into the element's start orientation and
/// corrected for ancestor scaling; the correction divides each axis by the
/// *square* of its accumulated scale factor. That divisor is kept exactly as
/// the established drag behavior so positions stay compatible across hosts:
///
/// ```text
/// x = start.x + (dx·cos θ + dy·sin θ) / sx²
/// y = start.y + (dy·cos θ + dx·sin −θ) / sy²
/// ```
#[must_use]
pub fn candidate_position(start: &StartState, delta: Vec2, scale: Vec2) -> Point {
    let rotation = start.rotation;
    let x = start.position.x
        + (delta.x * rotation.cos() + delta.y * rotation.sin()) / (scale.x * scale.x);
    let y = start.position.y
        + (delta.y * rotation.cos() + delta.x * (-rotation).sin()) / (scale.y * scale.y);
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use kurbo::Size;
    use tether_scene::LocalElement;

    use super::*;

    fn start_at(x: f64, y: f64, rotation: f64) -> StartState {
        StartState {
            position: Point::new(x, y),
            size: Size::new(10.0, 10.0),
            zoom: 1.0,
            rotation,
        }
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-9, "y: {} vs {}", a.y, b.y);
    }

    #[test]
    fn identity_transform_moves_by_raw_delta() {
        let start = start_at(10.0, 20.0, 0.0);
        let p = candidate_position(&start, Vec2::new(5.0, -3.0), Vec2::new(1.0, 1.0));
        assert_close(p, Point::new(15.0, 17.0));
    }

    #[test]
    fn quarter_turn_maps_horizontal_delta_to_vertical() {
        let start = start_at(0.0, 0.0, FRAC_PI_2);
        let p = candidate_position(&start, Vec2::new(10.0, 0.0), Vec2::new(1.0, 1.0));
        // cos(π/2) = 0, sin(π/2) = 1: dx lands on the y axis (negated there).
        assert_close(p, Point::new(0.0, -10.0));
    }

    #[test]
    fn quarter_turn_maps_vertical_delta_to_horizontal() {
        let start = start_at(0.0, 0.0, FRAC_PI_2);
        let p = candidate_position(&start, Vec2::new(0.0, 10.0), Vec2::new(1.0, 1.0));
        assert_close(p, Point::new(10.0, 0.0));
    }

    #[test]
    fn scale_correction_divides_by_squared_factor() {
        let start = start_at(0.0, 0.0, 0.0);
        let p = candidate_position(&start, Vec2::new(8.0, 8.0), Vec2::new(2.0, 4.0));
        assert_close(p, Point::new(2.0, 0.5));
    }

    #[test]
    fn accumulated_scale_composes_over_ancestors() {
        let mut scene = Scene::new();
        let doc = scene.insert(None, LocalElement::doc(1.0));
        let outer = scene.insert(
            Some(doc),
            LocalElement::group(Point::ZERO).with_scale(Vec2::new(2.0, 3.0)),
        );
        let inner = scene.insert(
            Some(outer),
            LocalElement::group(Point::ZERO).with_scale(Vec2::new(0.5, 2.0)),
        );
        let leaf = scene.insert(
            Some(inner),
            LocalElement::shape(Point::ZERO, Size::new(1.0, 1.0)),
        );

        let scale = accumulated_scale(&scene, leaf);
        assert!((scale.x - 1.0).abs() < 1e-12);
        assert!((scale.y - 6.0).abs() < 1e-12);
    }

    #[test]
    fn accumulated_scale_of_stale_node_is_unity() {
        let mut scene = Scene::new();
        let node = scene.insert(None, LocalElement::default());
        scene.remove(node);
        assert_eq!(accumulated_scale(&scene, node), Vec2::new(1.0, 1.0));
    }
}
