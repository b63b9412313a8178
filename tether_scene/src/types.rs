// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene arena: element identifiers, kinds, and local geometry.

use kurbo::{Point, Size, Vec2};

/// Handle to an element in a [`Scene`](crate::Scene).
///
/// A `NodeId` pairs a slot index with a generation counter. Handles are cheap
/// to copy and remain valid until their element is removed; after that every
/// accessor rejects them. Because slot reuse bumps the generation, a stale
/// handle can never alias the element that later moves into the same slot.
///
/// Hosts that hold on to handles across mutations can ask
/// [`Scene::is_alive`](crate::Scene::is_alive) whether one still refers to a
/// live element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Kind of a scene element, mirroring the SVG element classes that matter for
/// interaction: plain shapes, group containers, and nested viewports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A leaf element with its own geometry (rect, circle, path, ...).
    Shape,
    /// A container element. Its geometric bounding box is the union of its
    /// children's boxes and can drift from the group's own coordinate origin.
    Group,
    /// A nested viewport (`<svg>` inside the document) with its own viewbox zoom.
    Nested,
    /// The document root viewport.
    Doc,
}

impl NodeKind {
    /// Returns `true` for elements that establish a viewport with a viewbox zoom.
    #[must_use]
    pub const fn is_viewport(self) -> bool {
        matches!(self, Self::Nested | Self::Doc)
    }
}

/// Local data for a scene element.
#[derive(Clone, Debug)]
pub struct LocalElement {
    /// Element kind.
    pub kind: NodeKind,
    /// Position of the element's own origin in parent space.
    pub origin: Point,
    /// Element extent.
    pub size: Size,
    /// Rotation in degrees (SVG `transform` convention).
    pub rotation: f64,
    /// Local scale factors relative to the parent.
    pub scale: Vec2,
    /// Viewbox zoom factor. Only meaningful for viewport kinds; `1.0` otherwise.
    pub zoom: f64,
}

impl Default for LocalElement {
    fn default() -> Self {
        Self {
            kind: NodeKind::Shape,
            origin: Point::ZERO,
            size: Size::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            zoom: 1.0,
        }
    }
}

impl LocalElement {
    /// A shape element at `origin` with the given `size`.
    #[must_use]
    pub fn shape(origin: Point, size: Size) -> Self {
        Self {
            kind: NodeKind::Shape,
            origin,
            size,
            ..Self::default()
        }
    }

    /// A group container anchored at `origin`.
    #[must_use]
    pub fn group(origin: Point) -> Self {
        Self {
            kind: NodeKind::Group,
            origin,
            ..Self::default()
        }
    }

    /// A nested viewport at `origin` with the given `size` and viewbox `zoom`.
    #[must_use]
    pub fn nested(origin: Point, size: Size, zoom: f64) -> Self {
        Self {
            kind: NodeKind::Nested,
            origin,
            size,
            zoom,
            ..Self::default()
        }
    }

    /// A document root viewport with the given viewbox `zoom`.
    #[must_use]
    pub fn doc(zoom: f64) -> Self {
        Self {
            kind: NodeKind::Doc,
            zoom,
            ..Self::default()
        }
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Sets the local scale factors.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
}
