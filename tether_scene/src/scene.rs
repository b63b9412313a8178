// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene arena: slot storage, hierarchy maintenance, and geometry queries.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{LocalElement, NodeId, NodeKind};

#[derive(Clone, Debug)]
struct ElementData {
    local: LocalElement,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    data: Option<ElementData>,
}

/// Container managing scene elements and their hierarchy.
///
/// The scene is a generational arena: [`Scene::insert`] returns a [`NodeId`]
/// handle, [`Scene::remove`] frees the slot, and every accessor verifies the
/// handle's generation so stale ids degrade to `None` / no-ops instead of
/// reading unrelated elements.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the scene holds no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element under `parent` (or as a root when `parent` is `None`
    /// or stale) and returns its handle.
    pub fn insert(&mut self, parent: Option<NodeId>, local: LocalElement) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation = slot.generation.wrapping_add(1);
                NodeId::new(idx, slot.generation)
            }
            None => {
                let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
                self.slots.push(Slot {
                    generation: 1,
                    data: None,
                });
                NodeId::new(idx, 1)
            }
        };
        self.slots[id.idx()].data = Some(ElementData {
            local,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            if let Some(pd) = self.data_mut(p) {
                pd.children.push(id);
            }
        }
        self.len += 1;
        id
    }

    /// Removes an element, detaching it from its parent and re-rooting its
    /// children. Returns `false` for stale ids.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(data) = self.data(id) else {
            return false;
        };
        let parent = data.parent;
        let children = data.children.clone();

        for child in children {
            if let Some(cd) = self.data_mut(child) {
                cd.parent = None;
            }
        }
        if let Some(p) = parent {
            if let Some(pd) = self.data_mut(p) {
                pd.children.retain(|&c| c != id);
            }
        }

        self.slots[id.idx()].data = None;
        self.free.push(id.0);
        self.len -= 1;
        true
    }

    /// Returns `true` if `id` refers to a live element.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.data(id).is_some()
    }

    /// The element's kind.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.data(id).map(|d| d.local.kind)
    }

    /// The element's parent, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).and_then(|d| d.parent)
    }

    /// The element's children, in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.data(id).map_or(&[], |d| d.children.as_slice())
    }

    /// The element's own x position in parent space.
    #[must_use]
    pub fn x(&self, id: NodeId) -> Option<f64> {
        self.data(id).map(|d| d.local.origin.x)
    }

    /// The element's own y position in parent space.
    #[must_use]
    pub fn y(&self, id: NodeId) -> Option<f64> {
        self.data(id).map(|d| d.local.origin.y)
    }

    /// The element's own origin in parent space.
    #[must_use]
    pub fn origin(&self, id: NodeId) -> Option<Point> {
        self.data(id).map(|d| d.local.origin)
    }

    /// The element's extent.
    #[must_use]
    pub fn size(&self, id: NodeId) -> Option<Size> {
        self.data(id).map(|d| d.local.size)
    }

    /// The element's width.
    #[must_use]
    pub fn width(&self, id: NodeId) -> Option<f64> {
        self.data(id).map(|d| d.local.size.width)
    }

    /// The element's height.
    #[must_use]
    pub fn height(&self, id: NodeId) -> Option<f64> {
        self.data(id).map(|d| d.local.size.height)
    }

    /// Sets the element's x position. No-op for stale ids.
    pub fn set_x(&mut self, id: NodeId, x: f64) {
        if let Some(d) = self.data_mut(id) {
            d.local.origin.x = x;
        }
    }

    /// Sets the element's y position. No-op for stale ids.
    pub fn set_y(&mut self, id: NodeId, y: f64) {
        if let Some(d) = self.data_mut(id) {
            d.local.origin.y = y;
        }
    }

    /// Moves the element's origin. No-op for stale ids.
    pub fn move_to(&mut self, id: NodeId, origin: Point) {
        if let Some(d) = self.data_mut(id) {
            d.local.origin = origin;
        }
    }

    /// The element's rotation in degrees.
    #[must_use]
    pub fn rotation(&self, id: NodeId) -> Option<f64> {
        self.data(id).map(|d| d.local.rotation)
    }

    /// Sets the element's rotation in degrees. No-op for stale ids.
    pub fn set_rotation(&mut self, id: NodeId, degrees: f64) {
        if let Some(d) = self.data_mut(id) {
            d.local.rotation = degrees;
        }
    }

    /// The element's local scale factors.
    #[must_use]
    pub fn scale(&self, id: NodeId) -> Option<Vec2> {
        self.data(id).map(|d| d.local.scale)
    }

    /// Sets the element's local scale factors. No-op for stale ids.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) {
        if let Some(d) = self.data_mut(id) {
            d.local.scale = scale;
        }
    }

    /// The viewbox zoom of a viewport element, or `1.0` for non-viewports.
    #[must_use]
    pub fn zoom(&self, id: NodeId) -> Option<f64> {
        self.data(id).map(|d| {
            if d.local.kind.is_viewport() {
                d.local.zoom
            } else {
                1.0
            }
        })
    }

    /// Sets the viewbox zoom. No-op for stale ids and non-viewport kinds.
    pub fn set_zoom(&mut self, id: NodeId, zoom: f64) {
        if let Some(d) = self.data_mut(id) {
            if d.local.kind.is_viewport() {
                d.local.zoom = zoom;
            }
        }
    }

    /// Geometric bounding box of an element.
    ///
    /// For [`NodeKind::Group`] this is the union of the children's boxes
    /// (falling back to the group's own origin and size when it has no
    /// children), so it can drift away from the group's own origin. All other
    /// kinds report their own origin and size.
    #[must_use]
    pub fn bbox(&self, id: NodeId) -> Option<Rect> {
        let data = self.data(id)?;
        let own = Rect::from_origin_size(data.local.origin, data.local.size);
        if data.local.kind != NodeKind::Group {
            return Some(own);
        }
        let mut acc: Option<Rect> = None;
        for &child in &data.children {
            if let Some(b) = self.bbox(child) {
                acc = Some(match acc {
                    Some(a) => a.union(b),
                    None => b,
                });
            }
        }
        Some(acc.unwrap_or(own))
    }

    /// Resolves the viewport governing `id`: the nearest `Nested` ancestor,
    /// or the `Doc` root of its ancestor chain.
    ///
    /// Returns `None` for stale ids and for elements whose chain contains
    /// neither viewport kind.
    #[must_use]
    pub fn nearest_viewport(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        let mut doc = None;
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            match self.kind(node) {
                Some(NodeKind::Nested) => return Some(node),
                Some(NodeKind::Doc) => doc = Some(node),
                _ => {}
            }
            cursor = self.parent(node);
        }
        doc
    }

    fn data(&self, id: NodeId) -> Option<&ElementData> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.data.as_ref()
    }

    fn data_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.data.as_mut()
    }
}
