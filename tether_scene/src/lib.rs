// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Scene: a Kurbo-native, SVG-like scene arena.
//!
//! This crate is the host-side collaborator consumed by `tether_drag`. It
//! models just enough of an SVG document to drive drag interaction:
//!
//! - A hierarchy of elements with positions, sizes, per-element rotation and
//!   scale, and parent links for ancestor walks.
//! - Element kinds distinguishing plain shapes, groups (whose geometric
//!   bounding box derives from their children), and nested viewports carrying
//!   a viewbox zoom factor.
//! - Position mutation (`set_x` / `set_y` / [`Scene::move_to`]), the write
//!   surface a drag controller repositions elements through.
//!
//! It does **not** render, lay out, or hit test. Callers maintain element
//! geometry themselves and query/mutate it through [`Scene`].
//!
//! ## Handles
//!
//! Elements are addressed by [`NodeId`], a small generational handle: stable
//! across updates, invalidated on removal, and never aliasing a different
//! live element after slot reuse. Every accessor checks liveness and returns
//! `None` (or no-ops) for stale ids.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tether_scene::{LocalElement, Scene};
//!
//! let mut scene = Scene::new();
//! let doc = scene.insert(None, LocalElement::doc(1.0));
//! let rect = scene.insert(
//!     Some(doc),
//!     LocalElement::shape(Point::new(10.0, 20.0), Size::new(30.0, 40.0)),
//! );
//!
//! scene.move_to(rect, Point::new(50.0, 60.0));
//! assert_eq!(scene.x(rect), Some(50.0));
//! assert_eq!(scene.nearest_viewport(rect), Some(doc));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod types;

pub use scene::Scene;
pub use types::{LocalElement, NodeId, NodeKind};
