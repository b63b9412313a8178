// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Drag: pointer-driven drag interaction for scene elements.
//!
//! This crate wires pointer events to element repositioning. Given a bound
//! element, a [`DragController`] tracks pointer movement relative to a state
//! captured at pointer-down, computes a new position each move (accounting
//! for ancestor rotation and possibly non-uniform ancestor scale), applies
//! an optional [`Constraint`], writes the position back through the scene's
//! mutation API, and returns lifecycle notifications ([`DragEvent`]) for the
//! host to route.
//!
//! It does **not** construct scenes, render, or dispatch platform events.
//! The scene graph is the [`tether_scene`] collaborator and event plumbing is
//! the host's job: the host resolves which element a press landed on and
//! feeds every pointer event through [`DragController::dispatch`].
//!
//! ## Lifecycle
//!
//! Per element the interaction is a small state machine, idle → dragging →
//! idle:
//!
//! 1. [`DragController::enable`] binds pointer-down (mouse and touch) on the
//!    element. Rebinding tears the previous binding down first.
//! 2. Pointer-down captures a [`DragSession`] (start position, extent,
//!    viewport zoom, rotation in radians) and registers window-level move/up
//!    listeners.
//! 3. Each move computes the candidate position (see
//!    [`candidate_position`]), runs the constraint, and repositions the
//!    element.
//! 4. Pointer-up clears the session and the window-level registrations.
//!
//! All state outside an active session lives in the binding itself; nothing
//! persists between drags.
//!
//! ## Constraints
//!
//! A [`Constraint`] is either a static clamping box ([`BoxConstraint`], any
//! side optional) or a callback consulted with each candidate `(x, y)` that
//! answers with a [`Verdict`]: accept, reject, or per-axis rules.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tether_drag::{Constraint, DragController, DragEvent};
//! use tether_events::{PointerEvent, PointerKind};
//! use tether_scene::{LocalElement, Scene};
//!
//! let mut scene = Scene::new();
//! let doc = scene.insert(None, LocalElement::doc(1.0));
//! let rect = scene.insert(
//!     Some(doc),
//!     LocalElement::shape(Point::new(10.0, 10.0), Size::new(20.0, 20.0)),
//! );
//!
//! let mut drag = DragController::new();
//! drag.enable(rect, Constraint::default());
//!
//! // The host resolved the press to `rect`.
//! let mut down = PointerEvent::mouse(PointerKind::MouseDown, Point::new(15.0, 15.0));
//! let events = drag.dispatch(&mut scene, Some(rect), &mut down);
//! assert!(matches!(events[0], DragEvent::Start { .. }));
//!
//! // Window-level move: the element follows the pointer.
//! let mut mv = PointerEvent::mouse(PointerKind::MouseMove, Point::new(25.0, 15.0));
//! drag.dispatch(&mut scene, None, &mut mv);
//! assert_eq!(scene.x(rect), Some(20.0));
//!
//! let mut up = PointerEvent::mouse(PointerKind::MouseUp, Point::new(25.0, 15.0));
//! let events = drag.dispatch(&mut scene, None, &mut up);
//! assert!(matches!(events[0], DragEvent::End { .. }));
//! assert!(!drag.is_dragging(rect));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod constraint;
mod controller;
mod session;
mod transform;

pub use constraint::{AxisRule, BoxConstraint, Constraint, Placement, Verdict};
pub use controller::{BeforeDrag, DragController, DragControllerDebugInfo, DragEvent};
pub use session::{DragSession, StartState};
pub use transform::{accumulated_scale, candidate_position};
