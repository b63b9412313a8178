// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag controller: binding lifecycle, pointer routing, and notifications.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Vec2;
use tether_events::{ListenerId, ListenerTable, PointerEvent, PointerKind, Target};
use tether_scene::{NodeId, NodeKind, Scene};

use crate::constraint::{Constraint, Placement};
use crate::session::{DragSession, StartState};
use crate::transform::{accumulated_scale, candidate_position};

/// Hook invoked on a bound element just before drag-start processing.
///
/// The hook observes the originating pointer event; its outcome cannot veto
/// the drag.
pub type BeforeDrag = Box<dyn FnMut(&PointerEvent)>;

/// Lifecycle notification emitted by [`DragController::dispatch`].
///
/// Consumers route these to whoever subscribed on the element, the same way
/// hover or focus transition events are routed. `Start` and `End` always
/// carry a zero delta; the per-move delta (and the accumulated ancestor
/// scale) travels on `Move`.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent {
    /// A drag began on `node`.
    Start {
        /// The element being dragged.
        node: NodeId,
        /// The originating pointer event.
        event: PointerEvent,
        /// Always zero at start.
        delta: Vec2,
    },
    /// The pointer moved while dragging `node`.
    Move {
        /// The element being dragged.
        node: NodeId,
        /// The triggering pointer event.
        event: PointerEvent,
        /// Raw pointer delta since pointer-down, in page coordinates.
        delta: Vec2,
        /// Accumulated ancestor scale at the time of the move.
        scale: Vec2,
    },
    /// The drag on `node` ended.
    End {
        /// The element that was dragged.
        node: NodeId,
        /// The terminating pointer event.
        event: PointerEvent,
        /// Always zero at end; the final pointer delta is not reported.
        delta: Vec2,
    },
}

struct Binding {
    constraint: Constraint,
    before_drag: Option<BeforeDrag>,
    down_listeners: [ListenerId; 2],
    window_listeners: Option<[ListenerId; 4]>,
    session: Option<DragSession>,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("constraint", &self.constraint)
            .field("has_before_drag", &self.before_drag.is_some())
            .field("down_listeners", &self.down_listeners)
            .field("window_listeners", &self.window_listeners)
            .field("dragging", &self.session.is_some())
            .finish()
    }
}

/// Attaches pointer-driven drag behavior to scene elements.
///
/// One controller serves a whole scene: each [`DragController::enable`] call
/// creates a per-element binding (pointer-down listeners plus a constraint),
/// and the host feeds pointer events through [`DragController::dispatch`].
/// Per element the controller owns only transient per-drag state, captured at
/// pointer-down and cleared at pointer-up; nothing persists between drags.
///
/// ## Lifecycle
///
/// - `enable` is an idempotent rebind: an existing binding is fully torn down
///   first, so a bound element always holds exactly one mouse-down and one
///   touch-start registration.
/// - Pointer-down on a bound element captures a [`DragSession`] and registers
///   window-level move/up listeners (mouse and touch).
/// - Pointer-up clears the session and removes exactly those window
///   registrations.
/// - [`DragController::disable`] removes everything at any time, including
///   mid-drag; events that are already in flight then fall through the
///   session check and become no-ops.
#[derive(Debug, Default)]
pub struct DragController {
    bindings: HashMap<NodeId, Binding>,
    listeners: ListenerTable<NodeId>,
}

impl DragController {
    /// Creates a controller with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `node` draggable under `constraint`.
    ///
    /// If the element is already bound, the previous binding (listeners,
    /// constraint, hook, and any active session) is removed first.
    pub fn enable(&mut self, node: NodeId, constraint: Constraint) {
        self.disable(node);
        let down_listeners = [
            self.listeners
                .subscribe(Target::Node(node), PointerKind::MouseDown),
            self.listeners
                .subscribe(Target::Node(node), PointerKind::TouchStart),
        ];
        self.bindings.insert(
            node,
            Binding {
                constraint,
                before_drag: None,
                down_listeners,
                window_listeners: None,
                session: None,
            },
        );
    }

    /// Removes the drag binding from `node` and echoes the element handle.
    ///
    /// Removes the element's pointer-down registrations, any window-level
    /// move/up registrations, the hook, and an in-flight session. Safe no-op
    /// when the element is not bound.
    pub fn disable(&mut self, node: NodeId) -> NodeId {
        if let Some(binding) = self.bindings.remove(&node) {
            for id in binding.down_listeners {
                self.listeners.unsubscribe(id);
            }
            if let Some(ids) = binding.window_listeners {
                for id in ids {
                    self.listeners.unsubscribe(id);
                }
            }
        }
        node
    }

    /// Attaches (or replaces) the element's pre-start hook.
    ///
    /// No-op when the element is not bound; rebinding clears the hook.
    pub fn set_before_drag(&mut self, node: NodeId, hook: impl FnMut(&PointerEvent) + 'static) {
        if let Some(binding) = self.bindings.get_mut(&node) {
            binding.before_drag = Some(Box::new(hook));
        }
    }

    /// Returns `true` if the element currently has a drag binding.
    #[must_use]
    pub fn is_enabled(&self, node: NodeId) -> bool {
        self.bindings.contains_key(&node)
    }

    /// Returns `true` while a drag session is active on the element.
    #[must_use]
    pub fn is_dragging(&self, node: NodeId) -> bool {
        self.bindings
            .get(&node)
            .is_some_and(|b| b.session.is_some())
    }

    /// The controller's listener registrations, for hosts wiring real event
    /// sources and for tests asserting exact bind/unbind behavior.
    #[must_use]
    pub fn listeners(&self) -> &ListenerTable<NodeId> {
        &self.listeners
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DragControllerDebugInfo {
        DragControllerDebugInfo {
            bindings: self.bindings.len(),
            active_sessions: self
                .bindings
                .values()
                .filter(|b| b.session.is_some())
                .count(),
            listeners: self.listeners.len(),
        }
    }

    /// Routes a pointer event, mutating element positions through `scene` and
    /// returning the lifecycle notifications it produced.
    ///
    /// `target` names the element the host resolved under the pointer; it is
    /// only consulted for press kinds. Move and release kinds are window-level
    /// and are matched against active sessions instead. Every entry runs to
    /// completion synchronously; events with no matching binding or session
    /// are no-ops.
    pub fn dispatch(
        &mut self,
        scene: &mut Scene,
        target: Option<NodeId>,
        event: &mut PointerEvent,
    ) -> Vec<DragEvent> {
        let kind = event.kind;
        let mut out = Vec::new();
        if kind.is_down() {
            if let Some(node) = target {
                if self.listeners.is_subscribed(Target::Node(node), kind) {
                    if let Some(ev) = self.start(scene, node, event) {
                        out.push(ev);
                    }
                }
            }
        } else if kind.is_move() {
            for node in self.nodes_with_window_hooks() {
                if let Some(ev) = self.drag_move(scene, node, event) {
                    out.push(ev);
                }
            }
        } else if kind.is_up() {
            for node in self.nodes_with_window_hooks() {
                if let Some(ev) = self.end(node, event) {
                    out.push(ev);
                }
            }
        }
        out
    }

    /// Elements with an active session and live window-level registrations.
    fn nodes_with_window_hooks(&self) -> Vec<NodeId> {
        self.bindings
            .iter()
            .filter(|(_, b)| b.session.is_some() && b.window_listeners.is_some())
            .map(|(&node, _)| node)
            .collect()
    }

    fn start(
        &mut self,
        scene: &mut Scene,
        node: NodeId,
        event: &mut PointerEvent,
    ) -> Option<DragEvent> {
        let binding = self.bindings.get_mut(&node)?;

        if let Some(hook) = binding.before_drag.as_mut() {
            hook(event);
        }

        // Viewbox zoom comes from the nearest viewport ancestor; an element
        // outside any viewport sees unity zoom.
        let zoom = scene
            .nearest_viewport(node)
            .and_then(|v| scene.zoom(v))
            .unwrap_or(1.0);

        // Groups report a bbox computed from their children, which can drift
        // from the group's own origin; nested viewports likewise answer with
        // their own accessors rather than the generic bbox.
        let bbox = scene.bbox(node)?;
        let (position, size) = match scene.kind(node)? {
            NodeKind::Group => (scene.origin(node)?, bbox.size()),
            NodeKind::Nested => (scene.origin(node)?, scene.size(node)?),
            _ => (bbox.origin(), bbox.size()),
        };
        let rotation = scene.rotation(node)?.to_radians();

        // A press landing mid-session (a touch start during a mouse drag)
        // restarts the drag; the previous window registrations are released
        // first so the release still tears down exactly four.
        if let Some(ids) = binding.window_listeners.take() {
            for id in ids {
                self.listeners.unsubscribe(id);
            }
        }

        binding.session = Some(DragSession {
            start_event: event.clone(),
            start: StartState {
                position,
                size,
                zoom,
                rotation,
            },
        });
        binding.window_listeners = Some([
            self.listeners
                .subscribe(Target::Window, PointerKind::MouseMove),
            self.listeners
                .subscribe(Target::Window, PointerKind::TouchMove),
            self.listeners
                .subscribe(Target::Window, PointerKind::MouseUp),
            self.listeners
                .subscribe(Target::Window, PointerKind::TouchEnd),
        ]);

        // Suppress the host's default action (text selection) for the press.
        event.prevent_default();

        Some(DragEvent::Start {
            node,
            event: event.clone(),
            delta: Vec2::ZERO,
        })
    }

    fn drag_move(
        &mut self,
        scene: &mut Scene,
        node: NodeId,
        event: &PointerEvent,
    ) -> Option<DragEvent> {
        let binding = self.bindings.get_mut(&node)?;
        let (delta, start) = {
            let session = binding.session.as_ref()?;
            (
                event.position() - session.start_event.position(),
                session.start,
            )
        };

        let scale = accumulated_scale(scene, node);
        let candidate = candidate_position(&start, delta, scale);
        match binding.constraint.evaluate(candidate, start.size) {
            Placement::Move(p) => scene.move_to(node, p),
            Placement::MoveX(x) => scene.set_x(node, x),
            Placement::MoveY(y) => scene.set_y(node, y),
            Placement::Keep => {}
        }

        // The move notification always fires, even when the constraint kept
        // the element in place.
        Some(DragEvent::Move {
            node,
            event: event.clone(),
            delta,
            scale,
        })
    }

    fn end(&mut self, node: NodeId, event: &PointerEvent) -> Option<DragEvent> {
        let binding = self.bindings.get_mut(&node)?;
        let session = binding.session.take()?;

        // The final pointer delta and the captured zoom are computed here but
        // intentionally absent from the notification payload, which reports a
        // zero delta at end.
        let _final_delta = event.position() - session.start_event.position();
        let _zoom = session.start.zoom;

        if let Some(ids) = binding.window_listeners.take() {
            for id in ids {
                self.listeners.unsubscribe(id);
            }
        }

        Some(DragEvent::End {
            node,
            event: event.clone(),
            delta: Vec2::ZERO,
        })
    }
}

/// Debug snapshot of a [`DragController`] state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragControllerDebugInfo {
    /// Number of bound elements.
    pub bindings: usize,
    /// Number of elements with an in-flight drag session.
    pub active_sessions: usize,
    /// Total live listener registrations.
    pub listeners: usize,
}
