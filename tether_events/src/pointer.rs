// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events: one type covering mouse and touch input.

use kurbo::Point;
use smallvec::SmallVec;

/// Kind of a pointer event, tagging both the lifecycle phase and the input
/// source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse button press.
    MouseDown,
    /// Mouse movement.
    MouseMove,
    /// Mouse button release.
    MouseUp,
    /// Touch contact start.
    TouchStart,
    /// Touch contact movement.
    TouchMove,
    /// Touch contact end.
    TouchEnd,
}

impl PointerKind {
    /// Returns `true` for touch-sourced kinds.
    #[must_use]
    pub const fn is_touch(self) -> bool {
        matches!(self, Self::TouchStart | Self::TouchMove | Self::TouchEnd)
    }

    /// Returns `true` for press kinds (mouse down / touch start).
    #[must_use]
    pub const fn is_down(self) -> bool {
        matches!(self, Self::MouseDown | Self::TouchStart)
    }

    /// Returns `true` for movement kinds.
    #[must_use]
    pub const fn is_move(self) -> bool {
        matches!(self, Self::MouseMove | Self::TouchMove)
    }

    /// Returns `true` for release kinds (mouse up / touch end).
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::MouseUp | Self::TouchEnd)
    }
}

/// A pointer event in page coordinates.
///
/// Touch events carry their contact points in [`PointerEvent::touches`];
/// mouse events carry only the page position. [`PointerEvent::position`]
/// resolves the correct coordinates for the kind, which is the accessor
/// consumers should use for drag deltas.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerKind,
    /// Pointer position in page coordinates.
    pub page: Point,
    /// Touch contact points, first contact first. Empty for mouse events.
    pub touches: SmallVec<[Point; 2]>,
    /// Set when a consumer asked the host to suppress the default action
    /// (text selection, scrolling). Hosts check this after dispatch.
    pub default_prevented: bool,
}

impl PointerEvent {
    /// A mouse event of the given kind at `page`.
    #[must_use]
    pub fn mouse(kind: PointerKind, page: Point) -> Self {
        Self {
            kind,
            page,
            touches: SmallVec::new(),
            default_prevented: false,
        }
    }

    /// A single-contact touch event of the given kind at `point`.
    ///
    /// The contact point doubles as the page position, matching hosts that
    /// synthesize page coordinates from the first touch.
    #[must_use]
    pub fn touch(kind: PointerKind, point: Point) -> Self {
        let mut touches = SmallVec::new();
        touches.push(point);
        Self {
            kind,
            page: point,
            touches,
            default_prevented: false,
        }
    }

    /// The event's effective position: the first touch contact for touch
    /// kinds, the page position otherwise.
    #[must_use]
    pub fn position(&self) -> Point {
        if self.kind.is_touch() {
            self.touches.first().copied().unwrap_or(self.page)
        } else {
            self.page
        }
    }

    /// Asks the host to suppress the event's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates_partition_the_kinds() {
        let all = [
            PointerKind::MouseDown,
            PointerKind::MouseMove,
            PointerKind::MouseUp,
            PointerKind::TouchStart,
            PointerKind::TouchMove,
            PointerKind::TouchEnd,
        ];
        for kind in all {
            let phases = [kind.is_down(), kind.is_move(), kind.is_up()];
            assert_eq!(
                phases.iter().filter(|&&p| p).count(),
                1,
                "each kind is exactly one phase"
            );
        }
        assert!(PointerKind::TouchMove.is_touch());
        assert!(!PointerKind::MouseMove.is_touch());
    }

    #[test]
    fn position_uses_touch_coordinates_for_touch_kinds() {
        let mouse = PointerEvent::mouse(PointerKind::MouseMove, Point::new(3.0, 4.0));
        assert_eq!(mouse.position(), Point::new(3.0, 4.0));

        let mut touch = PointerEvent::touch(PointerKind::TouchMove, Point::new(7.0, 8.0));
        // A diverging page position must not win for touch kinds.
        touch.page = Point::new(0.0, 0.0);
        assert_eq!(touch.position(), Point::new(7.0, 8.0));
    }

    #[test]
    fn touch_event_without_contacts_falls_back_to_page() {
        let mut ev = PointerEvent::touch(PointerKind::TouchEnd, Point::new(1.0, 2.0));
        ev.touches.clear();
        assert_eq!(ev.position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn prevent_default_sets_the_flag() {
        let mut ev = PointerEvent::mouse(PointerKind::MouseDown, Point::ZERO);
        assert!(!ev.default_prevented);
        ev.prevent_default();
        assert!(ev.default_prevented);
    }
}
