// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag captured state, live only between pointer-down and pointer-up.

use kurbo::{Point, Size};
use tether_events::PointerEvent;

/// Element state captured at pointer-down.
///
/// Everything a move computation needs is frozen here so that in-flight
/// drags are unaffected by concurrent transform edits on the element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StartState {
    /// The element's position when the drag began.
    pub position: Point,
    /// The element's extent when the drag began.
    pub size: Size,
    /// Viewbox zoom of the governing viewport when the drag began.
    pub zoom: f64,
    /// The element's rotation when the drag began, in radians.
    pub rotation: f64,
}

/// Ephemeral drag session: created at pointer-down, dropped at pointer-up.
///
/// At most one session exists per element; starting a new drag always goes
/// through a fresh pointer-down after the previous pointer-up cleared this.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// The originating pointer-down event; move deltas are computed against
    /// its position.
    pub start_event: PointerEvent,
    /// Element state captured at pointer-down.
    pub start: StartState,
}
