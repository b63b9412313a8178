// Copyright 2026 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constraint evaluation: box clamping and callback policies.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size};

/// A static clamping box. Any unset bound leaves that side unbounded.
///
/// Clamping keeps the whole element inside the box: x is clamped to
/// `[min_x, max_x − width]` and y to `[min_y, max_y − height]`.
///
/// Per axis, the minimum and maximum bounds are checked as an else-if chain:
/// once the minimum bound fires, the maximum is not re-checked for that tick.
/// For a box narrower than the element this means the minimum bound wins.
/// This is long-standing drag behavior and is kept for position
/// compatibility across hosts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxConstraint {
    /// Lower bound on x, if any.
    pub min_x: Option<f64>,
    /// Upper bound on the element's right edge, if any.
    pub max_x: Option<f64>,
    /// Lower bound on y, if any.
    pub min_y: Option<f64>,
    /// Upper bound on the element's bottom edge, if any.
    pub max_y: Option<f64>,
}

impl BoxConstraint {
    /// An unbounded box (no clamping on any side).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower x bound.
    #[must_use]
    pub fn with_min_x(mut self, min_x: f64) -> Self {
        self.min_x = Some(min_x);
        self
    }

    /// Sets the upper x bound (applied to the element's right edge).
    #[must_use]
    pub fn with_max_x(mut self, max_x: f64) -> Self {
        self.max_x = Some(max_x);
        self
    }

    /// Sets the lower y bound.
    #[must_use]
    pub fn with_min_y(mut self, min_y: f64) -> Self {
        self.min_y = Some(min_y);
        self
    }

    /// Sets the upper y bound (applied to the element's bottom edge).
    #[must_use]
    pub fn with_max_y(mut self, max_y: f64) -> Self {
        self.max_y = Some(max_y);
        self
    }

    /// Clamps a candidate position so an element of `size` stays inside the box.
    #[must_use]
    pub fn clamp(&self, candidate: Point, size: Size) -> Point {
        Point::new(
            clamp_axis(candidate.x, self.min_x, self.max_x, size.width),
            clamp_axis(candidate.y, self.min_y, self.max_y, size.height),
        )
    }
}

// Min is checked before max and the two are mutually exclusive per tick.
fn clamp_axis(value: f64, min: Option<f64>, max: Option<f64>, extent: f64) -> f64 {
    match (min, max) {
        (Some(min), _) if value < min => min,
        (_, Some(max)) if value > max - extent => max - extent,
        _ => value,
    }
}

/// Per-axis verdict of a callback constraint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AxisRule {
    /// Override the axis with this value.
    Value(f64),
    /// Use the computed candidate value for this axis.
    Computed,
    /// Leave this axis unchanged.
    Skip,
}

impl AxisRule {
    fn resolve(self, computed: f64) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Computed => Some(computed),
            Self::Skip => None,
        }
    }
}

/// Full verdict of a callback constraint for one candidate position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Verdict {
    /// Accept the raw candidate; the element moves on both axes.
    Accept,
    /// Reject the move; the element stays where it is this tick.
    Reject,
    /// Per-axis rules. Only one axis is ever applied per invocation: the
    /// x rule wins unless it is [`AxisRule::Skip`], and only then is the
    /// y rule consulted. This asymmetry is the established behavior of the
    /// object-returning callback form and is kept as-is.
    Axes {
        /// Rule for the x axis.
        x: AxisRule,
        /// Rule for the y axis.
        y: AxisRule,
    },
}

/// How a move lands on the element after constraint evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// Move both axes to the point.
    Move(Point),
    /// Move only the x axis.
    MoveX(f64),
    /// Move only the y axis.
    MoveY(f64),
    /// Leave the element unchanged.
    Keep,
}

/// Policy limiting or overriding candidate drag positions.
///
/// A constraint is fixed when a binding is enabled and lives for the life of
/// that binding; rebinding replaces it wholesale.
pub enum Constraint {
    /// Clamp candidates into a static box.
    Box(BoxConstraint),
    /// Consult a callback with the candidate `(x, y)` each move.
    Func(Box<dyn FnMut(f64, f64) -> Verdict>),
}

impl Default for Constraint {
    /// An unbounded box: every candidate is applied unmodified.
    fn default() -> Self {
        Self::Box(BoxConstraint::default())
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box(b) => f.debug_tuple("Box").field(b).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl Constraint {
    /// A callback constraint.
    #[must_use]
    pub fn func(f: impl FnMut(f64, f64) -> Verdict + 'static) -> Self {
        Self::Func(Box::new(f))
    }

    /// Evaluates the constraint for a candidate position of an element with
    /// the given start `size`, yielding the placement to apply.
    pub fn evaluate(&mut self, candidate: Point, size: Size) -> Placement {
        match self {
            Self::Box(b) => Placement::Move(b.clamp(candidate, size)),
            Self::Func(f) => match f(candidate.x, candidate.y) {
                Verdict::Accept => Placement::Move(candidate),
                Verdict::Reject => Placement::Keep,
                Verdict::Axes { x, y } => {
                    if let Some(x) = x.resolve(candidate.x) {
                        Placement::MoveX(x)
                    } else if let Some(y) = y.resolve(candidate.y) {
                        Placement::MoveY(y)
                    } else {
                        Placement::Keep
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(20.0, 10.0);

    #[test]
    fn unbounded_box_passes_candidates_through() {
        let mut c = Constraint::default();
        assert_eq!(
            c.evaluate(Point::new(-1e6, 1e6), SIZE),
            Placement::Move(Point::new(-1e6, 1e6))
        );
    }

    #[test]
    fn box_clamps_against_element_extent() {
        let b = BoxConstraint::new().with_min_x(0.0).with_max_x(100.0);
        // Right edge may not pass max_x.
        assert_eq!(
            b.clamp(Point::new(150.0, 5.0), SIZE),
            Point::new(80.0, 5.0)
        );
        assert_eq!(
            b.clamp(Point::new(-50.0, 5.0), SIZE),
            Point::new(0.0, 5.0)
        );
        assert_eq!(b.clamp(Point::new(40.0, 5.0), SIZE), Point::new(40.0, 5.0));
    }

    #[test]
    fn box_axes_clamp_independently() {
        let b = BoxConstraint::new()
            .with_min_y(10.0)
            .with_max_y(30.0)
            .with_min_x(0.0);
        assert_eq!(
            b.clamp(Point::new(-5.0, 100.0), SIZE),
            Point::new(0.0, 20.0)
        );
    }

    #[test]
    fn min_wins_when_box_is_narrower_than_element() {
        // Box is 10 wide, element is 20 wide: min is checked first and the
        // max bound is not revisited.
        let b = BoxConstraint::new().with_min_x(0.0).with_max_x(10.0);
        assert_eq!(b.clamp(Point::new(-5.0, 0.0), SIZE), Point::new(0.0, 0.0));
        // Above min, the max clamp lands at max_x - width, below min.
        assert_eq!(b.clamp(Point::new(5.0, 0.0), SIZE), Point::new(-10.0, 0.0));
    }

    #[test]
    fn unset_bounds_leave_the_side_open() {
        let b = BoxConstraint::new().with_max_x(100.0);
        assert_eq!(
            b.clamp(Point::new(-1e9, 0.0), SIZE),
            Point::new(-1e9, 0.0)
        );
    }

    #[test]
    fn accept_moves_to_raw_candidate() {
        let mut c = Constraint::func(|_, _| Verdict::Accept);
        assert_eq!(
            c.evaluate(Point::new(3.0, 4.0), SIZE),
            Placement::Move(Point::new(3.0, 4.0))
        );
    }

    #[test]
    fn reject_keeps_position() {
        let mut c = Constraint::func(|_, _| Verdict::Reject);
        assert_eq!(c.evaluate(Point::new(3.0, 4.0), SIZE), Placement::Keep);
    }

    #[test]
    fn axes_verdict_applies_only_one_axis() {
        // Both axes eligible: x wins, y is ignored.
        let mut c = Constraint::func(|_, _| Verdict::Axes {
            x: AxisRule::Computed,
            y: AxisRule::Value(99.0),
        });
        assert_eq!(c.evaluate(Point::new(3.0, 4.0), SIZE), Placement::MoveX(3.0));

        // x skipped: y is consulted.
        let mut c = Constraint::func(|_, _| Verdict::Axes {
            x: AxisRule::Skip,
            y: AxisRule::Computed,
        });
        assert_eq!(c.evaluate(Point::new(3.0, 4.0), SIZE), Placement::MoveY(4.0));

        // Both skipped: nothing moves.
        let mut c = Constraint::func(|_, _| Verdict::Axes {
            x: AxisRule::Skip,
            y: AxisRule::Skip,
        });
        assert_eq!(c.evaluate(Point::new(3.0, 4.0), SIZE), Placement::Keep);
    }

    #[test]
    fn axis_value_overrides_the_candidate() {
        let mut c = Constraint::func(|_, _| Verdict::Axes {
            x: AxisRule::Value(42.0),
            y: AxisRule::Computed,
        });
        assert_eq!(
            c.evaluate(Point::new(3.0, 4.0), SIZE),
            Placement::MoveX(42.0)
        );
    }

    #[test]
    fn callback_sees_the_candidate_coordinates() {
        let mut c = Constraint::func(|x, y| {
            if x > 100.0 || y > 100.0 {
                Verdict::Reject
            } else {
                Verdict::Accept
            }
        });
        assert_eq!(
            c.evaluate(Point::new(50.0, 50.0), SIZE),
            Placement::Move(Point::new(50.0, 50.0))
        );
        assert_eq!(c.evaluate(Point::new(150.0, 50.0), SIZE), Placement::Keep);
    }
}
