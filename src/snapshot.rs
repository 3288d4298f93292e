//! Pointer Snapshots
//!
//! Immutable point-in-time projections of the raw state store, with the
//! window-space to backbuffer-space coordinate scaling applied.
//!
//! Scaling is float multiply-divide followed by truncation toward zero, not
//! integer division: a window 800 wide mapped to a 1920-wide backbuffer must
//! scale x=400 to 960, which integer pre-truncation would get wrong.

use crate::button::{ButtonState, MouseButton};
use crate::state::RawPointerState;

/// Scale a coordinate from one axis extent to another.
///
/// Both extents are guaranteed > 0 by [`Extent`](crate::Extent) validation.
/// The `as i32` cast truncates toward zero, matching the scale-then-truncate
/// semantics snapshots are specified with; negative coordinates (off-window
/// drags) truncate toward zero as well.
pub(crate) fn scale_axis(value: i32, from: u32, to: u32) -> i32 {
    (value as f64 * to as f64 / from as f64) as i32
}

/// Immutable snapshot of pointer state, in backbuffer-space.
///
/// A pure value: holds no reference back to the store, safe to copy and
/// compare. Two snapshots taken with no intervening mutation are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerSnapshot {
    /// Cursor x in backbuffer-space
    pub x: i32,
    /// Cursor y in backbuffer-space
    pub y: i32,
    /// Wheel accumulator at read time
    pub wheel: i32,
    /// Left button state
    pub left: ButtonState,
    /// Middle button state
    pub middle: ButtonState,
    /// Right button state
    pub right: ButtonState,
    /// Extra button 1 state
    pub extra1: ButtonState,
    /// Extra button 2 state
    pub extra2: ButtonState,
}

impl PointerSnapshot {
    /// Project the raw store into a scaled snapshot.
    pub(crate) fn capture(state: &RawPointerState) -> Self {
        let x = scale_axis(state.x, state.window.width(), state.backbuffer.width());
        let y = scale_axis(state.y, state.window.height(), state.backbuffer.height());

        Self {
            x,
            y,
            wheel: state.wheel,
            left: state.buttons[MouseButton::Left.index()].into(),
            middle: state.buttons[MouseButton::Middle.index()].into(),
            right: state.buttons[MouseButton::Right.index()].into(),
            extra1: state.buttons[MouseButton::Extra1.index()].into(),
            extra2: state.buttons[MouseButton::Extra2.index()].into(),
        }
    }

    /// Cursor position in backbuffer-space
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// State of the given button
    pub fn button(&self, button: MouseButton) -> ButtonState {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Extra1 => self.extra1,
            MouseButton::Extra2 => self.extra2,
        }
    }

    /// Check whether the given button is pressed
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.button(button).is_pressed()
    }
}
