//! Raw Pointer State Store
//!
//! Last-known raw mouse state in window-space, mutated only by the hosting
//! platform's event pump through [`Mouse`](crate::Mouse) entry points and read
//! only by snapshot production. No history, no queueing: each update
//! overwrites the previous value.

use crate::error::{PointerError, Result};

/// Validated two-dimensional extent, both dimensions > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    width: u32,
    height: u32,
}

impl Extent {
    /// Create an extent, rejecting zero dimensions.
    ///
    /// Every scaling computation divides by an extent dimension; validating
    /// here is what makes snapshot production infallible.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PointerError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (always > 0)
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels (always > 0)
    pub fn height(self) -> u32 {
        self.height
    }
}

/// Last-known raw mouse state (window-space)
#[derive(Debug, Clone)]
pub(crate) struct RawPointerState {
    /// Window-space cursor position; may go negative while a drag leaves the
    /// window
    pub x: i32,
    /// Window-space cursor position
    pub y: i32,
    /// Wheel accumulator; never reset by this crate, callers diff successive
    /// snapshots
    pub wheel: i32,
    /// Button flags, indexed by `MouseButton::index`
    pub buttons: [bool; 5],
    /// Physical window dimensions
    pub window: Extent,
    /// Logical render target dimensions
    pub backbuffer: Extent,
}

impl RawPointerState {
    pub(crate) fn new(window: Extent, backbuffer: Extent) -> Self {
        Self {
            x: 0,
            y: 0,
            wheel: 0,
            buttons: [false; 5],
            window,
            backbuffer,
        }
    }
}
