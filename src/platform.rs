//! Platform Backend Contract
//!
//! The seam between this crate and the hosting platform layer (SDL, winit, a
//! compositor shell, ...). The backend owns the actual window-system calls;
//! this crate only delegates relative-mode toggling and cursor warps through
//! it and never touches a handle itself.

use crate::error::Result;

/// Opaque window identifier, passed through to the platform backend untouched.
///
/// Holds raw handle bits (an `HWND`, an X11 window id, an SDL window id, ...)
/// and is never dereferenced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(
    /// Raw handle bits
    pub u64,
);

/// Platform input layer consumed by [`Mouse`](crate::Mouse).
///
/// Implementations live in the hosting application. All three operations are
/// expected to be cheap, synchronous window-system calls.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformBackend {
    /// Query the current OS-level relative mouse mode.
    ///
    /// Called fresh on every read so the answer reflects true OS state even
    /// when it was changed behind this crate's back.
    fn relative_mouse_mode(&self) -> bool;

    /// Enable or disable OS-level relative mouse mode (pointer capture,
    /// delta-only motion reporting).
    fn set_relative_mouse_mode(&mut self, enabled: bool) -> Result<()>;

    /// Warp the OS cursor to a window-space position within the given window.
    ///
    /// `window` is `None` when no handle has been assigned yet; backends may
    /// fall back to their focused window or reject the call.
    fn set_mouse_position(&mut self, window: Option<WindowHandle>, x: i32, y: i32) -> Result<()>;
}
