//! Mouse State Front-End
//!
//! Owns the raw state store, the observer lists, and the platform backend,
//! and exposes the poll/control surface to the application:
//!
//! ```text
//! Platform event pump                Application
//!   handle_move / handle_wheel        get_state() -> PointerSnapshot
//!   handle_button                     set_position()
//!   set_window_extent                 relative mode property
//!   set_backbuffer_extent             on_pressed / on_released
//!          ↓                                 ↓
//!      ┌──────────────────────────────────────────┐
//!      │  Mouse<P>                                │
//!      │  - RawPointerState (window-space)        │
//!      │  - ObserverSet x2 (pressed / released)   │
//!      │  - P: PlatformBackend (delegated calls)  │
//!      └──────────────────────────────────────────┘
//! ```
//!
//! Single-writer discipline is enforced by `&mut self` on every mutating
//! entry point; the hosting application owns the instance and decides where
//! it lives. There is no process-wide singleton.

use crate::button::MouseButton;
use crate::error::Result;
use crate::observer::ObserverSet;
use crate::platform::{PlatformBackend, WindowHandle};
use crate::snapshot::{scale_axis, PointerSnapshot};
use crate::state::{Extent, RawPointerState};
use tracing::{debug, warn};

/// Authoritative mouse state for one window/backbuffer pair.
///
/// Mutated exclusively by the platform event pump through the `handle_*` and
/// `set_*_extent` entry points; polled by the application through
/// [`get_state`](Mouse::get_state). All operations are bounded synchronous
/// computations; nothing blocks or suspends.
pub struct Mouse<P: PlatformBackend> {
    platform: P,
    state: RawPointerState,
    window_handle: Option<WindowHandle>,
    /// Last relative-mode value requested through this instance; diagnostic
    /// only, never consulted for behavior (the OS is queried fresh instead)
    relative_mode_requested: bool,
    pressed_observers: ObserverSet,
    released_observers: ObserverSet,
}

impl<P: PlatformBackend> Mouse<P> {
    /// Create a mouse state core over the given platform backend.
    ///
    /// Position starts at the window origin, all buttons released, wheel at
    /// zero, no window handle assigned.
    pub fn new(platform: P, window: Extent, backbuffer: Extent) -> Self {
        Self {
            platform,
            state: RawPointerState::new(window, backbuffer),
            window_handle: None,
            relative_mode_requested: false,
            pressed_observers: ObserverSet::default(),
            released_observers: ObserverSet::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Poll / control surface (application side)
    // -------------------------------------------------------------------------

    /// Produce an immutable snapshot of the current pointer state, with the
    /// position scaled from window-space into backbuffer-space.
    ///
    /// No side effects; two calls with no intervening mutation return equal
    /// snapshots.
    pub fn get_state(&self) -> PointerSnapshot {
        PointerSnapshot::capture(&self.state)
    }

    /// Warp the OS cursor to the given backbuffer-space position.
    ///
    /// In relative mode absolute positioning is meaningless, so this is a
    /// no-op: no platform call, no store mutation. Otherwise the coordinates
    /// are inverse-scaled into window-space and delegated to the backend. The
    /// store is not mutated here; the platform's subsequent motion event is
    /// expected to report the new position back through
    /// [`handle_move`](Mouse::handle_move).
    pub fn set_position(&mut self, x: i32, y: i32) {
        if self.platform.relative_mouse_mode() {
            debug!("set_position ignored: relative mode active");
            return;
        }

        let window_x = scale_axis(x, self.state.backbuffer.width(), self.state.window.width());
        let window_y = scale_axis(
            y,
            self.state.backbuffer.height(),
            self.state.window.height(),
        );

        debug!(
            "Cursor warp: backbuffer({}, {}) -> window({}, {})",
            x, y, window_x, window_y
        );

        if let Err(e) = self
            .platform
            .set_mouse_position(self.window_handle, window_x, window_y)
        {
            warn!("Cursor warp failed, ignoring: {}", e);
        }
    }

    /// Opaque handle of the target window, if one has been assigned
    pub fn window_handle(&self) -> Option<WindowHandle> {
        self.window_handle
    }

    /// Assign the target window handle; stored verbatim, no validation
    pub fn set_window_handle(&mut self, handle: Option<WindowHandle>) {
        self.window_handle = handle;
    }

    /// Query OS-level relative mouse mode.
    ///
    /// Delegates a fresh query to the backend on every call rather than
    /// caching, so the answer tracks the true OS state even when it was
    /// changed outside this instance.
    pub fn relative_mouse_mode(&self) -> bool {
        self.platform.relative_mouse_mode()
    }

    /// Request OS-level relative mouse mode.
    ///
    /// Backend failure is swallowed (logged, not surfaced); the last
    /// requested value is recorded for diagnostics only.
    pub fn set_relative_mouse_mode(&mut self, enabled: bool) {
        if let Err(e) = self.platform.set_relative_mouse_mode(enabled) {
            warn!("Relative mode change failed, ignoring: {}", e);
        }
        self.relative_mode_requested = enabled;
    }

    /// Register a callback invoked when a button transitions to pressed.
    ///
    /// Registration is append-only; observers run synchronously on the event
    /// pump's stack, in registration order.
    pub fn on_pressed<F>(&mut self, observer: F)
    where
        F: FnMut(MouseButton) + 'static,
    {
        self.pressed_observers.register(Box::new(observer));
    }

    /// Register a callback invoked when a button transitions to released.
    pub fn on_released<F>(&mut self, observer: F)
    where
        F: FnMut(MouseButton) + 'static,
    {
        self.released_observers.register(Box::new(observer));
    }

    // -------------------------------------------------------------------------
    // Event-pump entry points (platform side)
    // -------------------------------------------------------------------------

    /// Record the raw window-space cursor position.
    ///
    /// Coordinates may be negative while a drag leaves the window; they are
    /// stored unconstrained.
    pub fn handle_move(&mut self, x: i32, y: i32) {
        self.state.x = x;
        self.state.y = y;
        debug!("Mouse move: window({}, {})", x, y);
    }

    /// Accumulate a wheel delta.
    ///
    /// The accumulator is never reset by this crate; callers diff successive
    /// snapshots. Wrapping arithmetic keeps pathological accumulation from
    /// panicking in debug builds.
    pub fn handle_wheel(&mut self, delta: i32) {
        self.state.wheel = self.state.wheel.wrapping_add(delta);
        debug!("Mouse wheel: delta {} -> {}", delta, self.state.wheel);
    }

    /// Record a button event and dispatch edge-triggered notifications.
    ///
    /// Only a genuine transition dispatches: a down event for a button
    /// already down (or an up event for one already up) updates nothing and
    /// notifies nobody. Observers run before this method returns.
    pub fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        let was_pressed = self.state.buttons[button.index()];
        if pressed == was_pressed {
            return;
        }

        self.state.buttons[button.index()] = pressed;
        debug!("Mouse button {:?}: pressed={}", button, pressed);

        if pressed {
            self.pressed_observers.dispatch(button);
        } else {
            self.released_observers.dispatch(button);
        }
    }

    /// Record a window resize.
    ///
    /// Zero dimensions are rejected and the previous extent is retained, so
    /// snapshot scaling never divides by zero.
    pub fn set_window_extent(&mut self, width: u32, height: u32) -> Result<()> {
        self.state.window = Extent::new(width, height)?;
        debug!("Window extent: {}x{}", width, height);
        Ok(())
    }

    /// Record a backbuffer (render target) resize; zero dimensions rejected.
    pub fn set_backbuffer_extent(&mut self, width: u32, height: u32) -> Result<()> {
        self.state.backbuffer = Extent::new(width, height)?;
        debug!("Backbuffer extent: {}x{}", width, height);
        Ok(())
    }
}

impl<P: PlatformBackend> std::fmt::Debug for Mouse<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mouse")
            .field("state", &self.state)
            .field("window_handle", &self.window_handle)
            .field("relative_mode_requested", &self.relative_mode_requested)
            .field("pressed_observers", &self.pressed_observers)
            .field("released_observers", &self.released_observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PointerError;
    use crate::platform::MockPlatformBackend;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_mouse(platform: MockPlatformBackend) -> Mouse<MockPlatformBackend> {
        Mouse::new(
            platform,
            Extent::new(800, 600).unwrap(),
            Extent::new(1920, 1080).unwrap(),
        )
    }

    #[test]
    fn test_get_state_idempotent() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        mouse.handle_move(123, 456);
        mouse.handle_wheel(120);
        mouse.handle_button(MouseButton::Left, true);

        assert_eq!(mouse.get_state(), mouse.get_state());
    }

    #[test]
    fn test_snapshot_scales_position() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        mouse.handle_move(400, 300);

        let snapshot = mouse.get_state();
        assert_eq!(snapshot.position(), (960, 540));
    }

    #[test]
    fn test_button_reported_pressed() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        mouse.handle_button(MouseButton::Extra1, true);

        let snapshot = mouse.get_state();
        assert!(snapshot.is_pressed(MouseButton::Extra1));
        assert!(!snapshot.is_pressed(MouseButton::Left));
        assert!(!snapshot.is_pressed(MouseButton::Right));
    }

    #[test]
    fn test_set_position_inverse_scales() {
        let mut platform = MockPlatformBackend::new();
        platform.expect_relative_mouse_mode().return_const(false);
        platform
            .expect_set_mouse_position()
            .with(eq(Some(WindowHandle(7))), eq(400), eq(300))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut mouse = test_mouse(platform);
        mouse.set_window_handle(Some(WindowHandle(7)));
        mouse.set_position(960, 540);
    }

    #[test]
    fn test_set_position_noop_in_relative_mode() {
        let mut platform = MockPlatformBackend::new();
        platform.expect_relative_mouse_mode().return_const(true);
        platform.expect_set_mouse_position().times(0);

        let mut mouse = test_mouse(platform);
        let before = mouse.get_state();
        mouse.set_position(960, 540);

        // Store untouched
        assert_eq!(mouse.get_state(), before);
    }

    #[test]
    fn test_set_position_failure_swallowed() {
        let mut platform = MockPlatformBackend::new();
        platform.expect_relative_mouse_mode().return_const(false);
        platform
            .expect_set_mouse_position()
            .returning(|_, _, _| Err(PointerError::PlatformError("warp rejected".to_string())));

        let mut mouse = test_mouse(platform);
        mouse.set_position(10, 10);
    }

    #[test]
    fn test_relative_mode_queried_fresh() {
        let mut platform = MockPlatformBackend::new();
        platform
            .expect_relative_mouse_mode()
            .times(2)
            .return_const(true);

        let mouse = test_mouse(platform);
        assert!(mouse.relative_mouse_mode());
        assert!(mouse.relative_mouse_mode());
    }

    #[test]
    fn test_set_relative_mode_failure_swallowed() {
        let mut platform = MockPlatformBackend::new();
        platform
            .expect_set_relative_mouse_mode()
            .with(eq(true))
            .times(1)
            .returning(|_| Err(PointerError::PlatformError("unsupported".to_string())));

        let mut mouse = test_mouse(platform);
        mouse.set_relative_mouse_mode(true);
    }

    #[test]
    fn test_pressed_dispatch_order_and_edges() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut mouse = test_mouse(MockPlatformBackend::new());

        let sink = Rc::clone(&log);
        mouse.on_pressed(move |button| sink.borrow_mut().push(("first", button)));
        let sink = Rc::clone(&log);
        mouse.on_pressed(move |button| sink.borrow_mut().push(("second", button)));

        mouse.handle_button(MouseButton::Left, true);
        // Repeated down: no transition, no dispatch
        mouse.handle_button(MouseButton::Left, true);

        assert_eq!(
            *log.borrow(),
            vec![("first", MouseButton::Left), ("second", MouseButton::Left)]
        );
    }

    #[test]
    fn test_released_dispatch_only_on_transition() {
        let count = Rc::new(RefCell::new(0));
        let mut mouse = test_mouse(MockPlatformBackend::new());

        let sink = Rc::clone(&count);
        mouse.on_released(move |_| *sink.borrow_mut() += 1);

        // Up without a preceding down: already released, no transition
        mouse.handle_button(MouseButton::Right, false);
        assert_eq!(*count.borrow(), 0);

        mouse.handle_button(MouseButton::Right, true);
        mouse.handle_button(MouseButton::Right, false);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_press_does_not_notify_released_observers() {
        let count = Rc::new(RefCell::new(0));
        let mut mouse = test_mouse(MockPlatformBackend::new());

        let sink = Rc::clone(&count);
        mouse.on_released(move |_| *sink.borrow_mut() += 1);

        mouse.handle_button(MouseButton::Middle, true);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_wheel_accumulates_across_reads() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        mouse.handle_wheel(120);
        assert_eq!(mouse.get_state().wheel, 120);

        mouse.handle_wheel(-240);
        assert_eq!(mouse.get_state().wheel, -120);

        // Reading does not reset
        assert_eq!(mouse.get_state().wheel, -120);
    }

    #[test]
    fn test_zero_extent_rejected_previous_kept() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        mouse.handle_move(400, 300);

        let result = mouse.set_window_extent(0, 600);
        assert!(matches!(
            result,
            Err(PointerError::InvalidExtent {
                width: 0,
                height: 600
            })
        ));
        assert!(mouse.set_backbuffer_extent(1920, 0).is_err());

        // Scaling still uses the previous 800x600 -> 1920x1080 mapping
        assert_eq!(mouse.get_state().position(), (960, 540));
    }

    #[test]
    fn test_extent_change_rescales() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        mouse.handle_move(400, 300);

        mouse.set_backbuffer_extent(800, 600).unwrap();
        assert_eq!(mouse.get_state().position(), (400, 300));

        mouse.set_window_extent(1600, 1200).unwrap();
        assert_eq!(mouse.get_state().position(), (200, 150));
    }

    #[test]
    fn test_window_handle_property() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        assert_eq!(mouse.window_handle(), None);

        mouse.set_window_handle(Some(WindowHandle(42)));
        assert_eq!(mouse.window_handle(), Some(WindowHandle(42)));

        mouse.set_window_handle(None);
        assert_eq!(mouse.window_handle(), None);
    }

    #[test]
    fn test_negative_position_snapshot() {
        let mut mouse = test_mouse(MockPlatformBackend::new());
        // Drag left the window: platform reports negative coordinates
        mouse.handle_move(-10, -10);

        let snapshot = mouse.get_state();
        assert_eq!(snapshot.position(), (-24, -18));
    }
}
