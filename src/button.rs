//! Mouse Button Identifiers
//!
//! Button identity and pressed/released state types shared by the state store,
//! snapshots, and observer dispatch.

/// Mouse button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Middle mouse button
    Middle,
    /// Right mouse button
    Right,
    /// Extra button 1 (side button)
    Extra1,
    /// Extra button 2 (side button)
    Extra2,
}

impl MouseButton {
    /// All buttons, in state-array order
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
        MouseButton::Extra1,
        MouseButton::Extra2,
    ];

    /// Convert to state-array index
    pub fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
            MouseButton::Extra1 => 3,
            MouseButton::Extra2 => 4,
        }
    }

    /// Convert from state-array index
    pub fn from_index(index: usize) -> Option<Self> {
        MouseButton::ALL.get(index).copied()
    }
}

/// Pressed/released state of a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Button is up
    #[default]
    Released,
    /// Button is down
    Pressed,
}

impl ButtonState {
    /// Check whether this state is `Pressed`
    pub fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}
