use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Vec2;

/// Logical controls the menu reads or hands back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    NavUp,
    NavDown,
    NavLeft,
    NavRight,
    NavAccept,
    NavCancel,
    MoveUpOnly,
    MoveDownOnly,
    MoveLeftOnly,
    MoveRightOnly,
    /// Primary pointer button.
    CursorAccept,
    /// Held-button state used while dragging the scrollbar.
    FrontendAccept,
    CursorX,
    CursorY,
    ScrollUp,
    ScrollDown,
    Pause,
    ReplayRecord,
    ReplayRecordSecondary,
    MoveUpDown,
    MoveLeftRight,
    Jump,
    LookLeftRight,
    LookUpDown,
    Attack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputDevice {
    #[default]
    MouseAndKeyboard,
    Gamepad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NavDirection {
    pub fn dedicated(self) -> Control {
        match self {
            NavDirection::Up => Control::NavUp,
            NavDirection::Down => Control::NavDown,
            NavDirection::Left => Control::NavLeft,
            NavDirection::Right => Control::NavRight,
        }
    }
}

/// How directional navigation is read while a menu has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Dedicated directional controls only; movement stays with the game.
    #[default]
    Normal,
    /// Movement controls double as menu navigation.
    Movement,
}

impl NavigationMode {
    /// The second control that also drives `dir` in this mode.
    pub fn alternate(self, dir: NavDirection) -> Control {
        match (self, dir) {
            (NavigationMode::Normal, d) => d.dedicated(),
            (NavigationMode::Movement, NavDirection::Up) => Control::MoveUpOnly,
            (NavigationMode::Movement, NavDirection::Down) => Control::MoveDownOnly,
            (NavigationMode::Movement, NavDirection::Left) => Control::MoveLeftOnly,
            (NavigationMode::Movement, NavDirection::Right) => Control::MoveRightOnly,
        }
    }
}

bitflags! {
    /// Host controls left enabled while a menu captures input.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Passthrough: u16 {
        const PAUSE = 1 << 0;
        const REPLAY_RECORD = 1 << 1;
        const REPLAY_RECORD_SECONDARY = 1 << 2;
        const CURSOR_X = 1 << 3;
        const CURSOR_Y = 1 << 4;
        const SCROLL_UP = 1 << 5;
        const SCROLL_DOWN = 1 << 6;
        const MOVE_UP_DOWN = 1 << 7;
        const MOVE_LEFT_RIGHT = 1 << 8;
        const JUMP = 1 << 9;
        const LOOK_LEFT_RIGHT = 1 << 10;
        const LOOK_UP_DOWN = 1 << 11;
        const ATTACK = 1 << 12;

        const ALWAYS = Self::PAUSE.bits()
            | Self::REPLAY_RECORD.bits()
            | Self::REPLAY_RECORD_SECONDARY.bits()
            | Self::CURSOR_X.bits()
            | Self::CURSOR_Y.bits()
            | Self::SCROLL_UP.bits()
            | Self::SCROLL_DOWN.bits();
        const MOVEMENT = Self::MOVE_UP_DOWN.bits()
            | Self::MOVE_LEFT_RIGHT.bits()
            | Self::JUMP.bits();
        const LOOK = Self::LOOK_LEFT_RIGHT.bits()
            | Self::LOOK_UP_DOWN.bits()
            | Self::ATTACK.bits();
    }
}

impl Passthrough {
    /// In movement mode the movement, look and attack controls all belong
    /// to the menu. Otherwise movement stays live, and on a gamepad so do
    /// look and attack.
    pub fn for_frame(mode: NavigationMode, device: InputDevice) -> Self {
        match (mode, device) {
            (NavigationMode::Movement, _) => Passthrough::ALWAYS,
            (NavigationMode::Normal, InputDevice::MouseAndKeyboard) => {
                Passthrough::ALWAYS | Passthrough::MOVEMENT
            }
            (NavigationMode::Normal, InputDevice::Gamepad) => {
                Passthrough::ALWAYS | Passthrough::MOVEMENT | Passthrough::LOOK
            }
        }
    }

    pub fn controls(self) -> SmallVec<[Control; 13]> {
        const TABLE: [(Passthrough, Control); 13] = [
            (Passthrough::PAUSE, Control::Pause),
            (Passthrough::REPLAY_RECORD, Control::ReplayRecord),
            (
                Passthrough::REPLAY_RECORD_SECONDARY,
                Control::ReplayRecordSecondary,
            ),
            (Passthrough::CURSOR_X, Control::CursorX),
            (Passthrough::CURSOR_Y, Control::CursorY),
            (Passthrough::SCROLL_UP, Control::ScrollUp),
            (Passthrough::SCROLL_DOWN, Control::ScrollDown),
            (Passthrough::MOVE_UP_DOWN, Control::MoveUpDown),
            (Passthrough::MOVE_LEFT_RIGHT, Control::MoveLeftRight),
            (Passthrough::JUMP, Control::Jump),
            (Passthrough::LOOK_LEFT_RIGHT, Control::LookLeftRight),
            (Passthrough::LOOK_UP_DOWN, Control::LookUpDown),
            (Passthrough::ATTACK, Control::Attack),
        ];
        TABLE
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, control)| *control)
            .collect()
    }
}

/// Per-frame view of the host's input state.
///
/// Queries report the physical state even for controls the menu captured.
pub trait InputSource {
    fn is_pressed(&self, control: Control) -> bool;
    fn is_just_pressed(&self, control: Control) -> bool;
    fn is_just_released(&self, control: Control) -> bool;
    /// Analog value in `[0, 1]` for axis and wheel controls.
    fn normal(&self, control: Control) -> f32;
    fn device(&self) -> InputDevice;

    /// Normalized pointer position.
    fn cursor(&self) -> Vec2 {
        Vec2::new(self.normal(Control::CursorX), self.normal(Control::CursorY))
    }

    /// Takes every control for this frame except `passthrough`.
    fn capture(&mut self, _passthrough: Passthrough) {}

    fn show_cursor(&mut self) {}
}
