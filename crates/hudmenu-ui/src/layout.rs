//! Fixed menu metrics, in logical units.

pub const ITEM_HEIGHT: f32 = 44.2;
/// Row width divided by this gives the interact hotspot width.
pub const INTERACT_RATIO: f32 = 2.3;
pub const NAV_HOTSPOT_WIDTH: f32 = 50.0;
pub const SCROLL_BAR_HEIGHT: f32 = 45.0;
pub const SCROLL_BAR_ICON: f32 = 58.0;
pub const HEADER_HEIGHT: f32 = 45.0;

pub const TEXT_SCALE: f32 = 0.35;
pub const TEXT_X_OFFSET: f32 = 8.0;
pub const TEXT_Y_OFFSET: f32 = 5.0;
pub const ITEM_COUNT_X_OFFSET: f32 = 18.0;

pub const ICON_SIZE: f32 = 50.0;
pub const CHECKBOX_SIZE: f32 = 60.0;
pub const ARROW_SIZE: f32 = 20.0;
/// Label shift when an item carries a leading icon.
pub const ICON_LABEL_SHIFT: f32 = 34.0;

/// Camera heading change per frame while the pointer rests on a screen edge.
pub const CAMERA_PAN_STEP: f32 = 2.5;
