use serde::{Deserialize, Serialize};

use crate::{Color, MenuError, NavigationMode, SoundProfile};

/// Presentation and behavior knobs shared by a menu and its submenus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    pub width: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub navigation_mode: NavigationMode,
    pub sound_profile: SoundProfile,
    /// Clicking outside every row closes the menu.
    pub allow_click_out: bool,
    pub description_color: Color,
    pub max_drawable_items: usize,
    pub accelerated_scrolling: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            width: 512.0,
            offset_x: 0.0,
            offset_y: 0.0,
            navigation_mode: NavigationMode::Normal,
            sound_profile: SoundProfile::FrontendDefault,
            allow_click_out: false,
            description_color: Color::WHITE,
            max_drawable_items: 7,
            accelerated_scrolling: true,
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let mut config: MenuConfig = serde_json::from_str(json)?;
        config.max_drawable_items = config.max_drawable_items.max(1);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, MenuError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
