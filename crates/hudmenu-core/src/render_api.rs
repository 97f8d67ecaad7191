use std::str::FromStr;

use crate::{Color, MenuError, Size, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Font {
    #[default]
    ChaletLondon,
    HouseScript,
    Monospace,
    ChaletComprimeCologne,
    Pricedown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    Center,
    #[default]
    Left,
    /// Right-aligned, the draw position being the right edge.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub scale: f32,
    pub color: Color,
    pub justify: Justify,
    pub font: Font,
    pub shadow: bool,
    pub outline: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            color: Color::WHITE,
            justify: Justify::Left,
            font: Font::ChaletLondon,
            shadow: false,
            outline: false,
        }
    }
}

impl TextStyle {
    pub fn new(scale: f32, color: Color, justify: Justify, font: Font) -> Self {
        Self {
            scale,
            color,
            justify,
            font,
            ..Default::default()
        }
    }
}

/// Pointer sprites the host can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorSprite {
    #[default]
    None,
    Normal,
    TransparentNormal,
    PreGrab,
    Grab,
    MiddleFinger,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    HorizontalExpand,
    Add,
    Remove,
}

impl FromStr for CursorSprite {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "none" => CursorSprite::None,
            "normal" => CursorSprite::Normal,
            "transparent_normal" => CursorSprite::TransparentNormal,
            "pre_grab" => CursorSprite::PreGrab,
            "grab" => CursorSprite::Grab,
            "middle_finger" => CursorSprite::MiddleFinger,
            "left_arrow" => CursorSprite::LeftArrow,
            "right_arrow" => CursorSprite::RightArrow,
            "up_arrow" => CursorSprite::UpArrow,
            "down_arrow" => CursorSprite::DownArrow,
            "horizontal_expand" => CursorSprite::HorizontalExpand,
            "add" => CursorSprite::Add,
            "remove" => CursorSprite::Remove,
            other => {
                return Err(MenuError::UnknownTag {
                    kind: "cursor sprite",
                    tag: other.to_string(),
                });
            }
        })
    }
}

/// Host-side overlays a menu keeps for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Multi-line text box under the list showing the selected item's text.
    Description,
    /// Button prompts along the bottom of the screen.
    InstructionalButtons,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u32);

/// Allocates and frees overlays. Release must be called once per handle.
pub trait OverlayHost {
    fn acquire(&self, kind: OverlayKind) -> OverlayHandle;
    fn release(&self, handle: OverlayHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintAction {
    Select,
    Back,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionalHint {
    pub action: HintAction,
    /// Host text-table key for the label.
    pub label: &'static str,
}

/// Drawing primitives in the logical coordinate space; any mapping to the
/// device is the implementor's job.
pub trait Renderer {
    fn draw_sprite(
        &mut self,
        atlas: &str,
        id: &str,
        center: Vec2,
        size: Size,
        rotation: f32,
        tint: Color,
    );
    fn draw_rect(&mut self, center: Vec2, size: Size, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
    fn draw_text_field(&mut self, handle: OverlayHandle, text: &str, pos: Vec2, size: Size);
    fn measure_text_width(&self, text: &str, font: Font, scale: f32) -> f32;
    /// Native size of a sprite inside a loaded atlas.
    fn texture_resolution(&self, atlas: &str, id: &str) -> Size;
    fn set_cursor_sprite(&mut self, sprite: CursorSprite);
    fn draw_instructional_buttons(&mut self, handle: OverlayHandle, hints: &[InstructionalHint]);
}
