use serde::{Deserialize, Serialize};

/// Logical height every menu coordinate is expressed against.
pub const REFERENCE_HEIGHT: f32 = 1280.0;
/// Horizontal resolution used to probe the left/right screen edges.
pub const EDGE_PROBE_WIDTH: f32 = 1920.0;
pub const WIDESCREEN_ASPECT: f32 = 16.0 / 9.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_origin(top_left: Vec2, size: Size) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    /// Pointer containment used for hover: closed on x, open on y, so two
    /// vertically stacked rows never both claim a pointer on their shared edge.
    pub fn hovered_by(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenEdge {
    Left,
    Right,
}

/// Per-frame display parameters the host reports.
///
/// Everything the menu draws lives in a logical space `REFERENCE_HEIGHT`
/// units tall whose width follows the live aspect ratio. Content authored for
/// 16:9 is shifted towards the centre on wider screens, and the whole layout
/// is inset by the host's safe zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayContext {
    pub aspect_ratio: f32,
    /// Fraction of the screen the host treats as safe, `1.0` meaning no inset.
    pub safe_zone_size: f32,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self {
            aspect_ratio: WIDESCREEN_ASPECT,
            safe_zone_size: 1.0,
        }
    }
}

impl DisplayContext {
    pub fn new(aspect_ratio: f32, safe_zone_size: f32) -> Self {
        Self {
            aspect_ratio,
            safe_zone_size,
        }
    }

    /// Logical resolution; the width is truncated to whole units.
    pub fn resolution(&self) -> Size {
        let width = (REFERENCE_HEIGHT * self.aspect_ratio).trunc();
        Size::new(width, REFERENCE_HEIGHT)
    }

    /// Normalized offset applied on both axes before drawing or hit-testing.
    pub fn aspect_offset(&self) -> f32 {
        let safe = (1.0 - self.safe_zone_size) * 0.5;
        if self.aspect_ratio <= WIDESCREEN_ASPECT {
            return safe;
        }
        (1.0 - WIDESCREEN_ASPECT / self.aspect_ratio) * 0.5 + safe
    }

    /// Maps a normalized cursor (0..1 on both axes) to whole logical units.
    pub fn cursor_position(&self, normal: Vec2) -> Vec2 {
        let res = self.resolution();
        Vec2 {
            x: (normal.x * res.width).round_ties_even(),
            y: (normal.y * res.height).round_ties_even(),
        }
    }

    /// Whether the cursor hovers the logical rectangle at `top_left`/`size`.
    pub fn contains(&self, top_left: Vec2, size: Size, cursor: Vec2) -> bool {
        let res = self.resolution();
        let offset = self.aspect_offset();
        let rect = Rect::from_origin(top_left, size)
            .translate(offset * res.width, offset * res.height);
        rect.hovered_by(self.cursor_position(cursor))
    }

    /// The screen edge the cursor is pressed against, if any.
    pub fn edge_under(&self, cursor: Vec2) -> Option<ScreenEdge> {
        let x = (cursor.x * EDGE_PROBE_WIDTH).round_ties_even();
        if x >= EDGE_PROBE_WIDTH - 1.0 {
            Some(ScreenEdge::Right)
        } else if x <= 0.0 {
            Some(ScreenEdge::Left)
        } else {
            None
        }
    }
}
