pub use crate::{
    AssetStreamer, AudioBackend, BannerType, Color, Control, CursorSprite, DisplayContext,
    FrameContext, GameTime, InputSource, MenuConfig, MenuError, NavigationMode, Rect,
    Renderer, ShopIcon, Size, SoundProfile, Vec2, WorldHost,
};
