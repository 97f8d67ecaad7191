use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MenuError;

/// Which frontend sound set menu cues are played from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundProfile {
    FrontEndShop,
    FreeMode,
    #[default]
    FrontendDefault,
}

impl SoundProfile {
    pub fn sound_set(self) -> &'static str {
        match self {
            SoundProfile::FrontEndShop => "HUD_FRONTEND_CLOTHESSHOP_SOUNDSET",
            SoundProfile::FreeMode => "HUD_FREEMODE_SOUNDSET",
            SoundProfile::FrontendDefault => "HUD_FRONTEND_DEFAULT_SOUNDSET",
        }
    }
}

impl FromStr for SoundProfile {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front_end_shop" => Ok(SoundProfile::FrontEndShop),
            "free_mode" => Ok(SoundProfile::FreeMode),
            "frontend_default" => Ok(SoundProfile::FrontendDefault),
            other => Err(MenuError::UnknownTag {
                kind: "sound profile",
                tag: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    NavUpDown,
    NavLeftRight,
    Select,
    Back,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::NavUpDown => "NAV_UP_DOWN",
            Cue::NavLeftRight => "NAV_LEFT_RIGHT",
            Cue::Select => "SELECT",
            Cue::Back => "BACK",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub i32);

/// Fire-and-forget frontend audio. Neither call may block.
pub trait AudioBackend {
    fn play_cue(&mut self, name: &str, sound_set: &str) -> SoundHandle;
    fn release(&mut self, handle: SoundHandle);
}

/// Plays `cue` and immediately hands the handle back.
pub fn play_and_release(audio: &mut dyn AudioBackend, cue: Cue, profile: SoundProfile) {
    let handle = audio.play_cue(cue.name(), profile.sound_set());
    audio.release(handle);
}
