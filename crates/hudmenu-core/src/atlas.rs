//! Closed tables mapping banner and icon tags to texture names.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MenuError;

/// Atlas holding the shared menu sprites.
pub const COMMON_MENU: &str = "commonmenu";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BannerType {
    #[default]
    None,
    InteractionMenu,
    Michael,
    Franklin,
    Trevor,
    Barber,
    CarMod,
    ConvenienceStore,
    GasStation,
    GunClub,
    HighEndFashion,
    LiquorStore,
    LowEndFashion,
    MovieMasks,
    SuperMod,
    Tattoos,
    Tennis,
}

// (banner, tag, sprite); shop banners live in a dictionary named after the sprite.
const BANNERS: &[(BannerType, &str, &str)] = &[
    (BannerType::InteractionMenu, "interaction_menu", "interaction_bgd"),
    (BannerType::Michael, "michael", "shopui_title_graphics_michael"),
    (BannerType::Franklin, "franklin", "shopui_title_graphics_franklin"),
    (BannerType::Trevor, "trevor", "shopui_title_graphics_trevor"),
    (BannerType::Barber, "barber", "shopui_title_barber"),
    (BannerType::CarMod, "car_mod", "shopui_title_carmod"),
    (
        BannerType::ConvenienceStore,
        "convenience_store",
        "shopui_title_conveniencestore",
    ),
    (BannerType::GasStation, "gas_station", "shopui_title_gasstation"),
    (BannerType::GunClub, "gun_club", "shopui_title_gunclub"),
    (
        BannerType::HighEndFashion,
        "high_end_fashion",
        "shopui_title_highendfashion",
    ),
    (BannerType::LiquorStore, "liquor_store", "shopui_title_liquorstore"),
    (
        BannerType::LowEndFashion,
        "low_end_fashion",
        "shopui_title_lowendfashion",
    ),
    (BannerType::MovieMasks, "movie_masks", "shopui_title_movie_masks"),
    (BannerType::SuperMod, "super_mod", "shopui_title_supermod"),
    (BannerType::Tattoos, "tattoos", "shopui_title_tattoos"),
    (BannerType::Tennis, "tennis", "shopui_title_tennis"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTexture {
    pub dictionary: &'static str,
    pub sprite: &'static str,
}

impl BannerType {
    pub fn texture(self) -> Option<BannerTexture> {
        match self {
            BannerType::None => None,
            BannerType::InteractionMenu => Some(BannerTexture {
                dictionary: COMMON_MENU,
                sprite: "interaction_bgd",
            }),
            other => BANNERS
                .iter()
                .find(|(b, _, _)| *b == other)
                .map(|&(_, _, sprite)| BannerTexture {
                    dictionary: sprite,
                    sprite,
                }),
        }
    }
}

impl FromStr for BannerType {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(BannerType::None);
        }
        BANNERS
            .iter()
            .find(|(_, tag, _)| *tag == s)
            .map(|(b, _, _)| *b)
            .ok_or_else(|| MenuError::UnknownTag {
                kind: "banner",
                tag: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopIcon {
    #[default]
    None,
    Tick,
    NewStar,
    Lock,
    Michael,
    Franklin,
    Trevor,
    Health,
    Armor,
    Ammo,
    Garage,
    Clothing,
    BoxTick,
    BoxCross,
    BoxBlank,
}

// (icon, tag, normal sprite, highlighted sprite)
const ICONS: &[(ShopIcon, &str, &str, &str)] = &[
    (ShopIcon::Tick, "tick", "shop_tick_icon", "shop_tick_icon"),
    (ShopIcon::NewStar, "new_star", "shop_new_star", "shop_new_star"),
    (ShopIcon::Lock, "lock", "shop_lock", "shop_lock"),
    (ShopIcon::Michael, "michael", "shop_michael_icon_a", "shop_michael_icon_b"),
    (ShopIcon::Franklin, "franklin", "shop_franklin_icon_a", "shop_franklin_icon_b"),
    (ShopIcon::Trevor, "trevor", "shop_trevor_icon_a", "shop_trevor_icon_b"),
    (ShopIcon::Health, "health", "shop_health_icon_a", "shop_health_icon_b"),
    (ShopIcon::Armor, "armor", "shop_armour_icon_a", "shop_armour_icon_b"),
    (ShopIcon::Ammo, "ammo", "shop_ammo_icon_a", "shop_ammo_icon_b"),
    (ShopIcon::Garage, "garage", "shop_garage_icon_a", "shop_garage_icon_b"),
    (ShopIcon::Clothing, "clothing", "shop_clothing_icon_a", "shop_clothing_icon_b"),
    (ShopIcon::BoxTick, "box_tick", "shop_box_tick", "shop_box_tickb"),
    (ShopIcon::BoxCross, "box_cross", "shop_box_cross", "shop_box_cross_b"),
    (ShopIcon::BoxBlank, "box_blank", "shop_box_blank", "shop_box_blankb"),
];

impl ShopIcon {
    /// Sprite inside `COMMON_MENU` for the given highlight state.
    pub fn sprite(self, highlighted: bool) -> Option<&'static str> {
        ICONS
            .iter()
            .find(|(icon, _, _, _)| *icon == self)
            .map(|(_, _, normal, hover)| if highlighted { *hover } else { *normal })
    }
}

impl FromStr for ShopIcon {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(ShopIcon::None);
        }
        ICONS
            .iter()
            .find(|(_, tag, _, _)| *tag == s)
            .map(|(icon, _, _, _)| *icon)
            .ok_or_else(|| MenuError::UnknownTag {
                kind: "shop icon",
                tag: s.to_string(),
            })
    }
}
