#[cfg(test)]
mod tests {
    use crate::headless::*;
    use crate::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::str::FromStr;
    use web_time::Duration;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_resolution_follows_aspect() {
        let wide = DisplayContext::default();
        assert_eq!(wide.resolution(), Size::new(2275.0, 1280.0));

        let square = DisplayContext::new(4.0 / 3.0, 1.0);
        assert_eq!(square.resolution(), Size::new(1706.0, 1280.0));
    }

    #[test]
    fn test_aspect_offset() {
        assert_eq!(DisplayContext::default().aspect_offset(), 0.0);
        assert_eq!(DisplayContext::new(4.0 / 3.0, 1.0).aspect_offset(), 0.0);

        let ultra = DisplayContext::new(21.0 / 9.0, 1.0);
        assert!(approx(ultra.aspect_offset(), 0.119_047_6));

        // Safe zone inset stacks on top of the letterbox offset.
        let inset = DisplayContext::new(21.0 / 9.0, 0.9);
        assert!(approx(inset.aspect_offset(), 0.169_047_6));
        let narrow_inset = DisplayContext::new(4.0 / 3.0, 0.9);
        assert!(approx(narrow_inset.aspect_offset(), 0.05));
    }

    #[test]
    fn test_cursor_rounds_half_to_even() {
        let display = DisplayContext::default();
        // 1/512 of 1280 is exactly 2.5.
        let p = display.cursor_position(Vec2::new(0.0, 1.0 / 512.0));
        assert_eq!(p.y, 2.0);
    }

    #[test]
    fn test_hit_test_axes() {
        let display = DisplayContext::default();
        let top_left = Vec2::new(0.0, 40.0);
        let size = Size::new(100.0, 40.0);
        let at = |x: f32, y: f32| Vec2::new(x / 2275.0, y / 1280.0);

        // Left and right edges are inclusive.
        assert!(display.contains(top_left, size, at(0.0, 60.0)));
        assert!(display.contains(top_left, size, at(100.0, 60.0)));
        // Top and bottom edges are exclusive.
        assert!(!display.contains(top_left, size, at(50.0, 40.0)));
        assert!(!display.contains(top_left, size, at(50.0, 80.0)));
        assert!(display.contains(top_left, size, at(50.0, 41.0)));
    }

    #[test]
    fn test_adjacent_rows_never_share_the_pointer() {
        let display = DisplayContext::default();
        let size = Size::new(512.0, 40.0);
        let rows = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 40.0)];

        for y in 30..50 {
            let cursor = Vec2::new(0.05, y as f32 / 1280.0);
            let hits = rows
                .iter()
                .filter(|r| display.contains(**r, size, cursor))
                .count();
            assert!(hits <= 1, "y = {y} hovered {hits} rows");
        }
    }

    #[test]
    fn test_hit_test_shifts_on_ultrawide() {
        let display = DisplayContext::new(21.0 / 9.0, 1.0);
        let res = display.resolution();
        let offset = display.aspect_offset();
        let size = Size::new(100.0, 40.0);

        // The rect is drawn shifted right, so its unshifted spot is empty.
        let unshifted = Vec2::new(50.0 / res.width, 20.0 / res.height);
        assert!(!display.contains(Vec2::default(), size, unshifted));

        let shifted = Vec2::new(
            (50.0 + offset * res.width) / res.width,
            (20.0 + offset * res.height) / res.height,
        );
        assert!(display.contains(Vec2::default(), size, shifted));
    }

    #[test]
    fn test_screen_edges() {
        let display = DisplayContext::default();
        assert_eq!(display.edge_under(Vec2::new(1.0, 0.5)), Some(ScreenEdge::Right));
        assert_eq!(display.edge_under(Vec2::new(0.0, 0.5)), Some(ScreenEdge::Left));
        assert_eq!(display.edge_under(Vec2::new(0.5, 0.5)), None);
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::from_hex("#2d2d2d"), Color::DARK_TEXT);
        assert_eq!(Color::from_hex("ffffff32"), Color::highlight());
        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_passthrough_by_mode_and_device() {
        let kb = Passthrough::for_frame(NavigationMode::Normal, InputDevice::MouseAndKeyboard);
        assert!(kb.contains(Passthrough::JUMP));
        assert!(!kb.contains(Passthrough::ATTACK));

        let pad = Passthrough::for_frame(NavigationMode::Normal, InputDevice::Gamepad);
        assert!(pad.contains(Passthrough::LOOK));
        assert_eq!(pad.controls().len(), 13);

        let movement = Passthrough::for_frame(NavigationMode::Movement, InputDevice::Gamepad);
        assert_eq!(movement, Passthrough::ALWAYS);
        assert!(!movement.controls().contains(&Control::Attack));
        assert!(movement.controls().contains(&Control::ScrollDown));
    }

    #[test]
    fn test_navigation_mode_alternates() {
        assert_eq!(
            NavigationMode::Normal.alternate(NavDirection::Down),
            Control::NavDown
        );
        assert_eq!(
            NavigationMode::Movement.alternate(NavDirection::Down),
            Control::MoveDownOnly
        );
        assert_eq!(
            NavigationMode::Movement.alternate(NavDirection::Left),
            Control::MoveLeftOnly
        );
    }

    #[test]
    fn test_tags_parse_or_fail() {
        assert_eq!(SoundProfile::from_str("free_mode").ok(), Some(SoundProfile::FreeMode));
        assert!(matches!(
            SoundProfile::from_str("loud"),
            Err(MenuError::UnknownTag { kind: "sound profile", .. })
        ));
        assert_eq!(BannerType::from_str("michael").ok(), Some(BannerType::Michael));
        assert!(BannerType::from_str("yacht").is_err());
        assert_eq!(CursorSprite::from_str("grab").ok(), Some(CursorSprite::Grab));
        assert!(ShopIcon::from_str("box_tick").is_ok());
    }

    #[test]
    fn test_asset_tables() {
        assert_eq!(BannerType::None.texture(), None);
        let interaction = BannerType::InteractionMenu.texture();
        assert_eq!(interaction.map(|t| t.dictionary), Some(COMMON_MENU));
        let shop = BannerType::GunClub.texture();
        assert_eq!(shop.map(|t| t.dictionary), Some("shopui_title_gunclub"));

        assert_eq!(ShopIcon::BoxTick.sprite(false), Some("shop_box_tick"));
        assert_eq!(ShopIcon::BoxTick.sprite(true), Some("shop_box_tickb"));
        assert_eq!(ShopIcon::BoxCross.sprite(false), Some("shop_box_cross"));
        assert_eq!(ShopIcon::BoxCross.sprite(true), Some("shop_box_cross_b"));
        assert_eq!(ShopIcon::None.sprite(true), None);
        assert_eq!(
            SoundProfile::FrontEndShop.sound_set(),
            "HUD_FRONTEND_CLOTHESSHOP_SOUNDSET"
        );
    }

    #[test]
    fn test_config_from_json() {
        let config = MenuConfig::from_json(
            r#"{ "width": 431.0, "navigation_mode": "Movement", "max_drawable_items": 0 }"#,
        )
        .unwrap();
        assert_eq!(config.width, 431.0);
        assert_eq!(config.navigation_mode, NavigationMode::Movement);
        assert_eq!(config.max_drawable_items, 1);
        assert!(config.accelerated_scrolling);
        assert_eq!(config.sound_profile, SoundProfile::FrontendDefault);

        let err = MenuConfig::from_json(r#"{ "sound_profile": "Loud" }"#);
        assert!(matches!(err, Err(MenuError::Config(_))));
    }

    #[test]
    fn test_config_round_trips_defaults() {
        let json = MenuConfig::default().to_json().unwrap();
        assert_eq!(MenuConfig::from_json(&json).unwrap(), MenuConfig::default());
    }

    #[test]
    fn test_resource_scope_runs_once() {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let scope = ResourceScope::new();
        for n in 0..2 {
            let runs = runs.clone();
            scope.add_disposer(move || runs.borrow_mut().push(n));
        }

        scope.dispose();
        scope.dispose();
        drop(scope);
        assert_eq!(*runs.borrow(), vec![1, 0]);
    }

    #[test]
    fn test_resource_scope_drop_disposes() {
        let ran = Rc::new(RefCell::new(false));
        {
            let scope = ResourceScope::new();
            let ran = ran.clone();
            scope.add_disposer(move || *ran.borrow_mut() = true);
        }
        assert!(*ran.borrow());
    }

    #[test]
    fn test_chunk_graphemes() {
        let long = "a".repeat(250);
        let chunks = text::chunk_graphemes(&long, text::MAX_TEXT_CHUNK);
        let lens: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
        assert_eq!(lens, vec![99, 99, 52]);

        // A base letter and its combining accent stay together.
        let accented = "e\u{301}e\u{301}e\u{301}";
        assert_eq!(
            text::chunk_graphemes(accented, 2),
            vec!["e\u{301}e\u{301}", "e\u{301}"]
        );
        assert!(text::chunk_graphemes("", 5).is_empty());
    }

    #[test]
    fn test_ensure_loaded() {
        let mut assets = StreamingAssets::new();
        assert!(ensure_loaded(&mut assets, COMMON_MENU, ASSET_WAIT));
        assert!(ensure_loaded(&mut assets, COMMON_MENU, ASSET_WAIT));
        assert_eq!(assets.requests, vec![COMMON_MENU.to_string()]);

        assets.block("shopui_title_tennis");
        assert!(!ensure_loaded(
            &mut assets,
            "shopui_title_tennis",
            Duration::from_millis(1)
        ));
    }
}
