//! Drives an interaction menu with a submenu through a fixed input script
//! on headless collaborators and logs what happens.
//!
//! `RUST_LOG=debug cargo run -p scripted [config.json]`

use anyhow::Context;
use hudmenu_core::headless::HeadlessHost;
use hudmenu_core::prelude::*;
use hudmenu_navigation::{MenuId, MenuRegistry};
use hudmenu_ui::*;

const VEHICLES: [&str; 3] = ["Adder", "Banshee", "Comet"];

#[derive(Clone, Copy, Debug)]
enum Step {
    Tap(Control),
    Wheel(f32),
    Click { x: f32, y: f32 },
}

struct Demo {
    host: HeadlessHost,
    registry: MenuRegistry,
    now: GameTime,
    vehicle: usize,
    vehicle_row: ItemId,
    main: MenuId,
}

impl Demo {
    fn new(config: MenuConfig) -> anyhow::Result<Self> {
        let mut registry = MenuRegistry::new();

        let mut menu = Menu::new("Interaction")
            .with_banner(BannerType::InteractionMenu)
            .with_description("Personal options")
            .with_config(config);
        menu.add_item(MenuItem::checkbox(
            "Passive mode",
            "Other players cannot harm you.",
            false,
        ));
        menu.add_item(MenuItem::list(
            "Mood",
            "Facial expression.",
            ["Normal", "Happy", "Angry"],
            0,
        )?);
        let vehicle_row = menu.add_item(MenuItem::external_list(
            "Vehicle",
            "Your active vehicle.",
            VEHICLES[0],
        ));
        menu.add_item(MenuItem::new("Kill yourself", "Respawn at the nearest hospital.").disabled());
        let main = registry.register(menu);

        let style = registry.create_submenu(
            main,
            "Walk Style",
            "Pick a walk",
            "Walk Style",
            "Change how your character walks.",
        )?;
        let submenu = registry
            .get_mut(style)
            .context("submenu vanished after registration")?;
        for walk in ["Normal", "Gangster", "Posh", "Hipster"] {
            submenu.add_item(MenuItem::new(walk, "").with_icon(ShopIcon::Clothing));
        }

        Ok(Self {
            host: HeadlessHost::new(),
            registry,
            now: 0,
            vehicle: 0,
            vehicle_row,
            main,
        })
    }

    fn frame(&mut self) {
        let events = self.registry.tick(&mut self.host.frame(self.now));
        for (menu, event) in events {
            let title = self.registry.get(menu).map(Menu::title).unwrap_or("?");
            log::info!("[{:>6}] {title}: {event:?}", self.now);
            if let MenuEvent::ExternalNavigateRequested { direction, .. } = event {
                self.cycle_vehicle(direction);
            }
        }
        self.host.input.next_frame();
        self.now += 16;
    }

    /// The vehicle list is owned here; the menu only shows it.
    fn cycle_vehicle(&mut self, direction: HorizontalDirection) {
        let len = VEHICLES.len() as isize;
        self.vehicle = (self.vehicle as isize + direction.delta()).rem_euclid(len) as usize;
        let name = VEHICLES[self.vehicle];
        if let Some(row) = self
            .registry
            .get_mut(self.main)
            .and_then(|m| m.item_mut(self.vehicle_row))
        {
            row.set_value(ItemValue::Text(name.to_string()));
        }
    }

    fn run(&mut self, step: Step) {
        log::debug!("step {step:?}");
        match step {
            Step::Tap(control) => {
                self.host.input.press(control);
                self.frame();
                self.host.input.release(control);
                self.frame();
            }
            Step::Wheel(delta) => {
                self.host.input.scroll(delta);
                self.frame();
            }
            Step::Click { x, y } => {
                let res = self.host.display.resolution();
                self.host.input.move_cursor(x / res.width, y / res.height);
                self.host.input.press(Control::CursorAccept);
                self.frame();
                self.host.input.release(Control::CursorAccept);
                self.frame();
            }
        }
        // Let every debounce window lapse between steps.
        for _ in 0..25 {
            self.frame();
        }
    }
}

fn load_config() -> anyhow::Result<MenuConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(MenuConfig::default());
    };
    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    MenuConfig::from_json(&json).with_context(|| format!("parsing {path}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut demo = Demo::new(load_config()?)?;

    demo.registry
        .get_mut(demo.main)
        .context("main menu missing")?
        .open();
    demo.frame();

    let script = [
        Step::Tap(Control::NavAccept),
        Step::Tap(Control::NavDown),
        Step::Tap(Control::NavRight),
        Step::Tap(Control::NavRight),
        Step::Wheel(-1.0),
        Step::Tap(Control::NavLeft),
        Step::Tap(Control::NavDown),
        Step::Tap(Control::NavAccept),
        Step::Tap(Control::NavDown),
        Step::Tap(Control::NavAccept),
        Step::Tap(Control::NavDown),
        Step::Tap(Control::NavAccept),
        Step::Tap(Control::NavCancel),
        Step::Click { x: 1500.0, y: 900.0 },
        Step::Tap(Control::NavCancel),
    ];
    for step in script {
        demo.run(step);
    }

    log::info!(
        "finished at {} ms, any menu visible: {}",
        demo.now,
        demo.registry.any_visible()
    );
    Ok(())
}
