use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap, new_key_type};

use hudmenu_core::FrameContext;
use hudmenu_ui::{ItemId, Menu, MenuEvent, MenuItem};

use crate::NavError;

new_key_type! {
    /// Handle of a menu owned by a `MenuRegistry`.
    pub struct MenuId;
    pub struct SubscriptionId;
}

type Subscriber = Box<dyn FnMut(MenuId, &MenuEvent)>;

/// Owns top-level menus, draws the visible ones every frame, and swaps
/// between parents and their submenus.
///
/// Submenu transitions are plain data: `links` maps a parent's link item
/// to the child it opens and `parents` maps each child back. The registry
/// performs the swap while draining events after a menu's frame.
#[derive(Default)]
pub struct MenuRegistry {
    menus: SlotMap<MenuId, Menu>,
    links: HashMap<(MenuId, ItemId), MenuId>,
    parents: SecondaryMap<MenuId, MenuId>,
    subscribers: SlotMap<SubscriptionId, Subscriber>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, menu: Menu) -> MenuId {
        let id = self.menus.insert(menu);
        log::debug!("registered menu {id:?}");
        id
    }

    /// Removes the menu and every submenu link that touches it. Returns
    /// `None` when `id` was already gone.
    pub fn unregister(&mut self, id: MenuId) -> Option<Menu> {
        let menu = self.menus.remove(id)?;
        self.links
            .retain(|(parent, _), child| *parent != id && *child != id);
        self.parents.remove(id);
        self.parents.retain(|_, parent| *parent != id);
        log::debug!("unregistered menu {id:?}");
        Some(menu)
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.menus.contains_key(id)
    }

    pub fn get(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id)
    }

    pub fn get_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.menus.keys()
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn any_visible(&self) -> bool {
        self.menus.values().any(Menu::is_visible)
    }

    /// Closes every visible menu.
    pub fn hide_all(&mut self) {
        for menu in self.menus.values_mut() {
            menu.close();
        }
    }

    /// Builds a submenu that inherits `parent`'s configuration and banner,
    /// registers it, and appends a link row to the parent that opens it.
    pub fn create_submenu(
        &mut self,
        parent: MenuId,
        title: impl Into<String>,
        description: impl Into<String>,
        link_text: impl Into<String>,
        link_description: impl Into<String>,
    ) -> Result<MenuId, NavError> {
        let source = self.menus.get(parent).ok_or(NavError::UnknownMenu(parent))?;
        let child = Menu::new(title)
            .with_description(description)
            .with_banner(source.banner())
            .with_config(source.config().clone());
        let child = self.register(child);

        let item = self
            .menus
            .get_mut(parent)
            .ok_or(NavError::UnknownMenu(parent))?
            .add_item(MenuItem::new(link_text, link_description));
        self.link(parent, item, child)?;
        Ok(child)
    }

    /// Makes selecting `item` in `parent` open `child`, and backing out of
    /// `child` reopen `parent`.
    pub fn link(&mut self, parent: MenuId, item: ItemId, child: MenuId) -> Result<(), NavError> {
        let menu = self.menus.get(parent).ok_or(NavError::UnknownMenu(parent))?;
        if menu.item(item).is_none() {
            return Err(NavError::UnknownItem { menu: parent, item });
        }
        if !self.menus.contains_key(child) {
            return Err(NavError::UnknownMenu(child));
        }
        self.links.insert((parent, item), child);
        self.parents.insert(child, parent);
        Ok(())
    }

    pub fn parent_of(&self, child: MenuId) -> Option<MenuId> {
        self.parents.get(child).copied()
    }

    pub fn submenu_for(&self, parent: MenuId, item: ItemId) -> Option<MenuId> {
        self.links.get(&(parent, item)).copied()
    }

    pub fn subscribe(&mut self, f: impl FnMut(MenuId, &MenuEvent) + 'static) -> SubscriptionId {
        self.subscribers.insert(Box::new(f))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    /// Runs one frame for every registered menu that is visible when its
    /// turn comes, applies submenu transitions, and returns the events of
    /// the frame in order. Subscribers see the same events.
    ///
    /// Menus are visited from a snapshot taken on entry. A submenu opened
    /// earlier in the pass is drawn in the same pass, guarded by its own
    /// open debounce.
    pub fn tick(&mut self, frame: &mut FrameContext<'_>) -> Vec<(MenuId, MenuEvent)> {
        let snapshot: Vec<MenuId> = self.menus.keys().collect();
        let mut out = Vec::new();

        for &id in &snapshot {
            let Some(menu) = self.menus.get_mut(id) else {
                continue;
            };
            if menu.is_visible() {
                menu.draw(frame);
            }
            self.collect(id, &mut out);
        }

        for menu in self.menus.values_mut() {
            menu.flush_cues(frame.audio);
        }

        for (id, event) in &out {
            for subscriber in self.subscribers.values_mut() {
                subscriber(*id, event);
            }
        }
        out
    }

    /// Drains `id`'s events into `out`, following any submenu swap they
    /// trigger into the menus it touched.
    fn collect(&mut self, id: MenuId, out: &mut Vec<(MenuId, MenuEvent)>) {
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            let Some(menu) = self.menus.get_mut(id) else {
                continue;
            };
            for event in menu.take_events() {
                match &event {
                    MenuEvent::ItemSelected { item, .. } => {
                        if let Some(child) = self.submenu_for(id, *item) {
                            self.enter(id, child);
                            pending.push(child);
                            pending.push(id);
                        }
                    }
                    MenuEvent::Back => {
                        if let Some(parent) = self.parent_of(id) {
                            self.leave(parent);
                            pending.push(parent);
                        }
                    }
                    _ => {}
                }
                out.push((id, event));
            }
        }
    }

    fn enter(&mut self, parent: MenuId, child: MenuId) {
        log::debug!("entering submenu {child:?} from {parent:?}");
        if let Some(menu) = self.menus.get_mut(parent) {
            menu.suppress_audio_next_call();
            menu.close();
        }
        if let Some(menu) = self.menus.get_mut(child) {
            menu.open();
        }
    }

    /// The child already closed itself on cancel.
    fn leave(&mut self, parent: MenuId) {
        log::debug!("returning to menu {parent:?}");
        if let Some(menu) = self.menus.get_mut(parent) {
            menu.suppress_audio_next_call();
            menu.open();
        }
    }
}
