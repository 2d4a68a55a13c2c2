//! Helpers for constructing a fully wired session.

use std::sync::Arc;

use leftclick_domain::{ContainerKind, ContainerWidgets, EntryKind, ItemId, MenuEntry, WidgetId};

use crate::api::Replay;
use crate::app::{App, Ports};
use crate::infrastructure::ports::{ConfigStorePort, ItemVariationPort};
use crate::infrastructure::scripted_host::{RecordingMenuManager, ScriptedContainers};
use crate::infrastructure::settings::{
    DEFAULT_BANK_WIDGET, DEFAULT_CONFIG_GROUP, DEFAULT_DEPOSIT_INVENTORY_WIDGET,
    DEFAULT_INVENTORY_WIDGET,
};

pub const BANK: WidgetId = DEFAULT_BANK_WIDGET;
pub const INVENTORY: WidgetId = DEFAULT_INVENTORY_WIDGET;

pub const COINS: ItemId = ItemId::new(995);
pub const LOBSTER: ItemId = ItemId::new(379);

/// A wired session plus handles on its scripted host.
pub struct Session {
    pub replay: Replay,
    pub containers: Arc<ScriptedContainers>,
    pub menus: Arc<RecordingMenuManager>,
}

pub fn session(
    config: Arc<dyn ConfigStorePort>,
    variations: Arc<dyn ItemVariationPort>,
) -> Session {
    let containers = Arc::new(
        ScriptedContainers::new()
            .with_container(ContainerKind::Bank, vec![Some(COINS), None, Some(LOBSTER)])
            .with_container(ContainerKind::Inventory, vec![Some(LOBSTER)]),
    );
    let menus = Arc::new(RecordingMenuManager::new());
    let ports = Ports {
        containers: containers.clone(),
        variations,
        config,
        menus: menus.clone(),
    };
    let widgets = ContainerWidgets::new(BANK, INVENTORY, DEFAULT_DEPOSIT_INVENTORY_WIDGET)
        .expect("default widgets are distinct");
    let app = App::new(ports, widgets, DEFAULT_CONFIG_GROUP);

    Session {
        replay: Replay::new(app, containers.clone()),
        containers,
        menus,
    }
}

/// Menu as the host builds it: `options` bottom to top, all on one slot.
pub fn menu(widget: WidgetId, slot: i32, target: &str, options: &[&str]) -> Vec<MenuEntry> {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            MenuEntry::new(*option, target, EntryKind::Builtin(1000 + index as u16))
                .on_slot(widget, slot)
        })
        .collect()
}

pub fn options(entries: &[MenuEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.option.as_str()).collect()
}
