//! Scripted host sessions.
//!
//! A replay script describes container contents and an ordered list of host
//! events. [`Replay`] feeds them to an [`App`] and reports what each event did
//! to the menu.
//!
//! ```json
//! {
//!   "containers": { "bank": [995, null, 1234] },
//!   "events": [
//!     { "type": "start_up" },
//!     { "type": "affordance", "kind": "configure" },
//!     { "type": "menu_built", "entries": [ ... ] },
//!     { "type": "click", "index": 1 }
//!   ]
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use leftclick_domain::{
    AffordanceKind, ContainerKind, CustomizationMode, EntryKind, ItemId, MenuEntry, WidgetId,
    LEFT_CLICK_TARGET,
};

use crate::app::App;
use crate::infrastructure::scripted_host::ScriptedContainers;
use crate::use_cases::{BuildOutcome, ClickOutcome, PromotionOutcome};

fn left_click_target() -> String {
    LEFT_CLICK_TARGET.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptContainers {
    #[serde(default)]
    pub bank: Option<Vec<Option<ItemId>>>,
    #[serde(default)]
    pub inventory: Option<Vec<Option<ItemId>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub containers: ScriptContainers,
    pub events: Vec<HostEvent>,
}

impl ReplayScript {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Containers holding the script's initial contents.
    pub fn scripted_containers(&self) -> ScriptedContainers {
        let containers = ScriptedContainers::new();
        if let Some(slots) = &self.containers.bank {
            containers.set_container(ContainerKind::Bank, slots.clone());
        }
        if let Some(slots) = &self.containers.inventory {
            containers.set_container(ContainerKind::Inventory, slots.clone());
        }
        containers
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    StartUp,
    ShutDown,
    SetContainer {
        container: ContainerKind,
        slots: Vec<Option<ItemId>>,
    },
    CloseContainer {
        container: ContainerKind,
    },
    Affordance {
        kind: AffordanceKind,
        #[serde(default = "left_click_target")]
        target: String,
    },
    MenuBuilt {
        entries: Vec<MenuEntry>,
    },
    MenuFinalized {
        widget: WidgetId,
        slot: i32,
        entries: Vec<MenuEntry>,
    },
    /// Click entry `index` of the most recent menu.
    Click {
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReport {
    Lifecycle {
        mode: CustomizationMode,
        affordance: Option<AffordanceKind>,
    },
    Containers(ContainerKind),
    Mode {
        mode: CustomizationMode,
        affordance: AffordanceKind,
    },
    Built {
        outcome: BuildOutcome,
        entries: Vec<MenuEntry>,
    },
    Finalized {
        outcome: PromotionOutcome,
        entries: Vec<MenuEntry>,
    },
    Clicked {
        option: String,
        outcome: ClickOutcome,
    },
    ClickMissed {
        index: usize,
        len: usize,
    },
}

fn kind_tag(kind: EntryKind) -> String {
    match kind {
        EntryKind::Builtin(id) => format!("builtin:{}", id),
        EntryKind::Managed => "managed".to_string(),
        EntryKind::Priority => "priority".to_string(),
    }
}

/// Menu as the host draws it: last entry on top, run on left click.
fn write_menu(f: &mut fmt::Formatter<'_>, entries: &[MenuEntry]) -> fmt::Result {
    for (index, entry) in entries.iter().enumerate().rev() {
        let left_click = if index + 1 == entries.len() {
            "  <- left click"
        } else {
            ""
        };
        writeln!(
            f,
            "    {:>2} [{}] {} {}{}",
            index,
            kind_tag(entry.kind),
            entry.option,
            entry.target,
            left_click
        )?;
    }
    Ok(())
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepReport::Lifecycle { mode, affordance } => match affordance {
                Some(kind) => writeln!(f, "started ({}), showing {}", mode, kind),
                None => writeln!(f, "stopped ({})", mode),
            },
            StepReport::Containers(kind) => writeln!(f, "{} contents changed", kind),
            StepReport::Mode { mode, affordance } => {
                writeln!(f, "mode {}, showing {}", mode, affordance)
            }
            StepReport::Built { outcome, entries } => {
                writeln!(f, "menu built: {:?}", outcome)?;
                write_menu(f, entries)
            }
            StepReport::Finalized { outcome, entries } => {
                writeln!(f, "menu finalized: {:?}", outcome)?;
                write_menu(f, entries)
            }
            StepReport::Clicked { option, outcome } => {
                writeln!(f, "clicked '{}': {:?}", option, outcome)
            }
            StepReport::ClickMissed { index, len } => {
                writeln!(f, "click {} ignored, menu has {} entries", index, len)
            }
        }
    }
}

/// Drives an [`App`] with scripted host events.
pub struct Replay {
    app: App,
    containers: Arc<ScriptedContainers>,
    menu: Vec<MenuEntry>,
}

impl Replay {
    /// `containers` must be the same instance the app's ports were built on.
    pub fn new(app: App, containers: Arc<ScriptedContainers>) -> Self {
        Self {
            app,
            containers,
            menu: Vec::new(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Most recent menu after the engine's rewrite.
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn run(&mut self, events: impl IntoIterator<Item = HostEvent>) -> Vec<StepReport> {
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    pub fn apply(&mut self, event: HostEvent) -> StepReport {
        match event {
            HostEvent::StartUp => {
                self.app.start_up();
                StepReport::Lifecycle {
                    mode: self.app.mode(),
                    affordance: Some(self.app.active_affordance().kind),
                }
            }
            HostEvent::ShutDown => {
                self.app.shut_down();
                StepReport::Lifecycle {
                    mode: self.app.mode(),
                    affordance: None,
                }
            }
            HostEvent::SetContainer { container, slots } => {
                self.containers.set_container(container, slots);
                StepReport::Containers(container)
            }
            HostEvent::CloseContainer { container } => {
                self.containers.close_container(container);
                StepReport::Containers(container)
            }
            HostEvent::Affordance { kind, target } => {
                let mode = self.app.on_affordance_clicked(kind, &target);
                StepReport::Mode {
                    mode,
                    affordance: self.app.active_affordance().kind,
                }
            }
            HostEvent::MenuBuilt { mut entries } => {
                let outcome = self.app.on_menu_built(&mut entries);
                self.menu = entries;
                StepReport::Built {
                    outcome,
                    entries: self.menu.clone(),
                }
            }
            HostEvent::MenuFinalized {
                widget,
                slot,
                mut entries,
            } => {
                let outcome = self.app.on_menu_finalized(widget, slot, &mut entries);
                self.menu = entries;
                StepReport::Finalized {
                    outcome,
                    entries: self.menu.clone(),
                }
            }
            HostEvent::Click { index } => match self.menu.get(index) {
                Some(entry) => StepReport::Clicked {
                    option: entry.option.clone(),
                    outcome: self.app.on_entry_clicked(entry),
                },
                None => {
                    tracing::warn!(index, len = self.menu.len(), "Click outside current menu");
                    StepReport::ClickMissed {
                        index,
                        len: self.menu.len(),
                    }
                }
            },
        }
    }
}
