//! Application state and composition.

use std::sync::Arc;

use leftclick_domain::{
    AffordanceKind, ContainerWidgets, CustomizationMode, MenuAffordance, MenuEntry, WidgetId,
};

use crate::entities::{IdentityNormalizer, Preferences};
use crate::infrastructure::ports::{
    ConfigStorePort, ContainerContentsPort, ItemVariationPort, MenuManagerPort,
};
use crate::use_cases::{
    BuildOutcome, ClickOutcome, CustomizationController, MenuRewrite, PromotionOutcome,
};

/// Host collaborators the engine is wired against.
pub struct Ports {
    pub containers: Arc<dyn ContainerContentsPort>,
    pub variations: Arc<dyn ItemVariationPort>,
    pub config: Arc<dyn ConfigStorePort>,
    pub menus: Arc<dyn MenuManagerPort>,
}

/// Main application state.
///
/// One instance per host session. Every method runs to completion on the
/// host's event thread; the menu passed in is owned by that one event.
pub struct App {
    preferences: Arc<Preferences>,
    rewrite: MenuRewrite,
    customization: CustomizationController,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(ports: Ports, widgets: ContainerWidgets, config_group: &str) -> Self {
        let identity = Arc::new(IdentityNormalizer::new(ports.variations));
        let preferences = Arc::new(Preferences::new(ports.config, config_group));
        let rewrite = MenuRewrite::new(widgets, ports.containers, identity, preferences.clone());
        let customization =
            CustomizationController::new(ports.menus, widgets.deposit_inventory());

        Self {
            preferences,
            rewrite,
            customization,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn mode(&self) -> CustomizationMode {
        self.customization.mode()
    }

    pub fn active_affordance(&self) -> &MenuAffordance {
        self.customization.active_affordance()
    }

    pub fn start_up(&mut self) {
        tracing::info!("Starting left-click customization");
        self.customization.start_up();
    }

    pub fn shut_down(&mut self) {
        self.customization.shut_down();
        tracing::info!("Stopped left-click customization");
    }

    /// The host built a menu (list-build). Only acts while configuring.
    pub fn on_menu_built(&self, entries: &mut Vec<MenuEntry>) -> BuildOutcome {
        self.rewrite.annotate(self.customization.mode(), entries)
    }

    /// The host finalized a menu whose newest entry targets `widget`/`slot`
    /// (list-open). Runs in every mode.
    pub fn on_menu_finalized(
        &self,
        widget: WidgetId,
        slot: i32,
        entries: &mut [MenuEntry],
    ) -> PromotionOutcome {
        self.rewrite.promote(widget, slot, entries)
    }

    /// One of the Configure/Save affordances was clicked.
    pub fn on_affordance_clicked(
        &mut self,
        kind: AffordanceKind,
        target: &str,
    ) -> CustomizationMode {
        self.customization.on_affordance(kind, target)
    }

    /// A menu entry was clicked; applies its attached command, if any.
    pub fn on_entry_clicked(&self, entry: &MenuEntry) -> ClickOutcome {
        self.rewrite.handle_click(entry)
    }
}
