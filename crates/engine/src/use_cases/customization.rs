//! Customization mode controller.
//!
//! Owns the [`CustomizationMode`] and keeps exactly one affordance
//! registered on the deposit-inventory button: "Configure" while normal,
//! "Save" while configuring.

use std::sync::Arc;

use leftclick_domain::common::remove_tags;
use leftclick_domain::{
    AffordanceKind, CustomizationMode, MenuAffordance, WidgetId, LEFT_CLICK_TARGET,
};

use crate::infrastructure::ports::MenuManagerPort;

pub struct CustomizationController {
    menus: Arc<dyn MenuManagerPort>,
    configure: MenuAffordance,
    save: MenuAffordance,
    mode: CustomizationMode,
}

impl CustomizationController {
    pub fn new(menus: Arc<dyn MenuManagerPort>, widget: WidgetId) -> Self {
        Self {
            menus,
            configure: MenuAffordance::new(AffordanceKind::Configure, widget),
            save: MenuAffordance::new(AffordanceKind::Save, widget),
            mode: CustomizationMode::Normal,
        }
    }

    pub fn mode(&self) -> CustomizationMode {
        self.mode
    }

    /// The affordance registered for the current mode.
    pub fn active_affordance(&self) -> &MenuAffordance {
        match self.mode {
            CustomizationMode::Normal => &self.configure,
            CustomizationMode::Configuring => &self.save,
        }
    }

    pub fn start_up(&mut self) {
        self.rebuild_menus();
    }

    pub fn shut_down(&mut self) {
        self.remove_menus();
        self.mode = CustomizationMode::Normal;
        tracing::debug!("Customization menus removed");
    }

    /// Handle a click on one of our affordances.
    ///
    /// `target` is the clicked entry's target text as the host reports it,
    /// possibly with markup. "Configure" only enters configuring mode when
    /// that target is the left-click affordance; any other target leaves the
    /// controller in normal mode.
    pub fn on_affordance(&mut self, kind: AffordanceKind, target: &str) -> CustomizationMode {
        let previous = self.mode;

        self.mode = match kind {
            AffordanceKind::Configure => {
                CustomizationMode::from_configuring(remove_tags(target) == LEFT_CLICK_TARGET)
            }
            AffordanceKind::Save => CustomizationMode::Normal,
        };

        tracing::debug!(
            affordance = %kind,
            from = %previous,
            to = %self.mode,
            "Customization mode changed"
        );

        self.rebuild_menus();
        self.mode
    }

    fn rebuild_menus(&self) {
        self.remove_menus();
        self.menus.add_managed_custom_menu(self.active_affordance());
    }

    fn remove_menus(&self) {
        self.menus.remove_managed_custom_menu(&self.configure);
        self.menus.remove_managed_custom_menu(&self.save);
    }
}
