//! Menu rewrite use case.
//!
//! Two passes over the host's ephemeral menu:
//!
//! - `annotate` runs when the menu is built, only while configuring. It tags
//!   every entry with a [`PreferenceCommand`], marks the entry matching the
//!   stored preference and appends a "Reset" entry.
//! - `promote` runs when an entry is added to the finalized menu, in every
//!   mode. It moves the preferred entry to the last slot, which the host runs
//!   on left click.
//!
//! Every lookup failure leaves the menu exactly as the host built it.

use std::sync::Arc;

use leftclick_domain::{
    ActionLabel, CanonicalItemId, ContainerKind, ContainerWidgets, CustomizationMode, EntryKind,
    MenuEntry, PreferenceAction, PreferenceCommand, WidgetId, LEFT_CLICK_TARGET, RESET_OPTION,
};

use crate::entities::{IdentityNormalizer, Preferences};
use crate::infrastructure::ports::ContainerContentsPort;

/// Why a pass left the menu untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    NotConfiguring,
    EmptyMenu,
    /// Entry widget is neither the bank nor the inventory container.
    UnknownWidget(WidgetId),
    /// Container not loaded, slot out of range, or slot empty.
    NoItem { container: ContainerKind, slot: i32 },
    NoPreference,
    NoMatchingEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Skipped(Skip),
    Annotated {
        container: ContainerKind,
        item: CanonicalItemId,
        active: Option<ActionLabel>,
        /// Index of the entry that received the marker, if any.
        marked: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionOutcome {
    Skipped(Skip),
    Promoted { from: usize, label: ActionLabel },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Entry carries no command; the host handles it alone.
    NoCommand,
    Recorded(ActionLabel),
    /// Label is not on the allow-list; nothing was stored.
    Ineligible(ActionLabel),
    Reset,
}

impl ClickOutcome {
    /// Whether the host should still run the entry's own action.
    pub fn runs_default_action(&self) -> bool {
        !matches!(self, ClickOutcome::Reset)
    }
}

struct ResolvedSlot {
    container: ContainerKind,
    widget: WidgetId,
    item: CanonicalItemId,
}

pub struct MenuRewrite {
    widgets: ContainerWidgets,
    containers: Arc<dyn ContainerContentsPort>,
    identity: Arc<IdentityNormalizer>,
    preferences: Arc<Preferences>,
}

impl MenuRewrite {
    pub fn new(
        widgets: ContainerWidgets,
        containers: Arc<dyn ContainerContentsPort>,
        identity: Arc<IdentityNormalizer>,
        preferences: Arc<Preferences>,
    ) -> Self {
        Self {
            widgets,
            containers,
            identity,
            preferences,
        }
    }

    fn resolve(&self, widget: WidgetId, slot: i32) -> Result<ResolvedSlot, Skip> {
        let container = self
            .widgets
            .resolve(widget)
            .ok_or(Skip::UnknownWidget(widget))?;
        let raw = self
            .containers
            .item_at(container, slot)
            .ok_or(Skip::NoItem { container, slot })?;

        Ok(ResolvedSlot {
            container,
            widget,
            item: self.identity.normalize(raw),
        })
    }

    /// Build-time pass. The primary entry is the last one in `entries`.
    pub fn annotate(
        &self,
        mode: CustomizationMode,
        entries: &mut Vec<MenuEntry>,
    ) -> BuildOutcome {
        if !mode.is_configuring() {
            return BuildOutcome::Skipped(Skip::NotConfiguring);
        }

        let Some(primary) = entries.last() else {
            return BuildOutcome::Skipped(Skip::EmptyMenu);
        };

        let resolved = match self.resolve(primary.widget, primary.slot) {
            Ok(resolved) => resolved,
            Err(skip) => {
                tracing::trace!(?skip, "Menu build left untouched");
                return BuildOutcome::Skipped(skip);
            }
        };

        let active = self.preferences.get(resolved.widget, resolved.item);
        let record = PreferenceCommand::record(resolved.item, resolved.container);
        let mut marked = None;

        for (index, entry) in entries.iter_mut().enumerate() {
            let label = entry.label();

            entry.kind = EntryKind::Managed;
            entry.command = Some(record);

            if marked.is_none() && active.as_ref() == Some(&label) {
                entry.mark_active();
                marked = Some(index);
            }
        }

        let mut reset = MenuEntry::new(RESET_OPTION, LEFT_CLICK_TARGET, EntryKind::Managed);
        reset.command = Some(PreferenceCommand::reset(resolved.item, resolved.container));
        entries.push(reset);

        tracing::debug!(
            item_id = %resolved.item,
            container = %resolved.container,
            active = ?active.as_ref().map(ActionLabel::as_str),
            "Annotated menu for configuration"
        );

        BuildOutcome::Annotated {
            container: resolved.container,
            item: resolved.item,
            active,
            marked,
        }
    }

    /// Open-time pass for the entry added at `widget`/`slot`.
    pub fn promote(
        &self,
        widget: WidgetId,
        slot: i32,
        entries: &mut [MenuEntry],
    ) -> PromotionOutcome {
        let resolved = match self.resolve(widget, slot) {
            Ok(resolved) => resolved,
            Err(skip) => {
                tracing::trace!(?skip, "Menu open left untouched");
                return PromotionOutcome::Skipped(skip);
            }
        };

        let Some(active) = self.preferences.get(resolved.widget, resolved.item) else {
            tracing::trace!(item_id = %resolved.item, "No stored preference for item");
            return PromotionOutcome::Skipped(Skip::NoPreference);
        };

        // Scan from the end so the last duplicate wins.
        let Some(from) = entries.iter().rposition(|entry| entry.label() == active) else {
            tracing::trace!(label = %active, "No entry matches stored preference");
            return PromotionOutcome::Skipped(Skip::NoMatchingEntry);
        };

        let last = entries.len() - 1;
        entries[from].kind = EntryKind::Priority;
        entries.swap(from, last);

        tracing::trace!(
            item_id = %resolved.item,
            label = %active,
            from,
            "Promoted preferred entry"
        );

        PromotionOutcome::Promoted {
            from,
            label: active,
        }
    }

    /// Apply the command attached to a clicked entry.
    pub fn handle_click(&self, entry: &MenuEntry) -> ClickOutcome {
        let Some(command) = entry.command else {
            return ClickOutcome::NoCommand;
        };
        let widget = self.widgets.widget_for(command.container);

        match command.action {
            PreferenceAction::Record => {
                let label = entry.label();
                if !label.is_eligible() {
                    return ClickOutcome::Ineligible(label);
                }
                self.preferences.set(widget, command.item, &label);
                ClickOutcome::Recorded(label)
            }
            PreferenceAction::Reset => {
                self.preferences.unset(widget, command.item);
                ClickOutcome::Reset
            }
        }
    }
}
