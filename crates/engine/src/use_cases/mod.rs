//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules and ports to handle one kind
//! of host event each.

pub mod customization;
pub mod menu_rewrite;

// Re-export main types
pub use customization::CustomizationController;
pub use menu_rewrite::{BuildOutcome, ClickOutcome, MenuRewrite, PromotionOutcome, Skip};
