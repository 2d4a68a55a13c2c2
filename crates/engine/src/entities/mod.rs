//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations over one port and provides the building
//! blocks for use cases.

pub mod identity;
pub mod preferences;

pub use identity::IdentityNormalizer;
pub use preferences::Preferences;
