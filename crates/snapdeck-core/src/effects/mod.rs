//! Decorative effects that share the page with the pager but never touch its state

pub mod dropdown;
pub mod float;
pub mod lang;
pub mod quote;
pub mod reveal;
pub mod rotate;

pub use dropdown::{DropdownRegion, LangDropdown};
pub use float::FloatField;
pub use lang::{LinkAction, LinkGate, LinkPresentation};
pub use quote::{split_quote, QuoteGlyph, QuoteReveal};
pub use reveal::{Extent, RevealTracker};
pub use rotate::Rotation;
