//! Interactivity core for the Pathfinders club website.
//!
//! Each page behavior lives in its own module as an explicit state value
//! plus transition functions that return declarative view effects:
//! - `event` / `ics` for the event catalog and calendar downloads
//! - `filter` for the upcoming/past event partitioning
//! - `lightbox` for the gallery overlay
//! - `form` for contact-form validation and the confirmation flow
//! - `nav` / `cards` for menu, scroll and card toggles
//!
//! The embedding shell wires triggers in and drains effects out; nothing
//! here traverses a document tree, performs I/O, or spawns.

pub mod cards;
pub mod error;
pub mod event;
pub mod filter;
pub mod form;
pub mod ics;
pub mod lightbox;
pub mod nav;

// Re-export the types a shell touches on nearly every call site.
pub use error::{SiteError, SiteResult};
pub use event::{Catalog, EventRecord};
pub use filter::{EventFilter, FilterMode};
pub use form::{ContactForm, FormInput};
pub use lightbox::{ImageRef, Lightbox};
