//! Calendar export engine for Revel Bus trips.
//!
//! Turns a [`Trip`] (with its venues already loaded) into:
//! - an ICS download, via [`EventBuilder`] and [`Calendar`]
//! - Google/Yahoo "add event" links plus the `.ics` path, via [`LinkBuilder`]
//!
//! All inputs are plain values; the only side effects are the file sink in
//! [`export`] and whatever writer the caller hands to [`Calendar::encode`].

pub mod address;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod ics;
pub mod links;
pub mod text;
pub mod trip;

pub use address::resolve_address;
pub use config::{ExportConfig, LinkTimePolicy};
pub use error::{CalExportError, CalExportResult};
pub use event::{CalendarEvent, EventBuilder};
pub use ics::{Calendar, CalendarMeta};
pub use links::{CalendarLinks, LinkBuilder};
pub use trip::{Trip, Venue};
