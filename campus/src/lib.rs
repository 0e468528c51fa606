//! Campus is a small in-memory bookkeeper for campus events: seminars,
//! workshops and sports events, the users who register for them, the
//! waitlists that form when they fill up, and the ratings they collect.
//!
//! Nothing is persisted, everything lives as long as its [`EventManager`].
//!
//! [`EventManager`] owns every [`Event`] and [`User`] and is the only way to
//! change them. Events are created from an [`EventBuilder`]; the manager
//! assigns the id.
//!
//! [`Seed`] fills a fresh manager with its starting accounts and events,
//! either the built-in defaults or a [`.ron`] file.
//!
//! [`Console`] is the interactive text menu on top of all this. It works on
//! any buffered reader and writer, the `campus-events` binary hands it stdin
//! and stdout.
//!
//! [`Event`]: crate::models::Event
//! [`EventBuilder`]: crate::models::EventBuilder
//! [`EventManager`]: crate::models::EventManager
//! [`User`]: crate::models::User
//! [`Seed`]: crate::models::Seed
//! [`Console`]: crate::console::Console
//! [`.ron`]: https://github.com/ron-rs/ron

pub mod console;
pub mod error;
/// This module holds the data model of campus.
pub mod models;

pub use error::{CampusError, Result};
