//! Icon usage collection.
//!
//! Walks a parsed module and finds every `<Icon id=... />` whose identifier is
//! statically visible:
//!
//! - String literal: `<Icon id="home" />`
//! - Ternary between literals: `<Icon id={open ? "chevron-up" : "chevron-down"} />`
//!
//! Dynamic identifiers (`id={name}`, `id={`icon-${x}`}`, `id={getId()}`) are
//! silently skipped. Those icons are treated as not provably used.

mod icon_usage;

pub use icon_usage::{IconUsageCollector, collect_icon_ids};
