//! Vendor chunk groups.

use std::collections::BTreeMap;

use crate::webpack::{Entry, EntryPoint, Plugin};

/// Chunk name of the application entry once vendors are split out.
pub const MAIN_CHUNK: &str = "main";

/// Generic third-party chunk.
pub const VENDOR_CHUNK: &str = "vendor";

/// Modules bundled into [`VENDOR_CHUNK`].
pub const VENDOR_MODULES: &[&str] = &[
    "core-js/shim",
    "moment",
    "vue",
    "vue-router",
    "vue-touch",
    "vue-infinite-scroll",
];

/// Platform SDK chunk.
pub const SDK_VENDOR_CHUNK: &str = "vendor-teambition";

/// Modules bundled into [`SDK_VENDOR_CHUNK`].
pub const SDK_VENDOR_MODULES: &[&str] = &["teambition-sdk", "teambition-gta"];

/// Split a single application entry into the application plus the two
/// vendor groups.
pub fn split_entry(main: &str) -> Entry {
    Entry::Named(BTreeMap::from([
        (
            MAIN_CHUNK.to_string(),
            EntryPoint::Module(main.to_string()),
        ),
        (VENDOR_CHUNK.to_string(), modules(VENDOR_MODULES)),
        (SDK_VENDOR_CHUNK.to_string(), modules(SDK_VENDOR_MODULES)),
    ]))
}

/// Shared-chunk extraction for both vendor groups.
pub fn commons_chunk() -> Plugin {
    Plugin::CommonsChunk {
        names: vec![VENDOR_CHUNK.to_string(), SDK_VENDOR_CHUNK.to_string()],
    }
}

fn modules(names: &[&str]) -> EntryPoint {
    EntryPoint::Modules(names.iter().map(|s| s.to_string()).collect())
}
