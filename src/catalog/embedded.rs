// SPDX-License-Identifier: MPL-2.0
//! Catalog files compiled into the binary.

use rust_embed::RustEmbed;

const DEFAULT_CATALOG_FILE: &str = "default.toml";

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// Returns the text of the built-in catalog, if it was embedded.
pub(super) fn default_catalog() -> Option<String> {
    Asset::get(DEFAULT_CATALOG_FILE)
        .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
}
