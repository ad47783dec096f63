//! Column name normalization and property resolution
//!
//! Spreadsheet headers are normalized to snake_case keys and then looked up
//! in a fixed table of schema.org properties. Headers that are not in the
//! table become data-specific properties under the base-URI prefix.

use crate::vocab::base_term;

/// Normalized column name -> schema.org property
pub const PROPERTY_MAPPING: &[(&str, &str)] = &[
    ("web_scraper_order", "schema:identifier"),
    ("web_scraper_start_url", "schema:url"),
    ("link", "schema:url"),
    ("nama_barang", "schema:name"),
    ("harga_barang", "schema:price"),
    ("kondisi", "schema:itemCondition"),
    ("stok", "schema:inventoryLevel"),
    ("detail", "schema:description"),
    ("logo_toko", "schema:logo"),
    ("gambar_barang", "schema:image"),
    ("lokasi", "schema:location"),
    ("rating", "schema:aggregateRating"),
];

/// Normalize a column header
///
/// "Warna (Utama)" -> "warna_utama", "Logo/Toko" -> "logo_toko"
pub fn normalize_column(name: &str) -> String {
    name.trim()
        .replace([' ', '/'], "_")
        .replace(['(', ')'], "")
        .to_lowercase()
}

/// Look up a normalized name in the fixed mapping
pub fn mapped_property(normalized: &str) -> Option<&'static str> {
    PROPERTY_MAPPING
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, property)| *property)
}

/// Resolve a normalized name to a property URI; never fails
pub fn resolve_property(normalized: &str) -> String {
    match mapped_property(normalized) {
        Some(property) => property.to_string(),
        None => base_term(normalized),
    }
}

/// Normalize a raw header and resolve it in one step
pub fn property_for_column(column: &str) -> String {
    resolve_property(&normalize_column(column))
}
