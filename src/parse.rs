//! Parsers for the raw text fields of scraped recipe records.
//!
//! The wiki stores crafting cost as free text ("5s + ⚡10MF/s"), material
//! lists as "2xOre + 1xCoal" (also newline-separated), and outputs as
//! "2 x Steel Plate" or a bare item name. These parsers recover structured
//! values and tolerate the decoration the scraper leaves behind.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;
use crate::models::{MaterialQuantity, ParsedQuantity};
use crate::rational::parse_decimal;

static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*s\b").unwrap());
// MMF before MF so the longer unit wins.
static ENERGY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(MMF|kMF|MF)").unwrap());
static OUTPUT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*x\s*(.+?)\s*$").unwrap());

/// Extracts duration and energy from a quantity field like "5s + ⚡10MF/s".
///
/// The time and energy tokens may appear in either order and either may be
/// absent; a missing component is `None`, never zero. This parser cannot
/// fail: unrecognized text simply yields two `None`s.
pub fn parse_quantity(text: &str) -> ParsedQuantity {
    // The scraper leaves a lightning glyph glued to the energy token.
    let text = text.replace('⚡', " ");

    let duration_s = TIME_RE
        .captures(&text)
        .and_then(|cap| cap[1].parse::<f64>().ok());

    let energy_mf = ENERGY_RE.captures(&text).and_then(|cap| {
        let value: f64 = cap[1].parse().ok()?;
        let scale = match &cap[2] {
            "MMF" => 1e6,
            "kMF" => 1e3,
            _ => 1.0,
        };
        Some(value * scale)
    });

    ParsedQuantity { duration_s, energy_mf }
}

/// Parses a material field like "2xOre + 1.5xCoal" into name -> quantity.
///
/// Entries are separated by `+` or line breaks. An entry without an `x` is
/// not a material entry and is skipped, so an empty field is a valid recipe
/// with no inputs (raw extraction). An entry that has the `<number>x<name>`
/// shape but a non-numeric quantity token is a hard [`Error::ParseFailure`];
/// the raw string is never kept as a stand-in quantity.
pub fn parse_materials(text: &str) -> Result<MaterialQuantity, Error> {
    let mut materials = MaterialQuantity::new();

    for entry in text.split(['+', '\n']) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let Some((qty_token, name)) = entry.split_once('x') else {
            continue;
        };
        let qty_token = qty_token.trim();
        let name = name.trim();
        let Some(quantity) = parse_decimal(qty_token) else {
            return Err(Error::ParseFailure {
                entry: entry.to_string(),
                reason: format!("quantity token '{qty_token}' is not numeric"),
            });
        };
        if name.is_empty() {
            return Err(Error::ParseFailure {
                entry: entry.to_string(),
                reason: "missing material name after 'x'".to_string(),
            });
        }
        materials.insert(name.to_string(), quantity);
    }

    Ok(materials)
}

/// Parses an output field: "2 x Steel Plate" -> (2, "Steel Plate"),
/// "Steel Plate" -> (1, "Steel Plate"). The multiplier must be a positive
/// integer; anything else falls back to a count of 1 over the whole text.
pub fn parse_output(text: &str) -> (u32, String) {
    if let Some(cap) = OUTPUT_RE.captures(text) {
        if let Ok(count) = cap[1].parse::<u32>() {
            if count >= 1 {
                return (count, cap[2].to_string());
            }
        }
    }
    (1, text.trim().to_string())
}
