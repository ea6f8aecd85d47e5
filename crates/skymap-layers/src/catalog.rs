//! Custom object catalog: a JSON array of user-defined sky objects.
//!
//! ```json
//! [
//!   {"name": "Nova X", "ra": 10.5, "dec": -20.0, "color": "0xff0000",
//!    "size": 0.02, "icon": "star_on", "catalogName": "NGC 1"}
//! ]
//! ```
//!
//! Loading is all-or-nothing: the first bad record fails the whole catalog.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LayerError;

/// One validated catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomObject {
    pub name: String,
    /// Right ascension in degrees.
    pub ra: f32,
    /// Declination in degrees.
    pub dec: f32,
    /// Packed RGB(A) label tint.
    pub color: u32,
    /// Relative icon scale, always positive.
    pub size: f32,
    /// Symbolic icon name.
    pub icon: String,
    pub catalog_name: Option<String>,
    pub baptism_date: Option<String>,
    pub comments: Option<String>,
}

/// On-disk shape of a record. Only types are checked here; values are
/// validated by [`CatalogRecord::validate`].
#[derive(Debug, Deserialize, Serialize)]
struct CatalogRecord<'a> {
    name: Cow<'a, str>,
    ra: f64,
    dec: f64,
    color: String,
    size: f64,
    icon: Cow<'a, str>,
    #[serde(rename = "catalogName", default, skip_serializing_if = "Option::is_none")]
    catalog_name: Option<Cow<'a, str>>,
    #[serde(rename = "baptismDate", default, skip_serializing_if = "Option::is_none")]
    baptism_date: Option<Cow<'a, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments: Option<Cow<'a, str>>,
}

impl CatalogRecord<'_> {
    fn validate(self, index: usize) -> Result<CustomObject, LayerError> {
        if self.name.is_empty() {
            return Err(LayerError::malformed(format!("record {index}: empty name")));
        }
        let name = self.name.into_owned();

        let color = parse_color(&self.color).ok_or_else(|| {
            LayerError::malformed(format!(
                "record {index} ({name}): color {:?} is not hexadecimal",
                self.color
            ))
        })?;

        let ra = self.ra as f32;
        let dec = self.dec as f32;
        if !ra.is_finite() || !dec.is_finite() {
            return Err(LayerError::malformed(format!(
                "record {index} ({name}): position out of range"
            )));
        }

        let size = self.size as f32;
        if !(size.is_finite() && size > 0.0) {
            return Err(LayerError::malformed(format!(
                "record {index} ({name}): size must be positive, got {}",
                self.size
            )));
        }

        Ok(CustomObject {
            name,
            ra,
            dec,
            color,
            size,
            icon: self.icon.into_owned(),
            catalog_name: non_empty(self.catalog_name),
            baptism_date: non_empty(self.baptism_date),
            comments: non_empty(self.comments),
        })
    }
}

impl<'a> From<&'a CustomObject> for CatalogRecord<'a> {
    fn from(object: &'a CustomObject) -> Self {
        Self {
            name: object.name.as_str().into(),
            ra: f64::from(object.ra),
            dec: f64::from(object.dec),
            color: format!("0x{:06x}", object.color),
            size: f64::from(object.size),
            icon: object.icon.as_str().into(),
            catalog_name: object.catalog_name.as_deref().map(Into::into),
            baptism_date: object.baptism_date.as_deref().map(Into::into),
            comments: object.comments.as_deref().map(Into::into),
        }
    }
}

fn non_empty(value: Option<Cow<'_, str>>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(|s| s.into_owned())
}

/// Parse a catalog color: hex digits with an optional literal `0x` prefix.
///
/// Values wider than 32 bits keep their low 32 bits. Returns `None` for
/// empty strings, non-hex characters, or values that overflow 64 bits.
pub fn parse_color(color: &str) -> Option<u32> {
    let digits = color.strip_prefix("0x").unwrap_or(color);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok().map(|value| value as u32)
}

/// Parse a catalog held in memory.
pub fn parse_catalog_str(json: &str) -> Result<Vec<CustomObject>, LayerError> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let records: Vec<CatalogRecord<'_>> =
        serde_json::from_str(json).map_err(|e| LayerError::malformed(e.to_string()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// Read a catalog stream to the end and parse it.
pub fn parse_catalog(reader: impl Read) -> Result<Vec<CustomObject>, LayerError> {
    read_catalog(reader, "catalog stream")
}

/// Open and parse the catalog file at `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<CustomObject>, LayerError> {
    let file = File::open(path).map_err(|source| LayerError::CatalogUnavailable {
        origin: path.display().to_string(),
        source,
    })?;
    read_catalog(BufReader::new(file), &path.display().to_string())
}

fn read_catalog(mut reader: impl Read, origin: &str) -> Result<Vec<CustomObject>, LayerError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LayerError::CatalogUnavailable {
            origin: origin.to_string(),
            source,
        })?;

    let json = std::str::from_utf8(&bytes)
        .map_err(|e| LayerError::malformed(format!("{origin} is not valid UTF-8: {e}")))?;

    let objects = parse_catalog_str(json)?;
    log::info!("Loaded {} custom objects from {origin}", objects.len());
    Ok(objects)
}

/// Write objects back out in catalog format. Absent metadata is omitted
/// and colors are written as `0x`-prefixed hex.
pub fn write_catalog(writer: impl Write, objects: &[CustomObject]) -> serde_json::Result<()> {
    let records: Vec<CatalogRecord<'_>> = objects.iter().map(CatalogRecord::from).collect();
    serde_json::to_writer_pretty(writer, &records)
}
