//! Loading of the scraped machines dataset.
//!
//! The crawler hands over a JSON array of machine records with their raw
//! recipe text fields (see [`crate::models::Machine`]). Loading is the only
//! I/O in the crate; everything downstream works on the in-memory dataset.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::models::Machine;

/// Loads the crawler's machines JSON. Records with a missing `recipe` key
/// or empty text fields deserialize to empty defaults rather than failing.
pub fn load_machines(path: &Path) -> Result<Vec<Machine>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::DatasetFormat {
        path: path.to_path_buf(),
        source,
    })
}
