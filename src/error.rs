//! Error taxonomy for the calculator core.
//!
//! Absence (unknown machine, item with no recipes) is never an error here;
//! it is expressed as `Option`/empty results by the query layer. Only
//! malformed data and structural misuse surface as `Error`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A material entry matched the `<number>x<name>` shape but its
    /// quantity token is not numeric.
    #[error("malformed material entry '{entry}': {reason}")]
    ParseFailure { entry: String, reason: String },

    /// Demand vector length does not match the matrix row count.
    #[error("demand vector has {got} entries but the matrix has {expected} rows")]
    ShapeError { expected: usize, got: usize },

    #[error("failed to read dataset {}", path.display())]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {}", path.display())]
    DatasetFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
