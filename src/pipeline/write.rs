//! Per-product YAML output.

use crate::model::osv::OsvRecord;
use std::collections::HashSet;
use std::path::PathBuf;

/// Outcome of a single record write. None of these abort the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The product's output directory could not be created earlier in the
    /// run; every record for that product is dropped.
    ProductSkipped,
    WriteFailed,
}

/// Writes assembled records under `<root>/<product>/<ID>.yaml`.
///
/// Product directories are created on demand. A directory that fails to
/// create poisons its product for the rest of the run; a single failed
/// write only loses that record. Records sharing (ID, product) overwrite:
/// last write wins.
#[derive(Debug)]
pub struct OutputWriter {
    root: PathBuf,
    failed_products: HashSet<String>,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            failed_products: HashSet::new(),
        }
    }

    /// Serialize and persist one record.
    pub fn write(&mut self, product: &str, record: &OsvRecord) -> WriteOutcome {
        if self.failed_products.contains(product) {
            return WriteOutcome::ProductSkipped;
        }

        let product_dir = self.root.join(product);
        if let Err(e) = std::fs::create_dir_all(&product_dir) {
            tracing::warn!("Folder for product {product} not created: {e}");
            self.failed_products.insert(product.to_string());
            return WriteOutcome::ProductSkipped;
        }

        let path = product_dir.join(format!("{}.yaml", record.id));
        let yaml = match serde_yaml::to_string(record) {
            Ok(yaml) => yaml,
            Err(e) => {
                tracing::warn!("{}: cannot serialize record for {product}: {e}", record.id);
                return WriteOutcome::WriteFailed;
            }
        };
        match std::fs::write(&path, yaml) {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                tracing::warn!("{}: cannot write {}: {e}", record.id, path.display());
                WriteOutcome::WriteFailed
            }
        }
    }
}
