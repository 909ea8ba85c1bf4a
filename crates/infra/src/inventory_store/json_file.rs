use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map as JsonMap, Value as JsonValue};

use stockkeep_core::ItemName;
use stockkeep_inventory::StockLevels;

use super::r#trait::{InventoryRepository, PersistenceError};

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Inventory persisted as a flat JSON object: `{"apple": 7, "banana": 2}`.
///
/// Files are opened per call and closed before returning. Writes truncate in
/// place; there is no temp-file rename, so a failed write can leave a partial
/// file behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_failure(&self, reason: impl Into<String>) -> PersistenceError {
        let err = PersistenceError::parse(self.location(), reason);
        tracing::error!("{err}");
        err
    }

    fn io_failure(&self, action: &str, source: std::io::Error) -> PersistenceError {
        tracing::error!("Failed to {action} {}: {source}", self.location());
        PersistenceError::io(self.location(), source)
    }
}

impl InventoryRepository for JsonFileRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<StockLevels, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} not found. Starting with empty inventory.", self.location());
                return Ok(StockLevels::new());
            }
            Err(e) => return Err(self.io_failure("read", e)),
        };

        let document: JsonValue = match serde_json::from_reader(BufReader::new(file)) {
            Ok(v) => v,
            Err(e) if e.is_io() => return Err(self.io_failure("read", e.into())),
            Err(e) => return Err(self.parse_failure(e.to_string())),
        };

        levels_from_document(document).map_err(|reason| self.parse_failure(reason))
    }

    fn write(&self, levels: &StockLevels) -> Result<(), PersistenceError> {
        let file = File::create(&self.path).map_err(|e| self.io_failure("save data to", e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, levels)
            .map_err(|e| self.io_failure("save data to", e.into()))?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| self.io_failure("save data to", e))?;
        Ok(())
    }
}

/// Convert a parsed document into stock levels, all or nothing.
fn levels_from_document(document: JsonValue) -> Result<StockLevels, String> {
    let JsonValue::Object(entries) = document else {
        return Err(format!(
            "inventory file must contain a JSON object (found {})",
            kind_of(&document)
        ));
    };
    levels_from_entries(entries)
}

fn levels_from_entries(entries: JsonMap<String, JsonValue>) -> Result<StockLevels, String> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let quantity =
            coerce_quantity(&value).map_err(|why| format!("value for '{key}' {why}"))?;
        let item = ItemName::parse(key).map_err(|e| e.to_string())?;
        pairs.push((item, quantity));
    }
    StockLevels::from_pairs(pairs).map_err(|e| e.to_string())
}

/// Integer coercion for stored quantities.
///
/// Integers pass through, finite floats truncate toward zero, and strings
/// holding a decimal integer are parsed. Everything else is rejected,
/// including booleans: `true` is not read as a quantity of 1.
fn coerce_quantity(value: &JsonValue) -> Result<i64, String> {
    match value {
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(format!("is out of range ({n})"));
            }
            match n.as_f64().map(f64::trunc) {
                Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(format!("is out of range ({n})")),
            }
        }
        JsonValue::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("is not an integer ({s:?})")),
        other => Err(format!("is not an integer (found {})", kind_of(other))),
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
