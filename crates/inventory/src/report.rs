use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report over one warehouse: one line per item, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    location: String,
    generated_at: DateTime<Utc>,
    lines: Vec<String>,
}

impl InventoryReport {
    pub(crate) fn new(location: String, generated_at: DateTime<Utc>, lines: Vec<String>) -> Self {
        Self {
            location,
            generated_at,
            lines,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// The instant item statuses were evaluated against.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Console rendering: blank line, header, then every item line.
impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Inventory Report: {} ---", self.location)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
