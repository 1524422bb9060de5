use serde::{Deserialize, Serialize};

use crate::{AppError, BloodType};

/// Inventory health label.
///
/// The server may call the healthy state `good`; both spellings map to `Ok`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    #[serde(alias = "good")]
    Ok,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critical => "critical",
            StockStatus::Low => "low",
            StockStatus::Ok => "ok",
        }
    }

    pub fn needs_attention(&self) -> bool {
        !matches!(self, StockStatus::Ok)
    }

    pub fn detail(&self) -> &'static str {
        match self {
            StockStatus::Critical => "Critical - Immediate action required",
            StockStatus::Low => "Low stock - Please restock soon",
            StockStatus::Ok => "Stock level healthy",
        }
    }
}

/// Unit thresholds used when the server leaves `stock_status` out, plus the
/// unit count that fills a stock meter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StockThresholds {
    #[serde(default = "default_critical_below")]
    pub critical_below: u32,
    #[serde(default = "default_low_below")]
    pub low_below: u32,
    #[serde(default = "default_full_units")]
    pub full_units: u32,
}

fn default_critical_below() -> u32 {
    5
}

fn default_low_below() -> u32 {
    10
}

fn default_full_units() -> u32 {
    20
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical_below: default_critical_below(),
            low_below: default_low_below(),
            full_units: default_full_units(),
        }
    }
}

impl StockThresholds {
    pub fn classify(&self, units: u32) -> StockStatus {
        if units < self.critical_below {
            StockStatus::Critical
        } else if units < self.low_below {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    /// Meter fill in percent, capped at 100.
    pub fn fill_percent(&self, units: u32) -> f64 {
        if self.full_units == 0 {
            return 100.0;
        }
        let pct = f64::from(units) / f64::from(self.full_units) * 100.0;
        pct.min(100.0)
    }
}

/// One blood type's stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryEntry {
    pub blood_type: BloodType,
    #[serde(default)]
    pub units_available: u32,
    #[serde(default)]
    pub stock_status: Option<StockStatus>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub is_low_stock: Option<bool>,
}

impl InventoryEntry {
    /// Server label when present, otherwise derived from the thresholds.
    pub fn status(&self, thresholds: &StockThresholds) -> StockStatus {
        self.stock_status
            .unwrap_or_else(|| thresholds.classify(self.units_available))
    }
}

/// `GET /inventory` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InventoryListResponse {
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
}

impl InventoryListResponse {
    /// Entries in blood-type display order.
    pub fn into_sorted(self) -> Vec<InventoryEntry> {
        let mut entries = self.inventory;
        entries.sort_by_key(|e| e.blood_type.display_rank());
        entries
    }
}

/// `PUT /inventory` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateInventoryRequest {
    pub blood_type: BloodType,
    pub units_available: u32,
}

impl UpdateInventoryRequest {
    /// Build from the manager's raw units input.
    pub fn from_input(blood_type: BloodType, raw_units: &str) -> Result<Self, AppError> {
        let raw = raw_units.trim();
        if raw.is_empty() {
            return Err(AppError::bad_request("Units value is required"));
        }
        match raw.parse::<i64>() {
            Ok(n) if n < 0 => Err(AppError::bad_request("Units cannot be negative")),
            Ok(n) => u32::try_from(n)
                .map(|units_available| Self {
                    blood_type,
                    units_available,
                })
                .map_err(|_| AppError::bad_request("Invalid units value")),
            Err(_) => Err(AppError::bad_request("Invalid units value")),
        }
    }
}

/// Headline numbers for the manager dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub tracked: usize,
    /// Low plus critical.
    pub needs_attention: usize,
    pub critical: usize,
}

impl InventorySummary {
    pub fn from_entries(entries: &[InventoryEntry], thresholds: &StockThresholds) -> Self {
        let statuses: Vec<StockStatus> = entries.iter().map(|e| e.status(thresholds)).collect();
        Self {
            tracked: entries.len(),
            needs_attention: statuses.iter().filter(|s| s.needs_attention()).count(),
            critical: statuses
                .iter()
                .filter(|s| **s == StockStatus::Critical)
                .count(),
        }
    }
}
