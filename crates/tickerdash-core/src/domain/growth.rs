use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Number of entries in a growth-rate vector: ten yearly projections plus
/// the terminal value.
pub const GROWTH_SLOTS: usize = 11;

/// Index of the terminal-value entry.
pub const TERMINAL_SLOT: usize = GROWTH_SLOTS - 1;

/// Fixed-length vector of nullable yearly growth projections.
///
/// The length is an invariant of one valuation session: entries default to
/// unset and are replaced, never added or removed. Updates go through
/// [`with_entry`](Self::with_entry), which leaves the source vector
/// untouched so observers holding a prior value never see it change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<f64>>", into = "Vec<Option<f64>>")]
pub struct GrowthRateVector(Vec<Option<f64>>);

impl GrowthRateVector {
    pub fn new() -> Self {
        Self(vec![None; GROWTH_SLOTS])
    }

    /// Entry at `index`; out-of-range reads yield `None`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    pub fn terminal(&self) -> Option<f64> {
        self.get(TERMINAL_SLOT)
    }

    /// Copy-on-write update: returns a new vector with only `index`
    /// changed. An out-of-range index returns an unchanged copy.
    pub fn with_entry(&self, index: usize, value: Option<f64>) -> Self {
        let mut entries = self.0.clone();
        if let Some(slot) = entries.get_mut(index) {
            *slot = value;
        }
        Self(entries)
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

impl Default for GrowthRateVector {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Option<f64>>> for GrowthRateVector {
    type Error = ValidationError;

    fn try_from(entries: Vec<Option<f64>>) -> Result<Self, Self::Error> {
        if entries.len() != GROWTH_SLOTS {
            return Err(ValidationError::GrowthVectorLength {
                len: entries.len(),
                expected: GROWTH_SLOTS,
            });
        }
        Ok(Self(entries))
    }
}

impl From<GrowthRateVector> for Vec<Option<f64>> {
    fn from(vector: GrowthRateVector) -> Self {
        vector.0
    }
}
