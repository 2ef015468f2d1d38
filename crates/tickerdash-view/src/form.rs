//! Growth-rate input form.
//!
//! Drives the eleven-field projection form: ten yearly growth entries plus
//! the terminal value. Input parsing is forgiving — anything that is not a
//! finite number becomes an unset entry, never an error — and updates are
//! copy-on-write over the underlying [`GrowthRateVector`].

use tickerdash_core::{GrowthRateVector, GROWTH_SLOTS, TERMINAL_SLOT};

/// Direction of a keyboard focus move between input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Previous,
    Next,
}

/// Parse one raw input field value.
///
/// A comma decimal separator is normalized to a dot first. Empty input,
/// unparseable input, and non-finite values all map to `None` — the raw
/// string is never retained.
pub fn parse_rate(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Focus target after a move from `current`; `None` when the move would
/// leave the form.
pub fn focus_after(current: usize, direction: FocusDirection) -> Option<usize> {
    match direction {
        FocusDirection::Previous => current.checked_sub(1),
        FocusDirection::Next => {
            let next = current + 1;
            (next < GROWTH_SLOTS).then_some(next)
        }
    }
}

/// Label shown next to one input field.
pub fn slot_label(index: usize) -> String {
    if index == TERMINAL_SLOT {
        String::from("Terminal Value")
    } else {
        format!("Year {}", index + 1)
    }
}

/// Stateful form: current vector plus the focused field.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRateForm {
    rates: GrowthRateVector,
    focus: usize,
}

impl GrowthRateForm {
    pub fn new() -> Self {
        Self {
            rates: GrowthRateVector::new(),
            focus: 0,
        }
    }

    pub fn rates(&self) -> &GrowthRateVector {
        &self.rates
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Apply raw input to one field. Only the targeted entry changes; an
    /// out-of-range index is a no-op.
    pub fn set_value(&mut self, index: usize, raw: &str) {
        if index >= GROWTH_SLOTS {
            return;
        }
        self.rates = self.rates.with_entry(index, parse_rate(raw));
    }

    /// Move focus one field up or down; moves past either edge are no-ops.
    pub fn navigate(&mut self, direction: FocusDirection) -> usize {
        if let Some(next) = focus_after(self.focus, direction) {
            self.focus = next;
        }
        self.focus
    }
}

impl Default for GrowthRateForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_usual_suspects() {
        assert_eq!(parse_rate(""), None);
        assert_eq!(parse_rate("1,5"), Some(1.5));
        assert_eq!(parse_rate("abc"), None);
        assert_eq!(parse_rate("-3.2"), Some(-3.2));
        assert_eq!(parse_rate("  0.07 "), Some(0.07));
        assert_eq!(parse_rate("NaN"), None);
        assert_eq!(parse_rate("inf"), None);
    }

    #[test]
    fn set_value_touches_only_the_target_entry() {
        let mut form = GrowthRateForm::new();
        form.set_value(0, "0.12");
        let before = form.rates().clone();

        form.set_value(4, "0,05");

        assert_eq!(form.rates().get(0), Some(0.12));
        assert_eq!(form.rates().get(4), Some(0.05));
        // The previously observed vector is unchanged.
        assert_eq!(before.get(4), None);

        form.set_value(4, "garbage");
        assert_eq!(form.rates().get(4), None);
    }

    #[test]
    fn out_of_range_set_is_a_noop() {
        let mut form = GrowthRateForm::new();
        form.set_value(GROWTH_SLOTS, "1.0");
        assert!(form.rates().is_unset());
    }

    #[test]
    fn focus_stops_at_the_edges() {
        let mut form = GrowthRateForm::new();
        assert_eq!(form.navigate(FocusDirection::Previous), 0);
        assert_eq!(form.navigate(FocusDirection::Next), 1);

        for _ in 0..GROWTH_SLOTS {
            form.navigate(FocusDirection::Next);
        }
        assert_eq!(form.focus(), TERMINAL_SLOT);
    }

    #[test]
    fn terminal_slot_has_its_own_label() {
        assert_eq!(slot_label(0), "Year 1");
        assert_eq!(slot_label(9), "Year 10");
        assert_eq!(slot_label(TERMINAL_SLOT), "Terminal Value");
    }
}
