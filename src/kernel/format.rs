//! Pure formatting helpers for message templates.

use serde::{Deserialize, Serialize};

/// Groups digits by three with commas: 25420 -> "25,420".
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", format_thousands(amount))
}

/// Inclusive price range in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBand {
    pub low: u64,
    pub high: u64,
}

impl CostBand {
    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    pub fn render(&self) -> String {
        format!("{} - {}", format_rupees(self.low), format_rupees(self.high))
    }
}
