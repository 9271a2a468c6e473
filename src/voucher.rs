//! Fare computation and the printed voucher.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::schema::{FareCategory, Zone, zones_travelled};

const VOUCHER_WIDTH: usize = 40;

/// Passengers per fare category for one trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassengerCounts([u32; 4]);

impl PassengerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: FareCategory, count: u32) -> Self {
        self.set(category, count);
        self
    }

    pub fn set(&mut self, category: FareCategory, count: u32) {
        self.0[category as usize] = count;
    }

    pub fn get(&self, category: FareCategory) -> u32 {
        self.0[category as usize]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| u64::from(n)).sum()
    }

    /// Categories in collection order paired with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (FareCategory, u32)> + '_ {
        FareCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoucherLine {
    pub category: FareCategory,
    pub count: u32,
    /// Per-passenger fare in cents.
    pub fare: u64,
    pub subtotal: u64,
}

/// One issued fare transaction. Built, printed and dropped; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voucher {
    pub issued_at: NaiveDateTime,
    pub start: Zone,
    pub destination: Zone,
    pub zones_travelled: u32,
    pub lines: Vec<VoucherLine>,
    pub total_travellers: u64,
    /// Sum of all subtotals, in cents.
    pub grand_total: u64,
}

impl Voucher {
    /// Price a trip. Returns `None` when nobody is travelling, in which case
    /// no voucher may be issued.
    pub fn compute(
        start: Zone,
        destination: Zone,
        counts: &PassengerCounts,
        issued_at: NaiveDateTime,
    ) -> Option<Self> {
        let total_travellers = counts.total();
        if total_travellers == 0 {
            return None;
        }

        let zones = zones_travelled(start, destination);
        let lines: Vec<VoucherLine> = counts
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(category, count)| {
                let fare = category.rate() * u64::from(zones);
                VoucherLine {
                    category,
                    count,
                    fare,
                    subtotal: fare * u64::from(count),
                }
            })
            .collect();
        let grand_total = lines.iter().map(|l| l.subtotal).sum();

        Some(Self {
            issued_at,
            start,
            destination,
            zones_travelled: zones,
            lines,
            total_travellers,
            grand_total,
        })
    }
}

impl fmt::Display for Voucher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = "*".repeat(VOUCHER_WIDTH);
        let rule = "-".repeat(VOUCHER_WIDTH);

        writeln!(f)?;
        writeln!(f, "{stars}")?;
        writeln!(f, "        CENTRALA TRANSPORT AUTHORITY")?;
        writeln!(f, "Date/Time: {}", self.issued_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Route: {} to {}", self.start, self.destination)?;
        writeln!(f, "Zones Travelled: {}", self.zones_travelled)?;
        writeln!(f, "{rule}")?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<8} x{:<2} | Fare: {}c | Subtotal: {}c",
                line.category, line.count, line.fare, line.subtotal
            )?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "TOTAL TRAVELLERS: {}", self.total_travellers)?;
        writeln!(f, "GRAND TOTAL: {} CENTS", self.grand_total)?;
        writeln!(f, "{stars}")
    }
}
