//! Static tables printed for the operator: the station board shown before
//! each voucher and the fare table behind `--list-fares`.

use std::io::{self, Write};

use crate::schema::{FareCategory, Zone};

const BOARD_WIDTH: usize = 50;

pub fn write_station_board(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(BOARD_WIDTH))?;
    writeln!(out, "{:<15} | STATIONS", "ZONE")?;
    writeln!(out, "{}", "-".repeat(BOARD_WIDTH))?;
    for zone in Zone::ALL {
        writeln!(out, "{:<15} | {}", zone, zone.sorted_stations().join(", "))?;
    }
    writeln!(out, "{}", "=".repeat(BOARD_WIDTH))?;
    writeln!(out)
}

pub fn write_fare_table(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<15} | PER ZONE", "CATEGORY")?;
    writeln!(out, "{}", "-".repeat(BOARD_WIDTH))?;
    for category in FareCategory::ALL {
        writeln!(out, "{:<15} | {}c", category, category.rate())?;
    }
    Ok(())
}
