pub mod board;
pub mod cli;
pub mod error;
pub mod logger;
pub mod prompt;
pub mod schema;
pub mod voucher;

use std::io::{BufRead, Write};

use chrono::Local;
use tracing::{debug, info};

use crate::board::write_station_board;
use crate::cli::Args;
use crate::error::TicketError;
use crate::prompt::Console;
use crate::schema::FareCategory;
use crate::voucher::{PassengerCounts, Voucher};

/// How issued vouchers are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoucherFormat {
    #[default]
    Receipt,
    Json,
}

impl From<&Args> for VoucherFormat {
    fn from(args: &Args) -> Self {
        if args.json {
            VoucherFormat::Json
        } else {
            VoucherFormat::Receipt
        }
    }
}

/// Walk one customer through a trip and print the voucher.
///
/// Returns `Ok(None)` when every passenger count is zero; the cancellation
/// notice has already been printed in that case.
pub fn issue_voucher<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    format: VoucherFormat,
) -> Result<Option<Voucher>, TicketError> {
    write_station_board(console.output())?;

    let start = console.select_zone("Select START zone:")?;
    let destination = console.select_zone("Select DESTINATION zone:")?;

    let mut counts = PassengerCounts::new();
    for category in FareCategory::ALL {
        counts.set(category, console.passenger_count(category)?);
    }

    let Some(voucher) = Voucher::compute(start, destination, &counts, Local::now().naive_local())
    else {
        info!(%start, %destination, "voucher cancelled, no passengers");
        console.say("No passengers selected. Voucher cancelled.")?;
        return Ok(None);
    };

    for line in &voucher.lines {
        debug!(
            category = %line.category,
            count = line.count,
            fare = line.fare,
            subtotal = line.subtotal,
            "fare computed"
        );
    }
    info!(
        %start,
        %destination,
        zones = voucher.zones_travelled,
        travellers = voucher.total_travellers,
        total = voucher.grand_total,
        "voucher issued"
    );

    match format {
        VoucherFormat::Receipt => console.say(&voucher)?,
        VoucherFormat::Json => console.say(serde_json::to_string_pretty(&voucher)?)?,
    }
    Ok(Some(voucher))
}

/// Issue vouchers until the operator declines another one.
///
/// Closed input ends the session the same way a "no" does.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    format: VoucherFormat,
) -> Result<(), TicketError> {
    let mut issued = 0usize;
    loop {
        let again = match issue_voucher(console, format) {
            Ok(voucher) => {
                issued += usize::from(voucher.is_some());
                console.confirm("Issue another voucher? (Y/N): ")
            }
            Err(err) => Err(err),
        };
        match again {
            Ok(true) => continue,
            Ok(false) | Err(TicketError::InputClosed) => break,
            Err(err) => return Err(err),
        }
    }
    info!(issued, "session ended");
    console.say("Thank you for using CTA. Goodbye!")
}

pub fn run(args: &Args) -> Result<(), TicketError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_session(&mut console, VoucherFormat::from(args))
}
