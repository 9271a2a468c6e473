use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use cta::board::{write_fare_table, write_station_board};
use cta::cli::Args;
use cta::logger::init_logger;
use cta::run;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger();

    let mut stdout = std::io::stdout().lock();
    let listed = if args.list_station {
        Some(write_station_board(&mut stdout))
    } else if args.list_fares {
        Some(write_fare_table(&mut stdout))
    } else {
        None
    };
    if let Some(result) = listed {
        return match result.and_then(|()| stdout.flush()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!("failed to print table: {err}");
                ExitCode::FAILURE
            }
        };
    }
    drop(stdout);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
