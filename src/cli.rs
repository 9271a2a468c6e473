use clap::Parser;

/// Fare voucher console for the Centrala Transport Authority.
/// Run the program without flags to issue vouchers interactively.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// List zones and their stations
    #[arg(long)]
    pub list_station: bool,

    /// List fare rates per zone for each passenger category
    #[arg(long)]
    pub list_fares: bool,

    /// Print issued vouchers as JSON instead of the receipt block
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_interactive() {
        let args = Args::try_parse_from(["cta"]).unwrap();
        assert!(!args.list_station && !args.list_fares && !args.json);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(["cta", "--json"]).unwrap();
        assert!(args.json);
        let args = Args::try_parse_from(["cta", "--list-station"]).unwrap();
        assert!(args.list_station);
        assert!(Args::try_parse_from(["cta", "--from", "1"]).is_err());
    }
}
