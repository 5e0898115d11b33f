use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopkeep", version)]
#[command(about = "Inventory ledger and point-of-sale register in the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding inventory.csv, sales.csv and shopkeep.json
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_current_directory() {
        let cli = Cli::try_parse_from(["shopkeep"]).unwrap();
        assert!(cli.data_dir.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_data_dir_and_verbose() {
        let cli = Cli::try_parse_from(["shopkeep", "-v", "--data-dir", "/tmp/shop"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shop")));
        assert!(cli.verbose);
    }
}
