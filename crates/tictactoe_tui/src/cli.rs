//! Command-line interface for the tic-tac-toe terminal client.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture; cells can still be chosen with the keyboard
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.log_file, None);
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "other.toml",
            "--log-file",
            "/tmp/ttt.log",
            "--no-mouse",
        ]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/ttt.log")));
        assert!(cli.no_mouse);
    }
}
