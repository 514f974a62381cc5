//! Command-line interface for tictac.

use clap::Parser;

/// Tic-tac-toe played to completion between two minimax opponents.
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Watch two minimax opponents play tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Suppress intermediate board printing; only the opening and final
    /// boards are shown. Any value enables quiet mode, `-s` included.
    #[arg(value_name = "QUIET", allow_hyphen_values = true)]
    pub quiet: Option<String>,
}

impl Cli {
    /// True when intermediate boards should be printed.
    pub fn verbose(&self) -> bool {
        self.quiet.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_is_verbose() {
        let cli = Cli::parse_from(["tictac"]);
        assert!(cli.verbose());
    }

    #[test]
    fn test_any_argument_enables_quiet_mode() {
        let cli = Cli::parse_from(["tictac", "-s"]);
        assert!(!cli.verbose());

        let cli = Cli::parse_from(["tictac", "anything"]);
        assert!(!cli.verbose());
    }
}
