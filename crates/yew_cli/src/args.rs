//! the args for running the yew front end

use clap::{value_parser, ArgAction};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Parses yew source code and prints the syntax tree")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Parse the given source file and print its diagnostics
    #[clap(short = 'f', long = "file", value_name = "path", value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Enter interactive mode
    #[clap(short = 'i', long = "interactive")]
    pub interactive: bool,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used,
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            -2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2 => LevelFilter::TRACE,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_args_parsing() {
        let test = "yew --file main.yew";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert_eq!(args.file.as_deref(), Some(Path::new("main.yew")));
        assert!(!args.interactive);
    }

    #[test]
    fn test_interactive_flag() {
        let test = "yew -i";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert!(args.interactive);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_verbosity_mapping() {
        let args = Args::try_parse_from("yew -i".split(" ")).expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::INFO);
        let args = Args::try_parse_from("yew -i -vv".split(" ")).expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::TRACE);
        let args = Args::try_parse_from("yew -i -q".split(" ")).expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from("yew -i -v -q".split(" ")).is_err());
    }
}
