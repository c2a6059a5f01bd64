//! Log setup for the `bertqa` binary.

use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Log level with no `-v` flags.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Levels in increasing verbosity.
const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Logging arg group; the flags are accepted before or after the subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence all log messages.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Raise the log level one step per use (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Prefix log lines with millisecond timestamps.
    #[arg(long, global = true)]
    ts: bool,
}

impl LogArgs {
    /// The effective level filter.
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        let idx = (DEFAULT_LEVEL as usize).saturating_add(self.verbose as usize);
        LEVELS[idx.min(LEVELS.len() - 1)]
    }

    /// Install a stderr logger for this binary and the `bertqa` library.
    ///
    /// Messages from other crates are not shown.
    pub fn init(&self) -> Result<(), log::SetLoggerError> {
        let verbosity = match self.level_filter() {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .module("bertqa")
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Millisecond
            } else {
                Timestamp::Off
            })
            .init()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct LogCli {
        #[command(flatten)]
        log: LogArgs,
    }

    fn level_for(args: &[&str]) -> LevelFilter {
        let argv = std::iter::once("bertqa").chain(args.iter().copied());
        LogCli::try_parse_from(argv).unwrap().log.level_filter()
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_for(&[]), LevelFilter::Warn);
        assert_eq!(level_for(&["-v"]), LevelFilter::Info);
        assert_eq!(level_for(&["-vv"]), LevelFilter::Debug);
        assert_eq!(level_for(&["-v", "-v", "-v"]), LevelFilter::Trace);
        assert_eq!(level_for(&["-vvvvvvv"]), LevelFilter::Trace);
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(level_for(&["-q"]), LevelFilter::Off);
        assert_eq!(level_for(&["-q", "-vv"]), LevelFilter::Off);
    }
}
