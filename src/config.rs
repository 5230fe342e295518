//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::CounterConfig;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "data-counter")]
#[command(about = "Count down to, or up from, a date and/or time")]
#[command(version)]
pub struct Config {
    /// Counting direction: "down" or "up"
    #[arg(long = "type", default_value = "down")]
    pub direction: String,

    /// Target date, YYYY-MM-DD
    #[arg(short, long)]
    pub date: Option<String>,

    /// Target time, HH:mm (24-hour clock)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Message reported once a countdown completes
    #[arg(short, long)]
    pub completion: Option<String>,

    /// Refresh interval in seconds
    #[arg(short, long, default_value = "1")]
    pub refresh: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Initial counter configuration from the CLI values
    pub fn counter_config(&self) -> CounterConfig {
        CounterConfig {
            direction: self.direction.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            completion: self.completion.clone(),
            refresh: self.refresh.clone(),
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let config = Config::try_parse_from(["data-counter"]).unwrap();
        let counter = config.counter_config();
        assert_eq!(counter, CounterConfig::default());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn flags_map_to_counter_config() {
        let config = Config::try_parse_from([
            "data-counter", "--type", "up", "--time", "09:00", "--refresh", "5", "-v",
        ])
        .unwrap();
        let counter = config.counter_config();
        assert_eq!(counter.direction, "up");
        assert_eq!(counter.time(), Some("09:00"));
        assert_eq!(counter.refresh, "5");
        assert_eq!(config.log_level(), "debug");
    }
}
