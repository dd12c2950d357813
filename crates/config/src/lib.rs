//! Ethconv configuration
use clap::{Parser, Subcommand};
use converter::{ConverterOptions, DEFAULT_DECIMAL_PLACES, Unit};

/// Output and logging configuration options
#[derive(Debug, Clone, Parser)]
pub struct OutputOpts {
    /// Maximum number of fractional digits in results (extra digits are truncated)
    #[clap(
        long = "decimals",
        env = "ETHCONV_DECIMAL_PLACES",
        default_value_t = DEFAULT_DECIMAL_PLACES,
        global = true
    )]
    pub decimal_places: u32,
    /// Print results as JSON
    #[clap(long, env = "ETHCONV_JSON", global = true)]
    pub json: bool,
    /// Log level used when `RUST_LOG` is not set
    #[clap(long, env = "ETHCONV_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,
}

/// Ethconv commands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a value from one unit to another
    Convert {
        /// Amount to convert, e.g. `1.5`
        #[clap(allow_hyphen_values = true)]
        value: String,
        /// Unit the amount is expressed in
        #[clap(long, short)]
        from: Unit,
        /// Unit to convert to
        #[clap(long, short)]
        to: Unit,
    },
    /// Show an amount in every unit
    Table {
        /// Amount to convert, e.g. `1.5`
        #[clap(allow_hyphen_values = true)]
        value: String,
        /// Unit the amount is expressed in
        #[clap(long, short)]
        from: Unit,
    },
    /// List the supported units and their size in wei
    Units,
}

/// CLI options for ethconv
#[derive(Debug, Clone, Parser)]
#[clap(name = "ethconv", about = "Convert amounts between Ethereum denominations")]
pub struct Opts {
    /// Output and logging configuration
    #[clap(flatten)]
    pub output: OutputOpts,

    /// Command to run
    #[clap(subcommand)]
    pub command: Command,
}

impl Opts {
    /// Conversion options derived from the command line.
    pub const fn converter_options(&self) -> ConverterOptions {
        ConverterOptions::with_decimal_places(self.output.decimal_places)
    }
}
