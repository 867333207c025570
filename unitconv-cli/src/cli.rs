//! Command-line arguments

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "unitconv",
    version,
    about = "Convert values between units of length, weight, temperature and volume",
    long_about = "Convert values between units of length, weight, temperature and volume.\n\
                  Unit names are matched exactly, e.g. 'kilometers', 'fluid_ounces', 'Celsius'."
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a value between two units of a family
    Convert {
        /// Unit family: length, weight, temperature or volume
        family: String,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a length (defaults: 1 millimeters -> meters)
    Length(FamilyArgs),

    /// Convert a weight (defaults: 1 milligrams -> kilograms)
    Weight(FamilyArgs),

    /// Convert a temperature (defaults: 0 Celsius -> Fahrenheit)
    Temperature(FamilyArgs),

    /// Convert a volume (defaults: 1 milliliters -> liters)
    Volume(FamilyArgs),

    /// List the units of one or all families
    Units {
        /// Restrict the listing to one family
        family: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show quick tips
    Tips,

    /// Read '<family> <value> <from> <to>' lines from stdin
    Repl(OutputArgs),
}

/// Optional inputs for a family shortcut; missing ones take the family default
#[derive(Debug, Args)]
pub struct FamilyArgs {
    /// Value to convert
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,
    /// Source unit
    pub from: Option<String>,
    /// Target unit
    pub to: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Decimals to display, 0 to 17 (overrides the environment)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=17))]
    pub decimals: Option<u8>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
