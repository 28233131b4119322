// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line args for `fk`. Each subcommand drives one engine headlessly.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use formkit::CurrencyDisplay;

#[derive(Debug, Parser)]
#[command(bin_name = "fk")]
#[command(about = "Masked input, number formatting and color contrast from the terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  fk [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Print the engines' debug log to stderr"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        help = "Write the engines' debug log to this file instead of stderr"
    )]
    pub log_file: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "Type INPUT into a masked field, char by char\n💡 Eg: `fk mask \"(999) 999-9999\" 5551234567`"
    )]
    Mask {
        #[arg(help = "`9` is a digit, `a` a letter, `*` either, anything else a literal")]
        pattern: String,

        #[arg(allow_hyphen_values = true, help = "Keystrokes, rejected chars are dropped")]
        input: String,

        #[arg(long, default_value = "_", help = "Char shown for an unfilled slot")]
        slot_char: String,

        #[arg(long, help = "Clear an incomplete value on blur")]
        auto_clear: bool,

        #[arg(long, help = "Blur the field after typing")]
        blur: bool,
    },

    #[clap(
        about = "Format a number for a locale, optionally step it\n💡 Eg: `fk number 1500 --currency USD`"
    )]
    Number(NumberArgs),

    #[clap(about = "WCAG contrast ratio of two hex colors\n💡 Eg: `fk contrast \"#333\" \"#fff\"`")]
    Contrast {
        #[arg(help = "Text color, #RGB or #RRGGBB")]
        foreground: String,

        #[arg(help = "Background color, #RGB or #RRGGBB")]
        background: String,
    },

    #[clap(about = "Light to dark shade ramp of a base color\n💡 Eg: `fk ramp \"#3366cc\"`")]
    Ramp {
        #[arg(help = "Base color, #RGB or #RRGGBB")]
        base: String,

        #[arg(long, short, default_value_t = 10, help = "Number of shades")]
        steps: usize,
    },
}

#[derive(Debug, Default, Args)]
pub struct NumberArgs {
    #[arg(
        allow_negative_numbers = true,
        help = "Text to enter, parsed for the locale, eg: `1.500,5` for de-DE"
    )]
    pub value: Option<String>,

    #[arg(long, value_name = "FILE", help = "JSON number format config, flags override it")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "BCP 47 tag, eg: `de-DE`")]
    pub locale: Option<String>,

    #[arg(long, help = "ISO 4217 code, switches to currency mode")]
    pub currency: Option<String>,

    #[arg(long, value_enum)]
    pub currency_display: Option<CurrencyDisplayArg>,

    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    #[arg(long)]
    pub step: Option<f64>,

    #[arg(long, default_value_t = 0, help = "Press the up arrow N times")]
    pub increment: u32,

    #[arg(long, default_value_t = 0, help = "Press the down arrow N times")]
    pub decrement: u32,

    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    #[arg(long)]
    pub no_grouping: bool,

    #[arg(long)]
    pub min_fraction_digits: Option<u8>,

    #[arg(long)]
    pub max_fraction_digits: Option<u8>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CurrencyDisplayArg {
    #[clap(help = "`$1,500.00`")]
    Symbol,
    #[clap(help = "`USD 1,500.00`")]
    Code,
}

impl From<CurrencyDisplayArg> for CurrencyDisplay {
    fn from(arg: CurrencyDisplayArg) -> Self {
        match arg {
            CurrencyDisplayArg::Symbol => CurrencyDisplay::Symbol,
            CurrencyDisplayArg::Code => CurrencyDisplay::Code,
        }
    }
}
