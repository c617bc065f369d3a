use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::split::ValRatio;

fn parse_val_ratio(spec: &str) -> Result<ValRatio, String> {
    spec.parse().map_err(|e: crate::Error| e.to_string())
}

#[derive(Debug, Parser)]
#[clap(name = "qq", about = "Helpers for reproducible ML experiments", version)]
pub struct Opt {
    #[clap(short = 'v', parse(from_occurrences), help = "Set the level of verbosity")]
    pub verbose: u64,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(name = "env", about = "Show environment information")]
    Env,

    #[clap(name = "dev", about = "Show the device computations would run on")]
    Dev,

    #[clap(name = "seed", about = "Show the generators derived from a seed")]
    Seed(Seed),

    #[clap(name = "style", about = "Print the plot style as matplotlibrc")]
    Style(Style),

    #[clap(name = "usage", about = "Show the library helpers")]
    Usage,

    #[clap(
        name = "split",
        about = "Split a dataset file into train and validation files"
    )]
    Split(Split),
}

#[derive(Debug, clap::Args)]
pub struct Seed {
    #[clap(default_value_t = crate::split::DEFAULT_SEED, help = "Seed value")]
    pub value: u64,
}

#[derive(Debug, clap::Args)]
pub struct Style {
    #[clap(short = 'd', long = "dpi", help = "Override figure and savefig dpi")]
    pub dpi: Option<u32>,

    #[clap(
        short = 'o',
        long = "output",
        parse(from_os_str),
        help = "Write the style to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct Split {
    #[clap(
        short = 'r',
        long = "val-ratio",
        default_value = "0.2",
        parse(try_from_str = parse_val_ratio),
        help = "Fraction of records sent to the validation file, e.g. 0.2 or val=0.2"
    )]
    pub val_ratio: ValRatio,

    #[clap(short = 's', long = "seed", help = "RNG seed, for reproducibility")]
    pub seed: Option<u64>,

    #[clap(
        parse(from_os_str),
        help = "Data to split, gzip compressed if it ends in .gz. If '-', read from stdin"
    )]
    pub input: PathBuf,

    #[clap(
        short = 'o',
        long = "output-prefix",
        parse(from_os_str),
        required_if_eq("input", "-"),
        help = "Output filename prefix. Defaults to the input path"
    )]
    pub output_prefix: Option<PathBuf>,

    #[clap(short = 'z', long = "gzip", help = "Write output files gzip compressed")]
    pub gzip: bool,

    #[clap(long = "csv", help = "Parse the input as CSV, so quoted newlines stay in one record")]
    pub csv: bool,

    #[clap(long = "no-header", help = "The input has no header row")]
    pub no_header: bool,
}
