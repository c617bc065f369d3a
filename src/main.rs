use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use qqgjyx::io::{open_data, open_output, Compression, OutputWriter};
use qqgjyx::{cli, Error, Result, SplitterBuilder, Subset, QQ};

#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() {
    let opt = cli::Opt::parse();
    let level = match opt.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(opt.cmd) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cmd: cli::Command) -> Result<()> {
    match cmd {
        cli::Command::Env => println!("{}", QQ::env()),
        cli::Command::Dev => println!("{}", QQ::dev()),
        cli::Command::Seed(x) => {
            let seeds = QQ::seed(x.value);
            println!("seed: {seeds}");
        }
        cli::Command::Style(x) => {
            let mut style = QQ::style();
            if let Some(dpi) = x.dpi {
                style = style.with_dpi(dpi)?;
            }
            match x.output {
                Some(path) => {
                    fs::write(&path, style.to_string())?;
                    info!("Wrote style to {}", path.display());
                }
                None => print!("{style}"),
            }
        }
        cli::Command::Usage => print!("{}", QQ::help()),
        cli::Command::Split(x) => split_file(x)?,
    };
    Ok(())
}

fn split_file(x: cli::Split) -> Result<()> {
    let csv_reader = if x.csv {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(false);
        Some(builder)
    } else {
        None
    };
    info!("Reading data from {}", x.input.display());
    let mut reader = open_data(&x.input, Compression::from_path(&x.input), csv_reader)?;

    let header = if x.no_header {
        None
    } else {
        match reader.read_line() {
            Some(h) => Some(h?),
            None => return Err(Error::EmptyFile),
        }
    };
    let records = reader.collect::<Result<Vec<String>>>()?;
    if records.is_empty() {
        return Err(Error::EmptyFile);
    }

    let (train, val) = SplitterBuilder::from_ratio(x.val_ratio)
        .maybe_seed(x.seed)
        .build()
        .split(&records)?;

    let prefix = x.output_prefix.as_ref().unwrap_or(&x.input);
    let compression = if x.gzip {
        Compression::GzipCompression
    } else {
        Compression::Uncompressed
    };

    let style = ProgressStyle::default_bar()
        .template("{msg:<6}: [{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7}")?
        .progress_chars("█▉▊▋▌▍▎▏  ");
    for (name, view) in [("train", &train), ("val", &val)] {
        let path = output_path(prefix, name, compression);
        info!("Writing {} records to {}", view.indices().len(), path.display());
        let pb = ProgressBar::new(view.indices().len() as u64);
        pb.set_style(style.clone());
        pb.set_message(name);
        let mut output = open_output(&path, compression)?;
        write_split(&mut output, header.as_deref(), view, &pb)?;
        pb.finish();
    }

    println!("train: {}", train.indices().len());
    println!("val: {}", val.indices().len());
    Ok(())
}

fn write_split(
    output: &mut OutputWriter,
    header: Option<&str>,
    view: &Subset<'_, Vec<String>>,
    pb: &ProgressBar,
) -> Result<()> {
    if let Some(h) = header {
        writeln!(output, "{h}")?;
    }
    for record in view.iter() {
        writeln!(output, "{}", record?)?;
        pb.inc(1);
    }
    output.flush()?;
    Ok(())
}

/// `data/rows.csv` becomes `data/rows.train.csv`; the extension of the
/// prefix (minus any `.gz`) is kept.
fn output_path(prefix: &Path, name: &str, compression: Compression) -> PathBuf {
    let mut base = prefix.to_path_buf();
    if Compression::from_path(&base) == Compression::GzipCompression {
        base.set_extension("");
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    let extension = base
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    base.set_file_name(format!(
        "{}.{}{}{}",
        stem,
        name,
        extension,
        compression.extension()
    ));
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths() {
        let plain = Compression::Uncompressed;
        let gz = Compression::GzipCompression;
        assert_eq!(
            output_path(Path::new("data/rows.csv"), "train", plain),
            PathBuf::from("data/rows.train.csv")
        );
        assert_eq!(
            output_path(Path::new("data/rows.csv.gz"), "val", gz),
            PathBuf::from("data/rows.val.csv.gz")
        );
        assert_eq!(
            output_path(Path::new("out/prefix"), "val", plain),
            PathBuf::from("out/prefix.val")
        );
    }
}
