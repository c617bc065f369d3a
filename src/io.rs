use std::fs::File;
use std::io::{self as stdio, BufRead, BufReader, Lines, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::error::{Error, Result};

pub type InputReader = BufReader<Box<dyn Read>>;
pub type OutputWriter = Box<dyn Write>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    GzipCompression,
    Uncompressed,
}

impl Compression {
    /// Guess from a `.gz` suffix.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext == "gz" => Compression::GzipCompression,
            _ => Compression::Uncompressed,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Compression::GzipCompression => ".gz",
            Compression::Uncompressed => "",
        }
    }
}

/// Yields one record at a time, either a line or a CSV record.
pub enum RecordReader {
    Lines(Lines<InputReader>),
    Csv(csv::Reader<InputReader>),
}

impl RecordReader {
    /// Read the next record, without its trailing newline.
    ///
    /// CSV records are re-serialised so quoted fields survive the round trip.
    pub fn read_line(&mut self) -> Option<Result<String>> {
        match self {
            RecordReader::Lines(lines) => lines.next().map(|l| l.map_err(Into::into)),
            RecordReader::Csv(reader) => {
                let mut record = csv::ByteRecord::new();
                match reader.read_byte_record(&mut record) {
                    Ok(true) => Some(serialize_record(&record)),
                    Ok(false) => None,
                    Err(e) => Some(Err(e.into())),
                }
            }
        }
    }
}

impl Iterator for RecordReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line()
    }
}

fn serialize_record(record: &csv::ByteRecord) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_byte_record(record)?;
    let mut bytes = writer.into_inner().map_err(|e| e.into_error())?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| {
        Error::InvalidInput(format!("record is not valid UTF-8: {}", e.utf8_error()))
    })
}

pub fn open_data<P: AsRef<Path>>(
    path: P,
    compression: Compression,
    csv_reader: Option<csv::ReaderBuilder>,
) -> Result<RecordReader> {
    // Read from stdin if input is '-', else try to open the provided file.
    let reader: Box<dyn Read> = if path.as_ref() == Path::new("-") {
        Box::new(stdio::stdin())
    } else {
        Box::new(File::open(path)?)
    };
    let reader: Box<dyn Read> = match compression {
        Compression::GzipCompression => Box::new(MultiGzDecoder::new(reader)),
        Compression::Uncompressed => reader,
    };
    let buffered = BufReader::with_capacity(1024 * 1024, reader);
    Ok(match csv_reader {
        Some(builder) => RecordReader::Csv(builder.from_reader(buffered)),
        None => RecordReader::Lines(buffered.lines()),
    })
}

pub fn open_output<P: AsRef<Path>>(path: P, compression: Compression) -> Result<OutputWriter> {
    let file = File::create(path)?;
    let writer: OutputWriter = match compression {
        Compression::GzipCompression => Box::new(GzEncoder::new(file, Default::default())),
        Compression::Uncompressed => Box::new(stdio::BufWriter::new(file)),
    };
    Ok(writer)
}
