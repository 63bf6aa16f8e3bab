// src/presentation.rs
use std::io::{self, Write};

use remote_index_usecase::{GetResponse, HeadResponse};

use crate::cli::OutputFormat;

pub fn write_head(out: &mut impl Write, response: &HeadResponse, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Table => {
            writeln!(out, "PATH   {}", response.abs_path.display())?;
            writeln!(out, "FILES  {}", response.count)?;
            writeln!(out, "SIZE   {:#} ({} bytes)", response.disk_size, response.disk_size)
        }
    }
}

pub fn write_get(out: &mut impl Write, response: &GetResponse, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, response),
        OutputFormat::Table => write_index_table(out, response),
    }
}

fn write_index_table(out: &mut impl Write, response: &GetResponse) -> io::Result<()> {
    let index = &response.index;
    writeln!(out, "{}", index.root())?;
    writeln!(out, "      SIZE  MODIFIED             MODE  PATH")?;
    for entry in index {
        let mtime = entry.mtime.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
        writeln!(out, "{:>10}  {mtime:<19}  {:04o}  {}", entry.size.bytes(), entry.mode & 0o7777, entry.path)?;
    }
    writeln!(out, "---")?;
    writeln!(out, "{} files, {:#}", index.count(), index.disk_size())
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
