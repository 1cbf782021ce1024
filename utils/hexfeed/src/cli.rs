//! Command-line front end. `main.rs` only parses arguments and reports the
//! error; everything else lives here so tests can drive it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use crate::dump::hex_dump;
use crate::send::{send, write_image};
use crate::{decode, DecodeOptions, FeedError, Report};
use types::Variant;

/// Preview and feed hex0 monitor input
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a hex source through the monitor core and report what it loads
    Decode {
        /// Hex source file
        input: PathBuf,

        /// Monitor variant to emulate
        #[arg(short, long, value_enum, default_value_t = VariantArg::Silent)]
        variant: VariantArg,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the loaded bytes to this file
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Do not append end of transmission after the input
        #[arg(long)]
        no_eot: bool,

        /// Print a hex dump of the loaded bytes
        #[arg(short, long)]
        dump: bool,
    },
    /// Stream a hex source, then end of transmission, to a serial device
    Send {
        /// Hex source file
        input: PathBuf,

        /// Device node or file to write to; must already exist
        #[arg(short, long)]
        device: PathBuf,

        /// Do not append end of transmission after the input
        #[arg(long)]
        no_eot: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Silent,
    Echo,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Silent => Variant::Silent,
            VariantArg::Echo => Variant::Echoing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Runs one command, writing its report to `out`.
///
/// `decode` fails with [`FeedError::NoHandoff`] when the appended end of
/// transmission never triggers the handoff.
pub fn run(args: Args, out: &mut impl Write) -> Result<()> {
    match args.command {
        Command::Decode {
            input,
            variant,
            format,
            image,
            no_eot,
            dump,
        } => {
            let source = read_source(&input)?;
            let options = DecodeOptions {
                variant: variant.into(),
                append_eot: !no_eot,
            };
            let report = decode(&source, options);

            match format {
                Format::Text => print_report(out, &input, &report)?,
                Format::Json => {
                    let json = serde_json::to_string_pretty(&report)
                        .context("failed to serialise report")?;
                    writeln!(out, "{json}")?;
                }
            }

            if dump {
                write!(out, "{}", hex_dump(&report.image))?;
            }

            if let Some(path) = image {
                write_image(&path, &report.image)?;
                if format == Format::Text {
                    writeln!(out, "{} {}", "wrote image".green(), path.display())?;
                }
            }

            if options.append_eot && !report.handed_off() {
                return Err(FeedError::NoHandoff {
                    consumed: report.consumed,
                }
                .into());
            }
        }
        Command::Send {
            input,
            device,
            no_eot,
        } => {
            let source = read_source(&input)?;
            let preview = decode(&source, DecodeOptions::default());
            if !no_eot && !preview.handed_off() {
                writeln!(
                    out,
                    "{} end of transmission would land inside a comment",
                    "warning:".yellow().bold()
                )?;
            }
            let written = send(&source, &device, !no_eot)
                .with_context(|| format!("sending {}", input.display()))?;
            writeln!(
                out,
                "{} {} bytes to {} ({} bytes will load)",
                "sent".green().bold(),
                written,
                device.display(),
                preview.loaded
            )?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path).map_err(|e| FeedError::read(path, e))?)
}

fn print_report(out: &mut impl Write, input: &Path, report: &Report) -> Result<()> {
    writeln!(out, "{}", format!("hexfeed: {}", input.display()).bold().blue())?;
    writeln!(out, "  variant:        {}", report.variant.name())?;
    writeln!(out, "  input bytes:    {}", report.input_len)?;

    match report.handoff_offset {
        Some(offset) => writeln!(out, "  handoff:        at offset {offset}")?,
        None if report.appended_eot => writeln!(
            out,
            "  handoff:        {}",
            "never (stream ends inside a comment)".red()
        )?,
        None => writeln!(
            out,
            "  handoff:        {}",
            "not reached, monitor still waiting".yellow()
        )?,
    }

    writeln!(out, "  loaded bytes:   {}", report.loaded.to_string().green())?;
    if report.dropped > 0 {
        writeln!(
            out,
            "  dropped bytes:  {}",
            format!("{} (buffer full)", report.dropped).red()
        )?;
    }
    writeln!(out, "  hex digits:     {}", report.digits)?;
    writeln!(out, "  comments:       {}", report.comments)?;
    writeln!(out, "  ignored bytes:  {}", report.ignored)?;

    if let Some(nibble) = report.pending_nibble {
        writeln!(
            out,
            "  {} odd digit count, trailing nibble {:x} is never stored",
            "warning:".yellow().bold(),
            nibble
        )?;
    }
    if report.in_comment {
        writeln!(out, "  {} stream ends inside a comment", "warning:".yellow().bold())?;
    }
    if report.variant.echoes() {
        writeln!(out, "  echoed bytes:   {}", report.echo.len())?;
    }
    Ok(())
}
