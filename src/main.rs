//! # escpos-encoder CLI
//!
//! Command-line interface for turning JSON jobs into ESC/POS bytes.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a job and send it straight to a printer device
//! escpos-encoder encode job.json > /dev/usb/lp0
//!
//! # Inspect the bytes instead
//! escpos-encoder encode --hex job.json
//!
//! # Read the job from stdin, for a 58mm printer
//! cat job.json | escpos-encoder encode --profile 58mm -o out.bin -
//!
//! # List code pages and barcode symbologies
//! escpos-encoder codepages
//! escpos-encoder symbologies
//! ```

use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use escpos_encoder::{
    PrinterProfile,
    json_api::JsonJob,
    protocol::{barcode::barcode1d::SYMBOLOGIES, codepage::CODEPAGES},
};

/// escpos-encoder - ESC/POS command encoder
#[derive(Parser, Debug)]
#[command(name = "escpos-encoder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a JSON job into printer bytes
    Encode {
        /// Job file, or "-" for stdin
        job: String,

        /// Write bytes to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print a hex dump instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// Printer profile ("80mm" or "58mm")
        #[arg(long, default_value = "80mm", value_parser = PrinterProfile::parse)]
        profile: PrinterProfile,
    },

    /// List the printer's code pages
    Codepages,

    /// List supported barcode symbologies
    Symbologies,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Encode {
            job,
            output,
            hex,
            profile,
        } => {
            let json = read_job(&job)?;
            let job = JsonJob::from_json(&json)?;
            info!(
                commands = job.commands.len(),
                profile = profile.key,
                "encoding job"
            );
            let bytes = job.encode(profile)?;

            let rendered = if hex {
                hex_dump(&bytes).into_bytes()
            } else {
                bytes
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    info!(bytes = rendered.len(), path = %path.display(), "wrote output");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&rendered)?;
                    stdout.flush()?;
                }
            }
        }

        Commands::Codepages => {
            println!("{:<14} {:>4}  {}", "NAME", "ID", "WIDE");
            for cp in CODEPAGES.iter() {
                println!(
                    "{:<14} {:>4}  {}",
                    cp.name,
                    format!("0x{:02X}", cp.id),
                    if cp.wide { "yes" } else { "" }
                );
            }
        }

        Commands::Symbologies => {
            for (name, symbology) in SYMBOLOGIES.iter() {
                println!("{:<24} 0x{:02X}", name, symbology.code());
            }
        }
    }

    Ok(())
}

/// Read a job from a file path, or from stdin for `-`.
fn read_job(source: &str) -> io::Result<String> {
    if source == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        std::fs::read_to_string(source)
    }
}

/// Sixteen space-separated upper-case hex bytes per line.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for chunk in bytes.chunks(16) {
        let line: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(&[]), "");
        assert_eq!(hex_dump(&[0x1B, 0x40, 0x0A]), "1B 40 0A\n");

        let long: Vec<u8> = (0..17).collect();
        let dump = hex_dump(&long);
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.ends_with("\n10\n"));
    }

    #[test]
    fn test_cli_parses_encode() {
        let cli = Cli::try_parse_from([
            "escpos-encoder",
            "-vv",
            "encode",
            "--hex",
            "--profile",
            "58mm",
            "job.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Encode {
                job, hex, profile, ..
            } => {
                assert_eq!(job, "job.json");
                assert!(hex);
                assert_eq!(profile, PrinterProfile::GENERIC_58MM);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_profile() {
        assert!(Cli::try_parse_from(["escpos-encoder", "encode", "--profile", "a4", "job.json"]).is_err());
    }
}
