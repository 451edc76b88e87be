//! cr3 CLI: prints a keystream of digits, letters or hex digits.
//!
//! Install the binary under (or symlink it as) `cr3n`, `cr3l` or `cr3h` to
//! select the alphabet, or pass `--mode` explicitly.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use log::debug;

use cr3::format::{self, DEFAULT_BLOCKS};
use cr3::{Cr3Error, KeyMaterial, Keystream, OutputMode};

#[derive(Debug, Parser)]
#[command(name = "cr3")]
#[command(about = "Predictable keystream generator for manual stream ciphers", long_about = None)]
#[command(version)]
#[command(after_help = "\
cr3n produces numeric characters [0-9], cr3l produces letters [A-Z]
and cr3h produces hexadecimal digits [0-f].

Example: cr3n 0011223380a0f0ed 5
will generate a key 125 chars long using the hex key 0011223380a0f0ed")]
struct Cli {
    /// 16-digit hex key, e.g. 0011223380a0f0ed. Never reuse a key.
    key: String,

    /// Number of blocks of 25 symbols to print
    #[arg(default_value_t = DEFAULT_BLOCKS)]
    blocks: u32,

    /// Output alphabet (defaults to the one selected by the program name)
    #[arg(short, long)]
    mode: Option<ModeArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Decimal digits 0-9 (as cr3n)
    Digit,
    /// Letters A-Z (as cr3l)
    Letter,
    /// Hex digits 0-f (as cr3h)
    Hex,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Digit => OutputMode::Digit,
            ModeArg::Letter => OutputMode::Letter,
            ModeArg::Hex => OutputMode::Hex,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mode = match cli.mode {
        Some(arg) => OutputMode::from(arg),
        None => {
            let argv0 = std::env::args().next().unwrap_or_default();
            match OutputMode::from_invocation_name(&argv0) {
                Ok(mode) => mode,
                Err(err) => {
                    eprintln!("{}\n", err);
                    eprintln!("{}", Cli::command().render_help());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    };

    let key = match KeyMaterial::parse(&cli.key) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut ks = match Keystream::new(&key) {
        Ok(ks) => ks,
        Err(Cr3Error::DegenerateKey) => {
            eprintln!("\nWarning: {}", Cr3Error::DegenerateKey);
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.into()),
    };
    debug!("printing {} blocks in {} mode", cli.blocks, mode);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    format::write_blocks(&mut ks, mode, cli.blocks, &mut out).context("writing keystream")?;
    out.flush().context("flushing keystream")?;

    Ok(ExitCode::SUCCESS)
}
