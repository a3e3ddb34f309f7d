use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;

use radix2_fft::utils::{format_bins, format_spectrum, parse_signal};
use radix2_fft::{fft_with_options, FftOptions, Precision};

/// Computes the radix-2 FFT of a sequence of real numbers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Comma-separated samples, e.g. "1,0,0,0". Read from stdin when omitted.
    samples: Option<String>,

    /// Decimal places kept in the output.
    #[arg(long, default_value_t = 3, conflicts_with = "raw")]
    precision: u32,

    /// Print unrounded coefficients.
    #[arg(long)]
    raw: bool,

    /// Sample rate in Hz; prints each bin next to its frequency.
    #[arg(long)]
    sample_rate: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = if cli.raw {
        FftOptions::raw()
    } else {
        FftOptions::default().with_precision(Precision::new(cli.precision)?)
    };

    if let Some(sample_rate) = cli.sample_rate {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            bail!("sample rate must be finite and greater than zero, got {sample_rate}");
        }
    }

    let numbers = match cli.samples {
        Some(text) => parse_signal(&text)?,
        None => prompt_for_signal()?,
    };

    println!("Computing the radix-2 FFT of {numbers:?}.\n");
    let spectrum = fft_with_options(&numbers, &options);
    match cli.sample_rate {
        Some(sample_rate) => {
            for line in format_bins(&spectrum, sample_rate) {
                println!("{line}");
            }
        }
        None => println!("{}", format_spectrum(&spectrum)),
    }

    Ok(())
}

/// Keeps asking on stdin until a line parses as a list of reals.
fn prompt_for_signal() -> Result<Vec<f64>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    print!("Input a sequence of real numbers separated by commas: ");
    loop {
        stdout.flush().context("failed to flush prompt")?;
        let Some(line) = lines.next() else {
            bail!("no valid input before end of stdin");
        };
        let line = line.context("failed to read from stdin")?;
        match parse_signal(&line) {
            Ok(numbers) => return Ok(numbers),
            Err(err) => {
                warn!("rejected input: {err}");
                print!("\nPlease enter a valid list of real numbers: ");
            }
        }
    }
}
