//! Convert command implementation
//!
//! Reads text, renders it to Morse code PCM and writes a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Instant;
use text_to_morse_audio::{wav, AudioError, RenderParams, RenderSession};

use super::json_output::{error_codes, ConvertOutput, ConvertResult, JsonError};
use crate::config::Settings;

/// Input path that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Raised when the input cannot be opened, so JSON output can tell it apart
/// from rendering failures.
#[derive(Debug)]
struct InputOpenError(io::Error);

impl std::fmt::Display for InputOpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for InputOpenError {}

fn open_input(path: &str) -> Result<Box<dyn Read>> {
    if path == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path)
        .map_err(InputOpenError)
        .with_context(|| format!("could not open input file '{}'", path))?;
    Ok(Box::new(file))
}

/// Renders `input` with `params` and writes the result to `output`.
pub fn convert(input: &str, output: &str, params: &RenderParams) -> Result<ConvertResult> {
    let started = Instant::now();

    let reader = open_input(input)?;

    let mut session = RenderSession::new(params).context("failed to initialize waveforms")?;
    let stats = session
        .render(reader)
        .with_context(|| format!("failed to render '{}'", input))?;
    session.release_waveforms();

    let memory_bytes = session.memory_bytes();
    let samples = session.into_output();
    let rendered = Instant::now();

    let pcm_hash = wav::pcm_hash(&samples);
    wav::encode(output, &samples, samples.len())
        .with_context(|| format!("failed to write '{}'", output))?;
    let encoded = Instant::now();

    let num_samples = samples.len();
    drop(samples);

    log::info!(
        "wrote {} samples ({} characters, {} unmapped) to {}",
        num_samples,
        stats.characters,
        stats.unmapped,
        output
    );

    Ok(ConvertResult {
        num_samples,
        duration_seconds: num_samples as f64 / text_to_morse_audio::timing::SAMPLE_RATE as f64,
        pcm_hash,
        characters: stats.characters,
        unmapped: stats.unmapped,
        render_ms: (rendered - started).as_millis() as u64,
        encode_ms: (encoded - rendered).as_millis() as u64,
        memory_bytes,
    })
}

/// Maps a conversion failure to a stable code.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<InputOpenError>().is_some() {
        return error_codes::INPUT_OPEN;
    }
    match err.downcast_ref::<AudioError>() {
        Some(audio) => audio.code(),
        None => error_codes::CONVERT,
    }
}

/// Run the convert command
///
/// # Arguments
/// * `input` - Input text path, or `-` for stdin
/// * `output` - Output WAV path
/// * `settings` - Sanitized parameters
/// * `verbose` - Whether to print timing and memory details
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 failure
pub fn run(
    input: &str,
    output: &str,
    settings: &Settings,
    verbose: bool,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(input, output, settings)
    } else {
        run_human(input, output, settings, verbose)
    }
}

/// Run convert with human-readable (colored) output
fn run_human(input: &str, output: &str, settings: &Settings, verbose: bool) -> Result<ExitCode> {
    let result = convert(input, output, &settings.params)?;

    if verbose {
        let params = &settings.params;
        println!(
            "{} {} wpm, {} fwpm, {} Hz",
            "Settings:".cyan().bold(),
            params.wpm,
            params.effective_fwpm(),
            params.frequency
        );
        println!("{} {} ms", "Render Time:".cyan().bold(), result.render_ms);
        println!("{} {} ms", "Encode Time:".cyan().bold(), result.encode_ms);
        println!(
            "{} {} bytes",
            "Memory Usage:".cyan().bold(),
            result.memory_bytes
        );
        println!(
            "{} {} samples ({:.2}s)",
            "Output:".cyan().bold(),
            result.num_samples,
            result.duration_seconds
        );
        if result.unmapped > 0 {
            println!(
                "  {} {} input bytes have no Morse pattern",
                "!".yellow(),
                result.unmapped
            );
        }
        println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}

/// Run convert with JSON output
fn run_json(input: &str, output: &str, settings: &Settings) -> Result<ExitCode> {
    let outcome = convert(input, output, &settings.params);

    let (result, errors) = match outcome {
        Ok(result) => (Some(result), Vec::new()),
        Err(e) => (
            None,
            vec![JsonError::new(error_code(&e), format!("{:#}", e))],
        ),
    };
    let success = result.is_some();

    let report = ConvertOutput {
        success,
        input: input.to_string(),
        output: output.to_string(),
        params: settings.params,
        adjustments: settings.adjustments.clone(),
        result,
        errors,
    };

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{}", json);

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
