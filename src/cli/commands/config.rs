//! Config command handler

use crate::args::ConfigSubcommand;
use gpa_calc::config::Config;
use gpa_calc::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// # Errors
/// Returns a printable message if a key is unknown, a value is invalid, or
/// the config file cannot be written or removed
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => {
            let stdin = io::stdin();
            reset(&mut stdin.lock(), &mut io::stdout())
        }
    }
}

/// Print one value, or the whole configuration when no key is given
fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    let Some(key) = key else {
        println!("\n=== gpacalc configuration ===\n");
        print!("{config}");
        println!("\n(file: {})", Config::get_config_file_path().display());
        return Ok(());
    };

    let value = config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    println!("{value}");
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    info!("Config updated: {key} = {stored}");
    println!("✓ Set {key} = {stored}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    println!("✓ Reset {key} to default");
    Ok(())
}

/// Delete the config file after a y/yes confirmation
fn reset<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !confirm(
        input,
        output,
        "Are you sure you want to reset config to defaults? (y/n): ",
    ) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

/// Ask a yes/no question; anything but `y`/`yes` (or a read error) is a no
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> bool {
    let _ = write!(output, "{question}");
    let _ = output.flush();

    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
