//! Config command handler

use crate::args::ConfigSubcommand;
use campus_records::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands; with no subcommand, print everything
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => print_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => print_value(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_value(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_value(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_to_defaults(),
    }
}

/// Print the whole configuration plus the backing file location
fn print_all(config: &Config) {
    println!("\n=== campusrecords configuration ===\n");
    print!("{config}");
    println!("\nConfig file: {}", Config::get_config_file_path().display());
}

fn print_value(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => {
            eprintln!(
                "Unknown config key '{key}'; valid keys are {}.",
                Config::KEYS.join(", ")
            );
            std::process::exit(1);
        }
    }
}

fn set_value(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e} (valid keys: {})", Config::KEYS.join(", "));
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Set {key} = {value}");
}

fn unset_value(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e} (valid keys: {})", Config::KEYS.join(", "));
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Restored {key} to its default");
}

fn reset_to_defaults() {
    if !Config::get_config_file_path().exists() {
        println!("✓ No config file present; defaults already apply.");
        return;
    }

    print!("Reset all campusrecords configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("✗ Could not remove the config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Configuration reset; defaults apply from the next run.");
    } else {
        println!("✗ Reset cancelled; configuration unchanged.");
    }
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("✗ Could not save the config file: {e}");
        std::process::exit(1);
    }
}
