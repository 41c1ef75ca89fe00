//! Info command implementations (list, utilities, transform, preset)

use std::process::ExitCode;

use crate::presets::{self, PresetTable};
use crate::preset::preset;
use crate::suggest::{closest_matches, did_you_mean};
use crate::utilities::{Utility, DESCRIPTORS};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the list command
pub fn run_list(table: Option<&str>, json: bool) -> ExitCode {
    match table {
        None => {
            let tables: Vec<&PresetTable> =
                presets::list_tables().into_iter().filter_map(presets::get_table).collect();
            if json {
                let sizes: serde_json::Map<String, serde_json::Value> = tables
                    .iter()
                    .map(|t| (t.name().to_string(), serde_json::json!(t.len())))
                    .collect();
                return print_json(&serde_json::Value::Object(sizes));
            }
            println!("Preset tables:");
            for t in tables {
                println!("  {:<10} {} entries", t.name(), t.len());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Some(name) => match presets::get_table(name) {
            Some(t) if json => print_json(t),
            Some(t) => {
                let width = t.keys().map(str::len).max().unwrap_or(0);
                for (key, value) in t.iter() {
                    if key == value {
                        println!("  {}", key);
                    } else {
                        println!("  {:<width$} => {}", key, value, width = width);
                    }
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                let names = presets::list_tables();
                let suggestions: Vec<String> = closest_matches(name, names.iter().copied(), 3)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                eprintln!("Error: Unknown table '{}'{}", name, did_you_mean(&suggestions));
                eprintln!();
                eprintln!("Available tables:");
                for table_name in names {
                    eprintln!("  {}", table_name);
                }
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}

/// Execute the utilities command
pub fn run_utilities(json: bool) -> ExitCode {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = DESCRIPTORS
            .iter()
            .filter_map(|d| serde_json::to_value(d).ok().map(|v| (d.key.to_string(), v)))
            .collect();
        return print_json(&serde_json::Value::Object(map));
    }

    println!("Utilities:");
    for utility in Utility::ALL {
        let descriptor = utility.descriptor();
        print!("  {:<16} .{:<17} {}", descriptor.key, descriptor.class_name, descriptor.values.describe());
        if let Some(property) = descriptor.property {
            print!(" -> {}", property);
        }
        println!();
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the transform command
pub fn run_transform(utility: &str, value: &str, strict: bool) -> ExitCode {
    let utility: Utility = match utility.parse() {
        Ok(u) => u,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let bundle = if strict {
        match utility.apply(value) {
            Ok(bundle) => bundle,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        if !utility.values().accepts(value) {
            eprintln!("Warning: '{}' is not a known value for {}; passing it through", value, utility);
        }
        utility.transform(value)
    };

    print_json(&bundle)
}

/// Execute the preset command
pub fn run_preset(compact: bool) -> ExitCode {
    let preset = preset();
    let result = if compact { preset.to_json_compact() } else { preset.to_json() };
    match result {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize preset: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize output: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
