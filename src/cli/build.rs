//! Build and keyframes command implementations

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{self, CliOverrides};
use crate::stylesheet::{keyframes_css, KeyframesMode, StylesheetBuilder};
use crate::utilities::Utility;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Arguments of the build command after flag resolution.
#[derive(Debug, Default)]
pub struct BuildArgs {
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub uses: Vec<String>,
    pub minify: Option<bool>,
    pub keyframes: Option<KeyframesMode>,
    pub strict: Option<bool>,
    pub prefix: Option<String>,
}

/// Split `UTILITY=VALUE`.
fn parse_use(arg: &str) -> Result<(Utility, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected UTILITY=VALUE, got '{}'", arg))?;
    if value.is_empty() {
        return Err(format!("missing value in '{}'", arg));
    }
    let utility = name.parse::<Utility>().map_err(|e| e.to_string())?;
    Ok((utility, value.to_string()))
}

/// Execute the build command
pub fn run_build(args: BuildArgs) -> ExitCode {
    let mut extra = Vec::with_capacity(args.uses.len());
    for arg in &args.uses {
        match parse_use(arg) {
            Ok(usage) => extra.push(usage),
            Err(e) => {
                eprintln!("Error: Invalid --use: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    let config_path = args.config.clone().or_else(config::find_config);
    let mut cfg = match config::load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    // Relative output paths in the file are anchored at the file's directory
    if let (Some(path), Some(file)) = (config_path.as_deref(), cfg.output.file.as_deref()) {
        cfg.output.file = Some(config::resolve_path(path, file));
    }

    let overrides = CliOverrides {
        output: args.output,
        minify: args.minify,
        keyframes: args.keyframes,
        strict: args.strict,
        prefix: args.prefix,
    };
    config::merge_cli_overrides(&mut cfg, &overrides);

    let mut builder = StylesheetBuilder::new(cfg.to_stylesheet_options());
    for (utility, value) in cfg.resolved_usages().into_iter().chain(extra) {
        builder.add(utility, value);
    }
    if builder.is_empty() {
        eprintln!("Warning: No usages given; add [usages] to animate.toml or pass --use");
    }
    log::info!("building {} classes", builder.len());

    let sheet = match builder.build() {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    for warning in &sheet.warnings {
        eprintln!("Warning: {}", warning);
    }

    match cfg.output.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("Error: Cannot create '{}': {}", parent.display(), e);
                    return ExitCode::from(EXIT_ERROR);
                }
            }
            if let Err(e) = fs::write(&path, &sheet.css) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            log::info!(
                "wrote {} ({} classes, {} keyframes)",
                path.display(),
                sheet.classes.len(),
                sheet.keyframes.len()
            );
        }
        None => print!("{}", sheet.css),
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the keyframes command
pub fn run_keyframes(names: &[String], minify: bool) -> ExitCode {
    match keyframes_css(names, minify) {
        Ok(css) => {
            print!("{}", css);
            if minify {
                println!();
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_use() {
        assert_eq!(
            parse_use("animateIn=fadeIn"),
            Ok((Utility::AnimateIn, "fadeIn".to_string()))
        );
        assert_eq!(
            parse_use("animate-delay=1.5s"),
            Ok((Utility::AnimateDelay, "1.5s".to_string()))
        );
    }

    #[test]
    fn test_parse_use_errors() {
        assert!(parse_use("animateIn").is_err());
        assert!(parse_use("animateIn=").is_err());
        let err = parse_use("animateInn=fadeIn").expect_err("unknown utility");
        assert!(err.contains("did you mean"));
    }
}
