mod client;
mod config;
mod domain;

use std::env;
use std::fmt::Write;

use client::{client_for, run_agent};
use config::{AppConfig, ConfigError, ConfigLoader, ValidationErrorKind, Validator};
use domain::{ModelProfile, process_data, process_tags};
use tracing::level_filters::LevelFilter;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_PROMPT: &str = "Summarize the deployment checklist";

/// Export format for the validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Yaml,
    Json,
}

fn parse_arg(name: &str) -> Option<String> {
    let prefix = format!("--{}=", name);
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(&prefix).map(str::to_string))
}

fn has_flag(name: &str) -> bool {
    let flag = format!("--{}", name);
    env::args().skip(1).any(|arg| arg == flag)
}

fn parse_export_format() -> ExportFormat {
    match parse_arg("format").as_deref() {
        Some("json") => ExportFormat::Json,
        _ => ExportFormat::Yaml,
    }
}

/// `LOG_LEVEL` sets the default level; `RUST_LOG` directives take precedence.
fn init_tracing() {
    let level = env::var("LOG_LEVEL")
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Field-by-field view of the config, values shown exactly as validated.
fn render_config(config: &AppConfig) -> String {
    let mut out = String::new();
    // Writing into a String can't fail.
    let _ = writeln!(out, "Environment: {}", config.env());

    for model in config.models() {
        let profile = ModelProfile::from(model);
        let _ = writeln!(out, "--- Model: {} ---", model.name());
        let _ = writeln!(
            out,
            "Params: temperature={} creative={}",
            model.temperature(),
            profile.is_creative()
        );
        let _ = writeln!(out, "stop_words = {:?}", model.stop_words());
    }

    out
}

fn print_export(config: &AppConfig, format: ExportFormat) {
    let rendered = match format {
        ExportFormat::Yaml => config.to_yaml().map_err(|e| e.to_string()),
        ExportFormat::Json => config.to_json().map_err(|e| e.to_string()),
    };

    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => error!(error = %e, "Failed to export config"),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let loader = if has_flag("strict") {
        ConfigLoader::with_validator(Validator::strict())
    } else {
        ConfigLoader::new()
    };

    let loaded = match parse_arg("inline") {
        Some(src) => loader.load_from_str(&src),
        None => loader.load_from_env(),
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            if let ConfigError::Validation(ref v) = e {
                if v.kind == ValidationErrorKind::UnknownField {
                    eprintln!(
                        "Unknown fields are rejected in strict mode; \
                         rerun without --strict to ignore them"
                    );
                }
            }
            std::process::exit(1);
        }
    };

    let stop_word_counts: Vec<(String, i64)> = config
        .models()
        .iter()
        .map(|m| (m.name().to_string(), m.stop_words().len() as i64))
        .collect();
    info!(
        env = %config.env(),
        strict = loader.is_strict(),
        models = ?process_data(Some(stop_word_counts.as_slice())),
        "Config loaded"
    );

    print!("{}", render_config(&config));
    print_export(&config, parse_export_format());

    let prompt = parse_arg("prompt").unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    for model in config.models() {
        let client = client_for(model);
        info!(
            model = model.name(),
            tags = ?process_tags(model.stop_words(), false),
            "Running agent"
        );
        let reply = run_agent(client.as_ref(), &prompt).await;
        println!("[{}] {}", model.name(), reply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_config_keeps_stop_words_as_configured() {
        let config = config::load(&json!({
            "env": "production",
            "models": [
                {"name": "gpt-4-turbo", "temperature": 0.5, "stop_words": ["end", "Error"]},
                {"name": "llama-3-local"}
            ]
        }))
        .unwrap();

        let text = render_config(&config);

        assert!(text.starts_with("Environment: production\n"));
        assert!(text.contains("stop_words = [\"end\", \"Error\"]"));
        assert!(!text.contains("END"));
        assert!(text.contains("--- Model: llama-3-local ---"));
        assert!(text.contains("Params: temperature=0.7 creative=false"));
        assert!(text.contains("stop_words = []"));
    }
}
