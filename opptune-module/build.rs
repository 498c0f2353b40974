//! Build script for opptune-module
//!
//! Validates opptune.toml at compile time so the embedded default can
//! never be rejected at load.

use std::fs;
use std::path::Path;

const MAX_GROUP_NAME_LEN: usize = 16;
const DOMAINS: [&str; 3] = ["cpu", "gpu", "ddr"];
const LIMIT_PROFILES: [&str; 3] = ["canonical", "legacy", "custom"];
const FLOOR_MV: i64 = 1;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    validate_config();
}

/// Validate opptune.toml
fn validate_config() {
    println!("cargo:rerun-if-changed=opptune.toml");

    let config_path = Path::new("opptune.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read opptune.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in opptune.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_group(&config, &mut errors);
    validate_limits(&config, &mut errors);
    validate_domains(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in opptune.toml", &errors);
    }
}

/// Validate the grouping directory name
fn validate_group(config: &toml::Value, errors: &mut Vec<String>) {
    match config.get("group") {
        None => {}
        Some(toml::Value::String(group)) => {
            if group.is_empty() || group.contains('/') {
                errors.push("group must be a non-empty name without '/'".to_string());
            }
            if group.len() > MAX_GROUP_NAME_LEN {
                errors.push(format!("group must be at most {} bytes", MAX_GROUP_NAME_LEN));
            }
        }
        Some(_) => errors.push("group must be a string".to_string()),
    }
}

/// Validate the voltage limit selection
fn validate_limits(config: &toml::Value, errors: &mut Vec<String>) {
    let profile = match config.get("limits") {
        None => "canonical",
        Some(toml::Value::String(p)) if LIMIT_PROFILES.contains(&p.as_str()) => p.as_str(),
        Some(_) => {
            errors.push("limits must be 'canonical', 'legacy', or 'custom'".to_string());
            return;
        }
    };

    if profile != "custom" {
        return;
    }

    let bound = |key: &str| match config.get(key) {
        Some(toml::Value::Integer(mv)) => Some(*mv),
        _ => None,
    };

    match (bound("min_mv"), bound("max_mv")) {
        (Some(min), Some(max)) => {
            if min < FLOOR_MV {
                errors.push(format!("min_mv must be at least {} mV", FLOOR_MV));
            }
            if min > max {
                errors.push("min_mv must not exceed max_mv".to_string());
            }
            if max > 3900 {
                errors.push("max_mv must be at most 3900".to_string());
            }
            let step = if max < 1200 {
                25
            } else if max < 2400 {
                50
            } else {
                100
            };
            if max % step != 0 {
                errors.push(format!("max_mv must be a multiple of {} mV", step));
            }
        }
        _ => errors.push("custom limits need integer min_mv and max_mv".to_string()),
    }
}

/// Validate [[domain]] entries
fn validate_domains(config: &toml::Value, errors: &mut Vec<String>) {
    let domains = match config.get("domain") {
        None => return,
        Some(toml::Value::Array(domains)) => domains,
        Some(_) => {
            errors.push("domain must be an array of tables ([[domain]])".to_string());
            return;
        }
    };

    if domains.is_empty() {
        errors.push("at least one [[domain]] is required".to_string());
    }

    let mut seen = Vec::new();
    for (i, domain) in domains.iter().enumerate() {
        let name = match domain.get("name") {
            Some(toml::Value::String(name)) => name.as_str(),
            _ => {
                errors.push(format!("[[domain]] {} missing 'name'", i));
                continue;
            }
        };

        if !DOMAINS.contains(&name) {
            errors.push(format!("[[domain]] {} has unknown name '{}'", i, name));
        }
        if seen.contains(&name) {
            errors.push(format!("[[domain]] '{}' listed twice", name));
        }
        seen.push(name);

        if let Some(writable) = domain.get("writable") {
            if !writable.is_bool() {
                errors.push(format!("[[domain]] '{}' writable must be true or false", name));
            }
        }
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
