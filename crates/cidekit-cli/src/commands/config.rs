//! `cidekit config` — read and write configuration values.

use cidekit_core::domain::NewlinePreference;

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let mut config = config;
            set_config_value(&mut config, &key, &value)?;

            let path = global
                .config
                .clone()
                .unwrap_or_else(AppConfig::config_path);
            config.save(&path).map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            })?;

            output.success(&format!("Set {key} = {value} ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "newline" => Ok(config.newline.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "newline" => {
            config.newline = match value {
                "lf" => NewlinePreference::Lf,
                "crlf" => NewlinePreference::Crlf,
                _ => {
                    return Err(CliError::ConfigError {
                        message: format!("newline must be 'lf' or 'crlf', got '{value}'"),
                        source: None,
                    });
                }
            };
        }
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("output.no_color must be true or false, got '{value}'"),
                source: None,
            })?;
        }
        "output.format" => {
            config.output.format = value.to_string();
        }
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "newline").unwrap(), "lf");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn set_newline_crlf() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "newline", "crlf").unwrap();
        assert_eq!(cfg.newline, NewlinePreference::Crlf);
    }

    #[test]
    fn set_newline_rejects_garbage() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "newline", "cr").is_err());
    }

    #[test]
    fn set_no_color_parses_bool() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "output.no_color", "true").unwrap();
        assert!(cfg.output.no_color);
        assert!(set_config_value(&mut cfg, "output.no_color", "maybe").is_err());
    }
}
