#![cfg(feature = "cli")]

use anyhow::Result;
use tempfile::TempDir;
use ticket_board::utils::validation::Validate;
use ticket_board::{CliConfig, Currency, OutputFormat, StopFlag, StopSelection, TomlConfig};

/// Config file values apply unless the command line names its own.
#[test]
fn test_config_file_with_command_line_overrides() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("board.toml");
    std::fs::write(
        &config_path,
        r#"
[data]
tickets_path = "data/tickets.json"

[display]
currency = "EUR"
format = "tsv"

[filter]
stops = ["twoStops", "threeStops"]

[rates]
EUR = 0.01
"#,
    )?;

    let file = TomlConfig::from_file(&config_path)?;
    file.validate()?;

    let cli = CliConfig {
        stops: vec!["threeStops".to_string()],
        ..CliConfig::default()
    };
    let settings = cli.resolve(Some(&file))?;
    settings.validate()?;

    assert_eq!(settings.tickets_path, "data/tickets.json");
    assert_eq!(settings.currency, Currency::Eur);
    assert_eq!(settings.format, OutputFormat::Tsv);
    assert_eq!(settings.selection, StopSelection::only([StopFlag::ThreeStops]));
    assert_eq!(settings.rates.rate("EUR"), 0.01);
    assert_eq!(settings.rates.rate("GBP"), 1.0);
    Ok(())
}

#[test]
fn test_bundled_sample_config_is_valid() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/board.toml");
    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    assert!(config.validate_tickets());
    assert_eq!(config.selection()?, Some(StopSelection::All));
    Ok(())
}
