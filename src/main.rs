use clap::Parser;
use ticket_board::utils::error::{BoardError, ErrorSeverity};
use ticket_board::utils::{logger, validation::Validate};
use ticket_board::{BoardSession, CliConfig, JsonTicketSource, LocalStorage, Settings, TomlConfig};

fn load_settings(cli: &CliConfig) -> Result<Settings, BoardError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let settings = cli.resolve(file.as_ref())?;
    settings.validate()?;
    Ok(settings)
}

fn exit_with(e: &BoardError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let source = JsonTicketSource::new(LocalStorage::new("."), settings.tickets_path.clone())
        .with_validation(settings.validate_tickets);
    let session = BoardSession::new(source, settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = session.run(&mut out).await {
        exit_with(&e);
    }
}
