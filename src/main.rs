use anyhow::Context;
use clap::Parser;
use contact_book::utils::logger;
use contact_book::{
    AppContactRepository, CliConfig, ContactsDataSource, LocalStorage, Settings, Shell,
    TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };
    let settings = Settings::resolve(cli.data_file.as_deref(), toml.as_ref())
        .context("Invalid configuration")?;

    // Logging waits for the config file, which may set the level.
    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    tracing::info!("Starting contact-book");
    tracing::debug!("Settings: {:?}", settings);

    let data_source = ContactsDataSource::new(LocalStorage::new(), settings.data_file.clone());
    let mut repository = AppContactRepository::load(data_source)
        .with_context(|| {
            format!(
                "Failed to load contacts from '{}'",
                settings.data_file.display()
            )
        })?
        .with_search_scope(settings.search_scope);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&mut repository, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("Bye");
    Ok(())
}
