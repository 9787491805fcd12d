use anyhow::Context;
use clap::Parser;
use crowdfund_view::utils::{logger, validation::Validate};
use crowdfund_view::{Catalog, CliArgs, FormatterConfig, InputSource, ProjectPresenter};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting crowdfund-view");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut config = match &args.config {
        Some(path) => FormatterConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => FormatterConfig::default(),
    };
    if let Some(locale) = &args.locale {
        config = config.with_locale(locale.clone());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match &args.translations {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("failed to load translations from {}", path))?,
        None => config.catalog()?,
    };
    let rows = InputSource::new(args.input.clone())
        .read_projects()
        .with_context(|| format!("failed to read project rows from {}", args.input))?;

    let presenter = ProjectPresenter::new(config, catalog);
    let listing = presenter.present_all(&rows);

    let output = if args.pretty {
        serde_json::to_string_pretty(&listing)?
    } else {
        serde_json::to_string(&listing)?
    };
    println!("{}", output);

    tracing::info!(count = listing.projects.len(), "Rendered project cards");
    Ok(())
}
