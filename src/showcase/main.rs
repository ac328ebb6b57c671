use clap::Parser;
use colored::*;
use showcase::api::ShowcaseApi;
use showcase::config::{ShowcaseConfig, CONFIG_FILENAME};
use showcase::error::Result;
use showcase::store::fs_backend::FsBackend;
use showcase::web::{self, AppState, Renderer, SiteInfo};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let api = ShowcaseApi::new(
        FsBackend::new(config.store_paths()),
        config.service_options(),
    );

    match cli.command {
        Some(Commands::Doctor) => handle_doctor(&api),
        Some(Commands::Serve) | None => handle_serve(config, api),
    }
}

fn load_config(cli: &Cli) -> Result<ShowcaseConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let mut config = ShowcaseConfig::load(&path)?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &cli.static_dir {
        config.static_dir = dir.clone();
    }
    if let Some(bind) = &cli.bind {
        config.bind = bind.clone();
    }
    Ok(config)
}

fn handle_serve(config: ShowcaseConfig, api: ShowcaseApi<FsBackend>) -> Result<()> {
    let addr = config.bind_addr()?;
    for collection in showcase::model::Collection::ALL {
        api.store().ensure(collection)?;
        tracing::info!(
            "{} document: {}",
            collection,
            api.store().document_path(collection).display()
        );
    }

    let renderer = Renderer::new(SiteInfo {
        title: config.site_title.clone(),
        subtitle: config.site_subtitle.clone(),
    })?;
    let router = web::create_router(AppState::new(api, renderer), &config.static_dir);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(router, addr))?;
    Ok(())
}

fn handle_doctor(api: &ShowcaseApi<FsBackend>) -> Result<()> {
    let report = api.doctor()?;
    for c in &report.collections {
        let status = if c.is_healthy() {
            "ok".green()
        } else {
            "duplicate ids".yellow()
        };
        println!(
            "{:<9} {:>4} records  {}  ({})",
            c.collection.to_string().bold(),
            c.records,
            status,
            c.path.display().to_string().dimmed()
        );
        for id in &c.duplicate_ids {
            println!("          {} is used by more than one record", id.yellow());
        }
    }
    Ok(())
}
