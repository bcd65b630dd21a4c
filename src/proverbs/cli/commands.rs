//! # CLI Layer
//!
//! One of two front ends for the proverbs core; the web server is the other,
//! and `serve` (the default command) starts it.
//!
//! This is the only place in the crate that:
//! - Parses shell arguments
//! - Writes to stdout
//! - Decides on terminal colors
//!
//! Every handler follows the same shape: call one `ProverbsApi` method, hand
//! the result to the [`Renderer`], print. Filtering and validation rules are
//! never reimplemented here.
//!
//! ## Startup
//!
//! 1. Parse arguments
//! 2. Load `config.json` from `--config-dir` (or the platform config directory),
//!    then apply environment overrides, then flags
//! 3. Install logging: quiet (`warn`) for one-shot commands, the configured
//!    filter for `serve`
//! 4. Load the collection, either built in or from `--from`, and log any
//!    validation problems

use super::render::{print_messages, Renderer};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use proverbs::api::{CmdMessage, ListFilter, Page, ProverbsApi};
use proverbs::config::ProverbsConfig;
use proverbs::error::Result;
use proverbs::logging;
use proverbs::store::builtin::BuiltinSource;
use proverbs::store::fs::ExportFile;
use proverbs::store::CollectionSource;
use proverbs::web;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::debug;

struct AppContext {
    api: ProverbsApi,
    config: ProverbsConfig,
    config_dir: PathBuf,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let mut cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let command = cli.command.take().unwrap_or_default();
    let config_dir = config_dir(&cli);
    let mut config = ProverbsConfig::load(&config_dir)?.apply_env();
    apply_flags(&mut config, &cli, &command);

    let filter = if cli.verbose {
        "debug"
    } else if matches!(command, Commands::Serve { .. }) {
        config.log_filter.as_str()
    } else {
        "warn"
    };
    logging::init(filter);
    debug!(dir = %config_dir.display(), "using config directory");

    let ctx = init_context(&cli, config, config_dir)?;

    match command {
        Commands::Serve { .. } => handle_serve(ctx),
        Commands::List {
            category,
            source,
            tag,
            limit,
            offset,
        } => {
            let filter = ListFilter {
                category,
                source,
                tag,
                query: None,
            };
            handle_list(&ctx, &filter, Page::new(limit, offset))
        }
        Commands::Search { query } => handle_search(&ctx, &query.join(" ")),
        Commands::Show { id } => handle_show(&ctx, &id),
        Commands::Random { seed } => handle_random(&ctx, seed),
        Commands::Stats => handle_stats(&ctx),
        Commands::Validate => handle_validate(&ctx),
        Commands::Export { path } => handle_export(&ctx, &path),
        Commands::Examples => handle_examples(&ctx),
        Commands::Config { save } => handle_config(&ctx, save),
    }
}

fn config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }
    ProjectDirs::from("dev", "go-proverbs", "proverbs")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Flags win over the environment, which wins over `config.json`.
fn apply_flags(config: &mut ProverbsConfig, cli: &Cli, command: &Commands) {
    if let Some(dir) = &cli.examples_dir {
        config.examples_dir = dir.clone();
    }
    if let Commands::Serve { port, bind } = command {
        if let Some(port) = port {
            config.port = *port;
        }
        if let Some(bind) = bind {
            config.bind_address = bind.clone();
        }
    }
}

fn init_context(cli: &Cli, config: ProverbsConfig, config_dir: PathBuf) -> Result<AppContext> {
    let api = match &cli.from {
        Some(path) => ProverbsApi::new(ExportFile::new(path).load()?),
        None => {
            let source = BuiltinSource::new()
                .with_examples(&config.examples_dir, &config.example_extensions);
            let (collection, examples) = source.load_with_examples()?;
            ProverbsApi::new(collection).with_example_stats(examples.stats())
        }
    };
    api.warn_on_invalid()?;

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    Ok(AppContext {
        api,
        config,
        config_dir,
        renderer: Renderer::new(use_color)?,
    })
}

fn emit(output: &str) {
    let trimmed = output.trim_end();
    if !trimmed.is_empty() {
        println!("{}", trimmed);
    }
}

fn handle_serve(ctx: AppContext) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(web::serve(ctx.api, &ctx.config))
}

fn handle_list(ctx: &AppContext, filter: &ListFilter, page: Page) -> Result<()> {
    let result = ctx.api.list(filter, page)?;
    emit(&ctx.renderer.proverb_list(&result.listed, result.total, page.offset)?);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    emit(&ctx.renderer.proverb_list(&result.listed, result.total, 0)?);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let detail = ctx.api.get(id)?;
    emit(&ctx.renderer.proverb_detail(&detail)?);
    Ok(())
}

fn handle_random(ctx: &AppContext, seed: Option<u64>) -> Result<()> {
    let entry = match seed {
        Some(seed) => ctx.api.random(&mut StdRng::seed_from_u64(seed)),
        None => ctx.api.random(&mut rand::thread_rng()),
    };
    if entry.is_empty() {
        println!("No proverbs to pick from.");
        return Ok(());
    }
    emit(&ctx.renderer.proverb(&entry)?);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    emit(&ctx.renderer.stats(&ctx.api.stats())?);
    Ok(())
}

/// Problems are reported, not fatal: the exit status stays zero.
fn handle_validate(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.validate()?;
    emit(&ctx.renderer.issues(&result.issues)?);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.export(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_examples(ctx: &AppContext) -> Result<()> {
    emit(&ctx.renderer.example_stats(&ctx.api.example_stats())?);
    Ok(())
}

fn handle_config(ctx: &AppContext, save: bool) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    if save {
        ctx.config.save(&ctx.config_dir)?;
        print_messages(&[CmdMessage::success(format!(
            "Saved configuration to {}",
            ctx.config_dir.display()
        ))]);
    }
    Ok(())
}
