//! Terminal gallery for the PokeAPI catalog

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod context;
mod output;
mod renderer;
mod session;

use cli::{Cli, Commands};
use context::Context;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match Context::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&ctx, cli.command).await {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "poke_gallery=debug,poke_gallery_engine=debug,poke_gallery_sdk=debug"
    } else {
        "off"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Browse => commands::browse::execute(ctx).await,
        Commands::List { pages } => commands::list::execute(ctx, pages).await,
        Commands::Search { query } => commands::search::search(ctx, &query).await,
        Commands::Show { query } => commands::search::show(ctx, &query).await,
        Commands::Config(cmd) => commands::config::execute(ctx, cmd).await,
    }
}
