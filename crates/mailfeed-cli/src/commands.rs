use crate::args::{Cli, Commands, ConfigCommand};
use crate::handlers::{self, HandlerContext, feed::FeedOptions};
use crate::logging;
use anyhow::Result;
use mailfeed_runtime::{Config, resolve_config_path};
use std::future::Future;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;
    if let Some(server) = cli.server {
        config.server = server;
    }
    if let Some(tab) = cli.tab {
        config.tab = tab;
    }

    let ctx = HandlerContext::new(config, config_path, cli.format);

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },

        Commands::Feed {
            viewport_height,
            scroll_steps,
            dismiss,
            open,
        } => block_on(handlers::feed::handle(
            &ctx,
            FeedOptions {
                viewport_height,
                scroll_steps,
                dismiss,
                open,
            },
        )),

        Commands::Tabs => block_on(handlers::tabs::handle(&ctx)),

        Commands::Sections => block_on(handlers::sections::handle(&ctx)),

        Commands::Summarize { id } => block_on(handlers::summarize::handle(&ctx, &id)),
    }
}

/// The engine is single-threaded, so every command runs on a current-thread runtime
fn block_on<F>(future: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
