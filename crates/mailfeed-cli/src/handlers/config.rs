use super::HandlerContext;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use mailfeed_runtime::Config;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    } else {
        print!("{}", ctx.config.to_toml()?);
    }
    Ok(())
}

pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
