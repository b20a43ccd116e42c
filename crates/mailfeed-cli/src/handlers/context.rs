use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use mailfeed_runtime::{Config, HttpFeedApi};
use serde::Serialize;
use std::path::PathBuf;

pub struct HandlerContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
}

impl HandlerContext {
    pub fn new(config: Config, config_path: PathBuf, format: OutputFormat) -> Self {
        let color = format == OutputFormat::Plain && std::io::stdout().is_terminal();
        Self {
            config,
            config_path,
            format,
            color,
        }
    }

    pub fn api(&self) -> Result<HttpFeedApi> {
        Ok(HttpFeedApi::new(&self.config.server)?)
    }

    /// Print `value` as JSON, or the plain-text lines otherwise
    pub fn emit<T, F>(&self, value: &T, plain: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce(bool) -> Vec<String>,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(value)?);
            return Ok(());
        }

        for line in plain(self.color) {
            println!("{}", line);
        }
        Ok(())
    }
}
