//! Manage configuration.

use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            if ctx.output.is_json() {
                ctx.output.json(&ctx.config);
            } else {
                ctx.output.header("Configuration");
                ctx.output.kv("api.base_url", &ctx.config.api.base_url);
                ctx.output
                    .kv("api.timeout_secs", &ctx.config.api.timeout_secs.to_string());
                let cookie = if ctx.config.api.session_cookie.is_some() {
                    "(set)"
                } else {
                    "(none)"
                };
                ctx.output.kv("api.session_cookie", cookie);
                ctx.output
                    .kv("logging.format", &format!("{:?}", ctx.config.logging.format).to_lowercase());
                ctx.output.kv("logging.level", &ctx.config.logging.level);
            }
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = Path::new("storefront.toml");
            if path.exists() && !force {
                bail!("storefront.toml already exists (use --force to overwrite)");
            }
            std::fs::write(path, generate_default_config())?;
            ctx.output.success("Wrote storefront.toml");
            Ok(())
        }
    }
}
