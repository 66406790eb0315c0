//! Config command handlers. These never build an HTTP client and work
//! without credentials.

use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

/// Effective configuration with the token redacted. The raw token never
/// leaves the process through this command.
#[derive(Debug, Serialize)]
struct ConfigReport {
    api_base_url: String,
    api_token: String,
    api_company_id: String,
    refresh_seconds: u64,
    timeout_secs: u64,
}

impl From<config::Config> for ConfigReport {
    fn from(c: config::Config) -> Self {
        Self {
            api_base_url: c.api_base_url,
            api_token: match c.api_token.as_deref() {
                Some(t) if !t.is_empty() => "<redacted>".into(),
                _ => "<unset>".into(),
            },
            api_company_id: c.api_company_id.unwrap_or_else(|| "<unset>".into()),
            refresh_seconds: c.refresh_seconds,
            timeout_secs: c.timeout_secs,
        }
    }
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let report = ConfigReport::from(config::effective_config(global)?);

            let out = output::render_single(
                &global.output,
                &report,
                |r| {
                    format!(
                        "api_base_url:    {}\n\
                         api_token:       {}\n\
                         api_company_id:  {}\n\
                         refresh_seconds: {}\n\
                         timeout_secs:    {}",
                        r.api_base_url,
                        r.api_token,
                        r.api_company_id,
                        r.refresh_seconds,
                        r.timeout_secs,
                    )
                },
                |r| r.api_base_url.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
