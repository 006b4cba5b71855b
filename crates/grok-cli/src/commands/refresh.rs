//! Configuration refresh and upload

use std::time::Duration;

use crate::commands::OpContext;
use crate::error::{CliError, Result};

/// Bounded runtime for the external merge tool.
const MERGE_TIMEOUT: Duration = Duration::from_secs(300);

/// Rewrite the local configuration file from live service state.
///
/// Without a read-only config the fetched text is installed as-is. With
/// one, the merge tool is run as `merge <roconfig> <fetched>` and its
/// stdout becomes the installed content. Staged text lives in scoped temp
/// files that are removed on every exit path.
pub async fn refresh_configuration(ctx: &OpContext) -> Result<()> {
    let main_config = grok_fs::config_file(&ctx.base);
    if !main_config.is_file() {
        return Err(CliError::user(format!(
            "file {} does not exist",
            main_config.display()
        )));
    }

    if !ctx.doit {
        match &ctx.roconfig {
            Some(roconfig) => tracing::info!(
                "Would refresh configuration, merging {} with live state from {}",
                roconfig.display(),
                ctx.client.uri()
            ),
            None => tracing::info!("Would refresh configuration from {}", ctx.client.uri()),
        }
        return Ok(());
    }

    let current = ctx.client.get_configuration().await?;
    let fetched = grok_fs::stage_text(&current)?;
    tracing::debug!(
        "Temporary file for current config: {}",
        fetched.path().display()
    );

    match &ctx.roconfig {
        None => {
            tracing::info!("Refreshing configuration");
            grok_fs::install(fetched.path(), &main_config)?;
        }
        Some(roconfig) => {
            tracing::info!("Refreshing configuration (merging with read-only config)");
            let merged = grok_tools::run(
                &ctx.merge_tool,
                &[roconfig.as_os_str(), fetched.path().as_os_str()],
                MERGE_TIMEOUT,
            )
            .await?;
            let staged = grok_fs::stage_text(&merged)?;
            tracing::debug!(
                "Temporary file for merged config: {}",
                staged.path().display()
            );
            grok_fs::install(staged.path(), &main_config)?;
        }
    }

    Ok(())
}

/// Push the local configuration file back to the service.
pub async fn upload_configuration(ctx: &OpContext) -> Result<()> {
    let main_config = grok_fs::config_file(&ctx.base);
    if !main_config.is_file() {
        return Err(CliError::user(format!(
            "file {} does not exist",
            main_config.display()
        )));
    }

    if !ctx.doit {
        tracing::info!(
            "Would upload {} to {}",
            main_config.display(),
            ctx.client.uri()
        );
        return Ok(());
    }

    tracing::info!("Uploading configuration to {}", ctx.client.uri());
    ctx.client.set_configuration(&main_config).await?;
    Ok(())
}
