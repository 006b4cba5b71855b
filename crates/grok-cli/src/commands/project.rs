//! Project add and delete operations

use std::path::Path;

use crate::commands::OpContext;
use crate::error::{CliError, Result};

/// Register a project with the service.
///
/// Assumes the project's source is already available under the source
/// root; the follow-up configuration refresh persists the change on disk.
pub async fn add_project(ctx: &OpContext, project: &str) -> Result<()> {
    tracing::info!("Adding project {}", project);

    if !ctx.doit {
        tracing::info!("Would register {} with {}", project, ctx.client.uri());
        return Ok(());
    }

    ctx.client.add_project(project).await?;
    Ok(())
}

/// Delete a project, its indexed data and its source code.
///
/// The service-side removal happens before the source tree removal; a
/// failure in the latter leaves the former in place.
pub async fn delete_project(ctx: &OpContext, project: &str) -> Result<()> {
    // This ends in a recursive directory removal, so the project name must
    // never be empty no matter what the caller parsed.
    if project.is_empty() {
        return Err(CliError::internal(
            "delete_project called with an empty project name",
        ));
    }

    tracing::info!("Deleting project {} and its index data", project);

    if !ctx.doit {
        tracing::info!(
            "Would delete {} from {} and remove its source tree",
            project,
            ctx.client.uri()
        );
        return Ok(());
    }

    ctx.client.delete_project(project).await?;

    let source_root = ctx.client.get_config_value("sourceRoot").await?;
    let source_root = source_root.trim_end();
    if source_root.is_empty() {
        return Err(CliError::internal("service reported an empty source root"));
    }
    tracing::debug!("Source root = {}", source_root);

    let source_dir = Path::new(source_root).join(project);
    tracing::info!("Removing source code under {}", source_dir.display());
    grok_fs::remove_tree(&source_dir)?;
    Ok(())
}
