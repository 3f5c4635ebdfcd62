//! Command implementations and dispatch logic.
//!
//! Each command is an async function taking a CommandContext with the
//! working directory and the output handler.

use camino::Utf8PathBuf;
use distkit_core::error::{DistError, DistResult};
use tracing::info;

pub mod check;
pub mod emit;
pub mod init;
pub mod show;

#[cfg(test)]
mod tests;

use crate::{output::OutputHandler, Commands};
use distkit_manifest::{find_manifest, Overrides};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a command context for the current working directory
    pub fn new() -> DistResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| DistError::io("Failed to get current directory".to_string(), e))?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
            DistError::validation("cwd", format!("working directory is not UTF-8: {}", e))
        })?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
        })
    }

    /// Locate the manifest for this context, walking up from cwd
    pub fn manifest_path(&self) -> DistResult<Utf8PathBuf> {
        find_manifest(&self.cwd).ok_or_else(|| {
            DistError::validation(
                "manifest",
                format!(
                    "no {} found in {} or any parent directory",
                    distkit_manifest::MANIFEST_FILE,
                    self.cwd
                ),
            )
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> DistResult<()> {
    match command {
        Commands::Init => {
            info!("Initializing manifest in current directory");
            init::execute(ctx).await
        },
        Commands::Check => {
            info!("Checking manifest");
            check::execute(ctx).await
        },
        Commands::Show => {
            info!("Showing resolved metadata");
            show::execute(ctx).await
        },
        Commands::Emit {
            output,
            set_name,
            set_version,
            set_summary,
        } => {
            let overrides = Overrides {
                name: set_name,
                version: set_version,
                summary: set_summary,
            };
            info!("Emitting metadata document");
            emit::execute(output, overrides, ctx).await
        },
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx).await
        },
    }
}

async fn show_version(ctx: &CommandContext) -> DistResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("BUILD_DATE");
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.info(&format!("distkit v{}", version));
    ctx.output.info(&format!("Built: {}", build_date));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));

    Ok(())
}
