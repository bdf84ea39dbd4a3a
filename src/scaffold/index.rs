use std::process::Command as ProcessCommand;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use tracing::debug;

/// Whatever needs to learn about freshly scaffolded folders (an editor's asset database,
/// a file indexer, ...). Refreshed once per successful run.
pub trait AssetIndex {
    fn refresh(&mut self, root: &Utf8Path) -> Result<()>;
}

/// Standalone use: nothing to refresh.
#[derive(Debug, Default)]
pub struct NoopIndex;

impl AssetIndex for NoopIndex {
    fn refresh(&mut self, root: &Utf8Path) -> Result<()> {
        debug!("no asset index configured; skipping refresh of {}", root);
        Ok(())
    }
}

/// Runs an external command with the scaffolded root appended as its last argument.
#[derive(Debug)]
pub struct CommandIndex {
    argv: Vec<String>,
}

impl CommandIndex {
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.is_empty() {
            bail!("refresh command argv must not be empty");
        }
        Ok(Self { argv })
    }
}

impl AssetIndex for CommandIndex {
    fn refresh(&mut self, root: &Utf8Path) -> Result<()> {
        let mut argv = self.argv.clone();
        argv.push(root.to_string());
        debug!("refreshing asset index: {}", format_command(&argv));

        let status = ProcessCommand::new(&argv[0])
            .args(&argv[1..])
            .status()
            .with_context(|| format!("executing `{}`", format_command(&argv)))?;
        if status.success() {
            Ok(())
        } else {
            bail!(
                "refresh command `{}` failed with exit code {:?}",
                format_command(&argv),
                status.code()
            )
        }
    }
}

fn format_command(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.chars().any(|c| c.is_whitespace()) {
                let escaped = arg.replace('"', "\\\"");
                format!("\"{}\"", escaped)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
