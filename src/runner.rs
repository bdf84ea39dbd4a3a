use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config;
use crate::scaffold::{
    AssetIndex, CommandIndex, FolderSpec, NoopIndex, Report, RootName, ScaffoldError, Scaffolder,
};

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

fn run_with_output(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let layout = resolve_layout(cli.layout.as_deref())?;
    let scaffolder = Scaffolder::new(layout);

    if cli.print_layout {
        write!(out, "{}", config::render_layout(scaffolder.layout())?)?;
        return Ok(());
    }

    let mut sink = io::sink();
    let out: &mut dyn Write = if cli.quiet { &mut sink } else { out };

    let Some(name) = cli.root_name.as_deref() else {
        bail!("a root folder name is required");
    };
    let root = RootName::new(name)?;

    if cli.dry_run {
        return write_plan(out, &scaffolder, &root, &cli.base_dir);
    }

    let refresh_cmd = refresh_argv(&cli.refresh_cmd);
    let mut index: Box<dyn AssetIndex> = if refresh_cmd.is_empty() {
        Box::new(NoopIndex)
    } else {
        Box::new(CommandIndex::new(refresh_cmd)?)
    };

    let report = scaffold_and_refresh(&scaffolder, &root, &cli.base_dir, index.as_mut())?;
    write_report(out, &root, &report)
}

/// Drops a leading `--` used to separate the refresh command from this tool's flags.
fn refresh_argv(raw: &[String]) -> Vec<String> {
    match raw.split_first() {
        Some((first, rest)) if first == "--" => rest.to_vec(),
        _ => raw.to_vec(),
    }
}

fn resolve_layout(path: Option<&Utf8Path>) -> Result<FolderSpec> {
    match path {
        Some(path) => config::load_from_path(path),
        None => Ok(FolderSpec::default()),
    }
}

fn write_plan(
    out: &mut dyn Write,
    scaffolder: &Scaffolder,
    root: &RootName,
    base_dir: &Utf8Path,
) -> Result<()> {
    writeln!(out, "Folders for `{}` under {}:", root, base_dir)?;
    for planned in scaffolder.plan(root, base_dir) {
        let marker = if planned.exists { "exists" } else { "create" };
        writeln!(out, "  [{}] {}", marker, planned.path)?;
    }
    writeln!(out, "    (dry-run) skipped")?;
    Ok(())
}

/// Scaffold, then refresh the index once. A failed scaffold never reaches the index.
fn scaffold_and_refresh(
    scaffolder: &Scaffolder,
    root: &RootName,
    base_dir: &Utf8Path,
    index: &mut dyn AssetIndex,
) -> Result<Report> {
    let report = scaffolder
        .apply(root, base_dir)
        .inspect_err(|err| match err {
            ScaffoldError::Filesystem { created, .. } if !created.is_empty() => {
                warn!("{} directories were created before the failure:", created.len());
                for path in created {
                    warn!("  {}", path);
                }
            }
            _ => {}
        })?;

    if report.is_unchanged() {
        info!("every folder under {} already exists", report.root);
    }
    index
        .refresh(&report.root)
        .with_context(|| format!("refreshing asset index for {}", report.root))?;
    Ok(report)
}

fn write_report(out: &mut dyn Write, root: &RootName, report: &Report) -> Result<()> {
    for path in &report.created {
        writeln!(out, "  created {}", path)?;
    }
    writeln!(
        out,
        "Scaffolded {}: {} created, {} already present",
        root,
        report.created.len(),
        report.existing.len()
    )?;
    Ok(())
}
