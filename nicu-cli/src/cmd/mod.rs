//! Subcommands for the NICU CLI.
//!
//! Both commands read the file from disk and push it through the same
//! upload path the web app uses, so a file that fails here fails there too.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use nicu_core::upload::FORMAT_ERROR_MESSAGE;
use nicu_core::{Table, UploadedFile};
use nicu_figures::Dashboard;
use std::path::{Path, PathBuf};

pub mod inspect;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Parse a CSV/Excel file and print its columns and first rows
    Inspect {
        file: PathBuf,

        /// Number of rows to print as JSON records
        #[arg(short = 'n', long, default_value_t = 5)]
        rows: usize,
    },

    /// Build the dashboards for a file and write them to a standalone HTML page
    Render {
        file: PathBuf,

        /// Output HTML path
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Which dashboard to include
        #[arg(short = 'd', long, value_enum, default_value_t = DashboardOpt::All)]
        dashboard: DashboardOpt,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DashboardOpt {
    Weight,
    Abga,
    All,
}

impl DashboardOpt {
    pub fn dashboards(self) -> Vec<Dashboard> {
        match self {
            DashboardOpt::Weight => vec![Dashboard::Weight],
            DashboardOpt::Abga => vec![Dashboard::Abga],
            DashboardOpt::All => Dashboard::ALL.to_vec(),
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Inspect { file, rows } => inspect::run_inspect(&file, rows),
        Command::Render {
            file,
            output,
            dashboard,
        } => render::run_render(&file, &output, dashboard),
    }
}

/// MIME type a browser would report for the file, from its extension.
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => "text/csv",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        _ => "",
    }
}

/// Read a file from disk and parse it as an upload.
pub fn load_table(path: &Path) -> anyhow::Result<(UploadedFile, Table)> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let upload = UploadedFile::from_bytes(filename, guess_mime(path), &bytes);
    let table = upload
        .parse()
        .with_context(|| format!("{} ({})", FORMAT_ERROR_MESSAGE, path.display()))?;
    log::info!(
        "[NICU] cli: Loaded {} rows from {}",
        table.len(),
        path.display()
    );
    Ok((upload, table))
}
