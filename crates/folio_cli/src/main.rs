//! Terminal host for the Folio core.
//!
//! # Responsibility
//! - Load content, drive widget state from arguments, print filtered views.
//! - Invoke export operations against the real clipboard and a download dir.
//! - Own all stdout/stderr and exit-code decisions.

mod render;

use clap::{Parser, Subcommand};
use folio_core::{
    filter, init_logging, resume_plain_text, Clock, ContentStore, ExportService, HostExport,
    SystemClock, ToolkitBoard, WidgetKind, WidgetRegistry, RESUME_FILENAME,
};
use log::{info, warn};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

const BUNDLED_CONTENT: &str = include_str!("../content/resume.json");

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Browse and export résumé content")]
struct Cli {
    /// Content JSON file; defaults to the bundled sample.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error). Requires --log-dir.
    #[arg(long, global = true, default_value_t = folio_core::default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Directory that receives downloads.
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search cyber-defense resources.
    Resources {
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Search certifications.
    Certs {
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Search and expand toolkit templates.
    Toolkit {
        #[arg(long, short, default_value = "")]
        query: String,
        /// Tag selector; `all` disables tag filtering.
        #[arg(long, short, default_value = "all")]
        tag: String,
        /// Expand an item by title or anchor (repeatable).
        #[arg(long)]
        open: Vec<String>,
        /// List tag selector options instead of items.
        #[arg(long)]
        tags: bool,
    },
    /// Copy a toolkit template to the clipboard.
    Copy {
        /// Item title or anchor.
        item: String,
    },
    /// Save a toolkit template into --out-dir.
    Download {
        /// Item title or anchor.
        item: String,
        /// Override the suggested filename.
        #[arg(long)]
        filename: Option<String>,
    },
    /// Save the whole résumé as plain text into --out-dir.
    Print {
        #[arg(long, default_value = RESUME_FILENAME)]
        filename: String,
    },
    /// Report content data-quality findings.
    Audit,
}

#[derive(Debug)]
enum CliError {
    Content(folio_core::ContentError),
    Logging(folio_core::LoggingError),
    UnknownItem(String),
    EmptyItem(String),
    Clipboard(folio_core::ClipboardError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::UnknownItem(handle) => write!(f, "no toolkit item titled or anchored `{handle}`"),
            Self::EmptyItem(title) => write!(f, "toolkit item `{title}` has no content"),
            Self::Clipboard(err) => write!(f, "Copy failed: {err}"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("folio: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(&cli.log_level, log_dir).map_err(CliError::Logging)?;
    }

    let store = match &cli.content {
        Some(path) => ContentStore::from_path(path),
        None => ContentStore::from_json_str(BUNDLED_CONTENT),
    }
    .map_err(CliError::Content)?;
    for issue in store.audit() {
        warn!(
            "event=content_audit module=cli status=warn code={} detail={}",
            issue.code(),
            issue
        );
    }

    let mut registry = WidgetRegistry::new(store.settings.copied_window());
    let export = HostExport::for_directory(&cli.out_dir);
    let mut service = ExportService::new(export, store.settings.clone());

    match cli.command {
        Command::Resources { query } => {
            let (_, state) = registry.mount_with_state(WidgetKind::ResourceSearch);
            state.set_query(query);
            let items = filter(&store.resources, &state.criteria());
            Ok(render::resources(&items))
        }
        Command::Certs { query } => {
            let (_, state) = registry.mount_with_state(WidgetKind::CertificationSearch);
            state.set_query(query);
            let items = filter(&store.certifications, &state.criteria());
            Ok(render::certifications(&items))
        }
        Command::Toolkit {
            query,
            tag,
            open,
            tags,
        } => {
            if tags {
                let mut options = vec![folio_core::TAG_FILTER_ALL.to_string()];
                options.extend(folio_core::tag_options(&store.toolkit));
                return Ok(format!("{}\n", options.join("\n")));
            }
            let mut board = ToolkitBoard::new(store.settings.copied_window());
            board.set_query(query);
            board.set_tag_filter(tag.as_str());
            for handle in &open {
                let item = store
                    .find_toolkit_item(handle)
                    .ok_or_else(|| CliError::UnknownItem(handle.clone()))?;
                board.open_item(item.key());
            }
            Ok(render::toolkit(&board.visible(&store.toolkit)))
        }
        Command::Copy { item } => {
            let (title, content) = toolkit_content(&store, &item)?;
            let (_, state) = registry.mount_with_state(WidgetKind::CopyButton);
            service
                .copy_with_feedback(content, state.copy_feedback_mut(), SystemClock.now())
                .map_err(CliError::Clipboard)?;
            let label = if state.copy_feedback().is_copied() {
                "Copied"
            } else {
                "Copy"
            };
            info!("event=cli_copy module=cli status=ok item={title}");
            Ok(format!("{label}: {title}\n"))
        }
        Command::Download { item, filename } => {
            let (_, content) = toolkit_content(&store, &item)?;
            let suggested = filename.or_else(|| {
                store
                    .find_toolkit_item(&item)
                    .and_then(|found| found.filename.clone())
            });
            let requested = service.download_as_file(content, suggested.as_deref());
            Ok(format!(
                "Download requested: {}\n",
                cli.out_dir.join(requested).display()
            ))
        }
        Command::Print { filename } => {
            let text = resume_plain_text(&store);
            let requested = service.download_as_file(&text, Some(filename.as_str()));
            Ok(format!(
                "Download requested: {}\n",
                cli.out_dir.join(requested).display()
            ))
        }
        Command::Audit => {
            let issues = store.audit();
            if issues.is_empty() {
                return Ok("No content issues found.\n".to_string());
            }
            Ok(issues
                .iter()
                .map(|issue| format!("{}: {issue}\n", issue.code()))
                .collect())
        }
    }
}

fn toolkit_content<'a>(
    store: &'a ContentStore,
    handle: &str,
) -> Result<(&'a str, &'a str), CliError> {
    let item = store
        .find_toolkit_item(handle)
        .ok_or_else(|| CliError::UnknownItem(handle.to_string()))?;
    let content = item
        .content
        .as_deref()
        .ok_or_else(|| CliError::EmptyItem(item.title.clone()))?;
    Ok((item.title.as_str(), content))
}
