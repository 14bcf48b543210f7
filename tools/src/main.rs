//! staff-router: assign a task description to the best-matching staff member.
//!
//! Usage:
//!   staff-router "Reactコンポーネントを作って"
//!   staff-router --priority high --staff claude-opus "APIエンドポイントを設計して"
//!   staff-router -v --config ./config/staff.yaml "バグを修正して"

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use staff_router_core::{
    analyzer::format_tags,
    audit::AuditLog,
    config::{StaffConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_DIR},
    diag::LogSink,
    report::{render_assignment, render_no_match},
    router::{StaffRouter, TaskRequest},
    types::DEFAULT_PRIORITY,
};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const OPERATIONAL_LOG_FILE: &str = "staff_router.log";

#[derive(Parser, Debug)]
#[command(
    name = "staff-router",
    version,
    about = "Score the staff roster against a task and pick an assignee",
    after_help = "Examples:\n  staff-router \"Reactコンポーネントを作って\"\n  staff-router --priority high --staff claude-opus \"APIエンドポイントを設計して\""
)]
struct Cli {
    /// Task priority (high|medium|low); passed through as given
    #[arg(short, long, value_name = "PRIORITY", default_value = DEFAULT_PRIORITY)]
    priority: String,

    /// Force assignment to this staff id
    #[arg(short, long = "staff", value_name = "ID")]
    staff: Option<String>,

    /// Print analyzed keywords and per-staff scan traces
    #[arg(short, long)]
    verbose: bool,

    /// Staff roster (YAML)
    #[arg(short, long, value_name = "FILE", env = "STAFF_ROUTER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory for the tasks.jsonl audit log
    #[arg(long, value_name = "DIR", env = "STAFF_ROUTER_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Task description; all positional words are joined with spaces
    #[arg(value_name = "TASK")]
    task: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    if env::args_os().len() < 2 {
        print_usage();
        return Ok(ExitCode::FAILURE);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let code = if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            let _ = e.print();
            return Ok(code);
        }
    };

    init_logging(cli.verbose, &cli.log_dir);

    let description = cli.task.join(" ");
    if description.trim().is_empty() {
        print_usage();
        return Ok(ExitCode::FAILURE);
    }

    let mut request = TaskRequest::new(description).with_priority(cli.priority);
    // An empty force id means no force, as if the flag were absent.
    if let Some(id) = cli.staff.filter(|id| !id.is_empty()) {
        request = request.forced_to(id);
    }

    let sink = LogSink;
    let config = StaffConfig::load_or_empty(&cli.config, &sink);
    let Some(roster) = config.roster() else {
        log::error!("no staff data found in {}", cli.config.display());
        return Ok(ExitCode::FAILURE);
    };

    let router = StaffRouter::new(roster, &sink);
    let outcome = router.route(&request);

    if cli.verbose {
        println!("\n[analysis] keywords: {}\n", format_tags(&outcome.tags));
    }

    let Some(selection) = &outcome.selection else {
        print!("{}", render_no_match(&request, roster));
        return Ok(ExitCode::FAILURE);
    };

    let staff = router
        .staff_for(selection)
        .with_context(|| format!("selected staff {} missing from roster", selection.staff_id))?;
    print!("{}", render_assignment(&request, selection, staff));

    if let Some(entry) = router.audit_entry(&request, &outcome) {
        let audit = AuditLog::new(&cli.log_dir);
        match audit.append(&entry) {
            Ok(()) => log::info!("audit entry written to {}", audit.path().display()),
            Err(e) => log::error!("failed to write audit log {}: {e}", audit.path().display()),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Log lines go to stderr and, when it can be opened, to
/// `<log_dir>/staff_router.log`.
fn init_logging(verbose: bool, log_dir: &Path) {
    let default_filter = if verbose { "debug" } else { "info" };
    let tee = TeeWriter { file: open_log_file(log_dir) };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Pipe(Box::new(tee)))
        .init();
}

fn open_log_file(log_dir: &Path) -> Option<File> {
    fs::create_dir_all(log_dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(OPERATIONAL_LOG_FILE))
        .ok()
}

/// Writes every log line to stderr and to the log file. A file that stops
/// accepting writes is dropped; stderr keeps going.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            if file.write_all(buf).is_err() {
                self.file = None;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        io::stderr().flush()
    }
}

fn print_usage() {
    let _ = Cli::command().print_help();
    println!();
}
