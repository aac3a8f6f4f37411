//! deptransfer - install into one npm project the dependencies another one has
//!
//! Compares `dependencies` (or `devDependencies` with `--dev`) of a source and
//! a target package.json and runs `npm install` / `yarn add` for whatever the
//! target is missing.

use clap::Parser;
use deptransfer::cli::CliArgs;
use deptransfer::error::AppError;
use deptransfer::manifest::{find_current_project, resolve_manifest_path};
use deptransfer::orchestrator::{LoadedManifest, Orchestrator};
use deptransfer::output::{create_formatter, theme, OutputConfig};
use deptransfer::package_manager::ShellRunner;
use deptransfer::prompt::confirm;
use std::error::Error as _;
use std::io::{self, Write};
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args).await {
        Ok(exit_code) => exit_code,
        Err(e) => report(&e, args.verbose),
    }
}

/// Main application logic
async fn run(args: &CliArgs) -> anyhow::Result<ExitCode> {
    let Some(source) = &args.source else {
        eprintln!(
            "{}",
            theme::warning("Specify source package path with --source")
        );
        return Ok(ExitCode::SUCCESS);
    };

    if args.verbose {
        eprintln!("deptransfer v{}", env!("CARGO_PKG_VERSION"));
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let cwd = std::env::current_dir()?;
    let mut stdin = BufReader::new(tokio::io::stdin());

    let source = LoadedManifest::source(resolve_manifest_path(source, &cwd), source)?;
    let target = match &args.target {
        Some(target) => LoadedManifest::target(resolve_manifest_path(target, &cwd), target)?,
        None => {
            eprintln!("{}", theme::warning("Target package is not set!"));
            let Some(current) = find_current_project(&cwd) else {
                return Ok(ExitCode::SUCCESS);
            };
            if !ask(args, &mut stdin, "Use current project? ").await? {
                return Ok(ExitCode::SUCCESS);
            }
            LoadedManifest::target(current.clone(), &current)?
        }
    };

    let orchestrator = Orchestrator::new(args.install_options());
    let plan = orchestrator.plan(&source, &target);

    {
        let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose));
        let mut stdout = io::stdout().lock();
        formatter.format(&plan, &mut stdout)?;
        stdout.flush()?;
    }

    if !plan.has_changes() || args.dry_run {
        return Ok(ExitCode::SUCCESS);
    }

    let question = format!(
        "Install {} {} with {}? ",
        plan.reconciliation.len(),
        plan.kind(),
        plan.package_manager()
    );
    if !ask(args, &mut stdin, &question).await? {
        eprintln!("{}", theme::placeholder("Nothing installed."));
        return Ok(ExitCode::SUCCESS);
    }

    let runner = ShellRunner::new().with_stdout_to_stderr(args.json);
    orchestrator.execute(&plan, &runner).await?;

    if !args.json {
        println!("{}", theme::success("Dependencies installed."));
    }
    Ok(ExitCode::SUCCESS)
}

/// Ask a yes/no question on stderr unless `--yes` was given
async fn ask<R>(args: &CliArgs, stdin: &mut R, question: &str) -> Result<bool, AppError>
where
    R: AsyncBufRead + Unpin,
{
    if args.yes {
        return Ok(true);
    }

    let mut stderr = io::stderr();
    // biased: the Ctrl-C listener must be registered before the question is shown
    tokio::select! {
        biased;
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!();
            Err(AppError::Interrupted)
        }
        answer = confirm(stdin, &mut stderr, question) => answer.map_err(AppError::Prompt),
    }
}

/// Print a failure and pick the exit code
fn report(error: &anyhow::Error, verbose: bool) -> ExitCode {
    let Some(app_error) = error.downcast_ref::<AppError>() else {
        eprintln!("{} {:#}", theme::error("Error:"), error);
        return ExitCode::FAILURE;
    };

    // Ctrl-C cancels quietly. Exit right away: a pending stdin read would
    // keep the runtime from shutting down.
    if app_error.is_interrupted() {
        std::process::exit(1);
    }

    if verbose {
        if let Some(cause) = app_error.source() {
            eprintln!("{}", cause);
        }
    }
    eprintln!("{}", theme::error(&app_error.to_string()));
    if let Some(path) = app_error.manifest_path() {
        eprintln!("Path: {}", path.display());
    }

    ExitCode::FAILURE
}
