//! CLI entry point - the composition root.
//!
//! This is the ONLY place where settings are resolved and adapters are
//! wired together. Command dispatch routes to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use venvdbg_core::ConfigOverrides;

use venvdbg_cli::commands::pattern_syntax;
use venvdbg_cli::presentation::OutputFormat;
use venvdbg_cli::{Cli, CliError, Commands, bootstrap, exit_code_for, handlers, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before anything reads VENVDBG_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code_for(&err);
            // Child exit codes are already visible to the user; no extra noise
            if !matches!(err.downcast_ref::<CliError>(), Some(CliError::ChildExit(_))) {
                eprintln!("error: {err:#}");
            }
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut overrides = ConfigOverrides {
        venv_root: cli.root,
        marker_name: cli.marker,
        ..ConfigOverrides::default()
    };
    if let Commands::Debug {
        ref runtime_dir,
        ref launcher,
        ..
    } = command
    {
        overrides.runtime_dir.clone_from(runtime_dir);
        overrides.launcher.clone_from(launcher);
    }

    let ctx = bootstrap(&overrides)?;

    match command {
        Commands::Resolve {
            selector,
            json,
            quiet,
        } => {
            handlers::resolve::execute(&ctx, &selector, OutputFormat::from_flags(json, quiet))?;
        }
        Commands::Debug { selector, .. } => {
            let launcher = ctx.launcher()?;
            handlers::debug::execute(&ctx, &selector, &launcher).await?;
        }
        Commands::List {
            test,
            fixed_strings,
            json,
        } => {
            handlers::list::execute(&ctx, test.as_deref(), pattern_syntax(fixed_strings), json)?;
        }
        Commands::Paths => {
            handlers::paths::execute(&ctx)?;
        }
    }

    Ok(())
}
