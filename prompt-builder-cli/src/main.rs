use std::io;
use std::process;

use anyhow::Result;
use prompt_builder::{QuestionTable, RetryPolicy, TemplateStore};
use prompt_builder_cli::cli::Cli;
use prompt_builder_cli::console::{Console, LineConsole, TerminalConsole};
use prompt_builder_cli::error::{handle_cli_result, CliError, CliResult};
use prompt_builder_cli::logging;
use prompt_builder_cli::session::{Session, SessionOutcome};

fn main() {
    let cli = Cli::parse_args();

    logging::init(logging::log_level(&cli));

    if !Cli::should_use_color() {
        colored::control::set_override(false);
    }

    process::exit(handle_cli_result(run(&cli)));
}

fn run(cli: &Cli) -> CliResult<i32> {
    let store = TemplateStore::new(&cli.templates_dir);
    let retry = RetryPolicy::from_max_attempts(cli.max_attempts.map(|n| n as usize));

    tracing::info!(
        "Starting session with templates from {}",
        store.root().display()
    );

    let outcome = if Cli::is_interactive() {
        run_session(&store, TerminalConsole::new(), retry, cli.raw)
    } else {
        let stdin = io::stdin();
        run_session(&store, LineConsole::new(stdin.lock(), io::stdout()), retry, cli.raw)
    }
    .map_err(CliError::fatal)?;

    tracing::debug!("Session ended: {:?}", outcome);
    Ok(outcome.exit_code())
}

fn run_session<C: Console>(
    store: &TemplateStore,
    console: C,
    retry: RetryPolicy,
    raw: bool,
) -> Result<SessionOutcome> {
    Session::new(store, QuestionTable::builtin(), console)
        .with_retry_policy(retry)
        .with_raw_output(raw)
        .run()
}
