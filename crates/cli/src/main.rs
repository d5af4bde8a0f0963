use std::env;
use std::io::stdout;
use std::process::ExitCode;

use bowme_cli::actions::{self, Action, Context};
use bowme_cli::cli_args::{strict_requested, Args, LEGACY_GIST_ID_ENV};
use bowme_core::config;
use bowme_core::error::Result;
use bowme_core::file_handling::LocalStore;
use bowme_core::matcher::MatchMode;
use bowme_core::remote::HttpFetcher;
use clap::Parser;
use log::debug;

fn execute(args: &Args) -> Result<()> {
    let store_path = config::get_store_path(&args.store_path)?;
    debug!("Store path: `{}`", store_path.display());

    let gist_id = args.gist_id_or(env::var(LEGACY_GIST_ID_ENV).ok());
    let default_source = config::default_source(gist_id.as_deref(), args.file_name.as_deref());
    debug!("Default source: {}", default_source);

    let fetcher = HttpFetcher::new();
    let context = Context {
        store: LocalStore::new(store_path),
        fetcher: &fetcher,
        default_source,
        match_mode: if args.literal {
            MatchMode::Literal
        } else {
            MatchMode::Regex
        },
    };

    let action = Action::from_args(args);
    debug!("Action: {:?}", action);

    let mut stdout = stdout().lock();
    actions::run(&action, &context, &mut stdout)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Usage problems are reported like any other failure
            let _ = e.print();
            return ExitCode::from(actions::usage_exit_status(
                &e,
                strict_requested(env::args_os()),
            ));
        }
    };

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(actions::exit_status(args.strict))
        }
    }
}
