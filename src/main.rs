//! funannotate: command router for the genome annotation pipeline.
//! Entry point only; see `cli`, `registry` and `subcommands/*`.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use funannotate::cli::Router;
use funannotate::config::{Config, Environment};
use funannotate::model::{Invocation, Outcome};
use funannotate::registry::Registry;
use funannotate::subcommands::delegate::ProcessLauncher;
use funannotate::util::logging;
use funannotate::version::Version;

fn run() -> Result<Outcome> {
    let config = Config::from_env(Environment::from_process())?;
    let version = Version::detect(&config.install_dir);
    log::debug!(
        "funannotate {version} installed at {}",
        config.install_dir.display()
    );

    let inv = Invocation::from_args(std::env::args_os());
    let router = Router::new(Registry::standard(), &config, version, &ProcessLauncher);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = router.run(&inv, &mut out)?;
    out.flush()?;
    Ok(outcome)
}

fn main() -> ExitCode {
    logging::init_logging();
    match run() {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
