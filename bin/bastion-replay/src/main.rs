//! Replays a JSON script of deposits, commits and verifies against an
//! in-memory proposer configured from TOML, then prints a JSON summary.

use std::{fs, path::Path};

use bastion_common::logging;
use bastion_config::Config;
use tracing::*;

use crate::{
    args::Args,
    errors::InitError,
    replay::{Replayer, Summary},
    script::Script,
};

mod args;
mod errors;
mod replay;
mod script;

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    if let Err(e) = main_inner(args) {
        eprintln!("FATAL ERROR: {e}");
        return Err(e);
    }

    Ok(())
}

fn main_inner(args: Args) -> anyhow::Result<()> {
    let mut lconfig = logging::LoggerConfig::with_base_name("bastion-replay");
    lconfig.set_json(args.json_logs);
    logging::init(lconfig);

    let config = load_config(&args.config)?;
    let script = load_script(&args.script)?;

    let summary = run(&config, &script, args.keep_going)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    logging::finalize();
    Ok(())
}

fn load_config(path: &Path) -> Result<Config, InitError> {
    let raw = fs::read_to_string(path).map_err(|e| InitError::Io(path.to_owned(), e))?;
    Ok(toml::from_str(&raw)?)
}

fn load_script(path: &Path) -> Result<Script, InitError> {
    let raw = fs::read_to_string(path).map_err(|e| InitError::Io(path.to_owned(), e))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Plays every step.  Stops at the first failure unless `keep_going` is set.
fn run(config: &Config, script: &Script, keep_going: bool) -> anyhow::Result<Summary> {
    let mut replayer = Replayer::from_config(config)?;
    info!(steps = %script.steps.len(), "starting replay");

    for (idx, step) in script.steps.iter().enumerate() {
        if let Err(e) = replayer.run_step(idx, step) {
            if !keep_going {
                return Err(e.into());
            }
        }
    }

    let summary = replayer.finish();
    info!(
        last_committed = %summary.last_committed_block,
        last_verified = %summary.last_verified_block,
        failed = %summary.failed_steps.len(),
        "replay finished"
    );
    Ok(summary)
}
