use std::path::PathBuf;

use argh::FromArgs;

#[derive(Debug, Clone, FromArgs)]
#[argh(description = "Replays a script of commit/verify calls against a fresh proposer")]
pub struct Args {
    #[argh(option, short = 'c', description = "path to configuration")]
    pub config: PathBuf,

    #[argh(positional, description = "path to the JSON script to replay")]
    pub script: PathBuf,

    #[argh(switch, description = "keep going after a step fails")]
    pub keep_going: bool,

    #[argh(switch, description = "log as JSON lines")]
    pub json_logs: bool,
}
