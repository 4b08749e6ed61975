mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use parser::{AssembleArgs, AuthArgs, Cli, Commands, RelayArgs};
pub(crate) use tracing::init as init_tracing;
