use super::CmdResult;
use crate::config::Rl1Config;
use crate::error::Result;

/// The effective configuration after files and environment are applied.
pub fn run(config: &Rl1Config) -> Result<CmdResult> {
    Ok(CmdResult::default().with_config(config.clone()))
}
