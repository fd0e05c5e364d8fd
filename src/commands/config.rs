use std::path::Path;

use anyhow::Result;

use html_inliner::config;
use html_inliner::presentation::output;

use crate::ui::json::{emit_event, events::*};

pub fn cmd_config(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (config, warnings) = config::resolve(config_path)?;

    if json {
        for warning in &warnings {
            emit_event(&WarningEvent::from_config("config", warning))?;
        }
        emit_event(&ConfigEvent::new(&config))?;
    } else {
        for warning in &warnings {
            log::warn!("{}", output::render_warning(warning));
        }
        print!("{}", output::render_config(&config));
    }
    Ok(())
}
