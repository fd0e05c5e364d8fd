use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use html_inliner::config;
use html_inliner::presentation::{factory, output};
use html_inliner::LocalFs;

use crate::ui::json::{emit_event, events::*};

pub fn cmd_build(config_path: Option<&Path>, json: bool, verbose: u8) -> Result<()> {
    let started = Instant::now();
    if json {
        emit_event(&StartEvent::new("build"))?;
    }

    let (config, warnings) = config::resolve(config_path)?;
    for warning in &warnings {
        if json {
            emit_event(&WarningEvent::from_config("build", warning))?;
        } else {
            log::warn!("{}", output::render_warning(warning));
        }
    }

    let fs = LocalFs::new();
    let mut orchestrator = factory::create_orchestrator(&config, &fs)?;
    let report = factory::create_build_use_case(&config).execute(&mut orchestrator)?;

    if json {
        emit_event(&BuildEvent::new(&report))?;
        emit_event(
            &CompleteEvent::success("build").with_duration(started.elapsed().as_millis() as u64),
        )?;
    } else {
        print!("{}", output::render_build_report(&report, verbose));
    }
    Ok(())
}
