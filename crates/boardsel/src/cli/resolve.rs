use boardsel_lib::util::{create_spinner, or_dash};
use boardsel_lib::{Config, Reconciler, Resolution, Result, SystemRunner};
use console::style;
use serde_json::json;
use std::path::{Path, PathBuf};

pub fn handle_resolve_command(
    config: &Config,
    path: Option<PathBuf>,
    as_json: bool,
    quiet: bool,
) -> Result<()> {
    let path = path.unwrap_or_else(|| config.selection_path.clone());
    let reconciler = Reconciler::new(SystemRunner, config.tool_command.clone());

    let spinner = (!quiet && !as_json).then(|| create_spinner("Looking for boards..."));
    let resolution = reconciler.resolve(&path);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let resolution = resolution?;

    if as_json {
        let warnings: Vec<String> = resolution.warnings.iter().map(|w| w.to_string()).collect();
        let output = json!({
            "from_live_discovery": resolution.from_live_discovery,
            "config_updated": resolution.config_updated,
            "device": resolution.device,
            "warnings": warnings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !quiet {
        print_resolution(&resolution, &path);
    }
    Ok(())
}

fn print_resolution(resolution: &Resolution, path: &Path) {
    for warning in &resolution.warnings {
        println!("{} {}", style("!").yellow(), warning);
    }

    let device = &resolution.device;
    let source = if resolution.from_live_discovery {
        style("connected").green()
    } else {
        style("saved selection, not connected").yellow()
    };

    println!("{} Board resolved ({})", style("✓").green(), source);
    println!("  Port: {}", style(&device.port).bold());
    println!("  FQBN: {}", or_dash(Some(device.board_identifier.as_str())));
    println!("  Board name: {}", or_dash(device.board_name.as_deref()));
    println!("  Core: {}", or_dash(device.core.as_deref()));

    if resolution.config_updated {
        println!("  Updated {}", path.display());
    }
}
