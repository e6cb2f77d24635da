use boardsel_lib::{tool_version, Config, Result, SystemRunner};
use console::style;

pub fn handle_config_command(config: &Config) -> Result<()> {
    let version = match tool_version(&SystemRunner, &config.tool_command) {
        Ok(version) => style(version).green(),
        Err(e) => {
            log::debug!("Version check failed: {}", e);
            style("not found".to_string()).red()
        }
    };

    println!("Tool command: {}", config.tool_command);
    println!("Tool version: {}", version);
    println!("Selection file: {}", config.selection_path.display());
    match &config.settings_path {
        Some(path) => println!("Settings file: {}", path.display()),
        None => println!("Settings file: {}", style("none").dim()),
    }
    Ok(())
}
