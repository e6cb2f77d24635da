use boardsel_lib::util::{create_spinner, device_table};
use boardsel_lib::{discover_devices, Config, Result, SystemRunner};
use console::style;

pub fn handle_list_command(config: &Config, json: bool, quiet: bool) -> Result<()> {
    let spinner = (!quiet && !json).then(|| create_spinner("Looking for boards..."));
    let devices = discover_devices(&SystemRunner, &config.tool_command);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let devices = devices?;

    if json {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    if devices.is_empty() {
        println!("{}", style("No boards connected").yellow());
        return Ok(());
    }

    println!("{}", device_table(&devices));
    Ok(())
}
