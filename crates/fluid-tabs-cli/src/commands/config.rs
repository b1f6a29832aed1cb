use anyhow::Result;

use fluid_tabs_core::TabsConfig;

pub fn run(config: &TabsConfig, default: bool) -> Result<()> {
    let output = if default {
        TabsConfig::default().to_toml_string()?
    } else {
        config.to_toml_string()?
    };
    print!("{}", output);
    Ok(())
}
