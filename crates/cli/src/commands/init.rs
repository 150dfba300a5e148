//! `docquery init` — write a default config file.

use docquery_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = AppConfig::config_dir().join("config.toml");
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    std::fs::create_dir_all(AppConfig::config_dir())?;
    std::fs::write(&path, AppConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}
