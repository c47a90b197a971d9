use crate::error::KgotlaResult;
use std::{env, fs, sync::LazyLock};

pub mod structs;

use structs::Settings;

static DEFAULT_CONFIG_FILE: &str = "config/config.hjson";

pub static SETTINGS: LazyLock<Settings> =
  LazyLock::new(|| Settings::init().expect("Failed to load settings file"));

impl Settings {
  /// Reads config from the hjson config file, falling back to defaults for
  /// anything not set there. The config file location can be overridden with
  /// `KGOTLA_CONFIG_LOCATION`.
  fn init() -> KgotlaResult<Self> {
    let config_file =
      env::var("KGOTLA_CONFIG_LOCATION").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
    let settings = match fs::read_to_string(config_file) {
      Ok(config) => deser_hjson::from_str::<Settings>(&config)?,
      Err(_) => Settings::default(),
    };
    Ok(settings)
  }

  pub fn get_database_url(&self) -> String {
    // The env var takes precedence, same as with diesel-cli
    if let Ok(url) = env::var("KGOTLA_DATABASE_URL") {
      return url;
    }
    let conf = &self.database;
    format!(
      "postgres://{}:{}@{}:{}/{}",
      conf.user, conf.password, conf.host, conf.port, conf.database,
    )
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_defaults_parse() -> KgotlaResult<()> {
    let settings = deser_hjson::from_str::<Settings>("{ hostname: \"kgotla.example\" }")?;
    assert_eq!("kgotla.example", settings.hostname);
    assert_eq!(8536, settings.port);
    Ok(())
  }
}
