use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct Settings {
  /// settings related to the postgresql database
  #[default(Default::default())]
  pub database: DatabaseConfig,
  /// the domain name of your instance
  #[default("localhost")]
  pub hostname: String,
  /// Address where the server should listen for incoming requests
  #[default(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)))]
  pub bind: IpAddr,
  /// Port where the server should listen for incoming requests
  #[default(8536)]
  pub port: u16,
  /// Shared secret used to verify bearer tokens from the identity provider
  #[default("changeme")]
  pub jwt_secret: String,
  /// Name shown on the site endpoint
  #[default("Kgotla")]
  pub instance_name: String,
  /// Sets a response Access-Control-Allow-Origin CORS header
  #[default(None)]
  pub cors_origin: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct DatabaseConfig {
  /// Username to connect to postgres
  #[default("kgotla")]
  pub user: String,
  /// Password to connect to postgres
  #[default("password")]
  pub password: String,
  /// Host where postgres is running
  #[default("localhost")]
  pub host: String,
  /// Port where postgres can be accessed
  #[default(5432)]
  pub port: u16,
  /// Name of the postgres database for kgotla
  #[default("kgotla")]
  pub database: String,
  /// Maximum number of active sql connections
  #[default(30)]
  pub pool_size: usize,
}
