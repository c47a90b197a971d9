use clap::Parser;
use kgotla_server::{start_kgotla_server, CmdArgs};
use kgotla_utils::error::KgotlaResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> KgotlaResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_kgotla_server(args).await?;
  Ok(())
}
