pub mod api_routes_http;
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_cors::Cors;
use actix_web::{web::Data, App, HttpServer};
use clap::Parser;
use kgotla_api_common::context::KgotlaContext;
use kgotla_db_schema::utils::build_db_pool;
use kgotla_utils::{error::KgotlaResult, settings::SETTINGS};
use tracing::info;
use tracing_actix_web::TracingLogger;

#[derive(Parser, Debug)]
#[command(
  version,
  about = "The kgotla server, a discussion forum backend",
  long_about = None
)]
pub struct CmdArgs {
  /// Disables the http server. Useful to only run the migrations.
  #[arg(long, default_value_t = false)]
  pub disable_http_server: bool,
}

/// Builds the db pool (running migrations) and starts the http server.
pub async fn start_kgotla_server(args: CmdArgs) -> KgotlaResult<()> {
  let settings = SETTINGS.to_owned();

  let pool = build_db_pool().await?;
  let context = KgotlaContext::create(pool);

  if args.disable_http_server {
    return Ok(());
  }

  info!(
    "Starting http server at {}:{}",
    settings.bind, settings.port
  );

  let bind = (settings.bind, settings.port);
  HttpServer::new(move || {
    let cors_config = match &SETTINGS.cors_origin {
      Some(origin) => Cors::default()
        .allowed_origin(origin)
        .allow_any_method()
        .allow_any_header(),
      None => Cors::permissive(),
    };

    App::new()
      .wrap(TracingLogger::default())
      .wrap(cors_config)
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config)
  })
  .bind(bind)?
  .run()
  .await?;

  Ok(())
}
