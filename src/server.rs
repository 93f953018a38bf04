use {
    crate::{
        env::Env,
        handler::{healthz, invoke, metrics, statusz},
        state::State,
    },
    actix_web::{
        middleware::Logger,
        web::{to, Data, ServiceConfig},
        App, HttpServer,
    },
    log::info,
    std::io::{Error, ErrorKind, Result},
};

/// Reserved endpoints first; every other path and method is an invocation.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/healthz", to(healthz))
        .route("/metrics", to(metrics))
        .route("/statusz", to(statusz))
        .default_service(to(invoke));
}

pub async fn start() -> Result<()> {
    let state = State::new().map_err(|err| Error::new(ErrorKind::Other, err))?;
    let state = Data::new(state);

    let listen = Env::parse_service_address()?;

    info!("listening on {} (debug: {})", listen, state.debug);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure)
            .wrap(Logger::default())
    })
    .bind(listen)?
    .run()
    .await
}
