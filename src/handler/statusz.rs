use {
    crate::state::State,
    actix_web::{web::Data, Error, HttpResponse},
    serde::Serialize,
};

#[derive(Serialize)]
struct Status {
    name: &'static str,
    version: &'static str,
    debug: bool,
}

pub async fn handler(state: Data<State>) -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().json(Status {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        debug: state.debug,
    }))
}
