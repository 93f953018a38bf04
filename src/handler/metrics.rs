use {
    crate::state::State,
    actix_web::{web::Data, Error, HttpResponse},
    log::warn,
    prometheus::{Encoder, TextEncoder},
};

pub async fn handler(state: Data<State>) -> Result<HttpResponse, Error> {
    let mut buffer = Vec::new();

    let encoder = TextEncoder::new();
    let metrics = state.gather();

    match encoder.encode(&metrics, &mut buffer) {
        Ok(()) => Ok(HttpResponse::Ok()
            .content_type(encoder.format_type())
            .body(buffer)),
        Err(err) => {
            warn!("failed to encode metrics: {}", err);
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        actix_web::{http::StatusCode, test, web::to, App},
    };

    #[actix_web::test]
    async fn metrics_exposes_registry() {
        let state = Data::new(State::with(false, "test", "http").unwrap());
        state.increase_invocation_counter("HTTP/1.1");

        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/metrics", to(handler)),
        )
        .await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = test::read_body(response).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("test_http_invocation_count_total{proto=\"HTTP/1.1\"} 1"));
    }
}
