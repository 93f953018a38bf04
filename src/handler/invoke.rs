use {
    crate::{
        invocation::{invoke_async, InvocationContext, InvocationEvent, Response},
        state::State,
    },
    actix_web::{
        http::{StatusCode, Version},
        web::{Data, Payload},
        Error, HttpRequest, HttpResponse,
    },
    futures::StreamExt,
    serde_json::{json, Value},
};

mod header {
    pub const FORMAT: &str = "X-Format";
    pub const REQUEST_ID: &str = "X-Request-Id";
}

mod mode {
    pub const ENVELOPE: &str = "envelope";
}

fn protocol(request: &HttpRequest) -> &'static str {
    match request.version() {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "Unknown",
    }
}

fn event(body: &[u8]) -> InvocationEvent {
    if body.is_empty() {
        return Value::Null.into();
    }
    match serde_json::from_slice(body) {
        Ok(value) => InvocationEvent(value),
        Err(_) => Value::String(String::from_utf8_lossy(body).into_owned()).into(),
    }
}

fn context(request: &HttpRequest, proto: &str) -> InvocationContext {
    let request_id = request
        .headers()
        .get(header::REQUEST_ID)
        .and_then(|value| value.to_str().ok());

    json!({
        "method": request.method().as_str(),
        "path": request.path(),
        "protocol": proto,
        "requestId": request_id,
    })
    .into()
}

fn is_envelope(request: &HttpRequest) -> bool {
    match request.headers().get(header::FORMAT) {
        Some(format) => match format.to_str() {
            Ok(format) => format.eq_ignore_ascii_case(mode::ENVELOPE),
            Err(_) => false,
        },
        None => false,
    }
}

pub async fn handler(
    request: HttpRequest,
    mut payload: Payload,
    state: Data<State>,
) -> Result<HttpResponse, Error> {
    let proto = protocol(&request);

    let _timer = state.start_timer(proto);

    // Unbounded: every body reaches the handler.
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        body.extend_from_slice(&chunk?);
    }

    let result: Response = match invoke_async(event(&body), context(&request, proto)).await {
        Ok(result) => result,
        Err(never) => match never {},
    };

    state.increase_invocation_counter(proto);

    let envelope = is_envelope(&request);

    let mut response = if envelope {
        HttpResponse::Ok()
    } else {
        HttpResponse::build(
            StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
    };

    if state.debug {
        for name in &[header::REQUEST_ID, header::FORMAT] {
            if let Some(value) = request.headers().get(*name) {
                response.insert_header((*name, value.clone()));
            }
        }
    }

    if envelope {
        Ok(response.json(&result))
    } else {
        Ok(response.content_type("application/json").body(result.body))
    }
}
