use {
    futures::future::{ready, Ready},
    serde::{Deserialize, Serialize},
    serde_json::{json, Value},
    std::convert::Infallible,
};

const STATUS_OK: u16 = 200;
const GREETING: &str = "Hello world!";

/// Payload the host hands to the handler. Never inspected.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

/// Metadata the host attaches to an invocation. Never inspected.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct InvocationContext(pub Value);

/// Result handed back to the host: an HTTP-style status and a JSON text body.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl From<Value> for InvocationEvent {
    fn from(value: Value) -> Self {
        InvocationEvent(value)
    }
}

impl From<Value> for InvocationContext {
    fn from(value: Value) -> Self {
        InvocationContext(value)
    }
}

pub fn handle(_event: &InvocationEvent, _context: &InvocationContext) -> Response {
    Response {
        status_code: STATUS_OK,
        body: json!({ "message": GREETING }).to_string(),
    }
}

/// Callback form of [`handle`]. `completion` runs exactly once, always with `Ok`, and
/// whatever it returns is handed back to the caller.
pub fn invoke<F, T>(event: InvocationEvent, context: InvocationContext, completion: F) -> T
where
    F: FnOnce(Result<Response, Infallible>) -> T,
{
    completion(Ok(handle(&event, &context)))
}

pub fn invoke_async(
    event: InvocationEvent,
    context: InvocationContext,
) -> Ready<Result<Response, Infallible>> {
    invoke(event, context, ready)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> (InvocationEvent, InvocationContext) {
        (json!({}).into(), json!({}).into())
    }

    #[test]
    fn handle_returns_ok_status() {
        let (event, context) = empty();
        assert_eq!(handle(&event, &context).status_code, 200);
    }

    #[test]
    fn handle_body_is_greeting() {
        let (event, context) = empty();
        let response = handle(&event, &context);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({ "message": "Hello world!" }));
        assert_eq!(response.body, r#"{"message":"Hello world!"}"#);
    }

    #[test]
    fn handle_ignores_input() {
        let (event, context) = empty();
        let first = handle(&event, &context);
        let second = handle(
            &json!({ "foo": 1 }).into(),
            &InvocationContext(Value::Null),
        );
        let third = handle(
            &json!([1, "two", null, { "deep": [true] }]).into(),
            &json!("context").into(),
        );
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn response_serializes_as_envelope() {
        let (event, context) = empty();
        let envelope = serde_json::to_string(&handle(&event, &context)).unwrap();
        assert_eq!(
            envelope,
            r#"{"statusCode":200,"body":"{\"message\":\"Hello world!\"}"}"#
        );
    }

    #[test]
    fn invoke_completes_exactly_once() {
        let mut calls = 0;
        let mut seen = None;
        invoke(json!({ "foo": 1 }).into(), Value::Null.into(), |result| {
            calls += 1;
            seen = Some(result);
        });
        assert_eq!(calls, 1);
        match seen {
            Some(Ok(response)) => assert_eq!(response.status_code, 200),
            _ => panic!("completion did not carry a response"),
        }
    }

    #[test]
    fn invoke_returns_completion_value() {
        let status = invoke(Value::Null.into(), Value::Null.into(), |result| match result {
            Ok(response) => response.status_code,
            Err(never) => match never {},
        });
        assert_eq!(status, 200);
    }

    #[actix_rt::test]
    async fn invoke_async_resolves_to_response() {
        let (event, context) = empty();
        let expected = handle(&event, &context);
        let response = invoke_async(event, context).await;
        assert_eq!(response, Ok(expected));
    }
}
