//! Lambda request adaptation.
//!
//! `lambda_http` prepends the API Gateway stage to the request path of REST
//! API events (and of HTTP API events on a named stage), so `GET /books` on
//! stage `dev` arrives as `/dev/books`. The router only knows the unstaged
//! paths.

use axum::http::uri::{PathAndQuery, Uri};
use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};

fn stage(req: &Request) -> Option<&str> {
    match req.request_context_ref()? {
        RequestContext::ApiGatewayV1(ctx) => ctx.stage.as_deref(),
        RequestContext::ApiGatewayV2(ctx) => ctx.stage.as_deref(),
        _ => None,
    }
}

fn unstaged_uri(req: &Request) -> Option<Uri> {
    let stage = stage(req)?;
    let prefix = format!("/{stage}");

    let path = match req.uri().path().strip_prefix(&prefix)? {
        "" => "/",
        rest if rest.starts_with('/') => rest,
        _ => return None,
    };

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

/// Remove the API Gateway stage prefix from the request path.
///
/// Requests without a stage, on the `$default` stage, or whose path does not
/// start with the stage are passed through untouched.
pub fn strip_stage_prefix(mut req: Request) -> Request {
    if let Some(uri) = unstaged_uri(&req) {
        tracing::debug!(from = %req.uri().path(), to = %uri.path(), "Stripped stage prefix");
        *req.uri_mut() = uri;
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use http_body_util::BodyExt;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};
    use tower::{ServiceBuilder, ServiceExt};

    use crate::{app::create_app, config::Config, state::AppState};

    fn rest_event(path: &str, stage: &str, query: Value) -> Request {
        let token = encode(
            &Header::default(),
            &json!({ "sub": "auth0|owner" }),
            &EncodingKey::from_secret(b"gateway"),
        )
        .unwrap();

        let event = json!({
            "resource": "/{proxy+}",
            "path": path,
            "httpMethod": "GET",
            "headers": {
                "Host": "abc123.execute-api.us-east-1.amazonaws.com",
                "Authorization": format!("Bearer {token}")
            },
            "queryStringParameters": query,
            "pathParameters": { "proxy": path.trim_start_matches('/') },
            "requestContext": {
                "accountId": "123456789012",
                "resourceId": "us4z18",
                "stage": stage,
                "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
                "identity": { "sourceIp": "192.168.100.1" },
                "resourcePath": "/{proxy+}",
                "httpMethod": "GET",
                "apiId": "abc123"
            },
            "body": null,
            "isBase64Encoded": false
        });

        lambda_http::request::from_str(&event.to_string()).unwrap()
    }

    #[test]
    fn test_strips_stage_from_rest_path() {
        let req = rest_event("/books", "dev", Value::Null);
        assert_eq!(req.uri().path(), "/dev/books");

        let req = strip_stage_prefix(req);
        assert_eq!(req.uri().path(), "/books");
        assert_eq!(
            req.uri().host(),
            Some("abc123.execute-api.us-east-1.amazonaws.com")
        );
    }

    #[test]
    fn test_keeps_query_string() {
        let req = strip_stage_prefix(rest_event("/books", "prod", json!({ "done": "true" })));

        assert_eq!(req.uri().path(), "/books");
        assert_eq!(req.uri().query(), Some("done=true"));
    }

    #[test]
    fn test_default_stage_is_untouched() {
        let req = rest_event("/books", "$default", Value::Null);
        assert_eq!(req.uri().path(), "/books");

        let req = strip_stage_prefix(req);
        assert_eq!(req.uri().path(), "/books");
    }

    #[test]
    fn test_path_sharing_stage_prefix_keeps_its_segment() {
        let req = rest_event("/devices", "dev", Value::Null);
        assert_eq!(req.uri().path(), "/dev/devices");

        assert_eq!(strip_stage_prefix(req).uri().path(), "/devices");
    }

    #[tokio::test]
    async fn test_rest_event_on_named_stage_reaches_router() {
        let state = AppState::in_memory(&Config::for_tests());
        let service = ServiceBuilder::new()
            .map_request(strip_stage_prefix)
            .service(create_app(state));

        let response = service
            .oneshot(rest_event("/books", "dev", Value::Null))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "items": [] }));
    }
}
