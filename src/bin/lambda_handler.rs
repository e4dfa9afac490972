//! AWS Lambda handler for running calculations
//!
//! Accepts a calculation request as the JSON body of a Lambda Function URL call
//! and returns the result as JSON. Invalid JSON or inputs get a 400 with an
//! `{"error": ...}` body.

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use credit_core::request::CalculationRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

fn cors_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

/// Function URL response envelope
fn response(status: u16, body: String) -> Value {
    json!({
        "statusCode": status,
        "headers": cors_headers(),
        "body": body,
        "isBase64Encoded": false,
    })
}

fn error_body(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// Evaluate a request body, returning the HTTP status and response body
fn handle_body(body: Option<&str>, is_base64_encoded: bool) -> (u16, String) {
    if is_base64_encoded {
        return (400, error_body("Binary request bodies are not supported"));
    }
    let body = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => return (400, error_body("Missing request body")),
    };

    let request: CalculationRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return (400, error_body(&format!("Invalid JSON: {}", e))),
    };

    match request.evaluate() {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => (200, json),
            Err(e) => (500, error_body(&format!("Failed to serialize result: {}", e))),
        },
        Err(e) => {
            log::warn!("{} request rejected: {}", request.kind(), e);
            (400, error_body(&e.to_string()))
        }
    }
}

/// Main Lambda handler
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, String::new()));
    }

    let (status, body) = handle_body(request.body.as_deref(), request.is_base64_encoded);
    log::info!("responded {} in {:?}", status, start.elapsed());
    Ok(response(status, body))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_returns_200() {
        let (status, body) = handle_body(
            Some(r#"{"calculation": "utilization", "current_balance": 2000, "credit_limit": 10000}"#),
            false,
        );
        assert_eq!(status, 200);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["calculation"], "utilization");
        assert_eq!(json["percent"], 20.0);
        assert_eq!(json["tier"], "Good");
    }

    #[test]
    fn test_invalid_json_returns_400() {
        let (status, body) = handle_body(Some("{not json"), false);
        assert_eq!(status, 400);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_invalid_input_returns_400() {
        let (status, body) = handle_body(
            Some(r#"{"calculation": "interest", "principal": -1}"#),
            false,
        );
        assert_eq!(status, 400);
        assert!(body.contains("principal"));
    }

    #[test]
    fn test_overflowing_interest_returns_400() {
        let (status, body) = handle_body(
            Some(r#"{"calculation": "interest", "annual_rate_percent": 100, "years": 2000}"#),
            false,
        );
        assert_eq!(status, 400);
        assert!(!body.contains("null"));
    }

    #[test]
    fn test_missing_or_binary_body() {
        assert_eq!(handle_body(None, false).0, 400);
        assert_eq!(handle_body(Some("  "), false).0, 400);
        assert_eq!(handle_body(Some("e30="), true).0, 400);
    }

    #[test]
    fn test_response_envelope() {
        let value = response(200, "{}".to_string());
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(value["body"], "{}");
    }
}
