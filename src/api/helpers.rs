//! Lambda proxy response builders.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde_json::{Value, json};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Returns a JSON response; serialization failure becomes a 500.
#[must_use]
pub fn json_response<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({
            "statusCode": status_code,
            "headers": { "Content-Type": "application/json; charset=utf-8" },
            "body": body
        }),
        Err(e) => text_response(500, &format!("Failed to encode response: {e}")),
    }
}

/// Returns a plain-text response.
#[must_use]
pub fn text_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": TEXT_PLAIN },
        "body": message
    })
}

/// Returns a 302 redirect response.
#[must_use]
pub fn redirect(url: &str) -> Value {
    json!({
        "statusCode": 302,
        "headers": { "Location": url },
        "body": ""
    })
}

/// Returns a 200 response carrying file contents. Non-UTF-8 content is sent
/// base64 encoded.
#[must_use]
pub fn file_response(content_type: &str, bytes: Vec<u8>) -> Value {
    match String::from_utf8(bytes) {
        Ok(text) => json!({
            "statusCode": 200,
            "headers": { "Content-Type": content_type },
            "body": text
        }),
        Err(e) => json!({
            "statusCode": 200,
            "headers": { "Content-Type": content_type },
            "body": BASE64.encode(e.as_bytes()),
            "isBase64Encoded": true
        }),
    }
}

/// Drops the body of a response, keeping status and headers.
#[must_use]
pub fn without_body(mut response: Value) -> Value {
    if let Some(fields) = response.as_object_mut() {
        fields.insert("body".to_string(), Value::String(String::new()));
        fields.remove("isBase64Encoded");
    }
    response
}

#[must_use]
pub fn not_found(method: &str, path: &str) -> Value {
    text_response(404, &format!("Cannot {method} {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_sets_location() {
        let response = redirect("/nn.html");
        assert_eq!(response["statusCode"], 302);
        assert_eq!(response["headers"]["Location"], "/nn.html");
    }

    #[test]
    fn json_response_encodes_body_as_string() {
        let response = json_response(200, &Vec::<String>::new());
        assert_eq!(response["body"], "[]");
        assert_eq!(
            response["headers"]["Content-Type"],
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn binary_files_are_base64_encoded() {
        let response = file_response("image/png", vec![0x89, 0x50, 0x4e, 0x47, 0xff]);
        assert_eq!(response["isBase64Encoded"], true);
        assert_eq!(response["body"], BASE64.encode([0x89, 0x50, 0x4e, 0x47, 0xff]));
    }

    #[test]
    fn without_body_keeps_status_and_headers() {
        let response = without_body(file_response("image/png", vec![0xff, 0xfe]));
        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["headers"]["Content-Type"], "image/png");
        assert_eq!(response["body"], "");
        assert!(response.get("isBase64Encoded").is_none());
    }

    #[test]
    fn text_files_are_sent_verbatim() {
        let response = file_response("text/html", b"<h1>hi</h1>".to_vec());
        assert_eq!(response["body"], "<h1>hi</h1>");
        assert!(response.get("isBase64Encoded").is_none());
    }
}
