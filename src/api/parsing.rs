//! Decoding of Lambda HTTP events into requests and form fields.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::core::models::FormFields;
use crate::errors::BoardError;

/// The parts of an incoming HTTP event the router cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpRequest {
    /// Reads an API Gateway / Function URL event (payload format 1.0 or 2.0).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ParseError`] if the method or path is missing,
    /// or if a base64 body cannot be decoded as UTF-8 text.
    pub fn from_event(payload: &Value) -> Result<Self, BoardError> {
        let method = v_str(payload, &["requestContext", "http", "method"])
            .or_else(|| v_str(payload, &["httpMethod"]))
            .ok_or_else(|| BoardError::ParseError("Missing HTTP method".to_string()))?
            .to_ascii_uppercase();

        let path = v_str(payload, &["rawPath"])
            .or_else(|| v_str(payload, &["path"]))
            .ok_or_else(|| BoardError::ParseError("Missing request path".to_string()))?
            .to_string();

        let content_type = payload
            .get("headers")
            .and_then(|headers| get_header_value(headers, "Content-Type"))
            .map(ToString::to_string);

        let raw_body = v_str(payload, &["body"]).unwrap_or("");
        let is_base64 = payload
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let body = if is_base64 {
            decode_base64_body(raw_body)?
        } else {
            raw_body.to_string()
        };

        Ok(Self {
            method,
            path,
            content_type,
            body,
        })
    }

    /// Decodes the body as form fields according to its content type.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ParseError`] for a JSON body that is malformed
    /// or a bare scalar.
    pub fn form(&self) -> Result<FormFields, BoardError> {
        if self.is_json() {
            parse_json_form(&self.body)
        } else {
            Ok(parse_urlencoded(&self.body))
        }
    }

    fn is_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ct| {
            ct.split(';')
                .next()
                .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        })
    }
}

fn decode_base64_body(raw: &str) -> Result<String, BoardError> {
    let bytes = BASE64
        .decode(raw)
        .map_err(|e| BoardError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| BoardError::ParseError(format!("Body is not valid UTF-8: {e}")))
}

/// Parses an `application/x-www-form-urlencoded` body. The last value wins
/// for repeated keys.
#[must_use]
pub fn parse_urlencoded(body: &str) -> FormFields {
    url::form_urlencoded::parse(body.trim().as_bytes())
        .into_owned()
        .collect()
}

/// Parses a JSON object body into form fields.
///
/// Strings are taken as-is, other scalars use their JSON text, nested
/// values are kept as JSON text and `null` counts as missing. An array
/// carries no named fields and decodes to an empty form.
///
/// # Errors
///
/// Returns [`BoardError::ParseError`] for malformed JSON or a bare scalar.
pub fn parse_json_form(body: &str) -> Result<FormFields, BoardError> {
    if body.trim().is_empty() {
        return Ok(FormFields::new());
    }

    let map = match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => map,
        Value::Array(_) => return Ok(FormFields::new()),
        _ => {
            return Err(BoardError::ParseError(
                "JSON body must be an object or array".to_string(),
            ));
        }
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
