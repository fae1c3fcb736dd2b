//! Gateway error-body parsing.

use serde_json::Value;

/// Extract a displayable message from a non-2xx gateway response body.
///
/// Looks at `detail` first (a string, or the list of validation failures the
/// gateway emits for malformed payloads), then `message`. Anything else falls
/// back to a generic status line.
pub fn parse_error_body(status: u16, body: &str) -> String {
    let fallback = || format!("Request failed with status {}", status);

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    match json.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => return detail.clone(),
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items.iter().filter_map(describe_item).collect();
            if !messages.is_empty() {
                return messages.join("; ");
            }
        },
        _ => {},
    }

    match json.get("message") {
        Some(Value::String(message)) if !message.trim().is_empty() => message.clone(),
        _ => fallback(),
    }
}

/// One entry of a validation-failure list: `{"loc": [..., "field"], "msg": "..."}`.
fn describe_item(item: &Value) -> Option<String> {
    let msg = item.get("msg")?.as_str()?;
    let field = item
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .and_then(Value::as_str);
    Some(match field {
        Some(field) => format!("{}: {}", field, msg),
        None => msg.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_list() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","nickname"],"msg":"String should have at least 3 characters"}
        ]}"#;
        assert_eq!(
            parse_error_body(422, body),
            "email: value is not a valid email address; nickname: String should have at least 3 characters"
        );
    }

    #[test]
    fn test_message_field() {
        assert_eq!(parse_error_body(400, r#"{"message":"Slug already taken"}"#), "Slug already taken");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(parse_error_body(502, "<html>Bad Gateway</html>"), "Request failed with status 502");
        assert_eq!(parse_error_body(500, r#"{"detail":""}"#), "Request failed with status 500");
    }
}
