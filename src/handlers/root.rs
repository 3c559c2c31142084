//! Root welcome endpoint.
//! Used by: server.

use axum::Json;
use serde::Serialize;

pub const WELCOME: &str = "Welcome to the Express API server";

#[derive(Debug, Serialize)]
pub struct WelcomeMessage {
    pub message: &'static str,
}

pub async fn welcome() -> Json<WelcomeMessage> {
    Json(WelcomeMessage { message: WELCOME })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_message_object() {
        let json = serde_json::to_value(WelcomeMessage { message: WELCOME }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Welcome to the Express API server" })
        );
    }
}
