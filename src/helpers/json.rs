use actix_web::error::{Error, InternalError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

/// Body of every JSON error response.
#[derive(Debug, Serialize)]
pub struct JsonResponse {
    pub message: String,
}

#[derive(Default)]
pub struct JsonResponseBuilder {
    message: String,
}

impl JsonResponseBuilder {
    pub fn set_msg<I: Into<String>>(mut self, msg: I) -> Self {
        self.message = msg.into();
        self
    }

    fn into_response(self) -> JsonResponse {
        JsonResponse {
            message: self.message,
        }
    }

    pub fn to_json_string(self) -> String {
        serde_json::to_string(&self.into_response()).unwrap_or_default()
    }

    pub fn error<I: Into<String>>(self, status: StatusCode, msg: I) -> Error {
        let msg: String = msg.into();
        let body = self.set_msg(msg.clone()).into_response();
        InternalError::from_response(msg, HttpResponse::build(status).json(body)).into()
    }

    pub fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg)
    }

    pub fn form_error<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg)
    }

    pub fn unauthorized<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn not_found<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::NOT_FOUND, msg)
    }

    pub fn bad_gateway<I: Into<String>>(self, msg: I) -> Error {
        self.error(StatusCode::BAD_GATEWAY, msg)
    }

    pub fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        let msg: String = msg.into();
        let msg = if msg.trim().is_empty() {
            String::from("Internal error")
        } else {
            msg
        };
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

/// `{"success": true}` for actions that return no resource.
pub fn success() -> web::Json<serde_json::Value> {
    web::Json(json!({ "success": true }))
}
