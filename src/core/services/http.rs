use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::core::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

// Best-effort text for a rejected JS promise
fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

pub fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Request(format!("failed to serialize body: {}", e)))
}

// Generic fetch executor. Resolves to the response body text of a 2xx response.
pub async fn execute_request(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Unavailable)?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    if let Some(body) = body.as_deref() {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Request(describe_js_error(&e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Request(describe_js_error(&e)))?;
    }

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(describe_js_error(&e)))?
        .dyn_into()
        .map_err(|_| ApiError::Malformed("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| ApiError::Malformed(describe_js_error(&e)))?;
    JsFuture::from(text_promise)
        .await
        .map_err(|e| ApiError::Network(describe_js_error(&e)))?
        .as_string()
        .ok_or_else(|| ApiError::Malformed("response body is not text".to_string()))
}
