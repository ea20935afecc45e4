//! fetch呼び出し（共通処理）

use leptos::logging::warn;
use serde::de::DeserializeOwned;
use vividhands_common::routes::error_message_from_body;
use vividhands_common::{ApiRoutes, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// リクエスト本文
pub enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

/// APIのベースURL。ビルド時の `VIVIDHANDS_API_URL` が無ければ配信元
pub fn routes() -> ApiRoutes {
    match option_env!("VIVIDHANDS_API_URL") {
        Some(url) if !url.trim().is_empty() => ApiRoutes::new(url),
        _ => web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .map(|origin| ApiRoutes::new(&origin))
            .unwrap_or_default(),
    }
}

pub fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// リクエストを送り、2xx以外はエラーメッセージにする
pub async fn send(
    method: &str,
    url: &str,
    session: Option<&Session>,
    body: Body,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    match &body {
        Body::Empty => {}
        Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
        Body::Form(form) => opts.set_body(form),
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if matches!(body, Body::Json(_)) {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }
    if let Some(session) = session {
        request
            .headers()
            .set("Authorization", &session.bearer())
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        let status = resp.status();
        let text = read_text(&resp).await.unwrap_or_default();
        let message = error_message_from_body(&text)
            .unwrap_or_else(|| format!("API error: {}", status));
        warn!("{} {} failed ({}): {}", method, url, status, message);
        return Err(message);
    }

    Ok(resp)
}

pub async fn read_text(resp: &Response) -> Result<String, String> {
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

/// 本文をJSONとして読む
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    let text = read_text(&resp).await?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(url: &str, session: Option<&Session>) -> Result<T, String> {
    let resp = send("GET", url, session, Body::Empty).await?;
    read_json(resp).await
}
