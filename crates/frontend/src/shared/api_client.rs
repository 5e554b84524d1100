//! Request client for the procurement API.
//!
//! Every call goes through [`ApiClient::request`]: it attaches the JSON and
//! Basic auth headers, sends the request with gloo-net and hands status,
//! status text and body to `contracts::domain::common::decode_response`, so
//! callers only ever see `ApiResult<T>`.

use contracts::domain::common::{decode_response, ApiError, ApiResult};
use contracts::system::auth::authorization_header;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use super::api_utils::api_base;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    authorization: Option<String>,
    on_unauthorized: Option<Callback<()>>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: api_base(),
            authorization: token.as_deref().map(authorization_header),
            on_unauthorized: None,
        }
    }

    /// Вызывается при любом ответе 401
    pub fn with_unauthorized_handler(mut self, handler: Callback<()>) -> Self {
        self.on_unauthorized = Some(handler);
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(HttpMethod::Get, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    /// POST без тела (например, `/reactivate`)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request::<T, ()>(HttpMethod::Post, path, None).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.request(HttpMethod::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request::<(), ()>(HttpMethod::Delete, path, None).await
    }

    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");
        if let Some(auth) = &self.authorization {
            builder = builder.header("Authorization", auth);
        }

        let request = build_request(builder, body)?;

        let response = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::transport(e.to_string())
        })?;

        let status = response.status();
        let status_text = response.status_text();
        // 204 никогда не читается и не разбирается
        let text = if status == 204 {
            String::new()
        } else {
            read_body(response.text().await).inspect_err(|err| {
                log::warn!("{} {} -> {}: {}", method, url, status, err);
            })?
        };

        let result = decode_response::<T>(status, &status_text, &text);
        if let Err(err) = &result {
            log::warn!("{} {} -> {}: {}", method, url, status, err);
            if err.is_unauthorized() {
                if let Some(handler) = self.on_unauthorized {
                    handler.run(());
                }
            }
        }
        result
    }
}

fn build_request<B: Serialize>(builder: RequestBuilder, body: Option<&B>) -> ApiResult<Request> {
    match body {
        Some(body) => {
            let json = serde_json::to_string(body).map_err(ApiError::invalid_request)?;
            builder.body(json).map_err(ApiError::invalid_request)
        }
        None => builder.build().map_err(ApiError::invalid_request),
    }
}

/// Тело, которое не удалось дочитать, считается сетевым сбоем даже при 2xx
fn read_body<E: fmt::Display>(read: Result<String, E>) -> ApiResult<String> {
    read.map_err(|e| ApiError::transport(format!("Не удалось прочитать ответ: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_body_is_transport_error() {
        let err = read_body(Err("stream aborted")).unwrap_err();
        assert!(err.is_network());
        assert!(err.message.contains("stream aborted"));

        assert_eq!(read_body::<String>(Ok("{}".into())).unwrap(), "{}");
    }
}
