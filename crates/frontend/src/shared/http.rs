//! The one place that turns an [`ApiCall`] into a browser request.

use super::api_utils::api_url;
use gloo_net::http::{Request, RequestBuilder};
use mep_contracts::domain::common::{RecordId, Resource};
use mep_contracts::shared::api::{ApiCall, ApiError, Endpoint, HttpMethod};
use serde::de::DeserializeOwned;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

/// Send the call and return the raw body of a 2xx response
pub async fn send(call: &ApiCall) -> Result<String, ApiError> {
    let target = call.path_and_query();
    let url = api_url(&target);
    log::debug!("{} {}", call.method.as_str(), target);

    let request = match &call.body {
        Some(body) => builder(call.method, &url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder(call.method, &url)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", call.method.as_str(), target, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        let error = ApiError::from_status(status, &body);
        log::warn!("{} {} -> {}", call.method.as_str(), target, error);
        return Err(error);
    }

    if call.method != HttpMethod::Get {
        log::info!("{} {} -> {}", call.method.as_str(), target, status);
    }
    Ok(body)
}

/// Send the call and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(call: &ApiCall) -> Result<T, ApiError> {
    let body = send(call).await?;
    serde_json::from_str(&body).map_err(|e| {
        log::warn!("cannot decode {}: {}", call.path, e);
        ApiError::Decode(e.to_string())
    })
}

/// Send a mutation whose response body is not needed
pub async fn execute(call: &ApiCall) -> Result<(), ApiError> {
    send(call).await.map(|_| ())
}

/// `GET /{resource}/:id`
pub async fn fetch_detail<T: Resource>(id: &RecordId) -> Result<T, ApiError> {
    fetch_json(&Endpoint::detail(T::KIND, id)).await
}
