//! HTTP transport behind the request pipeline.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`, raced against a
//! `gloo-timers` deadline since `fetch` has no timeout of its own.
//! Server-side (SSR): every request fails as a network error; the backend is
//! only reachable from the browser.

#![allow(clippy::unused_async)]

use super::pipeline::{HttpRequest, HttpResponse, TransportError};

/// Sends one resolved request and returns the raw response.
///
/// Futures are `?Send` because browser fetch futures are bound to the JS
/// event loop.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let in_flight = Box::pin(fetch(request));
            let millis = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
            let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(millis));
            match select(in_flight, deadline).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(((), _)) => Err(TransportError::Timeout(request.timeout)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError::Failed(format!(
                "no browser transport available for {}",
                request.url
            )))
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: &HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::{Request, RequestBuilder};

    use super::pipeline::HttpMethod;

    let failed = |e: gloo_net::Error| TransportError::Failed(e.to_string());

    let mut builder: RequestBuilder = match request.method {
        HttpMethod::Get => Request::get(&request.url),
        HttpMethod::Post => Request::post(&request.url),
        HttpMethod::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if request.include_credentials {
        builder = builder.credentials(web_sys::RequestCredentials::Include);
    }
    let prepared = match &request.body {
        Some(body) => builder.body(body.clone()).map_err(failed)?,
        None => builder.build().map_err(failed)?,
    };

    let response = prepared.send().await.map_err(failed)?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(HttpResponse { status, body })
}
