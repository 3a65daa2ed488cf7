use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Permanently redirects `www.` hosts to the bare domain, keeping path and query.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(host) = req.headers().get(header::HOST)
        && let Ok(host) = host.to_str()
        && let Some(bare_host) = host.strip_prefix("www.")
    {
        let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
        let location = format!("https://{bare_host}{path_query}");
        tracing::debug!(%location, "Redirecting www host");
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                tracing::error!(?err, "Failed to build redirect response");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt as _;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/rss.xml", get(|| async { "feed" }))
            .layer(middleware::from_fn(redirect_www))
    }

    fn request(host: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::HOST, host)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_www_host_is_redirected() {
        let response = app().oneshot(request("www.sentinex.co", "/rss.xml?x=1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "https://sentinex.co/rss.xml?x=1");
    }

    #[tokio::test]
    async fn test_bare_host_passes_through() {
        let response = app().oneshot(request("sentinex.co", "/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.headers().contains_key(header::LOCATION));
    }
}
