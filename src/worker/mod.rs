use axum::{
    extract::Request,
    handler::Handler,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use thiserror::Error;
use tracing::debug;

pub use decorators::{stop_after, Handled};

mod decorators;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Route {method} {path} is already registered")]
    DuplicateRoute { method: Method, path: String },
}

/// A registered route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
}

/// Route table for the worker.
///
/// Wraps an axum router and keeps a ledger of what was registered, so
/// conflicting registrations are rejected instead of panicking.
pub struct Worker<S = ()> {
    router: Router<S>,
    routes: Vec<RouteEntry>,
}

impl<S> Worker<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            routes: Vec::new(),
        }
    }

    /// Register a GET handler for `path` (`:name` marks a path parameter).
    pub fn get<H, T>(&mut self, path: &str, handler: H) -> Result<&mut Self, WorkerError>
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let entry = RouteEntry {
            method: Method::GET,
            path: path.to_string(),
        };
        if self.routes.contains(&entry) {
            return Err(WorkerError::DuplicateRoute {
                method: entry.method,
                path: entry.path,
            });
        }

        let router = std::mem::take(&mut self.router);
        self.router = router.route(path, get(handler));
        debug!("Registered {} {}", entry.method, entry.path);
        self.routes.push(entry);
        Ok(self)
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn into_router(self) -> Router<S> {
        self.router
            .fallback(unhandled)
            .layer(middleware::from_fn(trace_request))
    }
}

impl<S> Default for Worker<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

async fn unhandled() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    debug!(
        %method,
        %path,
        status = response.status().as_u16(),
        handled = response.extensions().get::<Handled>().is_some(),
        "request finished"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_routes_are_recorded_in_order() {
        let mut worker: Worker = Worker::new();
        worker.get("/a", || async { "a" }).unwrap();
        worker.get("/b/:id", || async { "b" }).unwrap();

        let paths: Vec<&str> = worker.routes().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/b/:id"]);
        assert!(worker.routes().iter().all(|r| r.method == Method::GET));
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let mut worker: Worker = Worker::new();
        worker.get("/a", || async { "a" }).unwrap();

        match worker.get("/a", || async { "again" }) {
            Err(WorkerError::DuplicateRoute { method, path }) => {
                assert_eq!(method, Method::GET);
                assert_eq!(path, "/a");
            }
            Ok(_) => panic!("duplicate route was accepted"),
        }
        assert_eq!(worker.routes().len(), 1);
    }

    #[tokio::test]
    async fn test_unmatched_request_gets_empty_404() {
        let app = Worker::<()>::new().into_router();

        let response = app.oneshot(request("/nowhere")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_stop_after_marks_response_handled() {
        let mut worker: Worker = Worker::new();
        worker
            .get("/wrapped", stop_after(|| async { "done" }))
            .unwrap()
            .get("/plain", || async { "done" })
            .unwrap();
        let app = worker.into_router();

        let wrapped = app.clone().oneshot(request("/wrapped")).await.unwrap();
        assert_eq!(wrapped.status(), StatusCode::OK);
        assert_eq!(wrapped.extensions().get::<Handled>(), Some(&Handled));

        let plain = app.oneshot(request("/plain")).await.unwrap();
        assert!(plain.extensions().get::<Handled>().is_none());
    }
}
