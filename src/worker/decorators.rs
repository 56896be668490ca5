use axum::{extract::Request, handler::Handler, response::Response};
use std::future::Future;
use std::pin::Pin;

/// Response extension marking a request as fully handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handled;

/// Handler wrapper produced by [`stop_after`]
#[derive(Clone)]
pub struct StopAfter<H>(H);

/// Run `handler`, then stop: the response is marked [`Handled`] so outer
/// layers treat the request as finished.
pub fn stop_after<H>(handler: H) -> StopAfter<H> {
    StopAfter(handler)
}

impl<H, T, S> Handler<T, S> for StopAfter<H>
where
    H: Handler<T, S>,
    T: 'static,
    S: Send + 'static,
{
    type Future = Pin<Box<dyn Future<Output = Response> + Send>>;

    fn call(self, req: Request, state: S) -> Self::Future {
        Box::pin(async move {
            let mut response = self.0.call(req, state).await;
            response.extensions_mut().insert(Handled);
            response
        })
    }
}
