//! The layout engine seam.
//!
//! An engine receives one [`LayoutRequest`] and eventually answers with a laid-out graph or a
//! failure. This crate never looks inside the engine; anything from an in-process algorithm to
//! a JS bridge can sit behind [`LayoutEngine`].

use crate::kgraph::{LayoutRequest, ResultGraph};
use futures::FutureExt;
use futures::future::{self, BoxFuture};
use serde_json::Value;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub trait LayoutEngine {
    /// Lays out `request.graph`. Resolves exactly once.
    fn layout(&self, request: LayoutRequest) -> BoxFuture<'_, Result<ResultGraph, EngineError>>;
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for &E {
    fn layout(&self, request: LayoutRequest) -> BoxFuture<'_, Result<ResultGraph, EngineError>> {
        (**self).layout(request)
    }
}

impl<E: LayoutEngine + ?Sized> LayoutEngine for Box<E> {
    fn layout(&self, request: LayoutRequest) -> BoxFuture<'_, Result<ResultGraph, EngineError>> {
        (**self).layout(request)
    }
}

/// Engine backed by a closure over typed requests. See [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnEngine<F>(F);

/// Wraps `f` as a [`LayoutEngine`].
pub fn from_fn<F, Fut>(f: F) -> FnEngine<F>
where
    F: Fn(LayoutRequest) -> Fut,
    Fut: Future<Output = Result<ResultGraph, EngineError>> + Send + 'static,
{
    FnEngine(f)
}

impl<F, Fut> LayoutEngine for FnEngine<F>
where
    F: Fn(LayoutRequest) -> Fut,
    Fut: Future<Output = Result<ResultGraph, EngineError>> + Send + 'static,
{
    fn layout(&self, request: LayoutRequest) -> BoxFuture<'_, Result<ResultGraph, EngineError>> {
        (self.0)(request).boxed()
    }
}

/// Engine that speaks the raw JSON format: it is handed `{"graph": .., "options": ..}` and
/// answers with the laid-out graph object. See [`from_json_fn`].
#[derive(Debug, Clone)]
pub struct JsonEngine<F>(F);

pub fn from_json_fn<F, Fut>(f: F) -> JsonEngine<F>
where
    F: Fn(Value) -> Fut,
    Fut: Future<Output = Result<Value, EngineError>> + Send + 'static,
{
    JsonEngine(f)
}

impl<F, Fut> LayoutEngine for JsonEngine<F>
where
    F: Fn(Value) -> Fut,
    Fut: Future<Output = Result<Value, EngineError>> + Send + 'static,
{
    fn layout(&self, request: LayoutRequest) -> BoxFuture<'_, Result<ResultGraph, EngineError>> {
        let payload = match serde_json::to_value(&request) {
            Ok(v) => v,
            Err(e) => {
                return future::ready(Err(EngineError::new(format!(
                    "failed to encode layout request: {e}"
                ))))
                .boxed();
            }
        };
        let pending = (self.0)(payload);
        async move {
            let value = pending.await?;
            serde_json::from_value(value)
                .map_err(|e| EngineError::new(format!("malformed layout result: {e}")))
        }
        .boxed()
    }
}
