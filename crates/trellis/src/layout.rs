//! Running one layout pass: export, submit, import.

use crate::engine::LayoutEngine;
use crate::error::{Error, Result};
use crate::export::{ExportStats, export_graph};
use crate::import::{ImportStats, import_graph};
use crate::kgraph::{LayoutRequest, RequestGraph};
use crate::options::{LayoutOptions, LayoutOptionsOverrides};
use crate::strategy::{ConversionStrategy, DefaultStrategy};
use futures::future::{AbortHandle, Abortable};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, error, info};
use trellis_graph::Diagram;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    Idle,
    /// The request is with the engine.
    Requested,
    Succeeded,
    Failed,
    Cancelled,
}

impl LayoutState {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => LayoutState::Requested,
            2 => LayoutState::Succeeded,
            3 => LayoutState::Failed,
            4 => LayoutState::Cancelled,
            _ => LayoutState::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            LayoutState::Idle => 0,
            LayoutState::Requested => 1,
            LayoutState::Succeeded => 2,
            LayoutState::Failed => 3,
            LayoutState::Cancelled => 4,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            LayoutState::Succeeded | LayoutState::Failed | LayoutState::Cancelled
        )
    }
}

#[derive(Debug, Clone, Default)]
struct StateCell(Arc<AtomicU8>);

impl StateCell {
    fn get(&self) -> LayoutState {
        LayoutState::from_u8(self.0.load(Ordering::Acquire))
    }

    fn set(&self, state: LayoutState) {
        self.0.store(state.as_u8(), Ordering::Release);
    }
}

/// Observes and cancels a run started with [`Layout::run_abortable`].
#[derive(Debug, Clone)]
pub struct LayoutHandle {
    abort: AbortHandle,
    state: StateCell,
}

impl LayoutHandle {
    pub fn state(&self) -> LayoutState {
        self.state.get()
    }

    /// Drops interest in the engine's answer. A response arriving afterwards is ignored and the
    /// diagram is left untouched. Has no effect once the run has finished.
    pub fn cancel(&self) {
        self.abort.abort();
        for from in [LayoutState::Idle, LayoutState::Requested] {
            if self
                .state
                .0
                .compare_exchange(
                    from.as_u8(),
                    LayoutState::Cancelled.as_u8(),
                    Ordering::AcqRel,
                    Ordering::Acquire,
                )
                .is_ok()
            {
                return;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutReport {
    pub exported: ExportStats,
    pub imported: ImportStats,
}

/// A configured layout pass: engine options plus the conversion strategy used both ways.
#[derive(Debug, Clone, Default)]
pub struct Layout<S = DefaultStrategy> {
    options: LayoutOptions,
    strategy: S,
}

impl Layout<DefaultStrategy> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also write edge routes back onto links.
    pub fn set_link_vertices(mut self, enabled: bool) -> Self {
        self.strategy.set_link_vertices = enabled;
        self
    }
}

impl<S: ConversionStrategy> Layout<S> {
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_overrides(mut self, overrides: LayoutOptionsOverrides) -> Self {
        self.options = self.options.with_overrides(overrides);
        self
    }

    /// Deep-merges a JSON options object over the current options.
    pub fn with_json_options(mut self, user: &Value) -> Result<Self> {
        self.options = self.options.merged_with(user).map_err(Error::InvalidOptions)?;
        Ok(self)
    }

    pub fn with_strategy<T: ConversionStrategy>(self, strategy: T) -> Layout<T> {
        Layout {
            options: self.options,
            strategy,
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Builds the engine request for `diagram` without submitting it.
    pub fn request(&self, diagram: &dyn Diagram) -> (LayoutRequest, ExportStats) {
        let mut graph = RequestGraph::new();
        let stats = export_graph(diagram, &mut graph, &self.strategy);
        let request = LayoutRequest {
            graph,
            options: self.options.clone(),
        };
        (request, stats)
    }

    /// Lays out `diagram` with `engine` and applies the result.
    ///
    /// On engine failure the diagram is unchanged and the failure is returned.
    pub async fn run<E>(&self, engine: &E, diagram: &mut dyn Diagram) -> Result<LayoutReport>
    where
        E: LayoutEngine + ?Sized,
    {
        self.run_with_state(engine, diagram, &StateCell::default()).await
    }

    /// Like [`Layout::run`], but hands back a [`LayoutHandle`] to watch progress or cancel.
    ///
    /// A cancelled run resolves to [`Error::Cancelled`].
    pub fn run_abortable<'a, E>(
        &'a self,
        engine: &'a E,
        diagram: &'a mut dyn Diagram,
    ) -> (impl Future<Output = Result<LayoutReport>> + 'a, LayoutHandle)
    where
        E: LayoutEngine + ?Sized,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let state = StateCell::default();
        let handle = LayoutHandle {
            abort,
            state: state.clone(),
        };
        let run = async move {
            let inner = Abortable::new(self.run_with_state(engine, diagram, &state), registration);
            match inner.await {
                Ok(res) => res,
                Err(_aborted) => {
                    state.set(LayoutState::Cancelled);
                    debug!("layout cancelled; engine response ignored");
                    Err(Error::Cancelled)
                }
            }
        };
        (run, handle)
    }

    async fn run_with_state<E>(
        &self,
        engine: &E,
        diagram: &mut dyn Diagram,
        state: &StateCell,
    ) -> Result<LayoutReport>
    where
        E: LayoutEngine + ?Sized,
    {
        let (request, exported) = self.request(&*diagram);
        state.set(LayoutState::Requested);
        debug!(
            nodes = exported.nodes,
            edges = exported.edges,
            "submitting layout request"
        );

        let result = match engine.layout(request).await {
            Ok(result) => result,
            Err(err) => {
                state.set(LayoutState::Failed);
                error!(error = %err, "layout failed");
                return Err(Error::Engine(err));
            }
        };

        info!(
            nodes = result.children.len(),
            edges = result.edges.len(),
            "layout succeeded"
        );
        let imported = import_graph(diagram, &result, &self.strategy);
        state.set(LayoutState::Succeeded);
        Ok(LayoutReport { exported, imported })
    }
}

/// One-shot layout: defaults overridden by `options`, and `strategy` or the default strategy
/// (positions only).
pub async fn run_layout<E>(
    engine: &E,
    diagram: &mut dyn Diagram,
    options: Option<LayoutOptionsOverrides>,
    strategy: Option<&dyn ConversionStrategy>,
) -> Result<LayoutReport>
where
    E: LayoutEngine + ?Sized,
{
    let layout = Layout::new().with_options(LayoutOptions::resolve(options.unwrap_or_default()));
    match strategy {
        Some(strategy) => layout.with_strategy(strategy).run(engine, diagram).await,
        None => layout.run(engine, diagram).await,
    }
}
