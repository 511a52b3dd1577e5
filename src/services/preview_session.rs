use cvd_sim::RasterBuffer;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::LensError;
use crate::models::RenderParams;
use crate::services::SimulationService;

/// A finished preview and the submission it belongs to.
#[derive(Debug, Clone)]
pub struct Preview {
    pub generation: u64,
    pub params: RenderParams,
    pub raster: RasterBuffer,
}

/// Interactive preview over one source image with last-write-wins
/// semantics.
///
/// Every [`submit`](Self::submit) takes a generation ticket. A render
/// whose ticket is no longer the latest when it finishes is discarded and
/// resolves to `Ok(None)`; in-flight renders are never cancelled. Clones
/// share the generation counter.
#[derive(Clone)]
pub struct PreviewSession {
    service: SimulationService,
    source: Arc<RasterBuffer>,
    generation: Arc<AtomicU64>,
}

impl PreviewSession {
    pub fn new(service: SimulationService, source: RasterBuffer) -> Self {
        Self {
            service,
            source: Arc::new(source),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn source(&self) -> &RasterBuffer {
        &self.source
    }

    /// The most recently issued ticket (0 before the first submit).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    /// Render `params` against the source image.
    ///
    /// The ticket is taken when `submit` is called, not when the returned
    /// future is first polled.
    pub fn submit(
        &self,
        params: RenderParams,
    ) -> impl Future<Output = Result<Option<Preview>, LensError>> + Send + 'static {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let service = self.service.clone();
        let source = self.source.clone();
        let generation = self.generation.clone();

        async move {
            let rendered = service.render(source, params).await;
            let latest = generation.load(Ordering::SeqCst);
            if latest != ticket {
                tracing::debug!(
                    ticket,
                    latest,
                    failed = rendered.is_err(),
                    "Discarding superseded preview"
                );
                return Ok(None);
            }
            let raster = rendered?;
            Ok(Some(Preview {
                generation: ticket,
                params,
                raster,
            }))
        }
    }
}
