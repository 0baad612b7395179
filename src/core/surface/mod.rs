//=========================================================================
// Surface Configuration Selector
//=========================================================================
//
// Picks the multisampled surface configuration used to create the
// graphics context. Runs exactly once per context lifetime, before the
// context exists.
//
// Selection:
// ```text
//  requested >= 2 ──► query Multisample{requested} ──► candidates?
//       │                                                 │ yes
//       │ no                                              ▼
//       │                                         forward scan ──► match?
//       ▼                                                 │ no      │ yes
//  query Any ◄────────────────────────────────────────────┘         ▼
//       │                                                    SurfaceConfig
//       └──► first result, or fatal SurfaceError
// ```
//
// The scan is order-dependent: a candidate replaces the current pick only
// if its sample count fits the request AND exceeds the sample count of the
// candidate immediately before it in platform order. It is not a search
// for the global maximum.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use thiserror::Error;

//=== ConfigQuery =========================================================

/// Attribute filter passed to the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigQuery {
    /// At least one sample buffer, with `samples` as the sample-count hint.
    Multisample { samples: u32 },

    /// Any valid configuration, no multisample requirement.
    Any,
}

//=== SurfaceConfig =======================================================

/// A chosen surface configuration.
///
/// Owned by the selector until handed to
/// [`GraphicsBackend::create_context`], which takes it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig<H> {
    pub sample_count: u32,
    pub handle: H,
}

//=== Windowing Collaborator ==============================================

/// Platform query for available surface configurations.
pub trait ConfigSource {
    /// Opaque platform configuration descriptor.
    type Handle;

    /// Platform failure reported by a query.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns all configurations matching `query`, in platform order.
    fn choose_configs(&self, query: &ConfigQuery) -> Result<Vec<Self::Handle>, Self::Error>;

    /// Reads the sample-count attribute of a descriptor.
    fn sample_count(&self, handle: &Self::Handle) -> u32;
}

/// Windowing layer plus graphics-context factory.
///
/// Selection runs on the platform thread; the backend is then moved to the
/// render thread, which creates (and owns) the context.
pub trait GraphicsBackend: ConfigSource + Send + 'static {
    /// Live graphics context, owned by the render thread.
    type Context;

    fn create_context(
        &mut self,
        config: SurfaceConfig<Self::Handle>,
    ) -> Result<Self::Context, Self::Error>;
}

//=== SurfaceError ========================================================

/// Fatal surface setup failures.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The unconstrained fallback query itself failed.
    #[error("configuration query without multisampling failed: {0}")]
    FallbackQuery(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The platform reported no usable configuration at all.
    #[error("no surface configuration available")]
    NoConfig,

    /// The graphics context could not be created from the chosen config.
    #[error("graphics context creation failed: {0}")]
    ContextCreation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The render thread stopped before reporting on context creation.
    #[error("render thread exited before the graphics context was ready")]
    RenderThreadLost,
}

//=== select_config() =====================================================

/// Selects the surface configuration for `requested_samples`.
///
/// Deterministic for a fixed candidate list. A multisample result always
/// has `sample_count <= requested_samples`; otherwise the first
/// configuration of an unconstrained query is returned.
///
/// # Errors
///
/// [`SurfaceError`] if not even an unconstrained configuration exists.
/// Callers must abort initialization.
pub fn select_config<S: ConfigSource>(
    source: &S,
    requested_samples: u32,
) -> Result<SurfaceConfig<S::Handle>, SurfaceError> {
    if requested_samples >= 2 {
        let query = ConfigQuery::Multisample { samples: requested_samples };
        let candidates = match source.choose_configs(&query) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(target: "surface", "Multisample query failed: {}", e);
                Vec::new()
            }
        };

        debug!(
            target: "surface",
            "{} multisample candidates for {} samples",
            candidates.len(),
            requested_samples
        );

        if let Some(config) = scan_candidates(source, candidates, requested_samples) {
            info!(target: "surface", "Selected {}x multisample configuration", config.sample_count);
            return Ok(config);
        }
    }

    select_fallback(source)
}

//--- Internal Helpers ----------------------------------------------------

fn scan_candidates<S: ConfigSource>(
    source: &S,
    candidates: Vec<S::Handle>,
    requested_samples: u32,
) -> Option<SurfaceConfig<S::Handle>> {
    let mut best: Option<(usize, u32)> = None;
    let mut prev_samples: Option<u32> = None;

    for (index, handle) in candidates.iter().enumerate() {
        let samples = source.sample_count(handle);
        let improves = prev_samples.map_or(true, |prev| prev < samples);
        if samples <= requested_samples && improves {
            best = Some((index, samples));
        }
        prev_samples = Some(samples);
    }

    let (index, sample_count) = best?;
    let handle = candidates.into_iter().nth(index)?;
    Some(SurfaceConfig { sample_count, handle })
}

fn select_fallback<S: ConfigSource>(source: &S) -> Result<SurfaceConfig<S::Handle>, SurfaceError> {
    debug!(target: "surface", "Falling back to configuration without multisampling");

    let handle = source
        .choose_configs(&ConfigQuery::Any)
        .map_err(|e| SurfaceError::FallbackQuery(Box::new(e)))?
        .into_iter()
        .next()
        .ok_or(SurfaceError::NoConfig)?;

    let sample_count = source.sample_count(&handle);
    info!(target: "surface", "Selected fallback configuration ({} samples)", sample_count);
    Ok(SurfaceConfig { sample_count, handle })
}

//=========================================================================
// Unit Tests
//=========================================================================
