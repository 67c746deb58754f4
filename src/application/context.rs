// ============================================================
// Layer 2 — Application Context
// ============================================================
// The shared, long-lived pieces every use case needs, built
// once from AppConfig:
//
//   registry → process-wide dataset cache (shared via Arc)
//   factory  → builds Trainable Model instances
//   metrics  → optional per-epoch CSV log
//
// Cloning a context is cheap and shares the same registry, so
// concurrent requests all hit one cache.

use std::sync::Arc;

use anyhow::Result;

use crate::data::loader::FsDatasetSource;
use crate::data::registry::DatasetRegistry;
use crate::domain::traits::ModelFactory;
use crate::infra::config::AppConfig;
use crate::infra::metrics::MetricsLogger;
use crate::ml::model::NetworkFactory;

#[derive(Clone)]
pub struct AppContext {
    pub registry: Arc<DatasetRegistry>,
    pub factory:  Arc<dyn ModelFactory>,
    pub metrics:  Option<Arc<MetricsLogger>>,
}

impl AppContext {
    pub fn new(
        registry: DatasetRegistry,
        factory:  impl ModelFactory + 'static,
        metrics:  Option<MetricsLogger>,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            factory:  Arc::new(factory),
            metrics:  metrics.map(Arc::new),
        }
    }

    /// Wire up the filesystem source, the reference network and metrics.
    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        let source   = FsDatasetSource::new(&cfg.datasets_dir, cfg.shuffle_seed);
        let registry = DatasetRegistry::new(source, cfg.cache_capacity);
        let factory  = NetworkFactory::new(cfg.shuffle_seed);
        let metrics  = cfg.metrics_dir.as_deref().map(MetricsLogger::new).transpose()?;

        tracing::info!(
            "Serving data sets from '{}' (cache capacity {})",
            cfg.datasets_dir,
            cfg.cache_capacity
        );
        Ok(Self::new(registry, factory, metrics))
    }
}
