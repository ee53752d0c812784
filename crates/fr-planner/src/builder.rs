//! Fluent builder for constructing a [`RoutePlanner`].

use fr_catalog::EventCatalog;
use fr_register::RegistrationStore;
use fr_route::PlannerConfig;

use crate::{PlannerResult, RoutePlanner};

/// Fluent builder for [`RoutePlanner<S>`].
///
/// | Method       | Default                    |
/// |--------------|----------------------------|
/// | `.config(c)` | `PlannerConfig::default()` |
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(catalog, store)
///     .config(PlannerConfig { top_k: 5, ..Default::default() })
///     .build()?;
/// ```
pub struct PlannerBuilder<S: RegistrationStore> {
    catalog: EventCatalog,
    store:   S,
    config:  Option<PlannerConfig>,
}

impl<S: RegistrationStore> PlannerBuilder<S> {
    pub fn new(catalog: EventCatalog, store: S) -> Self {
        Self { catalog, store, config: None }
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration and return a ready planner.
    pub fn build(self) -> PlannerResult<RoutePlanner<S>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(RoutePlanner {
            catalog: self.catalog,
            store:   self.store,
            config,
        })
    }
}
