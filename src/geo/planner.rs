use std::time::Instant;
use log::info;

use crate::algorithm::engine::KShortestPaths;
use crate::geo::{BoundingBox, GeometryProjector, NearestNodeResolver, RoadNetworkProvider};
use crate::graph::Coordinate;
use crate::{Error, Result};

/// Settings for [`RoutePlanner`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Margin in degrees added around the origin/target box when fetching the network
    pub perimeter: f64,
    /// Number of tied routes to return
    pub k: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            perimeter: 0.5,
            k: 3,
        }
    }
}

/// A ranked route with its geometry
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRoute<N, W> {
    pub rank: usize,
    pub nodes: Vec<N>,
    pub weight: W,
    /// One coordinate per node, source first
    pub coordinates: Vec<Coordinate>,
}

/// Runs the full coordinate-to-polyline flow: fetch the network around both
/// points, snap them to nodes, find the tied shortest routes and project them.
#[derive(Debug, Clone)]
pub struct RoutePlanner<P, R, J> {
    provider: P,
    resolver: R,
    projector: J,
    engine: KShortestPaths,
    config: PlannerConfig,
}

impl<P, R, J> RoutePlanner<P, R, J>
where
    P: RoadNetworkProvider,
    R: NearestNodeResolver,
    J: GeometryProjector,
{
    pub fn new(provider: P, resolver: R, projector: J) -> Self {
        RoutePlanner {
            provider,
            resolver,
            projector,
            engine: KShortestPaths::new(),
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_engine(mut self, engine: KShortestPaths) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// Returns up to `k` tied minimum-length routes between two coordinates
    pub fn plan(
        &self,
        origin: Coordinate,
        target: Coordinate,
    ) -> Result<Vec<ProjectedRoute<P::Node, P::Weight>>> {
        if !self.config.perimeter.is_finite() || self.config.perimeter < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "perimeter must be finite and non-negative, got {}",
                self.config.perimeter
            )));
        }

        let region = BoundingBox::around(origin, target, self.config.perimeter);
        let graph = self.provider.fetch(&region)?;
        let graph = graph.as_ref();

        let origin_node = self
            .resolver
            .nearest::<P::Node, P::Weight, P::Graph>(graph, origin)?;
        let target_node = self
            .resolver
            .nearest::<P::Node, P::Weight, P::Graph>(graph, target)?;

        let start = Instant::now();
        let routes = self
            .engine
            .find::<P::Node, P::Weight, P::Graph>(graph, origin_node, target_node, self.config.k)?;
        info!(
            "found {} of {} requested shortest paths in {:?}",
            routes.len(),
            self.config.k,
            start.elapsed()
        );

        routes
            .paths
            .into_iter()
            .map(|path| {
                let coordinates = self
                    .projector
                    .project::<P::Node, P::Weight, P::Graph>(graph, &path.nodes)?;
                Ok(ProjectedRoute {
                    rank: path.rank,
                    nodes: path.nodes,
                    weight: path.weight,
                    coordinates,
                })
            })
            .collect()
    }
}
