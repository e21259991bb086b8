//! An Ant Colony Optimization algorithm.
//!
//! Each iteration, every ant builds a tour guided by pheromone trails and inverse distances,
//! then trails are evaporated and reinforced by all tours of the iteration proportionally to
//! their quality.

mod config;
pub use self::config::AcoConfig;

mod construction;
pub use self::construction::TourConstructor;

mod pheromone;
pub use self::pheromone::{PHEROMONE_FLOOR, PheromoneMatrix};

mod search;
pub use self::search::AntColony;

mod update;
pub use self::update::PheromoneUpdater;
