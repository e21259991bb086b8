/// Alias to a scalar floating type used for distances, pheromone trails and tour lengths.
pub type Float = f64;

/// An index of a city in the distance matrix, always in the `[0, n)` range.
pub type CityIdx = usize;
