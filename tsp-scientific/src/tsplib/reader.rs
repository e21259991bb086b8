#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use rustc_hash::FxHashMap;
use std::io::{BufReader, Read};
use tsp_core::models::DistanceMatrix;
use tsp_core::utils::{Float, GenericError, GenericResult};

/// A symmetric TSP instance given by city coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TsplibInstance {
    /// An instance name, if specified.
    pub name: Option<String>,
    /// City coordinates, a city index is a position in this collection.
    pub coordinates: Vec<Coordinate>,
}

impl TsplibInstance {
    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    /// Creates a distance matrix of the instance.
    pub fn create_matrix(&self, is_rounded: bool) -> GenericResult<DistanceMatrix> {
        create_euclidean_matrix(self.coordinates.as_slice(), is_rounded)
    }
}

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification:
/// only `TSP` instances with `EUC_2D` node coordinates are supported.
pub trait TsplibProblem {
    /// Reads tsplib95 problem.
    fn read_tsplib(self) -> Result<TsplibInstance, GenericError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> Result<TsplibInstance, GenericError> {
        TsplibReader::new(self).read_instance()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> Result<TsplibInstance, GenericError> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_instance()
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    name: Option<String>,
    dimension: Option<usize>,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, name: None, dimension: None }
    }

    fn read_instance(&mut self) -> Result<TsplibInstance, GenericError> {
        self.read_meta()?;
        let coordinates = self.read_coordinates()?;

        Ok(TsplibInstance { name: self.name.take(), coordinates })
    }

    fn read_meta(&mut self) -> Result<(), GenericError> {
        loop {
            let Some(line) = self.read_line()? else {
                return Err("expecting NODE_COORD_SECTION, got end of input".into());
            };
            let line = line.trim();

            match line {
                "" => continue,
                "NODE_COORD_SECTION" => return Ok(()),
                "EOF" => return Err("expecting NODE_COORD_SECTION, got: 'EOF'".into()),
                _ => {}
            }

            let (key, value) = line
                .split_once(':')
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| GenericError::from(format!("expected colon separated string, got: '{line}'")))?;

            match key.as_str() {
                "NAME" => self.name = Some(value),
                "TYPE" if value != "TSP" => {
                    return Err(format!("expecting 'TSP' as TYPE, got '{value}'").into());
                }
                "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                    return Err(format!("expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got '{value}'").into());
                }
                "DIMENSION" => self.dimension = Some(parse_value(value.as_str(), "cannot parse DIMENSION")?),
                _ => {}
            }
        }
    }

    fn read_coordinates(&mut self) -> Result<Vec<Coordinate>, GenericError> {
        let mut coordinates = FxHashMap::<usize, Coordinate>::default();

        while let Some(line) = self.read_line()? {
            let line = line.trim();

            match line {
                "" => continue,
                "EOF" => break,
                _ => {}
            }

            let data = line.split_whitespace().collect::<Vec<_>>();
            if data.len() != 3 {
                return Err(format!("unexpected coord data: '{line}'").into());
            }

            let id = parse_value::<usize>(data[0], "cannot parse id")?;
            let coord =
                (parse_value::<Float>(data[1], "cannot parse coord.0")?, parse_value(data[2], "cannot parse coord.1")?);

            if coordinates.insert(id, coord).is_some() {
                return Err(format!("duplicate city id: '{id}'").into());
            }
        }

        let size = coordinates.len();
        if let Some(dimension) = self.dimension.filter(|&dimension| dimension != size) {
            return Err(format!("expecting {dimension} cities as DIMENSION, got {size} coordinates").into());
        }

        (1..=size)
            .map(|id| {
                coordinates.get(&id).copied().ok_or_else(|| format!("cannot find coordinate for id: '{id}'").into())
            })
            .collect()
    }

    fn read_line(&mut self) -> Result<Option<&String>, GenericError> {
        let bytes = read_line(&mut self.reader, &mut self.buffer)?;

        Ok(if bytes == 0 { None } else { Some(&self.buffer) })
    }
}
