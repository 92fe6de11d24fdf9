use std::collections::HashSet;

use crate::domain::Line;
use crate::errors::{ShopError, ShopResult};

/// Unique station names across a set of lines. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationCatalog {
    stations: HashSet<String>,
}

impl StationCatalog {
    /// Union of every line's stations, duplicates dropped.
    pub fn build(lines: &[Line]) -> Self {
        let stations = lines
            .iter()
            .flat_map(|line| line.stations.iter().cloned())
            .collect();

        Self { stations }
    }

    /// Like [`StationCatalog::build`], restricted to the named lines.
    pub fn for_lines(lines: &[Line], names: &[String]) -> ShopResult<Self> {
        let mut selected = Vec::with_capacity(names.len());

        for name in names {
            let line = lines
                .iter()
                .find(|l| l.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| ShopError::InvalidInput(format!("Unknown line: {}", name)))?;
            selected.push(line.clone());
        }

        Ok(Self::build(&selected))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, station: &str) -> bool {
        self.stations.contains(station)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + Send + '_ {
        self.stations.iter().map(String::as_str)
    }

    /// Stations in alphabetical order, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut stations: Vec<&str> = self.iter().collect();
        stations.sort_unstable();
        stations
    }
}

impl<S: Into<String>> FromIterator<S> for StationCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().map(Into::into).collect(),
        }
    }
}
