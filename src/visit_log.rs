use crate::grid::Coord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Instant;

/// Receives a notification for every neighbour the search considers.
///
/// Purely informational: observers cannot influence the search.
pub trait VisitObserver {
    fn visited(&mut self, coord: Coord);
}

impl<F: FnMut(Coord)> VisitObserver for F {
    fn visited(&mut self, coord: Coord) {
        self(coord)
    }
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl VisitObserver for NoopObserver {
    fn visited(&mut self, _coord: Coord) {}
}

/// Visit notification with timestamp
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEvent {
    /// Microseconds since the log was created
    pub timestamp_micros: u64,
    pub coord: Coord,
}

/// Visit recorder
#[derive(Debug)]
pub struct VisitLog {
    start_time: Instant,
    events: Vec<VisitEvent>,
}

impl VisitLog {
    pub fn new() -> Self {
        VisitLog {
            start_time: Instant::now(),
            events: Vec::new(),
        }
    }

    /// Record a visit with the current timestamp
    pub fn record(&mut self, coord: Coord) {
        let timestamp_micros = self.start_time.elapsed().as_micros() as u64;
        self.events.push(VisitEvent {
            timestamp_micros,
            coord,
        });
    }

    /// All recorded events in notification order
    pub fn events(&self) -> &[VisitEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Cells that received at least one notification
    pub fn distinct_cells(&self) -> BTreeSet<Coord> {
        self.events.iter().map(|e| e.coord).collect()
    }

    pub fn was_visited(&self, coord: Coord) -> bool {
        self.events.iter().any(|e| e.coord == coord)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let duration = self.events.last().map_or(0, |e| e.timestamp_micros);
        format!(
            "{} visit notifications over {} distinct cells in {}us",
            self.events.len(),
            self.distinct_cells().len(),
            duration
        )
    }
}

impl Default for VisitLog {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitObserver for VisitLog {
    fn visited(&mut self, coord: Coord) {
        self.record(coord);
    }
}
