//! `CompartmentCsvReporter` — writes per-snapshot compartment counts to CSV.
//!
//! One row per snapshot: the simulation time followed by the population-wide
//! count of each infection status.  Errors from the CSV writer are stored
//! internally because observer methods have no return value; check
//! [`take_error`][CompartmentCsvReporter::take_error] after the run.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use epi_core::{InfectionStatus, SimTime};
use epi_pop::Population;

use crate::{SimObserver, SimResult};

pub struct CompartmentCsvReporter {
    writer:     Writer<File>,
    last_error: Option<csv::Error>,
}

impl CompartmentCsvReporter {
    /// Open (or create) the CSV file at `path` and write the header row.
    pub fn new(path: &Path) -> SimResult<Self> {
        let mut writer = Writer::from_path(path)?;

        let mut header = vec!["time".to_string()];
        header.extend(InfectionStatus::ALL.iter().map(|s| s.as_str().to_string()));
        writer.write_record(&header)?;

        Ok(Self {
            writer,
            last_error: None,
        })
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<csv::Error> {
        self.last_error.take()
    }

    fn write_row(&mut self, time: SimTime, population: &Population) -> Result<(), csv::Error> {
        let mut row = vec![format!("{:.3}", time.time)];
        for status in InfectionStatus::ALL {
            let count: u64 = population
                .cells
                .iter()
                .map(|c| c.counter.count_of(status))
                .sum();
            row.push(count.to_string());
        }
        self.writer.write_record(&row)
    }

    fn store_err(&mut self, result: Result<(), csv::Error>) {
        // Keep only the first error.
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl SimObserver for CompartmentCsvReporter {
    fn on_snapshot(&mut self, time: SimTime, population: &Population) {
        let result = self.write_row(time, population);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, time: SimTime, population: &Population) {
        let result = self
            .write_row(time, population)
            .and_then(|()| self.writer.flush().map_err(csv::Error::from));
        self.store_err(result);
    }
}
