//! Average and maximum yields across the chart

// crate modules
use crate::error::Result;
use crate::source::IonSource;
use crate::table::{cell_index, Cell, NuclideTable, N_CELLS, Z_CELLS};

// external crates
use log::debug;
use serde::Serialize;

/// Aggregate yields for one cell
///
/// Both values are `0.0` when there are no matching measurements, which is
/// safe as a "no data" marker because yields are never negative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct CellAggregate {
    /// Mean yield of matching measurements
    pub average: f64,
    /// Maximum yield of matching measurements
    pub maximum: f64,
}

impl Cell {
    /// Aggregate the yields of measurements passing an ion source filter
    ///
    /// `None` and `Some(IonSource::All)` both include every measurement.
    pub fn aggregate(&self, filter: Option<IonSource>) -> CellAggregate {
        let filter = filter.unwrap_or_default();

        let (count, sum, maximum) = self
            .measurements
            .iter()
            .filter(|m| filter.accepts(&m.ion_source))
            .fold((0usize, 0.0, 0.0_f64), |(count, sum, max), m| {
                (count + 1, sum + m.intensity, max.max(m.intensity))
            });

        let average = match count {
            0 => 0.0,
            _ => sum / count as f64,
        };

        CellAggregate { average, maximum }
    }
}

impl NuclideTable {
    /// Recalculate the average and maximum yield of every cell
    ///
    /// Always a full recalculation from the measurements, never incremental,
    /// so repeated calls with the same filter give identical results.
    ///
    /// ```rust
    /// # use isoyield_chart::{parse_record, IonSource, NuclideTable, StagedRecord, Target};
    /// let mut table = NuclideTable::new();
    /// for line in ["30 60Zn 5.0 1 TRILIS", "30 60Zn 15.0 1 FEBIAD"] {
    ///     let record = StagedRecord::new(line, Target::NiO);
    ///     table.insert(parse_record(&record).unwrap()).unwrap();
    /// }
    ///
    /// table.recompute(None);
    /// assert_eq!(table.cell(30, 30).unwrap().average(), 10.0);
    ///
    /// table.recompute(Some(IonSource::Trilis));
    /// assert_eq!(table.cell(30, 30).unwrap().maximum(), 5.0);
    /// ```
    pub fn recompute(&mut self, filter: Option<IonSource>) {
        debug!(
            "Setting up average/maximum yields for {} ion sources",
            filter.unwrap_or_default()
        );

        for cell in self.cells_mut() {
            let CellAggregate { average, maximum } = cell.aggregate(filter);
            cell.average = average;
            cell.maximum = maximum;
        }
    }

    /// Copy of the current aggregates for every cell
    pub fn aggregates(&self) -> Vec<Vec<CellAggregate>> {
        let mut grid = vec![vec![CellAggregate::default(); Z_CELLS]; N_CELLS];
        for (index, cell) in self.iter() {
            grid[index.n][index.z] = CellAggregate {
                average: cell.average,
                maximum: cell.maximum,
            };
        }
        grid
    }
}

/// Average and maximum yields for the whole chart under one filter
///
/// This is everything a plotting layer needs to draw the chart as a heat map.
/// The grid is indexed `[N-1][Z-1]`, i.e. 146 rows of 94 cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    /// Ion source filter the aggregates were calculated with
    pub filter: IonSource,
    /// Aggregates indexed by `[N-1][Z-1]`
    pub cells: Vec<Vec<CellAggregate>>,
}

impl TableSnapshot {
    /// Recompute the table under a filter and take a copy of the aggregates
    pub fn capture(table: &mut NuclideTable, filter: Option<IonSource>) -> Self {
        table.recompute(filter);
        Self {
            filter: filter.unwrap_or_default(),
            cells: table.aggregates(),
        }
    }

    /// Aggregates for a physical (N, Z)
    pub fn get(&self, n: i32, z: i32) -> Result<CellAggregate> {
        let index = cell_index(n, z)?;
        Ok(self.cells[index.n][index.z])
    }

    /// Iterate over physical (N, Z) and aggregates of cells with any yield
    pub fn non_empty(&self) -> impl Iterator<Item = (i32, i32, CellAggregate)> + '_ {
        self.cells.iter().enumerate().flat_map(|(n, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, aggregate)| aggregate.maximum > 0.0)
                .map(move |(z, aggregate)| (n as i32 + 1, z as i32 + 1, *aggregate))
        })
    }

    /// Serialise to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
