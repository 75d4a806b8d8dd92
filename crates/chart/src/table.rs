//! Dense nuclide chart of yield measurements

// crate modules
use crate::error::{Error, Result};
use crate::isotope::Isotope;
use crate::record::Measurement;

/// Number of neutron cells, covering N = 1-146
pub const N_CELLS: usize = 146;

/// Number of proton cells, covering Z = 1-94
pub const Z_CELLS: usize = 94;

/// Zero-based position of an isotope cell in the [NuclideTable]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Neutron index, N-1
    pub n: usize,
    /// Proton index, Z-1
    pub z: usize,
}

impl CellIndex {
    /// Physical (N, Z) of the cell
    pub fn isotope(&self) -> Isotope {
        Isotope {
            z: self.z as i32 + 1,
            n: self.n as i32 + 1,
        }
    }

    /// Position in the flat cell storage
    fn flat(&self) -> usize {
        self.n * Z_CELLS + self.z
    }
}

/// Validated conversion of physical (N, Z) into a table position
///
/// This is the only place the one-based to zero-based shift happens. Any
/// (N, Z) outside of N = 1-146, Z = 1-94 is an
/// [InvalidIsotope](Error::InvalidIsotope) error.
///
/// ```rust
/// # use isoyield_chart::{cell_index, CellIndex};
/// assert_eq!(cell_index(82, 50).unwrap(), CellIndex { n: 81, z: 49 });
/// assert_eq!(cell_index(146, 94).unwrap(), CellIndex { n: 145, z: 93 });
///
/// assert!(cell_index(0, 50).is_err());
/// assert!(cell_index(82, 95).is_err());
/// assert!(cell_index(-10, 50).is_err());
/// ```
pub fn cell_index(n: i32, z: i32) -> Result<CellIndex> {
    let shift = |value: i32, cells: usize| -> Option<usize> {
        let index = usize::try_from(value).ok()?.checked_sub(1)?;
        (index < cells).then_some(index)
    };

    match (shift(n, N_CELLS), shift(z, Z_CELLS)) {
        (Some(n), Some(z)) => Ok(CellIndex { n, z }),
        _ => Err(Error::InvalidIsotope { n, z }),
    }
}

/// Every measurement for a single isotope, and the derived aggregates
///
/// The aggregates are only ever set by a full recalculation (see
/// [NuclideTable::recompute()]).
#[derive(Debug, Default, Clone)]
pub struct Cell {
    pub(crate) measurements: Vec<Measurement>,
    pub(crate) average: f64,
    pub(crate) maximum: f64,
}

impl Cell {
    /// All measurements in the order they were loaded
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Mean yield from the last aggregation
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Maximum yield from the last aggregation
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Check for any measurements at all
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Highest state level recorded, 0 if there are no measurements
    pub fn n_states(&self) -> u8 {
        self.measurements
            .iter()
            .map(|m| m.state.level())
            .max()
            .unwrap_or(0)
    }

    fn clear(&mut self) {
        self.measurements.clear();
        self.average = 0.0;
        self.maximum = 0.0;
    }
}

/// Chart of isotope cells indexed by (N, Z)
///
/// The table is dense, every one of the 146x94 cells exists for the lifetime
/// of the table whether or not it holds any data.
///
/// ```rust
/// # use isoyield_chart::{parse_record, NuclideTable, StagedRecord, Target};
/// let mut table = NuclideTable::new();
///
/// let record = StagedRecord::new("50 132Sn 1.2E+03 500 TRILIS", Target::U);
/// table.insert(parse_record(&record).unwrap()).unwrap();
///
/// assert_eq!(table.cell(82, 50).unwrap().measurements().len(), 1);
/// assert_eq!(table.n_measurements(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NuclideTable {
    cells: Vec<Cell>,
}

impl Default for NuclideTable {
    fn default() -> Self {
        Self {
            cells: vec![Cell::default(); N_CELLS * Z_CELLS],
        }
    }
}

impl NuclideTable {
    /// Empty chart with every cell initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Empty every cell and zero the aggregates
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// Append a measurement to the cell of its isotope
    ///
    /// Measurements that do not map onto the chart are rejected with an
    /// [InvalidIsotope](Error::InvalidIsotope) error and nothing is inserted.
    pub fn insert(&mut self, measurement: Measurement) -> Result<CellIndex> {
        let index = cell_index(measurement.isotope.n, measurement.isotope.z)?;
        self.cells[index.flat()].measurements.push(measurement);
        Ok(index)
    }

    /// Cell for a physical (N, Z)
    pub fn cell(&self, n: i32, z: i32) -> Result<&Cell> {
        let index = cell_index(n, z)?;
        Ok(&self.cells[index.flat()])
    }

    /// Cell at a zero-based index, `None` if out of bounds
    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        (index.n < N_CELLS && index.z < Z_CELLS).then(|| &self.cells[index.flat()])
    }

    /// Iterate over every cell with its position, N-major
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let index = CellIndex {
                n: i / Z_CELLS,
                z: i % Z_CELLS,
            };
            (index, cell)
        })
    }

    /// Total number of measurements on the chart
    pub fn n_measurements(&self) -> usize {
        self.cells.iter().map(|cell| cell.measurements.len()).sum()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}
