//! Chart of ISOL yield measurements across targets and ion sources
//!
//! Yield data for every target material are read into a dense chart of
//! isotope cells indexed by neutron (N) and proton (Z) number. Average and
//! maximum yields are calculated for every cell, optionally restricted to
//! a single ion source, and every measurement of a single isotope can be
//! listed by state.
//!
//! ## Quickstart example
//!
//! ```rust, no_run
//! # use isoyield_chart::{YieldChart, IonSource};
//! let mut chart = YieldChart::new();
//!
//! // Read <target>.dat for every known target in the directory
//! let summary = chart.load("./Data/").unwrap();
//! println!("{} yields loaded", summary.inserted);
//!
//! // List every measurement for Sn-132 (N=82, Z=50)
//! println!("{}", chart.describe(82, 50).unwrap());
//!
//! // Average/maximum yields of every cell for the FEBIAD source only
//! let snapshot = chart.get_table_snapshot(Some(IonSource::Febiad));
//! println!("{:?}", snapshot.get(82, 50).unwrap());
//! ```
//!
//! ## Data files
//!
//! Each target has a plain text file `<target>.dat`. The first line is a
//! header, blank lines are ignored, and every other line is a record of
//! whitespace separated fields:
//!
//! ```text
//! Z  A[m<digit>]  yield  proton_current  ion_source  [...ignored]
//! 50  132Sn  1.200E+03  500  TRILIS
//! ```
//!
//! The mass token carries the metastable state, e.g. `99Zrm1` is the first
//! metastable state of Zr-99. The short `Re` and `Ta` ion source labels are
//! expanded to `Re surface` and `Ta surface`.
//!
//! ## Indexing
//!
//! Physical (N, Z) values are used everywhere in the public API. Cells cover
//! N = 1-146 and Z = 1-94 (up to plutonium), and [cell_index()] is the single
//! validated conversion to zero-based table positions.

// Modules
mod aggregate;
mod chart;
mod describe;
mod error;
mod isotope;
mod parsers;
mod record;
mod source;
mod table;
mod target;

pub mod element;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use aggregate::{CellAggregate, TableSnapshot};

#[doc(inline)]
pub use chart::{LoadSummary, YieldChart, DEFAULT_DATA_DIR};

#[doc(inline)]
pub use describe::{IsotopeDescription, StateYields};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use isotope::{IsomerState, Isotope};

#[doc(inline)]
pub use record::{mass_and_state, parse_record, Measurement, StagedRecord, MIN_FIELDS};

#[doc(inline)]
pub use source::IonSource;

#[doc(inline)]
pub use table::{cell_index, Cell, CellIndex, NuclideTable, N_CELLS, Z_CELLS};

#[doc(inline)]
pub use target::Target;
