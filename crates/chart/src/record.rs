//! Staged lines and normalised yield measurements

// crate modules
use crate::error::{Error, Result};
use crate::isotope::{IsomerState, Isotope};
use crate::parsers;
use crate::source::IonSource;
use crate::target::Target;

// isoyield modules
use isoyield_utils::StringExt;

// external crates
use log::trace;
use serde::Serialize;

/// Minimum number of fields for a usable record
///
/// `Z  A[m<digit>]  yield  proton_current  ion_source  [...]`
pub const MIN_FIELDS: usize = 5;

/// A raw tokenised line tagged with the target it was read for
///
/// These only exist between reading the data files and conversion into
/// [Measurement]s on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedRecord {
    /// Whitespace separated fields of the line
    pub tokens: Vec<String>,
    /// Target material the file belongs to
    pub target: Target,
}

impl StagedRecord {
    /// Tokenise a line of a target data file
    ///
    /// ```rust
    /// # use isoyield_chart::{StagedRecord, Target};
    /// let record = StagedRecord::new("50  132Sn  1.200E+03  500  TRILIS", Target::U);
    /// assert_eq!(record.tokens.len(), 5);
    /// assert_eq!(record.tokens[1], "132Sn");
    /// ```
    pub fn new(line: &str, target: Target) -> Self {
        Self {
            tokens: line.tokens(),
            target,
        }
    }
}

/// One reported yield observation
///
/// Measurements are created from a single [StagedRecord] and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Isotope the yield was measured for
    pub isotope: Isotope,
    /// Ground or metastable state of the isotope
    pub state: IsomerState,
    /// Measured yield (particles/s)
    pub intensity: f64,
    /// Proton current on target (uA)
    pub proton_current: i32,
    /// Ion source label, with short surface source labels expanded
    pub ion_source: String,
    /// Target material
    pub target: Target,
}

impl Measurement {
    /// Classified ion source for this measurement
    pub fn source(&self) -> IonSource {
        IonSource::classify(&self.ion_source)
    }
}

/// Normalise a staged record into a [Measurement]
///
/// Only a record with fewer than [MIN_FIELDS] fields is an error. Malformed
/// numbers are set to zero with a warning, and fields past the ion source are
/// ignored.
///
/// ```rust
/// # use isoyield_chart::{parse_record, IonSource, IsomerState, StagedRecord, Target};
/// let record = StagedRecord::new("40 99Zrm1 3.5E+05 9 Re", Target::Ta);
/// let measurement = parse_record(&record).unwrap();
///
/// assert_eq!(measurement.isotope.z, 40);
/// assert_eq!(measurement.isotope.n, 59);
/// assert_eq!(measurement.state, IsomerState::Excited(1));
/// assert_eq!(measurement.intensity, 3.5e5);
/// assert_eq!(measurement.ion_source, "Re surface");
/// assert_eq!(measurement.source(), IonSource::ReSurface);
/// ```
pub fn parse_record(record: &StagedRecord) -> Result<Measurement> {
    let [z, mass, intensity, current, source, ..] = record.tokens.as_slice() else {
        return Err(Error::MalformedRecord {
            found: record.tokens.len(),
            expected: MIN_FIELDS,
        });
    };

    let z = parsers::int_or_zero("Z", z);
    let (a, state) = mass_and_state(mass);

    let measurement = Measurement {
        isotope: Isotope::from_mass(z, a),
        state,
        intensity: parsers::float_or_zero("yield", intensity),
        proton_current: parsers::int_or_zero("proton current", current),
        ion_source: IonSource::normalise_label(source),
        target: record.target,
    };

    trace!("{:?}", measurement);
    Ok(measurement)
}

/// Mass number and metastable state from a token such as `132Sn` or `99Zrm1`
///
/// ```rust
/// # use isoyield_chart::{mass_and_state, IsomerState};
/// assert_eq!(mass_and_state("132Sn"), (132, IsomerState::Ground));
/// assert_eq!(mass_and_state("99Zrm1"), (99, IsomerState::Excited(1)));
/// assert_eq!(mass_and_state("99Zr"), (99, IsomerState::Ground));
/// assert_eq!(mass_and_state("Sn"), (0, IsomerState::Ground));
/// ```
pub fn mass_and_state(token: &str) -> (i32, IsomerState) {
    let (mass, state) = parsers::split_isomer(token);
    let a = match parsers::mass_digits(mass) {
        Ok((_, digits)) => parsers::int_or_zero("mass number", &digits),
        Err(_) => parsers::int_or_zero("mass number", mass),
    };
    (a, state)
}
