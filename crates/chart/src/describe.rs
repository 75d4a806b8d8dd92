//! Per-isotope yield listings

// crate modules
use crate::error::Result;
use crate::isotope::{IsomerState, Isotope};
use crate::record::Measurement;
use crate::table::Cell;

// isoyield modules
use isoyield_utils::{f, NumFormat};

// external crates
use serde::Serialize;

/// Every measurement of an isotope, grouped by state
///
/// Displays as a table of yields for each state from the ground state up to
/// the highest metastable state recorded, e.g.
///
/// ```text
/// Average yield: 2.25000e+05
/// Number of states (ground + metastable): 2
/// Nucleus: 99Zr
///   Yield          Proton current  Target  Ion source
///   4.00000e+05    9               Ta      Re surface
/// Nucleus: 99Zrm1
///   Yield          Proton current  Target  Ion source
///   5.00000e+04    10              U       TRILIS
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsotopeDescription {
    /// Isotope the listing is for
    pub isotope: Isotope,
    /// Unfiltered mean yield across all states
    pub average: f64,
    /// Highest state level recorded (ground + metastable), 0 if no data
    pub n_states: u8,
    /// Measurements for each state level in ascending order
    pub states: Vec<StateYields>,
}

/// Measurements for a single state of an isotope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateYields {
    /// Ground or metastable state
    pub state: IsomerState,
    /// Measurements of this state in load order
    pub measurements: Vec<Measurement>,
}

impl IsotopeDescription {
    /// Group the measurements of a cell by state
    ///
    /// Every level from ground up to the highest recorded is listed, even if
    /// some in between have no measurements.
    pub(crate) fn new(isotope: Isotope, cell: &Cell) -> Self {
        let n_states = cell.n_states();
        let states = (1..=n_states)
            .map(|level| StateYields {
                state: IsomerState::from_level(level),
                measurements: cell
                    .measurements()
                    .iter()
                    .filter(|m| m.state.level() == level)
                    .cloned()
                    .collect(),
            })
            .collect();

        Self {
            isotope,
            average: cell.average(),
            n_states,
            states,
        }
    }

    /// Serialise to a pretty JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for IsotopeDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!("Average yield: {}\n", self.average.sci(5, 2));
        s += &f!(
            "Number of states (ground + metastable): {}",
            self.n_states
        );

        for group in &self.states {
            s += &f!("\nNucleus: {}", self.isotope.name(group.state));
            s += &f!(
                "\n  {:<15}{:<16}{:<8}{}",
                "Yield",
                "Proton current",
                "Target",
                "Ion source"
            );
            for m in &group.measurements {
                s += &f!(
                    "\n  {:<15}{:<16}{:<8}{}",
                    m.intensity.sci(5, 2),
                    m.proton_current,
                    m.target.label(),
                    m.ion_source
                );
            }
        }

        write!(f, "{s}")
    }
}
