//! Isotope identity on the nuclide chart

// crate modules
use crate::element;
use crate::error::{Error, Result};
use crate::parsers::nuclide_from_str;

// isoyield modules
use isoyield_utils::f;

// external crates
use serde::Serialize;

/// Variants of excited states
///
/// A measurement is either of the ground state, or of some metastable state
/// using the `m1`, `m2`, ... notation of the yield data.
///
/// States are also numbered by level, where the ground state is level 1 and
/// `m<k>` is level `k+1`.
///
/// ```rust
/// # use isoyield_chart::IsomerState;
/// assert_eq!(IsomerState::Ground.level(), 1);
/// assert_eq!(IsomerState::Excited(1).level(), 2);
/// assert_eq!(IsomerState::from_level(3), IsomerState::Excited(2));
/// assert_eq!(IsomerState::Excited(2).to_string(), "m2");
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IsomerState {
    #[default]
    Ground,
    Excited(u8),
}

impl IsomerState {
    /// State from a level number, anything at or below 1 is ground
    pub fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => IsomerState::Ground,
            l => IsomerState::Excited(l - 1),
        }
    }

    /// Level number, 1 for the ground state
    pub fn level(&self) -> u8 {
        match self {
            IsomerState::Ground => 1,
            IsomerState::Excited(e) => e.saturating_add(1),
        }
    }
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match self {
            IsomerState::Ground => String::from(""),
            IsomerState::Excited(e) => f!("m{e}"),
        };
        write!(f, "{state}")
    }
}

/// Proton and neutron numbers of an isotope
///
/// Values are signed because they are derived from raw data (N = A - Z) and
/// may be nonsense until checked against the chart with
/// [cell_index()](crate::cell_index).
///
/// The `FromStr` trait is implemented for nuclide names in either the
/// `<element><mass>` or the `<mass><element>` order. Any metastable suffix is
/// accepted but dropped, since every state of an isotope shares one cell.
///
/// ```rust
/// # use isoyield_chart::Isotope;
/// # use std::str::FromStr;
/// let tin = Isotope::from_str("Sn132").unwrap();
/// assert_eq!(tin, Isotope { z: 50, n: 82 });
/// assert_eq!(tin.mass(), 132);
///
/// // mass-first names as used in the yield data
/// assert_eq!(Isotope::from_str("99Zrm1").unwrap(), Isotope { z: 40, n: 59 });
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Isotope {
    /// Proton number
    pub z: i32,
    /// Neutron number
    pub n: i32,
}

impl Isotope {
    /// Isotope from proton and mass numbers
    pub fn from_mass(z: i32, mass: i32) -> Self {
        Self { z, n: mass - z }
    }

    /// Mass number (Z+N, total nucleons)
    pub fn mass(&self) -> i32 {
        self.z + self.n
    }

    /// Element symbol, if Z is a known element
    pub fn symbol(&self) -> Option<&'static str> {
        u16::try_from(self.z).ok().and_then(element::symbol)
    }

    /// A name for the isotope in a given state
    ///
    /// Names follow the `<mass><element><state>` convention of the yield data.
    ///
    /// ```rust
    /// # use isoyield_chart::{Isotope, IsomerState};
    /// let zr = Isotope { z: 40, n: 59 };
    /// assert_eq!(zr.name(IsomerState::Ground), "99Zr");
    /// assert_eq!(zr.name(IsomerState::Excited(1)), "99Zrm1");
    /// ```
    pub fn name(&self, state: IsomerState) -> String {
        match self.symbol() {
            Some(symbol) => f!("{}{}{}", self.mass(), symbol, state),
            None => f!("{}(Z={}){}", self.mass(), self.z, state),
        }
    }
}

impl std::str::FromStr for Isotope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (symbol, mass, _)) = nuclide_from_str(s)
            .map_err(|_| Error::ParseError(f!("Could not extract nuclide from {s}")))?;

        let z = element::atomic_number(symbol)
            .ok_or_else(|| Error::UnknownElement(symbol.to_string()))?;

        Ok(Isotope::from_mass(z as i32, mass as i32))
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name(IsomerState::Ground))
    }
}
