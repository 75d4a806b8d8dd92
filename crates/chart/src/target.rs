//! Known target materials

// crate modules
use crate::error::{Error, Result};

// isoyield modules
use isoyield_utils::f;

// external crates
use serde::Serialize;

/// Target materials with yield data
///
/// Each target has a data file named `<label>.dat` in the data directory.
///
/// ```rust
/// # use isoyield_chart::Target;
/// # use std::str::FromStr;
/// assert_eq!(Target::from_str("ZrC").unwrap(), Target::ZrC);
/// assert_eq!(Target::U.file_name(), "U.dat");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Target {
    /// Silicon carbide
    SiC,
    /// Titanium carbide
    TiC,
    /// Nickel oxide
    NiO,
    /// Zirconium carbide
    ZrC,
    /// Niobium
    Nb,
    /// Tantalum
    Ta,
    /// Thorium
    Th,
    /// Uranium (carbide)
    U,
}

impl Target {
    /// Every known target, in the order they are loaded
    pub const ALL: [Target; 8] = [
        Target::SiC,
        Target::TiC,
        Target::NiO,
        Target::ZrC,
        Target::Nb,
        Target::Ta,
        Target::Th,
        Target::U,
    ];

    /// Label used in file names and printed tables
    pub fn label(&self) -> &'static str {
        match self {
            Target::SiC => "SiC",
            Target::TiC => "TiC",
            Target::NiO => "NiO",
            Target::ZrC => "ZrC",
            Target::Nb => "Nb",
            Target::Ta => "Ta",
            Target::Th => "Th",
            Target::U => "U",
        }
    }

    /// Name of the data file for this target
    pub fn file_name(&self) -> String {
        f!("{}.dat", self.label())
    }
}

impl std::str::FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Target::ALL
            .into_iter()
            .find(|target| target.label() == s)
            .ok_or_else(|| Error::UnknownTarget(s.to_string()))
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
