//! Ion source classification

// crate modules
use crate::error::Error;

// external crates
use serde::Serialize;

/// Ion sources used to produce a measured beam
///
/// Classification is an exact, case-sensitive match on the labels recorded
/// in the yield data files. Anything else is [IonSource::All], which doubles
/// as "no filter" when an [IonSource] is used to select measurements.
///
/// | ID | Variant                 | Label        |
/// | -- | ----------------------- | ------------ |
/// | 0  | [IonSource::All]        | (anything)   |
/// | 1  | [IonSource::ReSurface]  | `Re surface` |
/// | 2  | [IonSource::TaSurface]  | `Ta surface` |
/// | 3  | [IonSource::Trilis]     | `TRILIS`     |
/// | 4  | [IonSource::IgLis]      | `IG-LIS`     |
/// | 5  | [IonSource::Febiad]     | `FEBIAD`     |
///
/// ```rust
/// # use isoyield_chart::IonSource;
/// assert_eq!(IonSource::classify("TRILIS"), IonSource::Trilis);
/// assert_eq!(IonSource::classify("trilis"), IonSource::All);
/// assert_eq!(IonSource::classify("Re surface").id(), 1);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IonSource {
    /// Unrecognised source, or no filter
    #[default]
    All,
    /// Rhenium surface ion source
    #[serde(rename = "Re surface")]
    ReSurface,
    /// Tantalum surface ion source
    #[serde(rename = "Ta surface")]
    TaSurface,
    /// TRIUMF resonant ionisation laser ion source
    #[serde(rename = "TRILIS")]
    Trilis,
    /// Ion-guide laser ion source
    #[serde(rename = "IG-LIS")]
    IgLis,
    /// Forced electron beam induced arc discharge
    #[serde(rename = "FEBIAD")]
    Febiad,
}

impl IonSource {
    /// Every variant in id order
    pub const ALL: [IonSource; 6] = [
        IonSource::All,
        IonSource::ReSurface,
        IonSource::TaSurface,
        IonSource::Trilis,
        IonSource::IgLis,
        IonSource::Febiad,
    ];

    /// Classify a recorded ion source label
    ///
    /// Total over all strings, unmatched labels are [IonSource::All].
    pub fn classify(label: &str) -> Self {
        match label {
            "Re surface" => IonSource::ReSurface,
            "Ta surface" => IonSource::TaSurface,
            "TRILIS" => IonSource::Trilis,
            "IG-LIS" => IonSource::IgLis,
            "FEBIAD" => IonSource::Febiad,
            _ => IonSource::All,
        }
    }

    /// Expand the short surface source labels used in some data files
    ///
    /// ```rust
    /// # use isoyield_chart::IonSource;
    /// assert_eq!(IonSource::normalise_label("Re"), "Re surface");
    /// assert_eq!(IonSource::normalise_label("Ta"), "Ta surface");
    /// assert_eq!(IonSource::normalise_label("FEBIAD"), "FEBIAD");
    /// ```
    pub fn normalise_label(label: &str) -> String {
        match label {
            "Re" => "Re surface".to_string(),
            "Ta" => "Ta surface".to_string(),
            _ => label.to_string(),
        }
    }

    /// Numerical identifier for the source
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Label as written in the data files
    pub fn label(&self) -> &'static str {
        match self {
            IonSource::All => "All",
            IonSource::ReSurface => "Re surface",
            IonSource::TaSurface => "Ta surface",
            IonSource::Trilis => "TRILIS",
            IonSource::IgLis => "IG-LIS",
            IonSource::Febiad => "FEBIAD",
        }
    }

    /// Does a recorded label pass this source used as a filter?
    ///
    /// [IonSource::All] accepts everything.
    ///
    /// ```rust
    /// # use isoyield_chart::IonSource;
    /// assert!(IonSource::All.accepts("anything"));
    /// assert!(IonSource::Febiad.accepts("FEBIAD"));
    /// assert!(!IonSource::Febiad.accepts("TRILIS"));
    /// ```
    pub fn accepts(&self, label: &str) -> bool {
        match self {
            IonSource::All => true,
            source => IonSource::classify(label) == *source,
        }
    }
}

impl TryFrom<u8> for IonSource {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        IonSource::ALL
            .get(id as usize)
            .copied()
            .ok_or(Error::UnknownIonSource(id))
    }
}

impl std::fmt::Display for IonSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
