//! Element symbols up to plutonium

// isoyield modules
use isoyield_utils::StringExt;

/// Element symbols indexed by Z-1
const SYMBOLS: [&str; 94] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 1-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", // 11-20
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 21-30
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", // 31-40
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", // 41-50
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", // 51-60
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", // 61-70
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 71-80
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", // 81-90
    "Pa", "U", "Np", "Pu", // 91-94
];

/// Element symbol for a proton number
///
/// ```rust
/// # use isoyield_chart::element;
/// assert_eq!(element::symbol(50), Some("Sn"));
/// assert_eq!(element::symbol(0), None);
/// assert_eq!(element::symbol(95), None);
/// ```
pub fn symbol(z: u16) -> Option<&'static str> {
    let index = (z as usize).checked_sub(1)?;
    SYMBOLS.get(index).copied()
}

/// Proton number for an element symbol, ignoring case
///
/// ```rust
/// # use isoyield_chart::element;
/// assert_eq!(element::atomic_number("sn"), Some(50));
/// assert_eq!(element::atomic_number("PU"), Some(94));
/// assert_eq!(element::atomic_number("Xx"), None);
/// ```
pub fn atomic_number(symbol: &str) -> Option<u16> {
    let symbol = symbol.to_lowercase().capitalise();
    SYMBOLS
        .iter()
        .position(|s| *s == symbol)
        .map(|index| index as u16 + 1)
}
