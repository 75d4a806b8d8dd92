//! Set of useful parser combinators

// internal modules
use crate::isotope::IsomerState;

// external crates
use log::warn;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{take_till, take_while_m_n};
use nom::character::complete::{digit1, one_of, satisfy};
use nom::combinator::{all_consuming, opt};
use nom::multi::fold_many1;
use nom::sequence::preceded;
use nom::{self, IResult};

/// Nuclide name components as `(symbol, mass, state)`
pub(crate) type NuclideParts<'a> = (&'a str, u16, IsomerState);

/// Collect every digit of a mass token, in order, into one string
///
/// e.g. `132Sn` => `132`, `Sn132` => `132`
pub(crate) fn mass_digits(i: &str) -> IResult<&str, String> {
    fold_many1(
        preceded(take_till(|c: char| c.is_ascii_digit()), digit1),
        String::new,
        |mut acc, digits| {
            acc.push_str(digits);
            acc
        },
    )(i)
}

/// Split a mass token into the mass part and the metastable state
///
/// The token is metastable only when the second to last character is a
/// literal `m` followed by a single digit `k`, giving the state `m<k>`. The
/// suffix is removed from the returned mass part.
pub(crate) fn split_isomer(token: &str) -> (&str, IsomerState) {
    let Some((position, 'm')) = token.char_indices().rev().nth(1) else {
        return (token, IsomerState::Ground);
    };

    let suffix = &token[position..];
    match all_consuming(numbered_isomer)(suffix) {
        Ok((_, state)) => (&token[..position], state),
        Err(_) => {
            warn!("Unable to infer isomer from \"{suffix}\", set to ground");
            (token, IsomerState::Ground)
        }
    }
}

/// Best effort integer conversion of the leading part of a token
///
/// Anything that can not be read is set to 0 with a warning.
pub(crate) fn int_or_zero(field: &str, token: &str) -> i32 {
    match nom::character::complete::i32::<&str, nom::error::Error<&str>>(token.trim_start()) {
        Ok((_, value)) => value,
        Err(_) => {
            warn!("Unable to read {field} from \"{token}\", set to 0");
            0
        }
    }
}

/// Best effort float conversion of the leading part of a token
///
/// Anything that can not be read, or is not finite, is set to 0.0 with a
/// warning.
pub(crate) fn float_or_zero(field: &str, token: &str) -> f64 {
    match nom::number::complete::double::<&str, nom::error::Error<&str>>(token.trim_start()) {
        Ok((_, value)) if value.is_finite() => value,
        _ => {
            warn!("Unable to read {field} from \"{token}\", set to 0.00000e+00");
            0.0
        }
    }
}

/// Parse a nuclide name in either element-first or mass-first order
///
/// Can be:
///     - Element first Sn132, sn-132, Zr99m1
///     - Mass first 132Sn, 99Zrm1 (as written in the yield data)
///
/// The mass number is required since an element alone does not identify a
/// cell on the chart. Two letter symbols are tried first and a single letter
/// second, so `145Pm` is promethium while `32Pm1` is phosphorus in the `m1`
/// state.
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, NuclideParts<'_>> {
    let i = i.trim();
    alt((
        all_consuming(|i| element_first(i, symbol_pair)),
        all_consuming(|i| element_first(i, symbol_letter)),
        all_consuming(|i| mass_first(i, symbol_pair)),
        all_consuming(|i| mass_first(i, symbol_letter)),
    ))(i)
}

/// Element symbol parser, either a known pair of letters or a single letter
type SymbolParser = fn(&str) -> IResult<&str, &str>;

/// <element><separator><mass><metastable>
fn element_first<'a>(i: &'a str, symbol: SymbolParser) -> IResult<&'a str, NuclideParts<'a>> {
    let (i, symbol) = symbol(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass) = mass(i)?;
    let (i, state) = opt(numbered_isomer)(i)?;
    Ok((i, (symbol, mass, state.unwrap_or_default())))
}

/// <mass><separator><element><metastable>
fn mass_first<'a>(i: &'a str, symbol: SymbolParser) -> IResult<&'a str, NuclideParts<'a>> {
    let (i, mass) = mass(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, symbol) = symbol(i)?;
    let (i, state) = opt(numbered_isomer)(i)?;
    Ok((i, (symbol, mass, state.unwrap_or_default())))
}

/// Two letter symbol, e.g. `Zr`, `Sm`
fn symbol_pair(i: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_alphabetic())(i)
}

/// Single letter symbol, e.g. `U`, `Y`
///
/// Anything following is left for the isomer parser, so `Ym1` is yttrium.
fn symbol_letter(i: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 1, |c: char| c.is_ascii_alphabetic())(i)
}

/// Get an unsigned mass number
fn mass(i: &str) -> IResult<&str, u16> {
    nom::character::complete::u16(i)
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_-")(i)
}

/// Get the isomer from the usual formats m0, m1, m2, etc...
fn numbered_isomer(i: &str) -> IResult<&str, IsomerState> {
    let (i, _) = one_of("mM")(i)?;
    let (i, digit) = satisfy(|c| c.is_ascii_digit())(i)?;
    let level = digit as u8 - b'0';

    if level == 0 {
        Ok((i, IsomerState::Ground))
    } else {
        Ok((i, IsomerState::Excited(level)))
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_mass_digits() {
        assert_eq!(mass_digits("132Sn"), Ok(("Sn", "132".to_string())));
        assert_eq!(mass_digits("Sn132"), Ok(("", "132".to_string())));
        assert_eq!(mass_digits("99Zr"), Ok(("Zr", "99".to_string())));
        assert!(mass_digits("Sn").is_err());
    }

    #[test]
    fn test_split_isomer() {
        assert_eq!(split_isomer("132Sn"), ("132Sn", IsomerState::Ground));
        assert_eq!(split_isomer("99Zrm1"), ("99Zr", IsomerState::Excited(1)));
        assert_eq!(split_isomer("178Hfm2"), ("178Hf", IsomerState::Excited(2)));
        assert_eq!(split_isomer("99Zrm0"), ("99Zr", IsomerState::Ground));

        // symbols ending in 'm' are not mistaken for isomers
        assert_eq!(split_isomer("150Sm"), ("150Sm", IsomerState::Ground));
        assert_eq!(split_isomer("169Tm"), ("169Tm", IsomerState::Ground));

        // a dangling 'm' without a digit is ground
        assert_eq!(split_isomer("99Zrmx"), ("99Zrmx", IsomerState::Ground));
        assert_eq!(split_isomer("m"), ("m", IsomerState::Ground));
        assert_eq!(split_isomer(""), ("", IsomerState::Ground));
    }

    #[test]
    fn test_best_effort_numbers() {
        assert_eq!(int_or_zero("Z", "50"), 50);
        assert_eq!(int_or_zero("Z", "-3"), -3);
        assert_eq!(int_or_zero("proton current", "9.8"), 9);
        assert_eq!(int_or_zero("Z", "abc"), 0);
        assert_eq!(int_or_zero("Z", ""), 0);

        assert_eq!(float_or_zero("yield", "1.200E+03"), 1200.0);
        assert_eq!(float_or_zero("yield", "4.5E-02"), 0.045);
        assert_eq!(float_or_zero("yield", "7"), 7.0);
        assert_eq!(float_or_zero("yield", "n/a"), 0.0);
        assert_eq!(float_or_zero("yield", "inf"), 0.0);
    }

    #[test]
    fn test_nuclide_names() {
        assert_eq!(
            nuclide_from_str("Sn132"),
            Ok(("", ("Sn", 132, IsomerState::Ground)))
        );
        assert_eq!(
            nuclide_from_str("zr-99m1"),
            Ok(("", ("zr", 99, IsomerState::Excited(1))))
        );
        assert_eq!(
            nuclide_from_str("132Sn"),
            Ok(("", ("Sn", 132, IsomerState::Ground)))
        );
        assert_eq!(
            nuclide_from_str("99Zrm1"),
            Ok(("", ("Zr", 99, IsomerState::Excited(1))))
        );
        assert_eq!(
            nuclide_from_str("U238"),
            Ok(("", ("U", 238, IsomerState::Ground)))
        );

        // single letter elements with an isomer suffix
        assert_eq!(
            nuclide_from_str("89Ym1"),
            Ok(("", ("Y", 89, IsomerState::Excited(1))))
        );
        assert_eq!(
            nuclide_from_str("238Um1"),
            Ok(("", ("U", 238, IsomerState::Excited(1))))
        );
        assert_eq!(
            nuclide_from_str("Y89m1"),
            Ok(("", ("Y", 89, IsomerState::Excited(1))))
        );

        // two letter symbols ending in 'm' are kept whole
        assert_eq!(
            nuclide_from_str("150Sm"),
            Ok(("", ("Sm", 150, IsomerState::Ground)))
        );
        assert_eq!(
            nuclide_from_str("145Pm"),
            Ok(("", ("Pm", 145, IsomerState::Ground)))
        );
        assert_eq!(
            nuclide_from_str("32Pm1"),
            Ok(("", ("P", 32, IsomerState::Excited(1))))
        );
        assert_eq!(
            nuclide_from_str("169Tmm1"),
            Ok(("", ("Tm", 169, IsomerState::Excited(1))))
        );

        // unknown symbols are left to the caller to reject
        assert_eq!(
            nuclide_from_str("Xx26"),
            Ok(("", ("Xx", 26, IsomerState::Ground)))
        );

        // mass numbers are required
        assert!(nuclide_from_str("Sn").is_err());
        assert!(nuclide_from_str("").is_err());
        assert!(nuclide_from_str("Sn132x").is_err());
    }
}
