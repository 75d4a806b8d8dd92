use crate::f;

// standard library
use std::fmt::LowerExp;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Scientific number formatting with a signed, padded exponent
    ///
    /// Rust drops the exponent sign and padding by default, which makes
    /// columns of yields spanning many orders of magnitude hard to read.
    ///
    /// ```rust
    /// # use isoyield_utils::NumFormat;
    /// assert_eq!((1200.0).sci(5, 2), "1.20000e+03");
    /// assert_eq!((0.00042).sci(3, 2), "4.200e-04");
    /// assert_eq!((0.0).sci(2, 2), "0.00e+00");
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let num = f!("{:.precision$e}", &self, precision = precision);
        let (mantissa, exp) = match num.split_once('e') {
            Some(parts) => parts,
            None => return num,
        };
        let (sign, exp) = match exp.strip_prefix('-') {
            Some(exp) => ('-', exp),
            None => ('+', exp),
        };
        f!("{mantissa}e{sign}{exp:0>exp_pad$}")
    }
}
