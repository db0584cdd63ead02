//! Lenient numeric text checks used by the validator.
//!
//! Surrounding whitespace is ignored and a leading sign is accepted, which is
//! how the form has always treated typed numbers.

use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, opt, recognize};
use nom::sequence::pair;
use nom::IResult;

fn signed_digits(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

/// True when `text` is a base-10 integer. Fractions such as `12.5` are
/// rejected; there is no upper bound on the number of digits.
pub fn is_integer(text: &str) -> bool {
    all_consuming(signed_digits)(text.trim()).is_ok()
}

/// True when `text` parses as a float, exponent and `inf`/`nan` spellings
/// included.
pub fn is_float(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}
