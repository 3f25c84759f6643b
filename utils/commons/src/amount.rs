use super::*;

/// Number of fractional digits of a CCD amount.
pub const CCD_DECIMALS: u32 = 6;

const MICRO_CCD_PER_CCD: u64 = 1_000_000;

/// Reasons a decimal CCD string is rejected by [`parse_ccd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountParseError {
    /// Input string is empty.
    Empty,
    /// Input contains something other than digits and one decimal point.
    InvalidFormat,
    /// More than six fractional digits, the amount is not representable.
    TooManyDecimals,
    /// Amount does not fit in `u64` micro CCD.
    Overflow,
}

/// Parse a human readable CCD amount such as `"0.1"` or `"25"` into an
/// [`Amount`] expressed in micro CCD.
///
/// The conversion is exact. Anything that cannot be represented without
/// rounding is rejected.
pub fn parse_ccd(input: &str) -> Result<Amount, AmountParseError> {
    if input.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (whole, fraction_micro_ccd) = match input.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.len() > CCD_DECIMALS as usize {
                return Err(AmountParseError::TooManyDecimals);
            }
            let scale = 10u64.pow(CCD_DECIMALS - fraction.len() as u32);
            (whole, parse_digits(fraction)? * scale)
        }
        None => (input, 0),
    };

    let micro_ccd = parse_digits(whole)?
        .checked_mul(MICRO_CCD_PER_CCD)
        .and_then(|micro_ccd| micro_ccd.checked_add(fraction_micro_ccd))
        .ok_or(AmountParseError::Overflow)?;

    Ok(Amount::from_micro_ccd(micro_ccd))
}

/// Format an amount as decimal CCD without trailing zeros, the inverse of
/// [`parse_ccd`] for canonical input.
pub fn format_ccd(amount: Amount) -> String {
    let whole = amount.micro_ccd / MICRO_CCD_PER_CCD;
    let fraction = amount.micro_ccd % MICRO_CCD_PER_CCD;

    if fraction == 0 {
        return format!("{}", whole);
    }

    format!("{}.{:06}", whole, fraction)
        .trim_end_matches('0')
        .into()
}

fn parse_digits(digits: &str) -> Result<u64, AmountParseError> {
    if digits.is_empty() {
        return Err(AmountParseError::InvalidFormat);
    }

    digits.bytes().try_fold(0u64, |acc, byte| {
        if !byte.is_ascii_digit() {
            return Err(AmountParseError::InvalidFormat);
        }
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(byte - b'0')))
            .ok_or(AmountParseError::Overflow)
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_parse_ccd() {
        claim_eq!(parse_ccd("0.1"), Ok(Amount::from_micro_ccd(100_000)));
        claim_eq!(parse_ccd("0.025"), Ok(Amount::from_micro_ccd(25_000)));
        claim_eq!(parse_ccd("12"), Ok(Amount::from_ccd(12)));
        claim_eq!(parse_ccd("1.000001"), Ok(Amount::from_micro_ccd(1_000_001)));
        claim_eq!(parse_ccd("0.000000"), Ok(Amount::zero()));
    }

    #[concordium_test]
    fn test_parse_ccd_rejects() {
        claim_eq!(parse_ccd(""), Err(AmountParseError::Empty));
        claim_eq!(parse_ccd("."), Err(AmountParseError::InvalidFormat));
        claim_eq!(parse_ccd("1."), Err(AmountParseError::InvalidFormat));
        claim_eq!(parse_ccd(".5"), Err(AmountParseError::InvalidFormat));
        claim_eq!(parse_ccd("-1"), Err(AmountParseError::InvalidFormat));
        claim_eq!(parse_ccd("1.2.3"), Err(AmountParseError::InvalidFormat));
        claim_eq!(parse_ccd("0.0000001"), Err(AmountParseError::TooManyDecimals));
        claim_eq!(
            parse_ccd("18446744073709.551616"),
            Err(AmountParseError::Overflow)
        );
    }

    #[concordium_test]
    fn test_format_ccd() {
        claim_eq!(format_ccd(Amount::from_micro_ccd(100_000)), "0.1");
        claim_eq!(format_ccd(Amount::from_micro_ccd(25_000)), "0.025");
        claim_eq!(format_ccd(Amount::from_micro_ccd(1_000_001)), "1.000001");
        claim_eq!(format_ccd(Amount::from_ccd(40)), "40");
        claim_eq!(format_ccd(Amount::zero()), "0");
        claim_eq!(
            format_ccd(Amount::from_micro_ccd(u64::MAX)),
            "18446744073709.551615"
        );
    }

    #[concordium_test]
    fn test_format_is_inverse_of_parse() {
        for input in ["0.1", "0.025", "7", "123.456789", "0.000001"] {
            let amount = parse_ccd(input).expect_report("Failed to parse amount");
            claim_eq!(format_ccd(amount), input);
        }
    }
}
