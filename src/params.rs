//! The numeric parameter list shared by decodable control functions.
//!
//! Parameter bytes are split on `;` and each run of digits is parsed as an
//! unsigned decimal value. A position with no digits at all (a leading or
//! trailing `;`, or two adjacent `;`) is recorded as -1 rather than being
//! defaulted, so that function-specific validation can distinguish an
//! omitted parameter from an explicit zero.
use std::fmt::Formatter;

/// Parse the parameter bytes of a control sequence into a numeric list.
///
/// Fails if any non-empty position contains a byte other than a decimal
/// digit (the parameter byte range also admits `:` `<` `=` `>` `?`, which
/// have no standard numeric meaning) or if a value overflows.
pub(crate) fn parse(bytes: &[u8]) -> Result<Vec<i64>, ()> {
    if bytes.is_empty() {
        return Ok(vec![]);
    }

    let mut params = Vec::new();
    for segment in bytes.split(|&b| b == b';') {
        if segment.is_empty() {
            params.push(-1);
            continue;
        }
        let mut value: i64 = 0;
        for &b in segment {
            if !b.is_ascii_digit() {
                return Err(());
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(b - b'0')))
                .ok_or(())?;
        }
        params.push(value);
    }
    Ok(params)
}

/// Render a single parameter position. An omitted parameter (any negative
/// value) renders as an empty segment.
pub(crate) fn write_param(f: &mut Formatter, p: i64) -> std::fmt::Result {
    if p >= 0 {
        write!(f, "{}", p)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numeric_lists() {
        assert_eq!(parse(b""), Ok(vec![]));
        assert_eq!(parse(b"0"), Ok(vec![0]));
        assert_eq!(parse(b"38;5;128"), Ok(vec![38, 5, 128]));
    }

    #[test]
    fn omitted_positions() {
        assert_eq!(parse(b";5"), Ok(vec![-1, 5]));
        assert_eq!(parse(b"5;"), Ok(vec![5, -1]));
        assert_eq!(parse(b"1;;3"), Ok(vec![1, -1, 3]));
        assert_eq!(parse(b";"), Ok(vec![-1, -1]));
    }

    #[test]
    fn non_numeric_parameter_bytes() {
        // `?` `:` `<` `=` `>` are legal parameter bytes but are not part
        // of any numeric value.
        assert_eq!(parse(b"?25"), Err(()));
        assert_eq!(parse(b"4:3"), Err(()));
        assert_eq!(parse(b"<1"), Err(()));
    }

    #[test]
    fn overflow() {
        assert_eq!(parse(b"99999999999999999999"), Err(()));
    }
}
