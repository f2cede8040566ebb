//! SGR: Select Graphic Rendition.
//!
//! The one control function this crate decodes into a typed value. An SGR
//! sequence carries a rendition command code in `0..=65` optionally followed
//! by sub-parameters; the color-setting commands (38, 48 and 58) require a
//! depth selector sub-grammar that is validated here.
use crate::params;
use num_derive::*;
use num_traits::FromPrimitive;
use std::fmt::{Display, Error as FmtError, Formatter, Write as FmtWrite};

/// A single decoded Select Graphic Rendition control function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sgr {
    /// The rendition aspect selected by this sequence, in `0..=65`.
    /// [`code`](Sgr::code) maps it to the named catalogue entry.
    pub command: i64,
    /// Sub-parameters following the command, verbatim. For the color
    /// commands this is the depth selector plus either a palette index
    /// (`5;idx`) or an RGB triple (`2;r;g;b`); for every other command it
    /// is normally empty.
    pub params: Vec<i64>,
}

impl Sgr {
    /// The named catalogue entry for this command. Codes 56 and 57 lie in
    /// the accepted range but have no assigned meaning and return `None`.
    pub fn code(&self) -> Option<SgrCode> {
        FromPrimitive::from_i64(self.command)
    }

    /// Validate and interpret a parsed parameter list as an SGR invocation.
    ///
    /// An empty list is the `ESC [ m` shorthand for Reset. Otherwise the
    /// first value is the command; a color command must be followed by a
    /// well-formed depth selector, and anything else must be in range.
    /// Note that an omitted first parameter arrives here as -1, which is
    /// out of range and rejects the whole list rather than defaulting to
    /// Reset.
    pub(crate) fn decode_params(params: &[i64]) -> Result<Self, ()> {
        let (command, rest) = match params.split_first() {
            None => return Ok(SgrCode::Reset.into()),
            Some((&command, rest)) => (command, rest),
        };

        match FromPrimitive::from_i64(command) {
            Some(SgrCode::ForegroundColor)
            | Some(SgrCode::BackgroundColor)
            | Some(SgrCode::UnderlineColor) => {
                let depth = match rest.first() {
                    Some(&depth) => depth,
                    None => return Err(()),
                };
                match depth {
                    2 if rest.len() == 4 => {}
                    5 if rest.len() == 2 => {}
                    _ => return Err(()),
                }
            }
            _ => {
                if command < 0 || command > 65 {
                    return Err(());
                }
            }
        }

        Ok(Sgr {
            command,
            params: rest.to_vec(),
        })
    }
}

impl From<SgrCode> for Sgr {
    fn from(code: SgrCode) -> Sgr {
        Sgr {
            command: code as i64,
            params: vec![],
        }
    }
}

impl Display for Sgr {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "\x1b[")?;
        params::write_param(f, self.command)?;
        for &p in &self.params {
            f.write_char(';')?;
            params::write_param(f, p)?;
        }
        f.write_char('m')
    }
}

/// The SGR rendition command catalogue from ECMA-48, codes 0 through 65.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum SgrCode {
    /// Default rendition; cancels the effect of any preceding SGR
    Reset = 0,
    /// Bold or increased intensity
    IntensityBold = 1,
    /// Faint, decreased intensity or second color
    IntensityDim = 2,
    ItalicOn = 3,
    /// Singly underlined
    UnderlineOn = 4,
    /// Blinks less than 150 times per minute
    BlinkOn = 5,
    /// Blinks 150 times per minute or more
    RapidBlinkOn = 6,
    /// Swap foreground and background colors
    InverseOn = 7,
    /// Concealed characters
    InvisibleOn = 8,
    /// Crossed out, but still legible
    StrikeThroughOn = 9,
    /// Primary (default) font
    DefaultFont = 10,
    AltFont1 = 11,
    AltFont2 = 12,
    AltFont3 = 13,
    AltFont4 = 14,
    AltFont5 = 15,
    AltFont6 = 16,
    AltFont7 = 17,
    AltFont8 = 18,
    AltFont9 = 19,
    /// Fraktur (Gothic)
    Fraktur = 20,
    /// Doubly underlined
    UnderlineDouble = 21,
    /// Neither bold nor faint
    NormalIntensity = 22,
    /// Not italicized, not fraktur
    ItalicOff = 23,
    /// Not underlined, neither singly nor doubly
    UnderlineOff = 24,
    /// Steady (not blinking)
    BlinkOff = 25,
    /// Proportional spacing per CCITT Recommendation T.61
    ProportionalSpacingOn = 26,
    InverseOff = 27,
    /// Revealed characters
    InvisibleOff = 28,
    /// Not crossed out
    StrikeThroughOff = 29,
    ForegroundBlack = 30,
    ForegroundRed = 31,
    ForegroundGreen = 32,
    ForegroundYellow = 33,
    ForegroundBlue = 34,
    ForegroundMagenta = 35,
    ForegroundCyan = 36,
    ForegroundWhite = 37,
    /// Default foreground color (implementation-defined)
    ForegroundDefault = 39,
    BackgroundBlack = 40,
    BackgroundRed = 41,
    BackgroundGreen = 42,
    BackgroundYellow = 43,
    BackgroundBlue = 44,
    BackgroundMagenta = 45,
    BackgroundCyan = 46,
    BackgroundWhite = 47,
    /// Default background color (implementation-defined)
    BackgroundDefault = 49,
    ProportionalSpacingOff = 50,
    /// Framed
    FrameOn = 51,
    /// Encircled
    EncircleOn = 52,
    /// Overlined
    OverlineOn = 53,
    /// Not framed, not encircled
    FrameAndEncircleOff = 54,
    /// Not overlined
    OverlineOff = 55,
    /// Default underline color
    ResetUnderlineColor = 59,
    /// Ideogram underline or right side line
    IdeogramUnderline = 60,
    /// Ideogram double underline or double line on the right side
    IdeogramDoubleUnderline = 61,
    /// Ideogram overline or left side line
    IdeogramOverline = 62,
    /// Ideogram double overline or double line on the left side
    IdeogramDoubleOverline = 63,
    /// Ideogram stress marking
    IdeogramStress = 64,
    /// Cancels the ideogram rendition aspects
    IdeogramOff = 65,

    /// Followed by either a 256 color palette index or a true color
    /// RGB triple
    ForegroundColor = 38,
    BackgroundColor = 48,
    /// Underline color; same sub-grammar as 38/48 (not part of ECMA-48
    /// but widely implemented)
    UnderlineColor = 58,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::csi::{decode, Command};
    use crate::EncodeEscape;

    fn decode_sgr(input: &[u8]) -> Sgr {
        let (cmd, size) = decode(input);
        assert_eq!(size, input.len());
        match cmd {
            Some(Command::Sgr(sgr)) => {
                let mut out = Vec::new();
                let written = sgr.encode_escape(&mut out).unwrap();
                assert_eq!(written, input.len());
                assert_eq!(out, input);
                sgr
            }
            other => panic!("expected an SGR command, got {:?}", other),
        }
    }

    fn decode_raw(input: &[u8]) {
        let (cmd, size) = decode(input);
        assert_eq!(size, input.len());
        match cmd {
            Some(Command::Unspecified(_)) => {}
            other => panic!("expected an unspecified sequence, got {:?}", other),
        }
    }

    #[test]
    fn rendition_codes_round_trip() {
        for code in 0..=65 {
            if let 38 | 48 | 58 = code {
                // the color commands are exercised separately; without a
                // depth selector they are malformed
                continue;
            }
            let sgr = decode_sgr(format!("\x1b[{}m", code).as_bytes());
            assert_eq!(sgr.command, code);
            assert!(sgr.params.is_empty());
        }
    }

    #[test]
    fn named_codes() {
        assert_eq!(decode_sgr(b"\x1b[0m").code(), Some(SgrCode::Reset));
        assert_eq!(decode_sgr(b"\x1b[1m").code(), Some(SgrCode::IntensityBold));
        assert_eq!(decode_sgr(b"\x1b[22m").code(), Some(SgrCode::NormalIntensity));
        assert_eq!(decode_sgr(b"\x1b[65m").code(), Some(SgrCode::IdeogramOff));
        // 56 and 57 are accepted but carry no assigned meaning
        assert_eq!(decode_sgr(b"\x1b[56m").code(), None);
        assert_eq!(decode_sgr(b"\x1b[57m").code(), None);
    }

    #[test]
    fn palette_color() {
        let sgr = decode_sgr(b"\x1b[38;5;128m");
        assert_eq!(sgr.code(), Some(SgrCode::ForegroundColor));
        assert_eq!(sgr.params, vec![5, 128]);

        let sgr = decode_sgr(b"\x1b[48;5;128m");
        assert_eq!(sgr.code(), Some(SgrCode::BackgroundColor));
        assert_eq!(sgr.params, vec![5, 128]);

        let sgr = decode_sgr(b"\x1b[58;5;128m");
        assert_eq!(sgr.code(), Some(SgrCode::UnderlineColor));
        assert_eq!(sgr.params, vec![5, 128]);
    }

    #[test]
    fn true_color() {
        let sgr = decode_sgr(b"\x1b[38;2;32;64;128m");
        assert_eq!(sgr.code(), Some(SgrCode::ForegroundColor));
        assert_eq!(sgr.params, vec![2, 32, 64, 128]);

        let sgr = decode_sgr(b"\x1b[48;2;32;64;128m");
        assert_eq!(sgr.params, vec![2, 32, 64, 128]);

        let sgr = decode_sgr(b"\x1b[58;2;32;64;128m");
        assert_eq!(sgr.params, vec![2, 32, 64, 128]);
    }

    #[test]
    fn bare_sequence_is_reset() {
        let (cmd, size) = decode(b"\x1b[m");
        assert_eq!(size, 3);
        let sgr = match cmd {
            Some(Command::Sgr(sgr)) => sgr,
            other => panic!("expected an SGR command, got {:?}", other),
        };
        assert_eq!(sgr, SgrCode::Reset.into());
        // the shorthand re-encodes in its explicit form
        assert_eq!(sgr.to_string(), "\x1b[0m");
    }

    #[test]
    fn malformed_color_selectors() {
        // unsupported depth
        decode_raw(b"\x1b[38;9;128m");
        // missing depth selector entirely
        decode_raw(b"\x1b[38m");
        decode_raw(b"\x1b[48m");
        decode_raw(b"\x1b[58m");
        // omitted depth selector position
        decode_raw(b"\x1b[38;;128m");
        // wrong sub-parameter counts
        decode_raw(b"\x1b[38;5m");
        decode_raw(b"\x1b[38;5;1;2m");
        decode_raw(b"\x1b[38;2;32;64m");
        decode_raw(b"\x1b[38;2;32;64;128;255m");
    }

    #[test]
    fn command_out_of_range() {
        decode_raw(b"\x1b[66m");
        decode_raw(b"\x1b[107m");
        // an omitted command position is -1, not a default
        decode_raw(b"\x1b[;1m");
    }

    #[test]
    fn trailing_omitted_parameter_is_preserved() {
        let sgr = decode_sgr(b"\x1b[0;m");
        assert_eq!(sgr.command, 0);
        assert_eq!(sgr.params, vec![-1]);
    }

    #[test]
    fn producer_side_encoding() {
        let mut out = Vec::new();
        let written = Sgr::from(SgrCode::Reset).encode_escape(&mut out).unwrap();
        assert_eq!(written, 4);
        assert_eq!(out, b"\x1b[0m");

        let fg = Sgr {
            command: SgrCode::ForegroundColor as i64,
            params: vec![5, 128],
        };
        assert_eq!(fg.to_string(), "\x1b[38;5;128m");
    }
}
