use crate::function::CsiFunction;
use crate::params;
use crate::sgr::Sgr;
use std::fmt::{Display, Error as FmtError, Formatter, Write as FmtWrite};

/// A single control sequence in its undecoded form, carrying its bytes
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSequence {
    /// Parameter bytes, each in `0x30..0x40`.
    pub params: Vec<u8>,
    /// Intermediate bytes, each in `0x20..0x30`.
    pub intermediates: Vec<u8>,
    /// The final byte, in `0x40..=0x7E`; selects the control function.
    pub control: u8,
}

impl ControlSequence {
    /// The recognized control function this sequence selects, if any.
    pub fn function(&self) -> Option<CsiFunction> {
        CsiFunction::lookup(&self.intermediates, self.control)
    }
}

impl Display for ControlSequence {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        write!(f, "\x1b[")?;
        for &b in &self.params {
            f.write_char(b as char)?;
        }
        for &b in &self.intermediates {
            f.write_char(b as char)?;
        }
        f.write_char(self.control as char)
    }
}

/// A decoded control function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SGR: Set Graphic Rendition, the only control function with a typed
    /// decoding.
    Sgr(Sgr),
    /// A syntactically valid control sequence left undecoded: its function
    /// is recognized but opaque, or unknown, or a decodable function
    /// rejected its parameters. Boxed to keep the common case small.
    Unspecified(Box<ControlSequence>),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        match self {
            Command::Sgr(sgr) => sgr.fmt(f),
            Command::Unspecified(seq) => seq.fmt(f),
        }
    }
}

/// Decode the control sequence at the start of `bytes`.
///
/// A control sequence is `ESC [` followed by zero or more parameter bytes
/// in `0x30..0x40`, zero or more intermediate bytes in `0x20..0x30`, and
/// exactly one final byte in `0x40..=0x7E`. The spans are consumed
/// greedily in that order; the grammar admits no backtracking.
///
/// On success, returns the decoded command together with the exact number
/// of bytes it occupies; the command is [`Command::Unspecified`] whenever
/// no typed decoding applies, so the caller can always account for the
/// consumed span. Returns `(None, 0)` when the buffer does not begin with
/// a complete control sequence; the caller should treat the leading byte
/// as plain text and advance by one.
///
/// Bytes beyond the final byte are never examined.
pub fn decode(bytes: &[u8]) -> (Option<Command>, usize) {
    if bytes.len() < 2 || bytes[0] != 0x1b || bytes[1] != b'[' {
        return (None, 0);
    }
    let rest = &bytes[2..];

    let param_end = rest
        .iter()
        .position(|b| !(0x30..0x40).contains(b))
        .unwrap_or(rest.len());
    let (parameters, rest) = rest.split_at(param_end);

    let intermediate_end = rest
        .iter()
        .position(|b| !(0x20..0x30).contains(b))
        .unwrap_or(rest.len());
    let (intermediates, rest) = rest.split_at(intermediate_end);

    let control = match rest.first() {
        Some(&b) if (0x40..=0x7e).contains(&b) => b,
        _ => return (None, 0),
    };

    let size = 2 + parameters.len() + intermediates.len() + 1;
    (Some(decode_function(parameters, intermediates, control)), size)
}

fn decode_function(parameters: &[u8], intermediates: &[u8], control: u8) -> Command {
    let unspecified = || {
        Command::Unspecified(Box::new(ControlSequence {
            params: parameters.to_vec(),
            intermediates: intermediates.to_vec(),
            control,
        }))
    };

    match CsiFunction::lookup(intermediates, control) {
        Some(CsiFunction::SelectGraphicRendition) => {
            match params::parse(parameters).and_then(|list| Sgr::decode_params(&list)) {
                Ok(sgr) => Command::Sgr(sgr),
                Err(()) => {
                    log::trace!(
                        "malformed SGR parameters {:?}; passing the sequence through undecoded",
                        parameters
                    );
                    unspecified()
                }
            }
        }
        // recognized-but-opaque functions and unknown combinations both
        // pass through with their bytes intact
        _ => unspecified(),
    }
}
