//! Decoder and encoder for ANSI/ECMA-48 control sequences (CSI).
//!
//! [`decode`] recognizes the control sequence at the start of a byte buffer
//! and reports the exact number of bytes it occupies, so a buffer that
//! interleaves control sequences with plain text can be consumed in a
//! scanning loop:
//!
//! ```
//! use csiparse::decode;
//!
//! let mut bytes: &[u8] = b"\x1b[38;5;128mhi\x1b[m";
//! let mut text = Vec::new();
//! while !bytes.is_empty() {
//!     if let (Some(_cmd), size) = decode(bytes) {
//!         // handle the decoded control function
//!         bytes = &bytes[size..];
//!     } else {
//!         // not a control sequence; consume one byte of plain text
//!         text.push(bytes[0]);
//!         bytes = &bytes[1..];
//!     }
//! }
//! assert_eq!(text, b"hi");
//! ```
//!
//! Sequences selecting Select Graphic Rendition decode into a typed
//! [`Sgr`] value; everything else is passed through as a raw
//! [`ControlSequence`] preserving its bytes. Either way the decoded command
//! re-encodes to its wire form:
//!
//! ```
//! use csiparse::{EncodeEscape, Sgr, SgrCode};
//!
//! let mut out = Vec::new();
//! let written = Sgr::from(SgrCode::Reset).encode_escape(&mut out)?;
//! assert_eq!(written, 4);
//! assert_eq!(out, b"\x1b[0m");
//! # Ok::<(), csiparse::Error>(())
//! ```
use std::fmt::Display;
use std::io::Write;

pub mod csi;
pub mod error;
pub mod function;
mod params;
pub mod sgr;

pub use crate::csi::{decode, Command, ControlSequence};
pub use crate::error::{Error, Result};
pub use crate::function::CsiFunction;
pub use crate::sgr::{Sgr, SgrCode};

/// Encode self as a control sequence, writing the wire form to `w` and
/// returning the number of bytes written.
///
/// The wire form is identical to the `Display` rendering of the value,
/// which for every type in this crate is pure ASCII. The only error that
/// can occur is a write fault in the sink.
pub trait EncodeEscape: Display {
    fn encode_escape<W: Write>(&self, w: &mut W) -> Result<usize> {
        let bytes = self.to_string().into_bytes();
        w.write_all(&bytes)?;
        Ok(bytes.len())
    }
}

impl EncodeEscape for Command {}
impl EncodeEscape for ControlSequence {}
impl EncodeEscape for Sgr {}
