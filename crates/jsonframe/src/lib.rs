//! Incremental validation and reassembly of JSON values from unframed
//! character streams.
//!
//! Protocols that write JSON messages back to back on a raw stream, with no
//! length prefix and no delimiter, leave the reader to work out where each
//! message ends. [`StreamingReassembler`] answers that one character at a
//! time: it validates every character as it arrives and returns the compact
//! text of a value on exactly the character that completes it.
//!
//! No tree is built and string escapes are not decoded; the returned text is
//! the accepted source with insignificant whitespace removed.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod parser;
mod values;

#[cfg(test)]
mod tests;

pub use parser::{ErrorSource, ParserError, ParserOptions, StreamingReassembler, SyntaxError};
pub use values::Values;
