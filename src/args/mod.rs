//! Command-line handling for askpw.
//!
//! ```text
//! Raw tokens → Parse (registry + visitor) → ParsedArguments → Assemble → child argv
//! ```
//!
//! Parsing never touches I/O, so every stage is unit-testable on its own.

mod assembler;
mod parser;
mod registry;

pub use assembler::ArgAssembler;
pub use parser::{parse, Action, ParseError, ParsedArguments, Parser, Visitor};
pub use registry::{flag_registry, FlagArity, FlagDef, FlagEffect};
