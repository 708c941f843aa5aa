//! Human-readable report of matching sessions.

use crate::model::CenterResult;
use std::io::{self, Write};

/// Printed after every result.
pub const SEPARATOR: &str = "------------------------------------";

/// Write each result as a fully-qualified `field: value` dump followed by [`SEPARATOR`].
pub fn write_results<W: Write>(out: &mut W, results: &[CenterResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{:#?}", result)?;
        writeln!(out, "{}", SEPARATOR)?;
    }
    out.flush()
}
