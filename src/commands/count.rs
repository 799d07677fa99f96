//! Report how many credentials are saved.

use std::io::Write;

use crate::commands::Context;
use crate::error::Result;

pub fn label(count: usize) -> String {
    format!("Passwords saved ({})", count)
}

pub fn run(ctx: &Context, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", label(ctx.store.count()?))?;
    Ok(())
}
