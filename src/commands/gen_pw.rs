//! Generate a random password.

use std::io::Write;

use crate::commands::Context;
use crate::error::Result;
use crate::{generator, ui};

pub fn run(ctx: &Context, length: Option<usize>, copy: bool, out: &mut impl Write) -> Result<()> {
    let pwd = generator::generate(length.unwrap_or(ctx.config.password_length));

    writeln!(out, "{}", pwd)?;

    if copy {
        ui::copy_and_wait(out, &pwd, ctx.config.clipboard_clear_secs)?;
    }
    Ok(())
}
