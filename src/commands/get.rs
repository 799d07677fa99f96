//! Look up and display a stored credential.

use std::io::Write;

use crate::commands::Context;
use crate::error::Result;
use crate::{form, ui};

pub fn run(ctx: &Context, website: &str, copy: bool, out: &mut impl Write) -> Result<()> {
    let credential = form::search(&ctx.store, website)?;

    writeln!(out, "Credentials found for: {}", website.trim())?;
    writeln!(out, "Username: {}", credential.email)?;
    writeln!(out, "Password : {}", credential.password)?;

    if copy {
        ui::copy_and_wait(out, &credential.password, ctx.config.clipboard_clear_secs)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use crate::error::Error;
    use crate::store::Credential;
    use tempfile::tempdir;

    #[test]
    fn prints_the_three_lines() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());
        ctx.store
            .upsert(
                "github",
                Credential {
                    email: "me@x.io".into(),
                    password: "s3cret".into(),
                },
            )
            .unwrap();

        let mut out = Vec::new();
        run(&ctx, " github ", false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Credentials found for: github\nUsername: me@x.io\nPassword : s3cret\n"
        );
    }

    #[test]
    fn unknown_website_prints_nothing() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());

        let mut out = Vec::new();
        let err = run(&ctx, "github", false, &mut out).unwrap_err();
        assert!(matches!(err, Error::NotFound));
        assert!(out.is_empty());
    }
}
