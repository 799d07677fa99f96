//! List saved website names.

use std::io::Write;

use crate::commands::Context;
use crate::error::Result;

pub fn run(ctx: &Context, out: &mut impl Write) -> Result<()> {
    let names = ctx.store.names()?;
    if names.is_empty() {
        writeln!(out, "No credentials saved in {}.", ctx.store.path().display())?;
        return Ok(());
    }

    writeln!(out, "Websites:")?;
    for name in names {
        writeln!(out, "- {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use crate::store::Credential;
    use tempfile::tempdir;

    #[test]
    fn lists_names_without_secrets() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());
        for (site, pwd) in [("github", "hunter2"), ("bank", "tr0ub4dor")] {
            ctx.store
                .upsert(
                    site,
                    Credential {
                        email: "me@x.io".into(),
                        password: pwd.into(),
                    },
                )
                .unwrap();
        }

        let mut out = Vec::new();
        run(&ctx, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "Websites:\n- github\n- bank\n");
        assert!(!text.contains("hunter2"));
        assert!(!text.contains("tr0ub4dor"));
        assert!(!text.contains("me@x.io"));
    }

    #[test]
    fn empty_store_names_the_file() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());

        let mut out = Vec::new();
        run(&ctx, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("No credentials saved in "));
        assert!(text.contains("data.json"));
    }
}
