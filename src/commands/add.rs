//! Save a credential to the data file.

use std::io::Write;

use crate::cli::AddArgs;
use crate::commands::{count, Context};
use crate::error::{Error, Field, Result};
use crate::form::Form;
use crate::store::SaveOutcome;
use crate::{generator, ui};

pub fn run(ctx: &Context, args: AddArgs, out: &mut impl Write) -> Result<()> {
    let website = args.website.trim();
    if website.is_empty() {
        return Err(Error::EmptyField(Field::Website));
    }

    let email = match args.email {
        Some(email) => email,
        None => ui::prompt_line("Username")?,
    };

    let password = match args.password {
        Some(password) => password,
        None if args.generate => {
            let pwd = generator::generate(ctx.config.password_length);
            writeln!(out, "Generated password: {}", pwd)?;
            pwd
        }
        None => ui::prompt_secret("Password")?,
    };

    let form = Form::new(website, email, password);
    let copied = args.copy.then(|| form.password.clone());

    match form.save(&ctx.store)? {
        SaveOutcome::Created => writeln!(out, "New credential saved!")?,
        SaveOutcome::Updated => writeln!(out, "{} credential updated!", website)?,
    }
    writeln!(out, "{}", count::label(ctx.store.count()?))?;

    if let Some(pwd) = copied {
        ui::copy_and_wait(out, &pwd, ctx.config.clipboard_clear_secs)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use tempfile::tempdir;

    fn args(website: &str, email: Option<&str>, password: Option<&str>) -> AddArgs {
        AddArgs {
            website: website.to_string(),
            email: email.map(str::to_string),
            password: password.map(str::to_string),
            generate: false,
            copy: false,
        }
    }

    fn run_to_string(ctx: &Context, args: AddArgs) -> Result<String> {
        let mut out = Vec::new();
        run(ctx, args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_new_then_updated_with_count() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());

        let first = run_to_string(&ctx, args("github", Some("me@x.io"), Some("one"))).unwrap();
        assert_eq!(first, "New credential saved!\nPasswords saved (1)\n");

        let second = run_to_string(&ctx, args("github", Some("me@x.io"), Some("two"))).unwrap();
        assert_eq!(second, "github credential updated!\nPasswords saved (1)\n");

        let third = run_to_string(&ctx, args("gitlab", Some("me@x.io"), Some("three"))).unwrap();
        assert_eq!(third, "New credential saved!\nPasswords saved (2)\n");
    }

    #[test]
    fn generate_fills_the_password() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());
        let mut a = args("site", Some("me"), None);
        a.generate = true;

        let output = run_to_string(&ctx, a).unwrap();
        let generated = output
            .lines()
            .next()
            .and_then(|l| l.strip_prefix("Generated password: "))
            .unwrap();
        assert_eq!(generated.len(), 16);
        assert_eq!(ctx.store.lookup("site").unwrap().unwrap().password, generated);
    }

    #[test]
    fn blank_website_fails_before_generating_or_prompting() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());
        let mut a = args("   ", None, None);
        a.generate = true;

        let mut out = Vec::new();
        let err = run(&ctx, a, &mut out).unwrap_err();
        assert!(matches!(err, Error::EmptyField(Field::Website)));
        assert!(out.is_empty());
        assert!(!ctx.store.path().exists());
    }

    #[test]
    fn empty_email_flag_is_rejected() {
        let dir = tempdir().unwrap();
        let ctx = test_context(dir.path());

        let err = run_to_string(&ctx, args("site", Some(""), Some("pw"))).unwrap_err();
        assert!(matches!(err, Error::EmptyField(Field::Username)));
        assert_eq!(ctx.store.count().unwrap(), 0);
    }
}
