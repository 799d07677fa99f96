//! Terminal prompts and clipboard helpers.
//!
//! All reads from stdin and all clipboard access go through here. No data
//! file logic should live in this module.

use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};
use tracing::warn;

use crate::error::{Error, Result};

/// Print `prompt` and read one line, without the trailing newline.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush().map_err(Error::Prompt)?;
    let mut s = String::new();
    io::stdin().read_line(&mut s).map_err(Error::Prompt)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}

/// Read a password without echoing it.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    rpassword::prompt_password(format!("{}: ", prompt)).map_err(Error::Prompt)
}

/// Put `text` on the clipboard.
///
/// With a non-zero timeout, a background thread clears the clipboard after
/// `secs` seconds unless something else was copied in the meantime. The
/// returned handle lets the caller stay alive until that happens.
pub fn copy_to_clipboard_with_timeout(text: &str, secs: u64) -> Result<Option<JoinHandle<()>>> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| Error::Clipboard(format!("init: {}", e)))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| Error::Clipboard(format!("set: {}", e)))?;

    if secs == 0 {
        return Ok(None);
    }

    let text = text.to_string();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_secs(secs));

        let ctx2_result: std::result::Result<ClipboardContext, _> = ClipboardProvider::new();
        if let Ok(mut ctx2) = ctx2_result {
            let current = ctx2.get_contents();
            if current.ok().as_deref() == Some(text.as_str()) {
                let _ = ctx2.set_contents(String::new());
            }
        }
    });

    Ok(Some(handle))
}

/// Copy `text` and block until the clipboard timeout has passed.
pub fn copy_and_wait(out: &mut impl Write, text: &str, secs: u64) -> Result<()> {
    let handle = copy_to_clipboard_with_timeout(text, secs)?;
    if let Some(handle) = handle {
        writeln!(out, "Copied to clipboard, clearing in {}s.", secs)?;
        out.flush()?;
        wait_for_clear(handle);
    } else {
        writeln!(out, "Copied to clipboard.")?;
    }
    Ok(())
}

/// Join the clear thread. Returns false, and logs, if it panicked.
fn wait_for_clear(handle: JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(_) => {
            warn!("clipboard clear thread panicked, clipboard may still hold the password");
            false
        }
    }
}
