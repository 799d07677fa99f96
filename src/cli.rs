//! Command-line interface definitions for lazypass.
//!
//! This module only describes the terminal surface using `clap`. The
//! behaviour behind each subcommand lives in `commands/`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lazypass",
    version,
    about = "Generate passwords and keep website credentials in a local JSON file",
    long_about = r#"
lazypass stores one email and password per website in a plain JSON file
(data.json in the current directory by default) and generates random
16-character passwords.

Typical usage:
  lazypass gen --copy
  lazypass add github --email me@example.com --generate
  lazypass get github
  lazypass count

The data file is NOT encrypted. Anyone who can read it can read every
stored password.
"#
)]
pub struct Cli {
    /// Path to the JSON data file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a credential for a website
    ///
    /// Fields not given as flags are prompted for. The password prompt
    /// does not echo. Saving under an existing website replaces the
    /// stored email and password.
    Add(AddArgs),

    /// Show the stored credential for a website
    ///
    /// The website must match exactly, including case.
    Get {
        /// Website to look up
        website: String,

        /// Copy the password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Generate a random password
    ///
    /// Characters are drawn uniformly from letters, digits, and
    /// punctuation.
    Gen {
        /// Length of the generated password (default from config, else 16)
        #[arg(short, long)]
        length: Option<usize>,

        /// Copy the generated password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Print how many credentials are saved
    Count,

    /// List saved website names
    ///
    /// Only names are shown, never passwords.
    List,
}

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    /// Website the credential belongs to (e.g. "github")
    pub website: String,

    /// Email or username for the website
    #[arg(short, long)]
    pub email: Option<String>,

    /// Password to store
    #[arg(short, long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Generate the password instead of asking for it
    #[arg(short, long)]
    pub generate: bool,

    /// Copy the saved password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_generate() {
        let cli = Cli::parse_from(["lazypass", "add", "github", "-e", "me@x.io", "--generate"]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.website, "github");
                assert_eq!(args.email.as_deref(), Some("me@x.io"));
                assert!(args.generate);
                assert!(args.password.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn password_and_generate_conflict() {
        let res = Cli::try_parse_from(["lazypass", "add", "x", "-p", "pw", "-g"]);
        assert!(res.is_err());
    }

    #[test]
    fn global_data_file_after_subcommand() {
        let cli = Cli::parse_from(["lazypass", "count", "--data-file", "/tmp/d.json"]);
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/d.json")));
        assert!(matches!(cli.command, Commands::Count));
    }

    #[test]
    fn gen_length_is_optional() {
        let cli = Cli::parse_from(["lazypass", "gen"]);
        assert!(matches!(cli.command, Commands::Gen { length: None, copy: false }));
    }
}
