//! `vaultgraph spellings` command

use anyhow::{bail, Result};

use crate::cli::SpellingsArgs;
use vaultgraph::{spelling, ImportsParser};

pub fn execute(args: SpellingsArgs) -> Result<()> {
    let parser = ImportsParser::new();
    let packages = match &args.input {
        Some(path) => parser.parse_file(path)?,
        None => parser.parse_imports(&args.scope)?,
    };

    let path = match args.dictionary.or_else(spelling::dictionary_location) {
        Some(p) => p,
        None => bail!(
            "could not resolve the Obsidian dictionary location; pass --dictionary explicitly"
        ),
    };

    let words = spelling::package_words(packages.keys());
    spelling::update_dictionary(&path, &words)?;

    eprintln!("     Updated dictionary {}", path.display());
    Ok(())
}
