//! `vaultgraph generate` command

use anyhow::{Context, Result};

use crate::cli::GenerateArgs;
use vaultgraph::graph::ImportMapping;
use vaultgraph::util::Config;
use vaultgraph::{spelling, GraphCreator, ImportsParser, NoteTemplate, Vault};

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    let vault = Vault::open(&args.vault)?;

    let parser = ImportsParser::new();
    let packages: ImportMapping = match &args.input {
        Some(path) => parser.parse_file(path)?,
        None => parser.parse_imports(&args.scope)?,
    };

    let naming = config.naming_scheme();
    let classifier = config.classifier(&naming);
    let renderer = NoteTemplate::new();
    let creator = GraphCreator::new(&vault, &renderer, naming, classifier);

    if let Err(err) = creator.create_graph(&packages) {
        let hint = if err.nothing_written() {
            "no notes were written; rerunning is safe"
        } else {
            "some notes were written; clean the vault before retrying"
        };
        return Err(anyhow::Error::new(err).context(hint.to_string()));
    }

    eprintln!("     Created {} notes in {}", packages.len(), vault.name());

    if !args.no_spellings {
        update_spellings(&packages, args.dictionary.as_deref())?;
    }

    Ok(())
}

fn update_spellings(
    packages: &ImportMapping,
    dictionary: Option<&std::path::Path>,
) -> Result<()> {
    let path = match dictionary {
        Some(p) => p.to_path_buf(),
        None => match spelling::dictionary_location() {
            Some(p) => p,
            None => {
                tracing::warn!("Could not resolve the Obsidian dictionary location; skipping");
                return Ok(());
            }
        },
    };

    let words = spelling::package_words(packages.keys());
    spelling::update_dictionary(&path, &words)
        .context("failed to update the custom dictionary")?;

    eprintln!("     Updated dictionary {}", path.display());
    Ok(())
}
