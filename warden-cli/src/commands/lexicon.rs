use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use warden_core::config::WardenConfig;
use warden_lexicon::Lexicons;

#[derive(Subcommand, Debug)]
pub enum LexiconCommands {
    /// Print the weight of a phrase, if present
    Lookup {
        /// Phrase to look up (case-insensitive)
        phrase: String,
    },

    /// List every phrase with its weight
    List,

    /// Print the negative context words
    ContextWords,
}

pub fn run(config: &WardenConfig, cmd: &LexiconCommands, out: &mut dyn Write) -> Result<()> {
    let lexicons = Lexicons::from_config(&config.lexicon)?;
    match cmd {
        LexiconCommands::Lookup { phrase } => {
            let key = warden_lexicon::store::normalize_phrase(phrase);
            match lexicons.severity.lookup(&key) {
                Some(weight) => writeln!(out, "{key}\t{weight}")?,
                None => writeln!(out, "{key}\tnot in lexicon")?,
            }
        }
        LexiconCommands::List => {
            for phrase in lexicons.severity.all_phrases() {
                if let Some(weight) = lexicons.severity.lookup(phrase) {
                    writeln!(out, "{phrase}\t{weight}")?;
                }
            }
        }
        LexiconCommands::ContextWords => {
            for word in lexicons.context_words.sorted() {
                writeln!(out, "{word}")?;
            }
        }
    }
    Ok(())
}
