pub mod logging;
pub mod types;

use std::io::ErrorKind;

use clap::Parser;

use crate::toc;
use crate::utils::fs;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging();

    let path = match &cli.file {
        Some(path) => path,
        None => {
            println!("No file given, usage: mdtoc <FILE>");
            return;
        }
    };

    // The whole document is read up front; the tree must be complete
    // before numbering starts, so there is no partial output on failure
    let content = match fs::read_file(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("Could not find file {}, try again.", path.display());
            return;
        }
        Err(err) => {
            log::debug!("Read failed: {}", err);
            println!(
                "Something went wrong while working with file {}, try again.",
                path.display()
            );
            return;
        }
    };

    match toc::generate_toc(&content) {
        Ok(toc_text) => {
            // TOC first, then the document itself
            println!("{}", toc_text);
            for line in content.lines() {
                println!("{}", line);
            }
        }
        Err(err) => log::error!("Failed to generate table of contents: {}", err),
    }
}
