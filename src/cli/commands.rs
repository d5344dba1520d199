use std::io;
use std::path::Path;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::balance::balance;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::display::render;
use crate::parser::parse_file;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Balance { file }) => _balance(file),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

#[instrument]
fn _balance(file: &Path) -> Result<()> {
    debug!("file: {:?}", file);
    let tree = parse_file(file)?;
    let report = balance(&tree)?;
    for (name, masses) in &report {
        output::info(&format!("{},{},{}", name, masses.left, masses.right));
    }
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> Result<()> {
    debug!("file: {:?}", file);
    let tree = parse_file(file)?;
    output::info(&render(&tree));
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
