//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

/// grokadm - manage projects and configuration of an indexer web service
#[derive(Parser, Debug)]
#[command(name = "grokadm")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("operation").args(["add", "delete", "refresh"])))]
pub struct Args {
    /// Enable debug prints
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// Instance base directory
    #[arg(short, long, default_value = "/var/opengrok")]
    pub base: PathBuf,

    /// Read-only base configuration file
    #[arg(short = 'R', long)]
    pub roconfig: Option<PathBuf>,

    /// URI of the webapp with context path
    #[arg(short = 'U', long, default_value = "http://localhost:8080/source")]
    pub uri: String,

    /// Path or name of the configuration merge tool
    #[arg(short, long)]
    pub configmerge: Option<String>,

    /// Upload the configuration file at the end of the operation
    #[arg(short, long)]
    pub upload: bool,

    /// Do not run any commands or modify any config, just report
    #[arg(short = 'n', long = "noop", action = ArgAction::SetFalse)]
    pub doit: bool,

    /// Add one or more projects (their source must be under the source root)
    #[arg(short, long, num_args = 1.., value_name = "PROJECT")]
    pub add: Vec<String>,

    /// Delete one or more projects, their data and source code
    #[arg(short, long, num_args = 1.., value_name = "PROJECT")]
    pub delete: Vec<String>,

    /// Refresh the configuration file; a read-only configuration is merged in
    #[arg(short, long)]
    pub refresh: bool,
}

/// The selected mutually exclusive operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(Vec<String>),
    Delete(Vec<String>),
    Refresh,
}

impl Args {
    /// The operation selected on the command line, if any.
    pub fn operation(&self) -> Option<Operation> {
        if !self.add.is_empty() {
            Some(Operation::Add(self.add.clone()))
        } else if !self.delete.is_empty() {
            Some(Operation::Delete(self.delete.clone()))
        } else if self.refresh {
            Some(Operation::Refresh)
        } else {
            None
        }
    }
}
