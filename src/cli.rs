// src/cli.rs

use crate::models::Category;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "worklog",
    version,
    about = "An opinionated note-taking tool for the developer's day-to-day.",
    long_about = "worklog keeps short, timestamped notes about your day in a local SQLite database. Entries carry a category and an optional importance flag, and can be listed back newest first with date and category filters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adds an entry to the log and prints it.
    Add {
        #[arg(short, long, value_name = "MSG", help = "Use the given MSG as the entry body")]
        message: String,

        #[arg(
            short,
            long,
            value_name = "TAG",
            default_value = "note",
            help = format!("Category for the entry. TAG must be one of: {}", Category::options())
        )]
        category: String,

        #[arg(short, long, help = "Mark/flag the entry as important")]
        important: bool,
    },

    /// Shows recorded entries, newest first.
    List {
        #[arg(short, long, value_name = "DATE", help = "Only entries strictly after DATE (YYYY-MM-DD or 'YYYY-MM-DD HH:MM:SS')")]
        after: Option<String>,

        #[arg(short, long, value_name = "DATE", help = "Only entries strictly before DATE (YYYY-MM-DD or 'YYYY-MM-DD HH:MM:SS')")]
        before: Option<String>,

        /// Filter by importance and category.
        /// Each character selects one predicate:
        ///   I  important
        ///   B  bug        F  feature    R  fix
        ///   M  meeting    N  note       C  refactor
        /// Categories are combined with OR, importance with AND.
        /// Example: `worklog list -f IBR` shows important bugs and fixes.
        #[arg(short, long, value_name = "CODE", verbatim_doc_comment)]
        filter: Option<String>,
    },

    /// Deletes every entry. Asks for confirmation unless --force is given.
    Clear {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        force: bool,
    },
}
