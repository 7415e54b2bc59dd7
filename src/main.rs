//! wordle-me-this - list usable words for five-letter word puzzles
//!
//! Main entry point for the command-line application.

use anyhow::Context;
use clap::Parser;
use std::process;

use wordle_me_this::builder::build_cache;
use wordle_me_this::cli::Args;
use wordle_me_this::display::print_words;
use wordle_me_this::filter::FilterEngine;
use wordle_me_this::progress::{
    create_spinner, print_build_summary, print_error, print_header, print_info, print_warning,
};
use wordle_me_this::selection::select;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = args.config()?;
    let query = args.query()?;

    if args.verbose {
        print_header("Configuration");
        print_info(&format!("Dictionary:   {:?}", config.words_file));
        print_info(&format!("Cache:        {:?}", config.cache_path()));
        print_info(&format!("Include:      {:?}", query.include));
        print_info(&format!("Omit:         {:?}", query.omit));
        print_info(&format!("Position:     {:?}", query.position));
        print_info(&format!("Excluded:     {:?}", query.excluded));
        print_info(&format!("Dupes:        {}", query.dupes_ok));
    }

    // The cache must be complete before any scan opens it.
    if config.needs_build(args.rebuild) {
        let spinner = if args.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_spinner("Building word cache...")
        };

        let stats = build_cache(&config)
            .with_context(|| format!("Failed to build word cache from {:?}", config.words_file))?;
        spinner.finish_and_clear();

        if !args.quiet {
            print_build_summary(&stats, &config.cache_path());
        }
    }

    let engine = FilterEngine::new(config);
    let words = select(&engine, &query)
        .context("Failed to filter the word cache")?
        .into_words();

    if words.is_empty() && args.verbose {
        print_warning("No matching words");
    }

    print_words(&words, args.format)?;

    Ok(())
}
