//! # wordle-me-this
//!
//! Lists usable words for five-letter word puzzles from the local dictionary.
//!
//! ## Features
//!
//! - **Word cache**: the system dictionary reduced to lowercase five-letter words
//! - **Include / omit**: words containing all of, or none of, a set of letters
//! - **Position masks**: known letters in place (`__a_k`) and letters known to
//!   be elsewhere (`-x e____`)
//! - **Starter words**: a random pick of vowel-heavy words without repeated letters
//!
//! ## Usage
//!
//! ```bash
//! # Suggest starter words
//! wordle-me-this
//!
//! # Words with "r" and "e", without "a", "s" or "t", with "k" last
//! wordle-me-this ____k -i re -o ast
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordle_me_this::config::Config;
//! use wordle_me_this::filter::FilterEngine;
//! use wordle_me_this::selection::{select, Query};
//!
//! let config = Config::default();
//! if config.needs_build(false) {
//!     wordle_me_this::builder::build_cache(&config).unwrap();
//! }
//!
//! let query = Query {
//!     include: "re".to_string(),
//!     omit: "ast".to_string(),
//!     position: "____k".to_string(),
//!     excluded: Vec::new(),
//!     dupes_ok: true,
//! };
//!
//! let engine = FilterEngine::new(config);
//! let words = select(&engine, &query).unwrap().into_words();
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod display;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod progress;
pub mod selection;

pub use cli::Args;
pub use config::Config;
pub use error::WordError;
pub use filter::FilterEngine;
