//! Selection policy
//!
//! Turns include/omit/position input into one or two filter scans and
//! combines their results.

use crate::error::Result;
use crate::filter::{
    word_set, AlwaysTrue, Contains, Excludes, FilterEngine, FilterOptions, LetterSet,
    PositionMask, WordSet,
};

/// User-supplied constraints
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Letters that must appear.
    pub include: String,
    /// Letters that must not appear.
    pub omit: String,
    /// Known letter positions, like `__a_k`.
    pub position: String,
    /// Letters known to be in the word but not at these positions.
    pub excluded: Vec<String>,
    /// Allow repeated letters in include/omit results.
    pub dupes_ok: bool,
}

impl Query {
    /// Required letters: the include letters plus every pinned mask letter
    pub fn required_letters(&self) -> LetterSet {
        let mut letters = LetterSet::from(self.include.as_str());
        letters.extend(PositionMask::new(&self.position).letters());
        for mask in &self.excluded {
            letters.extend(PositionMask::new(mask).letters());
        }
        letters
    }

    /// Whether a `Contains` scan runs: include letters or any mask given
    pub fn wants_include_scan(&self) -> bool {
        !self.include.is_empty() || !self.position.is_empty() || !self.excluded.is_empty()
    }

    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            position: PositionMask::new(&self.position),
            excluded: self.excluded.iter().map(|m| PositionMask::new(m)).collect(),
            dupes_ok: self.dupes_ok,
            ..FilterOptions::default()
        }
    }
}

/// Results of each scan that ran
#[derive(Debug, Default)]
pub struct Selection {
    pub include_result: Option<WordSet>,
    pub omit_result: Option<WordSet>,
    pub starter_result: Option<WordSet>,
}

impl Selection {
    /// The final word set: the intersection of whichever scans ran
    pub fn into_words(self) -> WordSet {
        match (self.include_result, self.omit_result) {
            (Some(include), Some(omit)) => include.intersection(&omit).cloned().collect(),
            (Some(words), None) | (None, Some(words)) => words,
            (None, None) => self.starter_result.unwrap_or_else(word_set),
        }
    }
}

/// Run the scans `query` calls for
///
/// The include and omit scans are independent and run in parallel; an error
/// from either aborts the whole selection.
pub fn select(engine: &FilterEngine, query: &Query) -> Result<Selection> {
    let required = query.required_letters();
    let omitted = LetterSet::from(query.omit.as_str());

    let include_scan = query.wants_include_scan();

    if !include_scan && omitted.is_empty() {
        log::debug!("No constraints given, suggesting starter words");
        let options = FilterOptions::starter(engine.config().starter_words);
        let starter = engine.filter(&AlwaysTrue, &LetterSet::new(), &options)?;
        return Ok(Selection {
            starter_result: Some(starter),
            ..Selection::default()
        });
    }

    let options = query.filter_options();

    let (include_result, omit_result) = rayon::join(
        || {
            include_scan
                .then(|| engine.filter(&Contains, &required, &options))
                .transpose()
        },
        || {
            (!omitted.is_empty())
                .then(|| engine.filter(&Excludes, &omitted, &options))
                .transpose()
        },
    );

    Ok(Selection {
        include_result: include_result?,
        omit_result: omit_result?,
        starter_result: None,
    })
}
