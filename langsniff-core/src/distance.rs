//! Rank distance between a text and candidate language models
//!
//! For every distinct trigram of the input the distance adds
//! `|count - rank - 1|` when the model knows the trigram and a fixed
//! penalty when it does not. Lower is closer.

use crate::model::{LanguageModels, RankModel};
use crate::script::UNDETERMINED;
use crate::trigram::TrigramTuple;

/// Distance added for a trigram the model does not contain
pub const UNKNOWN_TRIGRAM_PENALTY: u64 = 300;

/// Rank distance between ranked tuples and one model
pub fn distance(tuples: &[TrigramTuple], model: &RankModel) -> u64 {
    tuples
        .iter()
        .map(|tuple| match model.rank(&tuple.trigram) {
            Some(rank) => (i64::from(tuple.count) - i64::from(rank) - 1).unsigned_abs(),
            None => UNKNOWN_TRIGRAM_PENALTY,
        })
        .sum()
}

/// Select the candidate languages allowed by the allow and deny lists
///
/// With both lists empty every model is a candidate. Otherwise a language
/// is kept when the allow list is empty or names it, and the deny list does
/// not. Registry order is preserved.
pub fn filter_candidates<'a, S: AsRef<str>>(
    models: &'a LanguageModels,
    allow_list: &[S],
    deny_list: &[S],
) -> Vec<(&'a str, &'a RankModel)> {
    let all = models.iter().map(|(code, model)| (code.as_str(), model));
    if allow_list.is_empty() && deny_list.is_empty() {
        return all.collect();
    }

    let listed = |list: &[S], code: &str| list.iter().any(|entry| entry.as_ref() == code);
    all.filter(|&(code, _)| {
        (allow_list.is_empty() || listed(allow_list, code)) && !listed(deny_list, code)
    })
    .collect()
}

/// Score every allowed candidate and sort ascending by distance
///
/// Equal distances keep registry order. When filtering leaves nothing the
/// single sentinel `("und", 1)` is returned.
pub fn rank_distances<S: AsRef<str>>(
    tuples: &[TrigramTuple],
    models: &LanguageModels,
    allow_list: &[S],
    deny_list: &[S],
) -> Vec<(String, u64)> {
    let candidates = filter_candidates(models, allow_list, deny_list);
    if candidates.is_empty() {
        return vec![(UNDETERMINED.to_string(), 1)];
    }

    let mut distances: Vec<(String, u64)> = candidates
        .into_iter()
        .map(|(code, model)| (code.to_string(), distance(tuples, model)))
        .collect();
    distances.sort_by_key(|(_, distance)| *distance);
    distances
}
