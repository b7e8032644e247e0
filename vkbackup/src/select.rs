use thiserror::Error;

use crate::model::Rendition;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("photo has no size renditions")]
pub struct EmptyRenditionSet;

/// Picks the rendition with the largest `width + height`.
///
/// Only a strictly greater score replaces the current best, so the first
/// maximal rendition in iteration order wins.
pub fn select_best(renditions: &[Rendition]) -> Result<&Rendition, EmptyRenditionSet> {
    let mut iter = renditions.iter();
    let mut best = iter.next().ok_or(EmptyRenditionSet)?;
    for candidate in iter {
        if candidate.score() > best.score() {
            best = candidate;
        }
    }
    Ok(best)
}
