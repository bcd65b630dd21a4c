use crate::model::ProverbEntry;
use crate::store::Collection;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one proverb uniformly at random, or the empty sentinel when there is
/// nothing to pick from. The caller supplies the random source.
pub fn run<R: Rng + ?Sized>(collection: &Collection, rng: &mut R) -> ProverbEntry {
    collection
        .get_all()
        .choose(rng)
        .cloned()
        .unwrap_or_default()
}
