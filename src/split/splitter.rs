use log::debug;
use rand::prelude::*;
use rand_chacha::ChaChaRng;

use crate::dataset::{check_indexable, Dataset, Subset};
use crate::error::{Error, Result};
use crate::split::ratio::ValRatio;

/// A pair of views: `(train, val)`.
pub type SplitResult<'a, D> = (Subset<'a, D>, Subset<'a, D>);

pub struct SplitterBuilder {
    /// Fraction of items sent to validation
    val_ratio: ValRatio,
    /// The seed used for randomisation
    seed: Option<u64>,
}

impl SplitterBuilder {
    pub fn new(val_ratio: f64) -> Result<Self> {
        Ok(SplitterBuilder {
            val_ratio: ValRatio::try_from(val_ratio)?,
            seed: None,
        })
    }

    pub fn from_ratio(val_ratio: ValRatio) -> Self {
        SplitterBuilder {
            val_ratio,
            seed: None,
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Splitter<ChaChaRng> {
        let rng = match self.seed {
            Some(s) => ChaChaRng::seed_from_u64(s),
            None => ChaChaRng::from_entropy(),
        };
        Splitter {
            val_ratio: self.val_ratio,
            rng,
        }
    }
}

/// Splits datasets into train and validation views.
///
/// The splitter owns its random source. Each call to [`Splitter::split`]
/// advances it, so two calls on one splitter give different partitions;
/// building a fresh splitter with the same seed reproduces the first one.
pub struct Splitter<R> {
    val_ratio: ValRatio,
    /// The stateful random number generator.
    rng: R,
}

impl<R: Rng> Splitter<R> {
    /// Use a caller-supplied random source.
    pub fn with_rng(val_ratio: ValRatio, rng: R) -> Self {
        Splitter { val_ratio, rng }
    }

    pub fn val_ratio(&self) -> ValRatio {
        self.val_ratio
    }

    pub fn split<'a, D: Dataset + ?Sized>(&mut self, dataset: &'a D) -> Result<SplitResult<'a, D>> {
        let (train, val) = partition(dataset.len(), self.val_ratio, &mut self.rng, || {
            check_indexable(dataset)
        })?;
        Ok((Subset::new(dataset, train), Subset::new(dataset, val)))
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Split `total` indices into `(train, val)` index lists.
///
/// Every check, including `probe`, runs before the generator is touched.
fn partition<R, F>(
    total: usize,
    val_ratio: ValRatio,
    rng: &mut R,
    probe: F,
) -> Result<(Vec<usize>, Vec<usize>)>
where
    R: Rng + ?Sized,
    F: FnOnce() -> Result<()>,
{
    if total == 0 {
        return Err(Error::InvalidInput("cannot split an empty dataset".to_string()));
    }
    if total == 1 {
        return Err(Error::InvalidInput(
            "cannot split a single item into two non-empty sets".to_string(),
        ));
    }
    probe()?;

    let val_count = val_ratio.val_count(total)?;
    let mut indices: Vec<usize> = (0..total).collect();
    indices.shuffle(rng);
    let train = indices.split_off(val_count);
    debug!(
        "split {} items into {} train / {} val",
        total,
        train.len(),
        indices.len()
    );
    Ok((train, indices))
}

/// Split `dataset` into `(train, val)` views.
///
/// `val_ratio` must lie strictly between 0 and 1. The validation view holds
/// `round(len * val_ratio)` items (ties rounded up), clamped so both views
/// are non-empty. With a seed the partition depends only on the seed and the
/// dataset length; without one a fresh entropy-seeded generator is used.
pub fn split<D: Dataset + ?Sized>(
    dataset: &D,
    val_ratio: f64,
    seed: Option<u64>,
) -> Result<SplitResult<'_, D>> {
    SplitterBuilder::new(val_ratio)?
        .maybe_seed(seed)
        .build()
        .split(dataset)
}

/// Like [`split`], drawing the permutation from a caller-owned generator.
pub fn split_with_rng<'a, D, R>(
    dataset: &'a D,
    val_ratio: f64,
    rng: &mut R,
) -> Result<SplitResult<'a, D>>
where
    D: Dataset + ?Sized,
    R: Rng + ?Sized,
{
    let val_ratio = ValRatio::try_from(val_ratio)?;
    let (train, val) = partition(dataset.len(), val_ratio, rng, || check_indexable(dataset))?;
    Ok((Subset::new(dataset, train), Subset::new(dataset, val)))
}
