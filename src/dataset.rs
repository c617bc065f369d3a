use crate::error::{Error, Result};

/// A sized collection supporting indexed access.
///
/// `get` returns `None` for indices outside `0..len()`. An implementation whose
/// `get` fails inside that range does not honour the contract and is rejected
/// by the splitter.
pub trait Dataset {
    type Item;

    /// Number of items in the dataset.
    fn len(&self) -> usize;

    /// Fetch the item at `index`.
    fn get(&self, index: usize) -> Option<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Dataset for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone> Dataset for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

/// Make sure `dataset` actually serves the indices it claims to have.
///
/// Only the first and last index are probed, so this is O(1).
pub(crate) fn check_indexable<D: Dataset + ?Sized>(dataset: &D) -> Result<()> {
    let len = dataset.len();
    for index in [0, len.saturating_sub(1)] {
        if index < len && dataset.get(index).is_none() {
            return Err(Error::UnsupportedDataset(format!(
                "reports {len} items but has no item at index {index}"
            )));
        }
    }
    Ok(())
}

/// A read-only view over a subset of a dataset's indices.
///
/// Items are served in the order of `indices`, not in the parent's order.
#[derive(Debug)]
pub struct Subset<'a, D: ?Sized> {
    dataset: &'a D,
    indices: Vec<usize>,
}

impl<'a, D: Dataset + ?Sized> Subset<'a, D> {
    pub(crate) fn new(dataset: &'a D, indices: Vec<usize>) -> Self {
        Subset { dataset, indices }
    }

    /// Indices into the parent dataset, in view order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The dataset this view was taken from.
    pub fn dataset(&self) -> &'a D {
        self.dataset
    }

    /// Items in view order.
    ///
    /// An index the parent no longer serves yields `UnsupportedDataset`
    /// instead of being skipped.
    pub fn iter(&self) -> impl Iterator<Item = Result<D::Item>> + '_ {
        self.indices.iter().map(move |&i| {
            self.dataset.get(i).ok_or_else(|| {
                Error::UnsupportedDataset(format!(
                    "reports {} items but has no item at index {i}",
                    self.dataset.len()
                ))
            })
        })
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl<'a, D: Dataset + ?Sized> Dataset for Subset<'a, D> {
    type Item = D::Item;

    fn len(&self) -> usize {
        self.indices.len()
    }

    fn get(&self, index: usize) -> Option<D::Item> {
        self.indices.as_slice().get(index).and_then(|&i| self.dataset.get(i))
    }
}

// Derived Clone would require `D: Clone`.
impl<'a, D: ?Sized> Clone for Subset<'a, D> {
    fn clone(&self) -> Self {
        Subset {
            dataset: self.dataset,
            indices: self.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lying(usize);

    impl Dataset for Lying {
        type Item = usize;

        fn len(&self) -> usize {
            self.0
        }

        fn get(&self, _index: usize) -> Option<usize> {
            None
        }
    }

    #[test]
    fn vec_and_slice_are_datasets() {
        let data = vec!['a', 'b', 'c'];
        assert_eq!(Dataset::len(&data), 3);
        assert_eq!(Dataset::get(&data, 1), Some('b'));
        assert_eq!(Dataset::get(&data, 3), None);
        assert_eq!(Dataset::get(data.as_slice(), 2), Some('c'));
    }

    #[test]
    fn subset_follows_its_indices() {
        let data = vec![10, 20, 30, 40];
        let view = Subset::new(&data, vec![3, 0]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(0), Some(40));
        assert_eq!(view.get(1), Some(10));
        assert_eq!(view.get(2), None);
        assert_eq!(view.iter().collect::<Result<Vec<_>>>().unwrap(), vec![40, 10]);
    }

    #[test]
    fn subset_of_subset() {
        let data = vec!["a", "b", "c", "d"];
        let outer = Subset::new(&data, vec![2, 3, 1]);
        let inner = Subset::new(&outer, vec![2, 0]);
        assert_eq!(inner.iter().collect::<Result<Vec<_>>>().unwrap(), vec!["b", "c"]);
    }

    struct Holey;

    impl Dataset for Holey {
        type Item = usize;

        fn len(&self) -> usize {
            5
        }

        fn get(&self, index: usize) -> Option<usize> {
            (index != 2 && index < 5).then_some(index)
        }
    }

    #[test]
    fn subset_reports_missing_items() {
        let view = Subset::new(&Holey, vec![4, 2, 0]);
        let items: Vec<_> = view.iter().collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap(), &4);
        assert!(matches!(items[1], Err(Error::UnsupportedDataset(_))));
        assert_eq!(items[2].as_ref().unwrap(), &0);
        assert!(view.iter().collect::<Result<Vec<_>>>().is_err());
    }

    #[test]
    fn check_indexable_rejects_liars() {
        assert!(check_indexable(&Lying(0)).is_ok());
        assert!(matches!(
            check_indexable(&Lying(3)),
            Err(Error::UnsupportedDataset(_))
        ));
        assert!(check_indexable(&vec![1, 2, 3]).is_ok());
    }
}
