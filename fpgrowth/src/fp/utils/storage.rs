/// One mined itemset together with its support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemset<T> {
    pub items: Vec<T>,
    pub support: usize,
}

impl<T> FrequentItemset<T> {
    pub fn new(items: Vec<T>, support: usize) -> Self {
        Self { items, support }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Flat storage for many itemsets: one item buffer plus offsets.
#[derive(Debug, Clone)]
pub struct ItemsetStorage<T> {
    items: Vec<T>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All itemsets of one size.
#[derive(Debug, Clone)]
pub struct FrequentLevel<T> {
    storage: ItemsetStorage<T>,
    pub itemset_size: usize,
}

impl<T: Clone> ItemsetStorage<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            supports: Vec::new(),
        }
    }

    pub fn add_itemset(&mut self, items: &[T], support: usize) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl<T: Clone> Default for ItemsetStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FrequentLevel<T> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: &[T], support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn get_itemset(&self, idx: usize) -> &[T] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.support(idx)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[T], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.support(idx)))
    }
}

/// Groups mined itemsets by size. Level `k - 1` holds the k-itemsets; levels
/// with no itemsets are kept so the index always matches the size.
pub fn group_by_level<T: Clone>(itemsets: &[FrequentItemset<T>]) -> Vec<FrequentLevel<T>> {
    let mut levels: Vec<FrequentLevel<T>> = Vec::new();

    for itemset in itemsets.iter().filter(|itemset| !itemset.is_empty()) {
        let size = itemset.len();
        while levels.len() < size {
            levels.push(FrequentLevel::new(levels.len() + 1));
        }
        levels[size - 1].add_itemset(&itemset.items, itemset.support);
    }

    levels
}
