use crate::key::Key;
use crate::trie::BitTrie;

pub enum Entry<'a, K, T> {
    /// No entry is stored under the key.
    Vacant(VacantEntry<'a, K, T>),
    /// An entry is already stored under the key.
    Occupied(OccupiedEntry<'a, K, T>),
}

pub struct VacantEntry<'a, K, T> {
    pub(crate) trie: &'a mut BitTrie<K, T>,
    pub(crate) key: K,
}

pub struct OccupiedEntry<'a, K, T> {
    pub(crate) trie: &'a mut BitTrie<K, T>,
    pub(crate) index: usize,
}

impl<'a, K, T> VacantEntry<'a, K, T>
where
    K: Key,
{
    fn insert_with<F: FnOnce() -> T>(self, default: F) -> &'a mut T {
        let index = self.trie.insert_node(self.key);
        if self.trie.nodes[index].value.is_none() {
            self.trie.count += 1;
        }
        self.trie.nodes[index].value.get_or_insert_with(default)
    }
}

impl<'a, K, T> Entry<'a, K, T>
where
    K: Key,
{
    pub fn or_insert(self, default: T) -> &'a mut T {
        self.or_insert_with(|| default)
    }

    pub fn or_insert_with<F: FnOnce() -> T>(self, default: F) -> &'a mut T {
        match self {
            Entry::Vacant(e) => e.insert_with(default),
            Entry::Occupied(e) => e.trie.nodes[e.index].value.get_or_insert_with(default),
        }
    }
}

impl<'a, K, T> Entry<'a, K, T>
where
    K: Key,
    T: Default,
{
    #[allow(clippy::unwrap_or_default)]
    pub fn or_default(self) -> &'a mut T {
        self.or_insert_with(Default::default)
    }
}
