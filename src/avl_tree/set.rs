use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// restores that invariant with at most a rotation pair per ancestor, so all operations run in
/// `O(log n)` time.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `true` if the key was absent. If an equal key already
    /// exists the set is left untouched and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns it. Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let AvlSet {
            ref mut tree,
            ref mut len,
        } = self;
        // A removal never unlinks more than one node.
        tree::remove(tree, key).map(|key| {
            *len -= 1;
            key
        })
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the key in the set that is equal to a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&0), None);
    /// assert_eq!(set.get(&1), Some(&1));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty set has a height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for key in 1..=7 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Panics if the search-tree ordering, the cached heights, the balance factors, or the
    /// element count are inconsistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        T: Ord,
    {
        assert_eq!(tree::check_consistency(&self.tree), self.len);
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { ref key, ref right, .. } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for AvlSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for key in self.iter() {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

struct AvlSetVisitor<T> {
    marker: PhantomData<fn() -> AvlSet<T>>,
}

impl<'de, T> Visitor<'de> for AvlSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = AvlSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = AvlSet::new();
        while let Some(key) = seq.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    fn build(keys: &[u32]) -> AvlSet<u32> {
        let mut set = AvlSet::new();
        for key in keys {
            assert!(set.insert(*key));
            set.check_consistency();
        }
        set
    }

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_queries() {
        let mut set: AvlSet<u32> = AvlSet::new();
        assert!(!set.contains(&1));
        assert_eq!(set.get(&1), None);
        assert!(!set.remove(&1));
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
        set.check_consistency();
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        set.check_consistency();
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut set = build(&[2, 1, 3]);
        assert!(!set.remove(&4));
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_take_borrowed() {
        let mut set = AvlSet::new();
        set.insert(String::from("b"));
        set.insert(String::from("a"));
        assert!(set.contains("a"));
        assert_eq!(set.take("b"), Some(String::from("b")));
        assert_eq!(set.take("b"), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_round_trip_scenario() {
        let set = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(set.len(), 7);
        assert_eq!(set.height(), 3);
        assert_eq!(
            set.iter().collect::<Vec<&u32>>(),
            vec![&1, &3, &4, &5, &7, &8, &9],
        );
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let set = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(set.height(), 3);
    }

    #[test]
    fn test_double_rotations() {
        let left_right = build(&[3, 1, 2]);
        assert_eq!(left_right.height(), 2);
        assert_eq!(left_right.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);

        let right_left = build(&[1, 3, 2]);
        assert_eq!(right_left.height(), 2);
        assert_eq!(right_left.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_remove_rebalances() {
        let mut set = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(set.remove(&1));
        set.check_consistency();
        assert_eq!(
            set.iter().collect::<Vec<&u32>>(),
            vec![&2, &3, &4, &5, &6, &7],
        );
    }

    #[test]
    fn test_remove_two_children() {
        let mut set = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert!(set.remove(&5));
        set.check_consistency();
        assert!(set.remove(&3));
        set.check_consistency();
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &4, &7, &8, &9]);
    }

    #[test]
    fn test_remove_rebalances_multiple_levels() {
        // A minimal tree of height 5 where deleting the shallowest leaf shrinks every ancestor.
        let mut set = build(&[
            8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1,
        ]);
        assert_eq!(set.height(), 5);
        assert!(set.remove(&12));
        set.check_consistency();
        assert_eq!(set.height(), 4);
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn test_clear() {
        let mut set = build(&[1, 2, 3]);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&1));
        assert!(set.insert(1));
        set.check_consistency();
    }

    #[test]
    fn test_min_max() {
        let set = build(&[1, 3, 5]);
        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let set = build(&[1, 3, 5]);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_into_iter() {
        let set = build(&[1, 5, 3]);
        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let set = build(&[1, 5, 3]);
        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_serde() {
        let set = build(&[3, 1, 2]);
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        assert_de_tokens(
            &build(&[1, 2]),
            &[
                Token::Seq { len: Some(3) },
                Token::U32(2),
                Token::U32(1),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
