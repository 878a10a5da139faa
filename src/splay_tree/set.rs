use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that
/// recently accessed keys are quick to access again. After `insert`, `remove`, `contains`, and
/// `get`, the accessed key (or the last key on its search path if it is absent) is "splayed" to
/// the root of the tree. No balance information is stored, but every operation runs in amortized
/// `O(log n)` time.
///
/// # Examples
///
/// ```
/// use ordered_trees::splay_tree::SplaySet;
///
/// let mut set = SplaySet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&0));
/// assert_eq!(set.root(), Some(&0));
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct SplaySet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplaySet<T> {
    /// Constructs a new, empty `SplaySet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
    /// ```
    pub fn new() -> Self {
        SplaySet { tree: None, len: 0 }
    }

    /// Inserts a key into the set and makes it the root. Returns `true` if the key was absent. If
    /// an equal key already exists it is splayed to the root and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// assert!(set.insert(1));
    /// assert!(set.insert(2));
    /// assert_eq!(set.root(), Some(&2));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.root(), Some(&1));
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
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
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
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let SplaySet {
            ref mut tree,
            ref mut len,
        } = self;
        tree::remove(tree, key).map(|key| {
            *len -= 1;
            key
        })
    }

    /// Checks if a key exists in the set. Note that `contains` splays the tree and therefore
    /// requires a mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the key in the set that is equal to a particular key. Returns
    /// `None` if such a key does not exist. Note that `get` splays the tree and therefore
    /// requires a mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&0), None);
    /// assert_eq!(set.get(&1), Some(&1));
    /// ```
    pub fn get<Q>(&mut self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&mut self.tree, key)
    }

    /// Returns the key at the root of the tree, which is the most recently accessed key or its
    /// nearest neighbour. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(5);
    /// assert_eq!(set.root(), Some(&5));
    /// set.contains(&4);
    /// assert_eq!(set.root(), Some(&1));
    /// ```
    pub fn root(&self) -> Option<&T> {
        tree::root(&self.tree)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
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
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let set: SplaySet<u32> = SplaySet::new();
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
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
        self.len = 0;
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist. Note that `floor` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
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
    /// if such a key does not exist. Note that `ceil` does not splay the tree in order to use a
    /// non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
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

    /// Returns the minimum key of the set. Returns `None` if the set is empty. Note that `min`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty. Note that `max`
    /// does not splay the tree in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
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
    /// use ordered_trees::splay_tree::SplaySet;
    ///
    /// let mut set = SplaySet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplaySetIter<T> {
        SplaySetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Panics if the search-tree ordering or the element count are inconsistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        T: Ord,
    {
        assert_eq!(tree::check_consistency(&self.tree), self.len);
    }
}

impl<T> Drop for SplaySet<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> IntoIterator for SplaySet<T> {
    type IntoIter = SplaySetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree.take(),
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SplaySet<T>
where
    T: 'a,
{
    type IntoIter = SplaySetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct SplaySetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for SplaySetIntoIter<T> {
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

impl<T> Drop for SplaySetIntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for node in &mut self.stack {
            tree::clear(&mut node.right);
        }
    }
}

/// An iterator for `SplaySet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct SplaySetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for SplaySetIter<'a, T>
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

impl<T> Default for SplaySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for SplaySet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &SplaySet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SplaySet<T> where T: Eq {}

impl<T> fmt::Debug for SplaySet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for SplaySet<T>
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

struct SplaySetVisitor<T> {
    marker: PhantomData<fn() -> SplaySet<T>>,
}

impl<'de, T> Visitor<'de> for SplaySetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = SplaySet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = SplaySet::new();
        while let Some(key) = seq.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for SplaySet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SplaySetVisitor {
            marker: PhantomData,
        })
    }
}
