use crate::avl_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Used on the unwind path of a removal. The child's own balance picks between the single and
// the double rotation since there is no inserted key to compare against.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// `child_dir` is the direction the inserted key took at the child on the heavy side, which is
// the same as comparing the inserted key against that child's key.
fn balance_after_insert<T>(tree: &mut Tree<T>, child_dir: Ordering) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if child_dir == Ordering::Greater {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if child_dir == Ordering::Less {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Returns the direction taken at the root of `tree`, with `Ordering::Equal` meaning that the
// new leaf was created here. Returns `None` if the key already exists.
fn insert_with_dir<T>(tree: &mut Tree<T>, key: T) -> Option<Ordering>
where
    T: Ord,
{
    let (dir, child_dir) = match tree {
        Some(ref mut node) => {
            let dir = key.cmp(&node.key);
            let child_dir = match dir {
                Ordering::Less => insert_with_dir(&mut node.left, key)?,
                Ordering::Greater => insert_with_dir(&mut node.right, key)?,
                Ordering::Equal => return None,
            };
            (dir, child_dir)
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Some(Ordering::Equal);
        },
    };

    balance_after_insert(tree, child_dir);
    Some(dir)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    insert_with_dir(tree, key).is_some()
}

// precondition: there exists a maximum node in the tree
fn remove_max<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.right.is_some() {
            let max = remove_max(&mut node.right);
            balance(tree);
            return max;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.left.take();
            node
        },
        None => unreachable!(),
    }
}

pub fn remove<T, Q>(tree: &mut Tree<T>, key: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let Node { key: predecessor, .. } = *remove_max(&mut node.left);
                    let ret = mem::replace(&mut node.key, predecessor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node { key, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(key)
                }
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.key),
        }
    }
    None
}

pub fn ceil<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

// Returns the number of nodes in the tree. Panics if the ordering, cached heights, or balance
// factors are inconsistent.
#[cfg(any(test, feature = "consistency_check"))]
pub fn check_consistency<T>(tree: &Tree<T>) -> usize
where
    T: Ord,
{
    fn check<'a, T>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> usize
    where
        T: Ord,
    {
        let node = match tree {
            Some(ref node) => node,
            None => return 0,
        };
        if let Some(lower) = lower {
            assert!(*lower < node.key, "key is not greater than its lower bound");
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper, "key is not less than its upper bound");
        }

        let left_len = check(&node.left, lower, Some(&node.key));
        let right_len = check(&node.right, Some(&node.key), upper);

        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1, "stale cached height");
        assert!(left_height <= right_height + 1, "left subtree too tall");
        assert!(right_height <= left_height + 1, "right subtree too tall");

        left_len + right_len + 1
    }

    check(tree, None, None)
}
