use crate::splay_tree::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Top-down splay. Nodes known to be less than `key` are collected in `left_chain` along their
// right edges, nodes known to be greater in `right_chain` along their left edges. When the walk
// stops, `node` holds the matching key or the last key on the search path.
fn splay<T, Q>(node: &mut Box<Node<T>>, key: &Q)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut left_chain: Tree<T> = None;
    let mut right_chain: Tree<T> = None;
    {
        let mut left_max = &mut left_chain;
        let mut right_min = &mut right_chain;
        loop {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    let should_rotate = match node.left {
                        Some(ref child) => key.cmp(child.key.borrow()) == Ordering::Less,
                        None => break,
                    };
                    // zig-zig
                    if should_rotate {
                        node.rotate_right();
                    }

                    let child = match node.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *right_min = Some(mem::replace(node, child));
                    right_min = &mut { right_min }
                        .as_mut()
                        .expect("Expected non-empty right chain.")
                        .left;
                },
                Ordering::Greater => {
                    let should_rotate = match node.right {
                        Some(ref child) => key.cmp(child.key.borrow()) == Ordering::Greater,
                        None => break,
                    };
                    // zag-zag
                    if should_rotate {
                        node.rotate_left();
                    }

                    let child = match node.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *left_max = Some(mem::replace(node, child));
                    left_max = &mut { left_max }
                        .as_mut()
                        .expect("Expected non-empty left chain.")
                        .right;
                },
                Ordering::Equal => break,
            }
        }

        mem::swap(left_max, &mut node.left);
        mem::swap(right_min, &mut node.right);
    }

    node.left = left_chain;
    node.right = right_chain;
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let mut root = match tree.take() {
        Some(mut root) => {
            splay(&mut root, &key);
            root
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    let ordering = key.cmp(&root.key);
    if ordering == Ordering::Equal {
        *tree = Some(root);
        return false;
    }

    let mut new_root = Box::new(Node::new(key));
    if ordering == Ordering::Less {
        new_root.left = root.left.take();
        new_root.right = Some(root);
    } else {
        new_root.right = root.right.take();
        new_root.left = Some(root);
    }
    *tree = Some(new_root);
    true
}

pub fn remove<T, Q>(tree: &mut Tree<T>, key: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut root = tree.take()?;
    splay(&mut root, key);
    if key.cmp(root.key.borrow()) != Ordering::Equal {
        *tree = Some(root);
        return None;
    }

    let Node { key: removed, left, right } = *root;
    *tree = match left {
        // The left subtree holds no key equal to `key`, so splaying it brings its maximum up and
        // leaves the root without a right child.
        Some(mut left_child) => {
            splay(&mut left_child, key);
            left_child.right = right;
            Some(left_child)
        },
        None => right,
    };
    Some(removed)
}

pub fn get<'a, T, Q>(tree: &'a mut Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match tree {
        Some(ref mut node) => {
            splay(node, key);
            if key.cmp(node.key.borrow()) == Ordering::Equal {
                Some(&node.key)
            } else {
                None
            }
        },
        None => None,
    }
}

pub fn root<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &node.key)
}

pub fn ceil<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match key.cmp(node.key.borrow()) {
            Ordering::Greater => curr = &node.right,
            Ordering::Less => {
                ret = Some(&node.key);
                curr = &node.left;
            },
            Ordering::Equal => return Some(&node.key),
        }
    }
    ret
}

pub fn floor<'a, T, Q>(tree: &'a Tree<T>, key: &Q) -> Option<&'a T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    let mut ret = None;
    while let Some(ref node) = curr {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret = Some(&node.key);
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.key),
        }
    }
    ret
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

// A splay tree can degenerate into a path, so nodes are detached one at a time instead of
// relying on the recursive drop of `Box`.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

// Returns the number of nodes in the tree. Panics if a key is out of order.
#[cfg(any(test, feature = "consistency_check"))]
pub fn check_consistency<T>(tree: &Tree<T>) -> usize
where
    T: Ord,
{
    let mut len = 0;
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
    if let Some(ref node) = tree {
        stack.push((&**node, None, None));
    }

    while let Some((node, lower, upper)) = stack.pop() {
        if let Some(lower) = lower {
            assert!(*lower < node.key, "key is not greater than its lower bound");
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper, "key is not less than its upper bound");
        }
        if let Some(ref left) = node.left {
            stack.push((&**left, lower, Some(&node.key)));
        }
        if let Some(ref right) = node.right {
            stack.push((&**right, Some(&node.key), upper));
        }
        len += 1;
    }

    len
}
