use std::cmp::Ordering;
use std::fmt::Debug;

use log::trace;

use crate::arena::Arena;
use crate::error::AvlError;
use crate::print::open_branch;

use super::traverse::{traverse, TraversalOrder};
use super::types::AvlNodeLike;

/// Cached height of `node`, 0 for an absent node.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>) -> i32 {
    node.map_or(0, |i| arena[i].height())
}

/// `height(right) - height(left)`, 0 for an absent node.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>) -> i32 {
    match node {
        Some(i) => height(arena, arena[i].r()) - height(arena, arena[i].l()),
        None => 0,
    }
}

/// Recomputes the cached height of `node` from its children, which must
/// already be up to date.
#[inline]
pub fn refresh_height<N: AvlNodeLike>(arena: &mut Arena<N>, node: u32) {
    let lh = height(arena, arena[node].l());
    let rh = height(arena, arena[node].r());
    arena[node].set_height(1 + lh.max(rh));
}

/// Lifts the right child of `n` into its place and returns it.
///
/// ```text
///     n                r
///    / \              / \
///   a   r     ->     n   c
///      / \          / \
///     b   c        a   b
/// ```
pub fn rotate_left<N: AvlNodeLike>(arena: &mut Arena<N>, n: u32) -> u32 {
    let r = arena[n].r().expect("rotate_left requires a right child");
    let rl = arena[r].l();

    arena[n].set_r(rl);
    arena[r].set_l(Some(n));
    refresh_height(arena, n);
    refresh_height(arena, r);

    trace!("rotate_left: {n} -> {r}");
    r
}

/// Mirror of [`rotate_left`]: lifts the left child of `n` into its place.
pub fn rotate_right<N: AvlNodeLike>(arena: &mut Arena<N>, n: u32) -> u32 {
    let l = arena[n].l().expect("rotate_right requires a left child");
    let lr = arena[l].r();

    arena[n].set_l(lr);
    arena[l].set_r(Some(n));
    refresh_height(arena, n);
    refresh_height(arena, l);

    trace!("rotate_right: {n} -> {l}");
    l
}

/// Restores the AVL property at `n`, whose subtrees are valid AVL trees
/// with heights differing by at most 2, and returns the new subtree root.
///
/// The caller re-links the result into the parent slot.
pub fn rebalance<N: AvlNodeLike>(arena: &mut Arena<N>, n: u32) -> u32 {
    let bf = balance_factor(arena, Some(n));
    if bf > 1 {
        let r = arena[n].r().expect("right-heavy node has a right child");
        if balance_factor(arena, Some(r)) < 0 {
            let r = rotate_right(arena, r);
            arena[n].set_r(Some(r));
        }
        rotate_left(arena, n)
    } else if bf < -1 {
        let l = arena[n].l().expect("left-heavy node has a left child");
        if balance_factor(arena, Some(l)) > 0 {
            let l = rotate_left(arena, l);
            arena[n].set_l(Some(l));
        }
        rotate_right(arena, n)
    } else {
        n
    }
}

/// Inserts `value` below `root` and returns the new root.
///
/// Every node on the descent path is refreshed and rebalanced on the way
/// back up. On [`AvlError::DuplicateKey`] nothing has been written.
pub fn insert<N, C>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    value: N::Value,
    comparator: &C,
) -> Result<u32, AvlError>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> Ordering,
{
    let Some(n) = root else {
        return Ok(arena.alloc(N::leaf(value)));
    };

    match comparator(&value, arena[n].value()) {
        Ordering::Less => {
            let l = arena[n].l();
            let l = insert(arena, l, value, comparator)?;
            arena[n].set_l(Some(l));
        }
        Ordering::Greater => {
            let r = arena[n].r();
            let r = insert(arena, r, value, comparator)?;
            arena[n].set_r(Some(r));
        }
        Ordering::Equal => return Err(AvlError::DuplicateKey),
    }

    refresh_height(arena, n);
    Ok(rebalance(arena, n))
}

/// Removes `value` from below `root` and returns the new root.
///
/// A node with two children takes over the value of its in-order successor,
/// and the successor node is the one released. Every node on the path,
/// including the path down to the successor, is refreshed and rebalanced.
/// On [`AvlError::NotFound`] nothing has been written.
pub fn remove<N, C>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    value: &N::Value,
    comparator: &C,
) -> Result<Option<u32>, AvlError>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> Ordering,
{
    let Some(n) = root else {
        return Err(AvlError::NotFound);
    };

    match comparator(value, arena[n].value()) {
        Ordering::Less => {
            let l = arena[n].l();
            let l = remove(arena, l, value, comparator)?;
            arena[n].set_l(l);
        }
        Ordering::Greater => {
            let r = arena[n].r();
            let r = remove(arena, r, value, comparator)?;
            arena[n].set_r(r);
        }
        Ordering::Equal => match (arena[n].l(), arena[n].r()) {
            (Some(_), Some(r)) => {
                let (r, successor) = remove_first(arena, r);
                trace!("remove: {n} takes the value of its successor");
                arena[n].set_r(r);
                arena[n].set_value(successor);
            }
            (child, None) | (None, child) => {
                arena.free(n);
                return Ok(child);
            }
        },
    }

    refresh_height(arena, n);
    Ok(Some(rebalance(arena, n)))
}

/// Unlinks the leftmost node of the subtree at `n`, returning the new
/// subtree root and the value the released node held.
fn remove_first<N: AvlNodeLike>(arena: &mut Arena<N>, n: u32) -> (Option<u32>, N::Value) {
    match arena[n].l() {
        None => {
            let r = arena[n].r();
            (r, arena.free(n).into_value())
        }
        Some(l) => {
            let (l, first) = remove_first(arena, l);
            arena[n].set_l(l);
            refresh_height(arena, n);
            (Some(rebalance(arena, n)), first)
        }
    }
}

/// Index of the node holding `value`, if any.
pub fn find<N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    value: &N::Value,
    comparator: &C,
) -> Option<u32>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(value, arena[i].value()) {
            Ordering::Less => arena[i].l(),
            Ordering::Greater => arena[i].r(),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Whether every balance factor below `node` lies in `-1..=1`.
pub fn is_balanced<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>) -> bool {
    let Some(i) = node else {
        return true;
    };
    (-1..=1).contains(&balance_factor(arena, node))
        && is_balanced(arena, arena[i].l())
        && is_balanced(arena, arena[i].r())
}

/// Full structural check: cached heights, balance and strict ordering.
pub fn assert_avl_tree<N, C>(arena: &Arena<N>, root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike,
    C: Fn(&N::Value, &N::Value) -> Ordering,
{
    fn validate_heights<N: AvlNodeLike>(arena: &Arena<N>, node: u32) -> Result<i32, String> {
        let lh = match arena[node].l() {
            Some(l) => validate_heights(arena, l)?,
            None => 0,
        };
        let rh = match arena[node].r() {
            Some(r) => validate_heights(arena, r)?,
            None => 0,
        };

        let expected = 1 + lh.max(rh);
        let actual = arena[node].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {node}: expected {expected}, got {actual}"
            ));
        }
        let bf = rh - lh;
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at node {node}: bf={bf}"));
        }
        Ok(expected)
    }

    let Some(root) = root else {
        return Ok(());
    };
    validate_heights(arena, root)?;

    let mut prev: Option<&N::Value> = None;
    for v in traverse(arena, Some(root), TraversalOrder::InOrder) {
        if let Some(p) = prev {
            if comparator(p, v) != Ordering::Less {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(v);
    }

    Ok(())
}

/// Debug printer for AVL trees. Lines below the first are indented with
/// `tab`; an absent child of an inner node prints as `∅`.
pub fn print<N>(arena: &Arena<N>, node: Option<u32>, tab: &str) -> String
where
    N: AvlNodeLike,
    N::Value: Debug,
{
    let mut out = String::new();
    print_node(arena, node, tab, &mut out);
    out
}

fn print_node<N>(arena: &Arena<N>, node: Option<u32>, tab: &str, out: &mut String)
where
    N: AvlNodeLike,
    N::Value: Debug,
{
    let Some(i) = node else {
        out.push('∅');
        return;
    };

    let n = &arena[i];
    out.push_str(&format!(
        "{:?} [h={}, bf={}]",
        n.value(),
        n.height(),
        balance_factor(arena, node)
    ));
    if n.l().is_none() && n.r().is_none() {
        return;
    }

    for (child, last) in [(n.l(), false), (n.r(), true)] {
        let child_tab = open_branch(out, tab, last);
        print_node(arena, child, &child_tab, out);
    }
}
