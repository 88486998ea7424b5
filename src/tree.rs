//! Tree Utilities
//!
//! Builds a forest from a flat parent-linked list (tasks, teams) and
//! flattens it into indented rows for rendering.
//!
//! The forest is rebuilt from scratch whenever the flat list changes.
//! Expand/collapse state lives outside the forest in an [`ExpandedSet`]
//! owned by the caller, so toggling never touches the data.

use std::collections::{HashMap, HashSet};

use crate::models::{Task, Team};

/// Anything that can be placed in a parent/child hierarchy
pub trait Hierarchical {
    fn node_id(&self) -> u32;
    fn parent_id(&self) -> Option<u32>;
}

impl Hierarchical for Task {
    fn node_id(&self) -> u32 {
        self.id
    }

    fn parent_id(&self) -> Option<u32> {
        self.parent_task_id
    }
}

impl Hierarchical for Team {
    fn node_id(&self) -> u32 {
        self.id
    }

    fn parent_id(&self) -> Option<u32> {
        self.parent_team_id
    }
}

/// One entity plus the children resolved for it
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub item: T,
    pub children: Vec<Node<T>>,
}

impl<T: Hierarchical> Node<T> {
    pub fn id(&self) -> u32 {
        self.item.node_id()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// Ordered root nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Forest<T> {
    pub roots: Vec<Node<T>>,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self { roots: Vec::new() }
    }
}

// Unlink nodes one at a time so dropping a deep chain does not recurse
impl<T> Drop for Forest<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.roots);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<T: Hierarchical> Forest<T> {
    /// Total node count, nested nodes included
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn root_ids(&self) -> Vec<u32> {
        self.roots.iter().map(Node::id).collect()
    }

    /// Depth-first search for a node by id
    pub fn find(&self, id: u32) -> Option<&Node<T>> {
        let mut stack: Vec<&Node<T>> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.id() == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

/// Build a forest from a flat list.
///
/// A node whose parent is missing from the list becomes a root.
/// Children keep the order they had in the input. Parent chains that loop
/// back on themselves are cut at the cycle member that comes first in the
/// input, which becomes a root, so every input entity is in the output once.
pub fn build_forest<T: Hierarchical>(items: Vec<T>) -> Forest<T> {
    let n = items.len();

    // First pass: id -> input position. First occurrence owns a duplicated id.
    let mut index: HashMap<u32, usize> = HashMap::with_capacity(n);
    for (pos, item) in items.iter().enumerate() {
        index.entry(item.node_id()).or_insert(pos);
    }

    let mut parent: Vec<Option<usize>> = items
        .iter()
        .map(|item| item.parent_id().and_then(|pid| index.get(&pid).copied()))
        .collect();

    break_cycles(&mut parent);

    // Second pass: link in input order
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots = Vec::new();
    for pos in 0..n {
        match parent[pos] {
            Some(p) => children[p].push(pos),
            None => roots.push(pos),
        }
    }

    let slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    Forest { roots: assemble(&roots, slots, &children) }
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Detach one member of every parent cycle so the links form a forest
fn break_cycles(parent: &mut [Option<usize>]) {
    let mut mark = vec![Mark::Unvisited; parent.len()];

    for start in 0..parent.len() {
        if mark[start] != Mark::Unvisited {
            continue;
        }

        let mut path = Vec::new();
        let mut cursor = Some(start);
        while let Some(pos) = cursor {
            match mark[pos] {
                Mark::Done => break,
                Mark::OnPath => {
                    // `pos` closes a loop; the cycle is path[from..]
                    let from = path.iter().position(|&p| p == pos).unwrap_or(0);
                    let head = path[from..].iter().copied().min().unwrap_or(pos);
                    log::warn!("[TREE] parent cycle detected, treating entry {} as a root", head);
                    parent[head] = None;
                    break;
                }
                Mark::Unvisited => {
                    mark[pos] = Mark::OnPath;
                    path.push(pos);
                    cursor = parent[pos];
                }
            }
        }

        for pos in path {
            mark[pos] = Mark::Done;
        }
    }
}

/// Post-order build with an explicit stack: children are finished before their parent
fn assemble<T>(roots: &[usize], mut slots: Vec<Option<T>>, children: &[Vec<usize>]) -> Vec<Node<T>> {
    let mut built: Vec<Option<Node<T>>> = slots.iter().map(|_| None).collect();
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&pos| (pos, false)).collect();

    while let Some((pos, kids_done)) = stack.pop() {
        if kids_done {
            let kids = children[pos].iter().filter_map(|&child| built[child].take()).collect();
            if let Some(item) = slots[pos].take() {
                built[pos] = Some(Node { item, children: kids });
            }
        } else {
            stack.push((pos, true));
            stack.extend(children[pos].iter().rev().map(|&child| (child, false)));
        }
    }

    roots.iter().filter_map(|&pos| built[pos].take()).collect()
}

// ========================
// Expand/Collapse State
// ========================

/// Ids whose children are currently visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet(HashSet<u32>);

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flip membership of `id`, returns the new membership
    pub fn toggle_in_place(&mut self, id: u32) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }
}

impl FromIterator<u32> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Return a copy of `expanded` with `id` flipped
pub fn toggle(expanded: &ExpandedSet, id: u32) -> ExpandedSet {
    let mut next = expanded.clone();
    next.toggle_in_place(id);
    next
}

/// Every node that has children, i.e. a fully expanded view
pub fn expand_all<T: Hierarchical>(forest: &Forest<T>) -> ExpandedSet {
    let mut set = ExpandedSet::new();
    let mut stack: Vec<&Node<T>> = forest.roots.iter().collect();
    while let Some(node) = stack.pop() {
        if node.has_children() {
            set.0.insert(node.id());
            stack.extend(node.children.iter());
        }
    }
    set
}

// ========================
// Traversal
// ========================

/// A visible row in display order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeRow<'a, T> {
    pub node: &'a Node<T>,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Pre-order walk emitting a row per visible node.
/// Children are visited only under expanded nodes.
pub fn traverse<'a, T: Hierarchical>(forest: &'a Forest<T>, expanded: &ExpandedSet) -> Vec<TreeRow<'a, T>> {
    let mut rows = Vec::new();
    let mut stack: Vec<(&Node<T>, usize)> = forest.roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let has_children = node.has_children();
        let is_expanded = expanded.contains(node.id());
        rows.push(TreeRow { node, depth, has_children, is_expanded });

        if has_children && is_expanded {
            stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: u32,
        parent: Option<u32>,
    }

    impl Hierarchical for Entry {
        fn node_id(&self) -> u32 {
            self.id
        }
        fn parent_id(&self) -> Option<u32> {
            self.parent
        }
    }

    fn make_entry(id: u32, parent: Option<u32>) -> Entry {
        Entry { id, parent }
    }

    fn ids(rows: &[TreeRow<'_, Entry>]) -> Vec<(u32, usize)> {
        rows.iter().map(|r| (r.node.id(), r.depth)).collect()
    }

    fn all_ids(forest: &Forest<Entry>) -> Vec<u32> {
        let everything = expand_all(forest);
        let mut seen: Vec<u32> = traverse(forest, &everything).iter().map(|r| r.node.id()).collect();
        seen.sort();
        seen
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let forest = build_forest(vec![
            make_entry(1, None),
            make_entry(2, Some(1)),
            make_entry(3, Some(99)),
        ]);

        assert_eq!(forest.root_ids(), vec![1, 3]);
        assert_eq!(forest.roots[0].children.len(), 1);
        assert_eq!(forest.roots[0].children[0].id(), 2);
        assert!(!forest.roots[1].has_children());
        assert_eq!(forest.len(), 3);
    }

    #[test]
    fn test_forward_reference() {
        // Child listed before its parent
        let forest = build_forest(vec![make_entry(5, Some(4)), make_entry(4, None)]);
        assert_eq!(forest.root_ids(), vec![4]);
        assert_eq!(forest.roots[0].children[0].id(), 5);
    }

    #[test]
    fn test_children_keep_input_order() {
        let forest = build_forest(vec![
            make_entry(1, None),
            make_entry(30, Some(1)),
            make_entry(10, Some(1)),
            make_entry(20, Some(1)),
        ]);
        let order: Vec<u32> = forest.roots[0].children.iter().map(Node::id).collect();
        assert_eq!(order, vec![30, 10, 20]);
    }

    #[test]
    fn test_self_reference_is_root() {
        let forest = build_forest(vec![make_entry(1, Some(1)), make_entry(2, Some(1))]);
        assert_eq!(forest.root_ids(), vec![1]);
        assert_eq!(forest.roots[0].children[0].id(), 2);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_cycle_is_broken_at_first_member() {
        // 2 -> 3 -> 4 -> 2, plus 5 hanging off 4
        let forest = build_forest(vec![
            make_entry(1, None),
            make_entry(2, Some(4)),
            make_entry(3, Some(2)),
            make_entry(4, Some(3)),
            make_entry(5, Some(4)),
        ]);

        assert_eq!(forest.root_ids(), vec![1, 2]);
        assert_eq!(forest.len(), 5);
        assert_eq!(all_ids(&forest), vec![1, 2, 3, 4, 5]);

        let two = forest.find(2).unwrap();
        assert_eq!(two.children[0].id(), 3);
        assert_eq!(forest.find(4).unwrap().children[0].id(), 5);
    }

    #[test]
    fn test_chain_into_cycle() {
        // 9 hangs on a two-node loop 7 <-> 8
        let forest = build_forest(vec![
            make_entry(9, Some(8)),
            make_entry(8, Some(7)),
            make_entry(7, Some(8)),
        ]);
        // 8 is the earliest cycle member in input order
        assert_eq!(forest.root_ids(), vec![8]);
        assert_eq!(forest.len(), 3);
    }

    #[test]
    fn test_every_node_once() {
        let entries: Vec<Entry> = (1..=40)
            .map(|id| make_entry(id, if id % 5 == 0 { None } else { Some((id * 7) % 45) }))
            .collect();
        let forest = build_forest(entries);
        assert_eq!(forest.len(), 40);
        assert_eq!(all_ids(&forest), (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn test_duplicate_ids_are_not_dropped() {
        let forest = build_forest(vec![make_entry(1, None), make_entry(1, None), make_entry(2, Some(1))]);
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.roots[0].children[0].id(), 2);
    }

    #[test]
    fn test_traverse_respects_expanded() {
        let forest = build_forest(vec![
            make_entry(1, None),
            make_entry(2, None),
            make_entry(3, Some(1)),
            make_entry(4, Some(1)),
            make_entry(5, Some(3)),
        ]);

        let collapsed = traverse(&forest, &ExpandedSet::new());
        assert_eq!(ids(&collapsed), vec![(1, 0), (2, 0)]);
        assert!(collapsed[0].has_children);
        assert!(!collapsed[0].is_expanded);
        assert!(!collapsed[1].has_children);

        let open: ExpandedSet = [1, 3].into_iter().collect();
        let rows = traverse(&forest, &open);
        assert_eq!(ids(&rows), vec![(1, 0), (3, 1), (5, 2), (4, 1), (2, 0)]);
        assert!(rows[1].is_expanded);
    }

    #[test]
    fn test_expanded_child_hidden_under_collapsed_parent() {
        let forest = build_forest(vec![make_entry(1, None), make_entry(3, Some(1)), make_entry(5, Some(3))]);

        let only_child: ExpandedSet = [3].into_iter().collect();
        assert_eq!(ids(&traverse(&forest, &only_child)), vec![(1, 0)]);

        let both = toggle(&only_child, 1);
        assert_eq!(ids(&traverse(&forest, &both)), vec![(1, 0), (3, 1), (5, 2)]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let start: ExpandedSet = [2, 9].into_iter().collect();
        let once = toggle(&start, 4);
        assert!(once.contains(4));
        assert!(!start.contains(4));
        assert_eq!(toggle(&once, 4), start);
        assert_eq!(toggle(&toggle(&start, 9), 9), start);
    }

    #[test]
    fn test_expand_all_only_parents() {
        let forest = build_forest(vec![make_entry(1, None), make_entry(2, Some(1)), make_entry(3, None)]);
        let all = expand_all(&forest);
        assert!(all.contains(1));
        assert!(!all.contains(2));
        assert!(!all.contains(3));
    }

    #[test]
    fn test_empty_input() {
        let forest: Forest<Entry> = build_forest(Vec::new());
        assert!(forest.is_empty());
        assert!(traverse(&forest, &ExpandedSet::new()).is_empty());
    }

    #[test]
    fn test_deep_chain_builds_without_recursion() {
        let depth = 100_000u32;
        let entries: Vec<Entry> = (0..depth)
            .map(|i| make_entry(i, i.checked_sub(1)))
            .collect();

        let forest = build_forest(entries);
        assert_eq!(forest.root_ids(), vec![0]);
        assert_eq!(forest.len(), depth as usize);

        let everything = expand_all(&forest);
        assert_eq!(everything.len(), depth as usize - 1);
        let rows = traverse(&forest, &everything);
        assert_eq!(rows.len(), depth as usize);
        assert_eq!(rows.last().map(|r| (r.node.id(), r.depth)), Some((depth - 1, depth as usize - 1)));
    }
}
