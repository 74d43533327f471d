use visitor_bst::{BinaryTree, Order, Traversal, Visitor};

use std::collections::HashSet;

/// Records every value it sees, in order.
struct Record {
    traversal: Traversal,
    seen: Vec<i8>,
}

impl Record {
    fn new(traversal: Traversal) -> Self {
        Self {
            traversal,
            seen: Vec::new(),
        }
    }
}

impl Visitor<i8> for Record {
    fn traversal(&self) -> Traversal {
        self.traversal
    }

    fn action(&mut self, value: &i8) {
        self.seen.push(*value);
    }
}

fn build(xs: &[i8]) -> BinaryTree<i8> {
    let mut tree = BinaryTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

fn record(tree: &BinaryTree<i8>, traversal: Traversal) -> Vec<i8> {
    let mut visitor = Record::new(traversal);
    tree.traverse_tree(&mut visitor);
    visitor.seen
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn in_order_is_sorted_input(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    record(&tree, Traversal::DepthFirst(Order::In)) == sorted
}

#[quickcheck]
fn pre_order_starts_at_first_insert(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    record(&tree, Traversal::DepthFirst(Order::Pre)).first() == xs.first()
}

#[quickcheck]
fn breadth_first_starts_at_first_insert(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    record(&tree, Traversal::BreadthFirst).first() == xs.first()
}

#[quickcheck]
fn post_order_ends_at_first_insert(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    record(&tree, Traversal::DepthFirst(Order::Post)).last() == xs.first()
}

#[quickcheck]
fn rebuilding_from_pre_order_gives_same_shape(xs: Vec<i8>) -> bool {
    // Inserting a pre-order walk in order reproduces the tree exactly, so
    // every traversal of the copy matches the original.
    let tree = build(&xs);
    let copy = build(&record(&tree, Traversal::DepthFirst(Order::Pre)));

    [
        Traversal::DepthFirst(Order::Pre),
        Traversal::DepthFirst(Order::In),
        Traversal::DepthFirst(Order::Post),
        Traversal::BreadthFirst,
    ]
    .iter()
    .all(|t| record(&tree, *t) == record(&copy, *t))
}
