//! `Element::find_descendant` / `Element::first_child` over hand-built trees,
//! independent of the wire format.

use nbfx::name::QualifiedName;
use nbfx::tree::Element;
use nbfx::value::Value;

fn leaf(name: &str) -> Element {
    Element::new(QualifiedName::local(name))
}

fn qn(name: &str) -> QualifiedName {
    QualifiedName::local(name)
}

#[test]
fn find_descendant_matches_the_root_itself() {
    let root = leaf("root");
    let found = root.find_descendant(&qn("root")).unwrap();
    assert_eq!(found.qname.local_name(), "root");
}

#[test]
fn find_descendant_searches_breadth_first_in_a_shallow_tree() {
    // root -> (a -> C), (b)
    let mut branch_a = leaf("a");
    branch_a.children.push(leaf("C"));
    let mut root = leaf("root");
    root.children.push(branch_a);
    root.children.push(leaf("b"));

    let found = root.find_descendant(&qn("C"));
    assert!(found.is_some());
    assert_eq!(found.unwrap().qname.local_name(), "C");
}

#[test]
fn find_descendant_prefers_a_shallower_match_over_a_deeper_one() {
    // Two differently-shaped branches, both eventually containing a "C"
    // element: one buried at depth 3 under the first branch, one sitting at
    // depth 1 directly under the root. Breadth-first search must return the
    // depth-1 "C", not whichever "C" a depth-first walk would hit first.
    let mut deep_branch = leaf("a");
    let mut middle = leaf("x");
    middle.children.push(leaf("C")); // depth 3
    deep_branch.children.push(middle);

    let mut shallow_c = leaf("C"); // depth 1
    shallow_c.value = Value::Int64(1); // tag: this is the one we expect back

    let mut root = leaf("root");
    root.children.push(deep_branch);
    root.children.push(shallow_c);

    let found = root
        .find_descendant(&qn("C"))
        .expect("a C element exists somewhere in the tree");
    assert_eq!(found.value, Value::Int64(1));
}

#[test]
fn find_descendant_returns_none_when_nothing_matches() {
    let mut root = leaf("root");
    root.children.push(leaf("a"));
    root.children.push(leaf("b"));

    assert!(root.find_descendant(&qn("nonexistent")).is_none());
}

#[test]
fn first_child_only_scans_immediate_children() {
    let mut root = leaf("root");
    root.children.push(leaf("a"));
    root.children.push(leaf("b"));

    let mut deep = leaf("root");
    let mut only_child = leaf("x");
    only_child.children.push(leaf("a")); // not an immediate child of `deep`
    deep.children.push(only_child);

    assert!(root.first_child(&qn("a")).is_some());
    assert!(deep.first_child(&qn("a")).is_none());
}

#[test]
fn first_child_returns_the_first_match_when_names_repeat() {
    let mut root = leaf("root");
    let mut first = leaf("a");
    first.value = Value::Int64(1);
    let mut second = leaf("a");
    second.value = Value::Int64(2);
    root.children.push(first);
    root.children.push(second);

    let found = root.first_child(&qn("a")).unwrap();
    assert_eq!(found.value, Value::Int64(1));
}
