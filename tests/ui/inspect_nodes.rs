use keyword_filter::{Automaton, NodeRef};

fn depth(node: NodeRef<'_>) -> usize {
    node.keys()
        .into_iter()
        .filter_map(|c| node.get(c))
        .map(|child| depth(child) + 1)
        .max()
        .unwrap_or(0)
}

fn main() {
    let automaton = Automaton::from_keywords(["foo", "foobar"]).unwrap();
    assert_eq!(depth(automaton.root()), 6);
    println!("{}", automaton.trace());
}
