use keyword_filter::{AutomatonBuilder, Error, SkipMode};

fn build() -> Result<keyword_filter::Automaton, Error> {
    let mut builder = AutomatonBuilder::default();
    builder
        .add("foo")?
        .add_all(vec![String::from("bar"), String::from("baz")])?
        .add_skip_chars("-_".chars())
        .add_skip_char(' ')
        .skip_mode(SkipMode::Preserve);
    Ok(builder.compile())
}

fn main() {
    let automaton = build().unwrap();
    assert!(automaton.contains_keyword("b-a-z"));
}
