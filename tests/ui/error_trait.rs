use keyword_filter::Automaton;

fn build(keywords: &[&str]) -> Result<Automaton, Box<dyn std::error::Error>> {
    Ok(Automaton::from_keywords(keywords)?)
}

fn main() {
    assert!(build(&["foo"]).is_ok());
    assert!(build(&[" "]).is_err());
}
