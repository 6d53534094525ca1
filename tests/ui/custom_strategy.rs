use keyword_filter::{Automaton, MatchPolicy, ReplaceStrategy};

struct Masked {
    mask: char,
}

impl ReplaceStrategy for Masked {
    fn replace_with(&self, keyword: &str) -> String {
        keyword.chars().map(|_| self.mask).collect()
    }
}

fn main() {
    let automaton = Automaton::from_keywords(["foo"]).unwrap();
    let strategies: [Box<dyn ReplaceStrategy>; 2] = [
        Box::new(Masked { mask: '#' }),
        Box::new(|keyword: &str| keyword.to_uppercase()),
    ];

    for strategy in &strategies {
        automaton.replace_with_policy("a foo", MatchPolicy::Deferred, strategy.as_ref());
    }
}
