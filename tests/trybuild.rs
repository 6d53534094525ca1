#[test]
fn ui() {
    let cases = trybuild::TestCases::new();
    cases.pass("tests/ui/*.rs");
}
