// End-to-end scenarios: abbreviation string -> tree -> markup fragment.

use emet::ast::Node;
use emet::combinators::ParseErrorKind;
use emet::grammar::parse_expression;
use emet::render::{render, RenderOptions};

fn expand(input: &str, content: &str) -> String {
    let tree = parse_expression(input).unwrap();
    let opts = RenderOptions {
        content: content.to_string(),
        max_output: None,
    };
    render(&tree, &opts).unwrap()
}

#[test]
fn repeated_classed_node_round_trips() {
    let tree = parse_expression("div.root*3").unwrap();
    assert_eq!(tree, Node::new("div").with_class("root").with_count(3));

    assert_eq!(
        expand("div.root*3", "it"),
        "<div class=\"root\">it</div><div class=\"root\">it</div><div class=\"root\">it</div>"
    );
    assert_eq!(
        expand("div.root*3", ""),
        "<div class=\"root\"></div><div class=\"root\"></div><div class=\"root\"></div>"
    );
}

#[test]
fn child_chain_round_trips() {
    let tree = parse_expression("ul>li*2").unwrap();
    assert_eq!(tree.label, "ul");
    assert_eq!(tree.repeat_count, 1);
    assert_eq!(tree.children, vec![Node::new("li").with_count(2)]);

    assert_eq!(expand("ul>li*2", ""), "<ul><li></li><li></li></ul>");
}

#[test]
fn empty_input_fails_with_end_of_input_at_zero() {
    let err = parse_expression("").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EndOfInput);
    assert_eq!(err.pos, 0);
}

#[test]
fn grammar_ordering_rejects_leading_digits() {
    // "123abc" would satisfy the number sub-grammar, but a node starts with
    // a label and a label starts with a letter.
    let err = parse_expression("123abc").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Unsatisfied);
    assert_eq!(err.pos, 0);
}

#[test]
fn zero_count_yields_valid_tree_and_empty_output() {
    let tree = parse_expression("div*0").unwrap();
    assert_eq!(tree.repeat_count, 0);
    assert_eq!(expand("div*0", "it"), "");
}

#[test]
fn id_marker_round_trips() {
    assert_eq!(
        expand("form#login>input*2", ""),
        "<form id=\"login\"><input></input><input></input></form>"
    );
}

#[test]
fn full_notation_in_one_expression() {
    assert_eq!(
        expand("nav.menu#top*2>a.item", "go"),
        "<nav class=\"menu\" id=\"top\"><a class=\"item\">go</a></nav>\
         <nav class=\"menu\" id=\"top\"><a class=\"item\">go</a></nav>"
    );
}

#[test]
fn untrusted_content_is_escaped() {
    assert_eq!(
        expand("b", "<script>&\"x\"</script>"),
        "<b>&lt;script&gt;&amp;&quot;x&quot;&lt;/script&gt;</b>"
    );
}
