use pawx_jsonnet::ast::NodeKind;
use pawx_jsonnet::lexer::{lex, reconstruct, TokenKind};
use pawx_jsonnet::{parse, Node};
use test_case::test_case;

const CONFIG: &str = r#"// Service definition.
local base = import 'base.libsonnet';
# Ports are shared with the sidecar.
local ports = { http: 8080, admin:: 9090 };

base {
  /* Replicas scale
     with the region. */
  replicas: if std.length(base.regions) > 2 then 3 else 1,
  ports+: ports,
  banner: |||
    Welcome to %(name)s
      (managed)
  |||,
  labels: { [k]: 'v-%s' % k for k in ['a', "b\"c"] },
  check(x):: x >= 0 && x <= 1e3,
}
"#;

#[test_case(CONFIG ; "config file")]
#[test_case("" ; "empty")]
#[test_case("\n\n  \t" ; "only whitespace")]
#[test_case("x // trailing comment" ; "trailing comment")]
#[test_case("a<-1" ; "split operator")]
#[test_case("{a+::: 1}" ; "plus visible")]
#[test_case("[1.5e-3, 0, 'it\\'s', \"\\n\"]" ; "literals")]
#[test_case("f(|||\n\t\tx\n\n\t\ty\n\t|||)" ; "block string with term indent")]
#[test_case("x // caf\u{00e9} \u{1F4A9}\n" ; "non ascii in comment")]
fn lexing_then_reconstructing_restores_the_source(source: &str) {
    let tokens = lex("test", source).unwrap();
    assert_eq!(reconstruct(&tokens), source);
}

#[test]
fn config_file_parses() {
    let tokens = lex("config.jsonnet", CONFIG).unwrap();
    let root = parse(tokens).unwrap();
    assert!(matches!(root.kind, NodeKind::Local { .. }));
}

#[test]
fn end_of_file_carries_trailing_fodder() {
    let tokens = lex("test", CONFIG).unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EndOfFile);
    assert_eq!(eof.fodder.len(), 1);
    assert_eq!(eof.fodder[0].data, "\n");
}

fn collect_numbers<'a>(node: &'a Node, out: &mut Vec<(&'a str, f64)>) {
    if let NodeKind::LiteralNumber { value, original } = &node.kind {
        out.push((original.as_str(), *value));
    }
    for child in node.children() {
        collect_numbers(child, out);
    }
}

#[test]
fn number_literals_keep_their_spelling() {
    let root = parse(lex("test", "[0, 1.0, 1.10, 1e3, 1E+03, 0.5e-1]").unwrap()).unwrap();

    let mut numbers = Vec::new();
    collect_numbers(&root, &mut numbers);

    let spellings: Vec<&str> = numbers.iter().map(|(original, _)| *original).collect();
    assert_eq!(spellings, vec!["0", "1.0", "1.10", "1e3", "1E+03", "0.5e-1"]);

    for (original, value) in numbers {
        assert_eq!(original.parse::<f64>().unwrap(), value);
    }
}
