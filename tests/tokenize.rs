use breakdown_consolidator::tokenize::{escape_field, tokenize};

#[test]
fn unquoted_lines_yield_one_more_field_than_commas() {
    let lines = [
        "",
        "rent",
        "rent,utilities",
        "a,,b",
        ",,,",
        "1,000,2,  spaced  ,x",
        "trailing,",
    ];

    for line in lines {
        let commas = line.matches(',').count();
        assert_eq!(tokenize(line).len(), commas + 1, "line {line:?}");
    }
}

#[test]
fn trailing_comma_produces_empty_last_field() {
    assert_eq!(tokenize("a,b,"), vec!["a", "b", ""]);
}

#[test]
fn quoted_delimiter_is_kept_in_field() {
    assert_eq!(
        tokenize(r#"rent,"1,000",x"#),
        vec!["rent", "1,000", "x"]
    );
}

#[test]
fn escaped_field_tokenizes_back_to_original() {
    for original in ["office, supplies", "a\"b", "plain", "\"quoted\", with comma", ""] {
        let line = format!("{},tail", escape_field(original));
        assert_eq!(tokenize(&line), vec![original, "tail"], "field {original:?}");
    }
}

#[test]
fn doubled_quote_inside_quoted_span_is_literal_quote() {
    assert_eq!(tokenize(r#""a""b""#), vec![r#"a"b"#]);
}

#[test]
fn quotes_outside_escape_are_dropped() {
    assert_eq!(tokenize(r#"ab"c"d"#), vec!["abcd"]);
    assert_eq!(tokenize(r#""""#), vec![""]);
}

#[test]
fn unterminated_quote_runs_to_end_of_line() {
    assert_eq!(tokenize(r#"a,"b,c"#), vec!["a", "b,c"]);
}

#[test]
fn closing_quote_as_last_character_ends_span() {
    assert_eq!(tokenize(r#"x,"y""#), vec!["x", "y"]);
}

#[test]
fn whitespace_is_preserved() {
    assert_eq!(tokenize(" a , b "), vec![" a ", " b "]);
}
