//! Integration tests for the echo handler.

use ibis_xml::{EchoHandler, Tokenizer};

/// Helper to run markup through the tokenizer and echo it back out.
fn echo(input: &str) -> String {
    let mut handler = EchoHandler::new(Vec::new());
    let mut tokenizer = Tokenizer::new();
    tokenizer
        .parse_str(input, &mut handler)
        .expect("parse failed");
    String::from_utf8(handler.into_inner()).expect("echoed markup is utf-8")
}

#[test]
fn test_well_formed_document_round_trips() {
    let input = r#"<!DOCTYPE html><a href="x">hi<br/><!--c--></a>"#;
    assert_eq!(echo(input), input);
}

#[test]
fn test_cdata_round_trips() {
    let input = "<![CDATA[<raw> & more]]>";
    assert_eq!(echo(input), input);
}

#[test]
fn test_processing_instruction_echoes_attributes() {
    assert_eq!(
        echo(r#"<?xml version="1.0"?>"#),
        r#"<?xml version="1.0">"#
    );
}

#[test]
fn test_boolean_attribute_echoes_empty_value() {
    assert_eq!(echo("<input disabled>"), r#"<input disabled="">"#);
}

#[test]
fn test_text_is_passed_through_verbatim() {
    assert_eq!(echo("one < two"), "one ");
}
