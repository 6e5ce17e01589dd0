use rstest::rstest;

use colchunk::chunk::ColumnChunk;
use colchunk::core::{ColchunkError, Repr, Semantics, TypeIndex};
use colchunk::testutil::{Token, feed, generate_numeric_tokens, generate_text_tokens};

fn text(s: &str) -> Token {
    Token::Text(s.to_string())
}

/// Semantics stay numeric until text arrives on an empty column or
/// non-empty text arrives on a non-empty one; then they never change back.
#[rstest]
#[case::numbers_only(vec![Token::Integer(1), Token::Float(2.5)], Semantics::Numeric)]
#[case::blank_after_number(vec![Token::Integer(3), text("")], Semantics::Numeric)]
#[case::blank_first(vec![text(""), Token::Integer(3)], Semantics::Stringish)]
#[case::text_first(vec![text("a"), Token::Integer(3)], Semantics::Stringish)]
#[case::text_after_numbers(vec![Token::Integer(1), Token::Integer(2), text("x")], Semantics::Stringish)]
#[case::numbers_after_commit(vec![Token::Integer(1), text("x"), Token::Float(1.5), Token::Integer(2)], Semantics::Stringish)]
#[case::empty(vec![], Semantics::Numeric)]
fn test_semantics(#[case] tokens: Vec<Token>, #[case] expected: Semantics) {
    let mut chunk = ColumnChunk::with_name("col");
    feed(&mut chunk, &tokens);
    assert_eq!(chunk.semantics(), expected);
    assert_eq!(chunk.len(), tokens.len());
}

#[test]
fn test_commit_is_irrevocable() {
    let mut chunk = ColumnChunk::new();
    chunk.process_integer(1);
    chunk.process_categorical("x");
    for i in 0..100 {
        chunk.process_integer(i);
        assert_eq!(chunk.semantics(), Semantics::Stringish);
    }
    assert_eq!(chunk.len(), 102);
    assert!(chunk.numbers().is_empty());
}

#[test]
fn test_conversion_preserves_order() {
    let mut chunk = ColumnChunk::with_name("mixed");
    let tokens = generate_numeric_tokens(7, 500, 10);
    feed(&mut chunk, &tokens);
    let before: Vec<f64> = (0..chunk.len()).map(|i| chunk.get_numeric::<f64>(i)).collect();

    chunk.process_categorical("end");
    assert_eq!(chunk.len(), before.len() + 1);
    for (i, value) in before.iter().enumerate() {
        let parsed: f64 = chunk.category(i).parse().unwrap();
        assert_eq!(parsed, *value, "row {i}");
    }
    assert_eq!(chunk.category(before.len()), "end");
}

#[test]
fn test_dictionary_is_deduplicated() {
    let mut chunk = ColumnChunk::new();
    let tokens = generate_text_tokens(11, 10_000, 300);
    feed(&mut chunk, &tokens);

    assert_eq!(chunk.len(), 10_000);
    assert!(chunk.dictionary().len() <= 300);
    assert_eq!(chunk.codes().repr(), Repr::UInt16);
    for (i, token) in tokens.iter().enumerate() {
        let Token::Text(expected) = token else {
            unreachable!()
        };
        assert_eq!(chunk.category(i), expected);
    }
}

#[test]
fn test_numeric_extraction_round_trip() {
    let mut chunk = ColumnChunk::new();
    let tokens = generate_numeric_tokens(3, 1000, 0);
    feed(&mut chunk, &tokens);
    assert_eq!(chunk.type_index(), TypeIndex::Numeric(Repr::Int32));

    let mut out = vec![0i64; chunk.len()];
    assert_eq!(chunk.insert_numeric_into(&mut out), Ok(1000));
    for (token, value) in tokens.iter().zip(&out) {
        assert_eq!(token, &Token::Integer(*value));
    }
}

#[test]
fn test_numeric_extraction_never_returns_partial_data() {
    let mut chunk = ColumnChunk::with_name("tags");
    feed(&mut chunk, &generate_text_tokens(1, 50, 5));
    let mut out = vec![0.0f64; 50];
    assert_eq!(
        chunk.insert_numeric_into(&mut out),
        Err(ColchunkError::NotNumeric("tags".to_string()))
    );
    assert!(out.iter().all(|v| *v == 0.0));
}

/// Reconciling two chunks of the same column gives the same answer in
/// either order.
#[rstest]
#[case::same(vec![Token::Integer(1)], vec![Token::Integer(2)], TypeIndex::Numeric(Repr::UInt8))]
#[case::unsigned_vs_signed(vec![Token::Integer(200)], vec![Token::Integer(-1)], TypeIndex::Numeric(Repr::Int16))]
#[case::int_vs_float(vec![Token::Integer(1)], vec![Token::Float(0.5)], TypeIndex::Numeric(Repr::Float64))]
#[case::wide_vs_narrow(vec![Token::Integer(1 << 40)], vec![Token::Integer(-3)], TypeIndex::Numeric(Repr::Int64))]
#[case::number_vs_text(vec![Token::Integer(1)], vec![text("a")], TypeIndex::Utf8)]
#[case::empty_vs_number(vec![], vec![Token::Integer(70_000)], TypeIndex::Numeric(Repr::Int32))]
fn test_common_type_index_is_symmetric(
    #[case] left: Vec<Token>,
    #[case] right: Vec<Token>,
    #[case] expected: TypeIndex,
) {
    let mut a = ColumnChunk::new();
    feed(&mut a, &left);
    let mut b = ColumnChunk::new();
    feed(&mut b, &right);

    assert_eq!(a.common_type_index(b.type_index()), expected);
    assert_eq!(b.common_type_index(a.type_index()), expected);
}

#[test]
fn test_common_type_index_folds_across_chunks() {
    let inputs = [
        vec![Token::Integer(5)],
        vec![Token::Integer(-5)],
        vec![Token::Integer(40_000)],
    ];
    let chunks: Vec<ColumnChunk> = inputs
        .iter()
        .map(|tokens| {
            let mut chunk = ColumnChunk::new();
            feed(&mut chunk, tokens);
            chunk
        })
        .collect();

    let forward = chunks
        .iter()
        .fold(chunks[0].type_index(), |acc, c| c.common_type_index(acc));
    let backward = chunks
        .iter()
        .rev()
        .fold(chunks[2].type_index(), |acc, c| c.common_type_index(acc));
    assert_eq!(forward, TypeIndex::Numeric(Repr::Int32));
    assert_eq!(forward, backward);
}

#[test]
fn test_cleared_chunk_behaves_like_new() {
    let tokens = vec![Token::Integer(4), text("b"), text("a"), Token::Float(0.5)];

    let mut reused = ColumnChunk::with_name("col");
    feed(&mut reused, &generate_text_tokens(9, 100, 10));
    reused.clear();
    assert_eq!(reused.len(), 0);
    assert_eq!(reused.semantics(), Semantics::Numeric);
    assert!(reused.dictionary_keys().is_empty());
    feed(&mut reused, &tokens);

    let mut fresh = ColumnChunk::with_name("col");
    feed(&mut fresh, &tokens);

    assert_eq!(reused.summary(), fresh.summary());
    assert_eq!(reused.dictionary_keys(), fresh.dictionary_keys());
    assert_eq!(reused.codes(), fresh.codes());
}

#[test]
fn test_summary_serializes() {
    let mut chunk = ColumnChunk::with_name("qty");
    chunk.process_integer(-2);
    let json = serde_json::to_value(chunk.summary()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "column": "qty",
            "semantics": "numeric",
            "type_index": {"numeric": "int8"},
            "len": 1,
            "distinct": 0,
        })
    );
}
