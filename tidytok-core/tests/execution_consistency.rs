//! Integration tests comparing execution strategies

use tidytok_core::{
    CancellationToken, Error, ExecutionMode, Granularity, RowTable, TableTokenizer, TokenizeConfig,
    Value,
};

/// Generate a table of `rows` lines, seven lines per chapter
fn generate_table(rows: usize) -> RowTable {
    let lines = [
        "It was the best of times, it was the worst of times,",
        "it was the age of wisdom, it was the age of foolishness,",
        "it was the epoch of belief. It was the epoch of incredulity!",
    ];

    RowTable::from_rows(
        ["text", "chapter", "line"],
        (0..rows)
            .map(|i| {
                vec![
                    Value::from(lines[i % lines.len()]),
                    Value::Integer((i / 7) as i64),
                    Value::Integer(i as i64),
                ]
            })
            .collect(),
    )
    .unwrap()
}

fn config(mode: ExecutionMode, granularity: Granularity) -> TokenizeConfig {
    TokenizeConfig::builder()
        .granularity(granularity)
        .collapse_on(["chapter"])
        .execution_mode(mode)
        .threads(Some(4))
        .build()
        .unwrap()
}

#[test]
fn test_sequential_vs_parallel_consistency() {
    let table = generate_table(500);

    for granularity in [
        Granularity::Word,
        Granularity::ngram(3),
        Granularity::Sentence,
        Granularity::CharacterShingles { n: 4 },
    ] {
        let seq = TableTokenizer::new(config(ExecutionMode::Sequential, granularity.clone()))
            .tokenize(&table)
            .unwrap();
        let par = TableTokenizer::new(config(ExecutionMode::Parallel, granularity.clone()))
            .tokenize(&table)
            .unwrap();

        assert_eq!(seq.rows, par.rows, "{} output differs", granularity.name());
        assert_eq!(seq.metadata.runs_processed, 72);
    }
}

#[test]
fn test_output_follows_input_order() {
    let table = generate_table(300);
    let output = TableTokenizer::new(config(ExecutionMode::Parallel, Granularity::Word))
        .tokenize(&table)
        .unwrap();

    let indices: Vec<usize> = output.iter().map(|r| r.row_index).collect();
    assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(output.value(0, "line"), Some(&Value::Integer(0)));
}

#[cfg(feature = "parallel")]
#[test]
fn test_adaptive_selects_parallel_for_large_input() {
    let table = generate_table(100);

    let config = TokenizeConfig::builder()
        .collapse_on(["chapter"])
        .parallel_threshold(50)
        .threads(Some(2))
        .build()
        .unwrap();
    let output = TableTokenizer::new(config).tokenize(&table).unwrap();
    assert_eq!(output.metadata.execution_mode, ExecutionMode::Parallel);
    assert_eq!(output.metadata.thread_count, 2);

    let config = TokenizeConfig::builder()
        .collapse_on(["chapter"])
        .build()
        .unwrap();
    let output = TableTokenizer::new(config).tokenize(&table).unwrap();
    assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
}

#[test]
fn test_cancellation_in_both_modes() {
    let table = generate_table(200);
    let cancel = CancellationToken::new();
    cancel.cancel();

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let result = TableTokenizer::new(config(mode, Granularity::Word))
            .tokenize_with_cancel(&table, &cancel);
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}
