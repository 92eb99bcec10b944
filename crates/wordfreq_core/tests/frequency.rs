use pretty_assertions::assert_eq;
use wordfreq_core::{
    compute_top_words, count_words, FrequencyError, RankedEntry, DEFAULT_TOP_WORDS,
};

const SAMPLES: &[&str] = &[
    "",
    "single",
    "the cat sat on the mat the cat ran",
    "b a b a c c",
    "  leading and trailing  \n\t",
    "Word word WORD word. word, word",
    "a b c d e f g h i j k l m n o p q r s t u v w x y z a b c",
    "\u{3000}全角\u{3000}スペース 全角",
];

#[test]
fn result_length_is_min_of_distinct_and_limit() {
    for text in SAMPLES {
        let distinct = count_words(text).distinct();
        for limit in [1, 2, 3, 5, DEFAULT_TOP_WORDS] {
            let top = compute_top_words(text, limit).unwrap();
            assert_eq!(top.len(), distinct.min(limit), "text={text:?} limit={limit}");
        }
    }
}

#[test]
fn counts_are_non_increasing() {
    for text in SAMPLES {
        let top = compute_top_words(text, DEFAULT_TOP_WORDS).unwrap();
        assert!(
            top.windows(2).all(|pair| pair[0].count >= pair[1].count),
            "text={text:?} top={top:?}"
        );
    }
}

#[test]
fn returned_counts_dominate_omitted_counts() {
    let text = "a b c d e f g h i j k l m n o p q r s t u v w x y z a b c";
    let top = compute_top_words(text, 5).unwrap();
    let min_kept = top.iter().map(|e| e.count).min().unwrap();
    let table = count_words(text);
    for entry in table.iter() {
        if !top.iter().any(|kept| kept.word == entry.word) {
            assert!(entry.count <= min_kept);
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    for text in SAMPLES {
        assert_eq!(
            compute_top_words(text, 4).unwrap(),
            compute_top_words(text, 4).unwrap()
        );
    }
}

#[test]
fn ties_keep_first_seen_order() {
    let expected = vec![
        RankedEntry::new("b", 2),
        RankedEntry::new("a", 2),
        RankedEntry::new("c", 2),
    ];
    for _ in 0..10 {
        assert_eq!(compute_top_words("b a b a c c", 3).unwrap(), expected);
    }
}

#[test]
fn empty_text_yields_empty_result() {
    assert!(compute_top_words("", DEFAULT_TOP_WORDS).unwrap().is_empty());
    assert!(compute_top_words(" \n\t ", DEFAULT_TOP_WORDS)
        .unwrap()
        .is_empty());
}

#[test]
fn single_token() {
    assert_eq!(
        compute_top_words("single", DEFAULT_TOP_WORDS).unwrap(),
        vec![RankedEntry::new("single", 1)]
    );
}

#[test]
fn boundary_whitespace_does_not_produce_empty_tokens() {
    let table = count_words("  hello world \n");
    assert_eq!(table.distinct(), 2);
    assert_eq!(table.total_tokens(), 2);
    assert_eq!(table.get(""), None);
}

#[test]
fn tokens_are_case_and_punctuation_sensitive() {
    let table = count_words("Word word WORD word. word, word");
    assert_eq!(table.get("word"), Some(2));
    assert_eq!(table.get("Word"), Some(1));
    assert_eq!(table.get("WORD"), Some(1));
    assert_eq!(table.get("word."), Some(1));
    assert_eq!(table.get("word,"), Some(1));
}

#[test]
fn sentence_top_three() {
    let top = compute_top_words("the cat sat on the mat the cat ran", 3).unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0], RankedEntry::new("the", 3));
    assert_eq!(top[1], RankedEntry::new("cat", 2));
    assert_eq!(top[2].count, 1);
    // First-seen order pins the count-1 slot.
    assert_eq!(top[2].word, "sat");
}

#[test]
fn zero_limit_is_rejected() {
    assert_eq!(
        compute_top_words("the cat", 0),
        Err(FrequencyError::InvalidArgument { limit: 0 })
    );
    assert!(count_words("the cat").into_ranked(0).is_err());
}

#[test]
fn table_iterates_in_first_seen_order() {
    let table = count_words("z y z x y z");
    let words: Vec<_> = table.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["z", "y", "x"]);
    assert_eq!(table.total_tokens(), 6);
}
