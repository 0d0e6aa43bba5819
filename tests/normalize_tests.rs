use wordle_csp::{
    Attempt, DirectNormalizer, Fallback, NormalizeError, Normalizer, Notation,
    ToolCallNormalizer, WordleError,
};

fn attempt(guess: &str, feedback: &str, notation: Notation) -> Attempt {
    Attempt::parse(guess, feedback, notation).unwrap()
}

#[test]
fn test_direct_accepts_space_and_arrow_forms() {
    let normalizer = DirectNormalizer::new(Notation::Vjg);
    let expected = attempt("orate", "gvvjg", Notation::Vjg);

    for raw in ["ORATE GVVJG", "ORATE->GVVJG", "ORATE -> GVVJG", "  orate gvvjg  "] {
        assert_eq!(normalizer.normalize(raw).unwrap(), expected, "input {:?}", raw);
    }
}

#[test]
fn test_direct_default_notation() {
    let normalizer = DirectNormalizer::default();
    let parsed = normalizer.normalize("crane 21000").unwrap();
    assert_eq!(parsed, attempt("crane", "gybbb", Notation::Gyb));
}

#[test]
fn test_direct_rejects_free_text() {
    let normalizer = DirectNormalizer::new(Notation::Gyb);
    for raw in [
        "",
        "I guessed crane and got two greens",
        "crane",
        "crane -> ",
        r#"{"guess":"crane", "feedback":"gybbb"}"#,
    ] {
        assert!(
            matches!(
                normalizer.normalize(raw),
                Err(NormalizeError::Unrecognized { .. })
            ),
            "input {:?}",
            raw
        );
    }
}

#[test]
fn test_direct_reports_malformed_fields() {
    let normalizer = DirectNormalizer::new(Notation::Gyb);
    let cases = [
        (
            "crane gybzb",
            WordleError::InvalidSymbol {
                symbol: 'z',
                position: 3,
            },
        ),
        (
            "cranes gybbb",
            WordleError::LengthMismatch {
                expected: 5,
                actual: 6,
            },
        ),
        (
            "crane gybbbb",
            WordleError::LengthMismatch {
                expected: 5,
                actual: 6,
            },
        ),
        (
            "crane -> gybb",
            WordleError::LengthMismatch {
                expected: 5,
                actual: 4,
            },
        ),
        (
            "cr4ne gybbb",
            WordleError::InvalidLetter {
                letter: '4',
                position: 2,
            },
        ),
    ];
    for (raw, expected) in cases {
        match normalizer.normalize(raw) {
            Err(NormalizeError::Invalid(err)) => assert_eq!(err, expected, "input {:?}", raw),
            other => panic!("input {:?}: expected {:?}, got {:?}", raw, expected, other),
        }
    }
}

#[test]
fn test_direct_rejects_other_notation_letters() {
    let normalizer = DirectNormalizer::new(Notation::Vjg);
    assert!(normalizer.normalize("orate gybbb").is_err());
}

#[test]
fn test_tool_call_arguments_object() {
    let normalizer = ToolCallNormalizer::new(Notation::Vjg);
    let parsed = normalizer
        .normalize(r#"{"guess": "orate", "feedback": "GVVJG"}"#)
        .unwrap();
    assert_eq!(parsed, attempt("orate", "gvvjg", Notation::Vjg));
}

#[test]
fn test_tool_call_string_encoded_arguments() {
    let normalizer = ToolCallNormalizer::new(Notation::Gyb);
    let parsed = normalizer
        .normalize(r#""{\"guess\": \"CRANE\", \"feedback\": \"gybbb\"}""#)
        .unwrap();
    assert_eq!(parsed, attempt("crane", "gybbb", Notation::Gyb));
}

#[test]
fn test_tool_call_chat_response_envelope() {
    let normalizer = ToolCallNormalizer::new(Notation::Gyb);
    let raw = r#"{
        "message": {
            "role": "assistant",
            "tool_calls": [
                {"function": {"name": "extract_wordle_attempt",
                              "arguments": {"guess": "slate", "feedback": "bbygb"}}}
            ]
        }
    }"#;
    assert_eq!(
        normalizer.normalize(raw).unwrap(),
        attempt("slate", "bbygb", Notation::Gyb)
    );
}

#[test]
fn test_tool_call_without_tool_calls_is_missing() {
    let normalizer = ToolCallNormalizer::new(Notation::Gyb);
    let raw = r#"{"message": {"role": "assistant", "content": "no idea"}}"#;
    assert!(matches!(
        normalizer.normalize(raw),
        Err(NormalizeError::Missing { field: "tool call" })
    ));
}

#[test]
fn test_tool_call_empty_fields_mean_nothing_extracted() {
    let normalizer = ToolCallNormalizer::new(Notation::Gyb);
    assert!(matches!(
        normalizer.normalize(r#"{"guess": "", "feedback": ""}"#),
        Err(NormalizeError::Missing { field: "guess" })
    ));
    assert!(matches!(
        normalizer.normalize(r#"{"guess": "crane"}"#),
        Err(NormalizeError::Missing { field: "feedback" })
    ));
}

#[test]
fn test_tool_call_invalid_values_are_reported() {
    let normalizer = ToolCallNormalizer::new(Notation::Gyb);
    assert!(matches!(
        normalizer.normalize(r#"{"guess": "cranes", "feedback": "gybbb"}"#),
        Err(NormalizeError::Invalid(WordleError::LengthMismatch { .. }))
    ));
    assert!(matches!(
        normalizer.normalize(r#"{"guess": "crane", "feedback": "gyqbb"}"#),
        Err(NormalizeError::Invalid(WordleError::InvalidSymbol {
            symbol: 'q',
            position: 2
        }))
    ));
    assert!(matches!(
        normalizer.normalize("not json"),
        Err(NormalizeError::Json(_))
    ));
}

#[test]
fn test_fallback_tries_secondary() {
    let normalizer = Fallback::new(
        DirectNormalizer::new(Notation::Gyb),
        ToolCallNormalizer::new(Notation::Gyb),
    );
    assert_eq!(
        normalizer.normalize("crane gybbb").unwrap(),
        attempt("crane", "gybbb", Notation::Gyb)
    );
    assert_eq!(
        normalizer
            .normalize(r#"{"guess": "crane", "feedback": "gybbb"}"#)
            .unwrap(),
        attempt("crane", "gybbb", Notation::Gyb)
    );
    assert!(matches!(
        normalizer.normalize(r#"{"guess": "", "feedback": ""}"#),
        Err(NormalizeError::Missing { field: "guess" })
    ));
    assert!(matches!(
        normalizer.normalize("crane was mostly gray"),
        Err(NormalizeError::Unrecognized { .. })
    ));
}

#[test]
fn test_fallback_keeps_typed_errors_from_primary() {
    let normalizer = Fallback::new(
        DirectNormalizer::new(Notation::Gyb),
        ToolCallNormalizer::new(Notation::Gyb),
    );
    assert!(matches!(
        normalizer.normalize("crane gybzb"),
        Err(NormalizeError::Invalid(WordleError::InvalidSymbol {
            symbol: 'z',
            position: 3
        }))
    ));
    assert!(matches!(
        normalizer.normalize("cranes gybbb"),
        Err(NormalizeError::Invalid(WordleError::LengthMismatch {
            expected: 5,
            actual: 6
        }))
    ));
    assert!(matches!(
        normalizer.normalize("crane gybb"),
        Err(NormalizeError::Invalid(WordleError::LengthMismatch {
            expected: 5,
            actual: 4
        }))
    ));
    // Typed errors from the secondary come through as well.
    assert!(matches!(
        normalizer.normalize(r#"{"guess": "crane", "feedback": "gyqbb"}"#),
        Err(NormalizeError::Invalid(WordleError::InvalidSymbol {
            symbol: 'q',
            position: 2
        }))
    ));
}

#[test]
fn test_normalizer_as_trait_object() {
    let normalizer: Box<dyn Normalizer> = Box::new(DirectNormalizer::new(Notation::Gyb));
    assert!(normalizer.normalize("crane bbbbb").is_ok());
}
