use anyhow::Result;
use numconv::{
    ConversionPolicy, ErrorKind, NumeralSystem, TranslationRequest, Translator,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_decimal_to_binary_and_hex() -> Result<()> {
    let translator = Translator::default();
    let result = translator.translate(
        NumeralSystem::Decimal,
        "10",
        &[NumeralSystem::Binary, NumeralSystem::Hexadecimal],
    )?;

    let outputs: Vec<_> = result.successes().collect();
    assert_eq!(
        outputs,
        vec![
            (NumeralSystem::Binary, "1010"),
            (NumeralSystem::Hexadecimal, "A"),
        ]
    );
    Ok(())
}

#[test]
fn test_partial_success_keeps_requested_order() -> Result<()> {
    let translator = Translator::default();
    let result = translator.translate(
        NumeralSystem::Hexadecimal,
        "FA0",
        &[
            NumeralSystem::Roman,
            NumeralSystem::Decimal,
            NumeralSystem::Octal,
        ],
    )?;

    // 0xFA0 = 4000, one past the Roman ceiling
    let systems: Vec<_> = result.iter().map(|(s, _)| *s).collect();
    assert_eq!(
        systems,
        vec![
            NumeralSystem::Roman,
            NumeralSystem::Decimal,
            NumeralSystem::Octal,
        ]
    );

    let failures: Vec<_> = result.failures().map(|(s, e)| (s, e.kind())).collect();
    assert_eq!(failures, vec![(NumeralSystem::Roman, ErrorKind::OutOfRange)]);
    assert_eq!(result.get(NumeralSystem::Decimal), Some(&Ok("4000".to_string())));
    assert_eq!(result.get(NumeralSystem::Octal), Some(&Ok("7640".to_string())));
    Ok(())
}

#[test]
fn test_negative_hex_only_fails_unsigned_outputs() -> Result<()> {
    let translator = Translator::default();
    let result = translator.translate(
        NumeralSystem::Hexadecimal,
        "-ff",
        &[
            NumeralSystem::Decimal,
            NumeralSystem::Binary,
            NumeralSystem::Octal,
            NumeralSystem::Roman,
        ],
    )?;

    assert_eq!(result.get(NumeralSystem::Decimal), Some(&Ok("-255".to_string())));
    let failed: Vec<_> = result.failures().map(|(s, _)| s).collect();
    assert_eq!(
        failed,
        vec![
            NumeralSystem::Binary,
            NumeralSystem::Octal,
            NumeralSystem::Roman,
        ]
    );
    Ok(())
}

#[test]
fn test_decode_failure_returns_no_partial_result() {
    let translator = Translator::default();

    let err = translator
        .translate(NumeralSystem::Roman, "IIII", &NumeralSystem::Roman.others())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidGrammar);

    let err = translator
        .translate(NumeralSystem::Binary, "", &[NumeralSystem::Decimal])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}

#[test]
fn test_request_with_duplicate_outputs() -> Result<()> {
    let translator = Translator::default();
    let request = TranslationRequest::new(
        NumeralSystem::Roman,
        "MCMXCIV",
        [
            NumeralSystem::Decimal,
            NumeralSystem::Decimal,
            NumeralSystem::Hexadecimal,
        ],
    );

    let result = translator.translate_request(&request)?;
    assert_eq!(result.len(), 2);
    assert_eq!(result.magnitude(), 1994);
    assert_eq!(result.get(NumeralSystem::Hexadecimal), Some(&Ok("7CA".to_string())));
    Ok(())
}

#[test]
fn test_empty_output_list() -> Result<()> {
    let result = Translator::default().translate(NumeralSystem::Octal, "17", &[])?;
    assert!(result.is_empty());
    assert_eq!(result.magnitude(), 15);
    Ok(())
}

#[test]
fn test_report_serializes_values_and_error_kinds() -> Result<()> {
    let translator = Translator::default();
    let result = translator.translate(
        NumeralSystem::Decimal,
        "0",
        &[NumeralSystem::Hexadecimal, NumeralSystem::Roman],
    )?;

    let json = serde_json::to_value(result.report(NumeralSystem::Decimal))?;
    assert_eq!(json["input"], "decimal");
    assert_eq!(json["magnitude"], 0);
    assert_eq!(json["outputs"][0]["system"], "hexadecimal");
    assert_eq!(json["outputs"][0]["value"], "0");
    assert_eq!(json["outputs"][1]["error"], "undefined_value");
    assert!(json["outputs"][1].get("value").is_none());
    Ok(())
}

#[test]
fn test_translator_is_shareable_across_threads() {
    let translator = Arc::new(Translator::new(ConversionPolicy::default()).unwrap());

    let handles: Vec<_> = (1..=8)
        .map(|n| {
            let translator = Arc::clone(&translator);
            thread::spawn(move || {
                translator
                    .translate(NumeralSystem::Decimal, &n.to_string(), &[NumeralSystem::Roman])
                    .unwrap()
                    .get(NumeralSystem::Roman)
                    .cloned()
                    .unwrap()
                    .unwrap()
            })
        })
        .collect();

    let numerals: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        numerals,
        vec!["I", "II", "III", "IV", "V", "VI", "VII", "VIII"]
    );
}
