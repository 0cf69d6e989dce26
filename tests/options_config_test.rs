use subrip::{OptionValue, Options, Replacements, SubripFile};

#[test]
fn test_options_from_config_document() {
    let options: Options =
        serde_json::from_str(r#"{ "strip_tags": true, "replacements": "enabled" }"#).unwrap();
    assert!(options.strip_tags);
    assert!(!options.strip_basic);
    assert_eq!(options.replacements, Replacements::Enabled);

    let table: Options =
        serde_json::from_str(r#"{ "replacements": { "table": [["...", "…"]] } }"#).unwrap();
    assert_eq!(
        table.replacements,
        Replacements::Table(vec![("...".to_string(), "…".to_string())])
    );
}

#[test]
fn test_options_config_rejects_unknown_key() {
    let result: Result<Options, _> = serde_json::from_str(r#"{ "stripTags": true }"#);
    assert!(result.is_err());
}

#[test]
fn test_set_options_with_owned_keys() {
    let mut file = SubripFile::new();
    let pairs = vec![
        ("strip_basic".to_string(), OptionValue::from(true)),
        ("replacements".to_string(), OptionValue::from(false)),
    ];
    file.set_options(pairs).unwrap();
    assert!(file.options().strip_basic);
    assert!(!file.options().replacements.is_enabled());

    let err = file
        .set_options([("unknownKey", OptionValue::from(true))])
        .unwrap_err();
    assert!(err.to_string().contains("unknownKey"));
    assert!(file.options().strip_basic);
}
