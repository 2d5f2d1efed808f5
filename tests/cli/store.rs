use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_get_value() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;

    let (code, stdout, _) = run(test.command().args(["get", "en", "greeting"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Hello\n");
    Ok(())
}

#[test]
fn test_get_nested_value() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"auth": {"login": {"title": "Sign in"}}}"#)?;

    let (code, stdout, _) = run(test.command().args(["get", "en", "auth.login.title"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Sign in\n");
    Ok(())
}

#[test]
fn test_get_unset_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;

    let (code, stdout, _) = run(test.command().args(["get", "en", "farewell"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "(not set)\n");
    Ok(())
}

#[test]
fn test_get_non_string_value_prints_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"plural": {"one": "item", "count": 3}}"#)?;

    let (code, stdout, _) = run(test.command().args(["get", "en", "plural.count"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "3\n");
    Ok(())
}

#[test]
fn test_invalid_key_path_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, _, stderr) = run(test.command().args(["get", "en", "a..b"]))?;
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error:"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_set_creates_nested_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["set", "en", "auth.login.title", "Sign in"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("added 'auth.login.title' in en"), "stdout: {}", stdout);

    let content = test.read_file("locales/en.json")?;
    let parsed: Value = serde_json::from_str(&content)?;
    assert_eq!(parsed["auth"]["login"]["title"], "Sign in");
    assert!(content.ends_with('\n'));
    Ok(())
}

#[test]
fn test_set_updates_existing_value() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;

    let (code, stdout, _) = run(test.command().args(["set", "en", "greeting", "Hi there"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("updated 'greeting' in en"), "stdout: {}", stdout);

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(parsed["greeting"], "Hi there");
    Ok(())
}

#[test]
fn test_set_skip_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;

    let (code, stdout, _) = run(test
        .command()
        .args(["set", "en", "greeting", "Hi", "--skip-if-exists"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("already set in en, skipped"), "stdout: {}", stdout);

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(parsed["greeting"], "Hello");
    Ok(())
}

#[test]
fn test_set_preserves_key_order_and_formatting() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{\n  \"zebra\": \"z\",\n  \"apple\": \"a\"\n}\n")?;

    let (code, _, _) = run(test.command().args(["set", "en", "mango", "m"]))?;
    assert_eq!(code, 0);

    let content = test.read_file("locales/en.json")?;
    assert_eq!(
        content,
        "{\n  \"zebra\": \"z\",\n  \"apple\": \"a\",\n  \"mango\": \"m\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_set_replaces_scalar_with_object_and_warns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"auth": "old text"}"#)?;

    let (code, _, stderr) = run(test.command().args(["set", "en", "auth.title", "Login"]))?;
    assert_eq!(code, 0);
    assert!(stderr.contains("warning:"), "stderr: {}", stderr);
    assert!(
        stderr.contains("replaced scalar at 'auth' in locale 'en'"),
        "stderr: {}",
        stderr
    );

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(parsed["auth"]["title"], "Login");
    Ok(())
}

#[test]
fn test_set_unknown_locale_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, stdout, stderr) = run(test.command().args(["set", "de", "greeting", "Hallo"]))?;
    assert_eq!(code, 1);
    assert!(stdout.contains("failed to set 'greeting' in de"), "stdout: {}", stdout);
    assert!(stderr.contains("unknown locale 'de'"), "stderr: {}", stderr);
    assert!(!test.root().join("locales/de.json").exists());
    Ok(())
}

#[test]
fn test_set_value_parsed_as_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, _, _) = run(test
        .command()
        .args(["set", "en", "menu.items", r#"["Home", "About"]"#]))?;
    assert_eq!(code, 0);

    let parsed: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(parsed["menu"]["items"], serde_json::json!(["Home", "About"]));
    Ok(())
}

#[test]
fn test_set_multiple_locales_at_once() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_locale("fr", "{}")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["set-multiple", "greeting", "en=Hello", "fr=Bonjour"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("added 'greeting' in en"), "stdout: {}", stdout);
    assert!(stdout.contains("added 'greeting' in fr"), "stdout: {}", stdout);
    assert!(stdout.contains("2 applied"), "stdout: {}", stdout);

    let en: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(en["greeting"], "Hello");
    assert_eq!(fr["greeting"], "Bonjour");
    Ok(())
}

#[test]
fn test_set_multiple_reports_unknown_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["set-multiple", "greeting", "en=Hello", "de=Hallo"]))?;
    assert_eq!(code, 1);
    assert!(stdout.contains("added 'greeting' in en"), "stdout: {}", stdout);
    assert!(stdout.contains("failed to set 'greeting' in de"), "stdout: {}", stdout);

    // The valid locale was still written
    let en: Value = serde_json::from_str(&test.read_file("locales/en.json")?)?;
    assert_eq!(en["greeting"], "Hello");
    Ok(())
}

#[test]
fn test_set_multiple_rejects_malformed_pair() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, _, stderr) = run(test
        .command()
        .args(["set-multiple", "greeting", "enHello"]))?;
    assert_eq!(code, 2);
    assert!(stderr.contains("expected locale=value"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_has_reports_presence() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello", "draft": null}"#)?;

    let (code, stdout, _) = run(test.command().args(["has", "en", "greeting"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "true\n");

    let (code, stdout, _) = run(test.command().args(["has", "en", "farewell"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "false\n");

    // Null leaves count as absent
    let (_, stdout, _) = run(test.command().args(["has", "en", "draft"]))?;
    assert_eq!(stdout, "false\n");
    Ok(())
}

#[test]
fn test_get_all_lists_values_per_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;
    test.write_locale("fr", r#"{"greeting": "Bonjour"}"#)?;
    test.write_locale("ja", "{}")?;

    let (code, stdout, _) = run(test.command().args(["get-all", "greeting"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("en  Hello"), "stdout: {}", stdout);
    assert!(stdout.contains("fr  Bonjour"), "stdout: {}", stdout);
    assert!(!stdout.contains("ja"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_get_all_unset_everywhere() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;

    let (code, stdout, _) = run(test.command().args(["get-all", "nope"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("'nope' is not set in any locale"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_missing_lists_locales_without_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;
    test.write_locale("fr", "{}")?;
    test.write_locale("ja", "{}")?;

    let (code, stdout, _) = run(test.command().args(["missing", "greeting"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "fr\nja\n");
    Ok(())
}

#[test]
fn test_missing_none() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;
    test.write_locale("fr", r#"{"greeting": "Bonjour"}"#)?;

    let (code, stdout, _) = run(test.command().args(["missing", "greeting"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("'greeting' is set in every locale"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_copy_to_every_other_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"terms": {"privacy": "Privacy Policy"}}"#)?;
    test.write_locale("fr", "{}")?;
    test.write_locale("ja", "{}")?;

    let (code, stdout, _) = run(test.command().args(["copy", "en", "terms.privacy"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("added 'terms.privacy' in fr"), "stdout: {}", stdout);
    assert!(stdout.contains("added 'terms.privacy' in ja"), "stdout: {}", stdout);

    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["terms"]["privacy"], "Privacy Policy");
    Ok(())
}

#[test]
fn test_copy_to_explicit_targets() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;
    test.write_locale("fr", "{}")?;
    test.write_locale("ja", "{}")?;

    let (code, _, _) = run(test
        .command()
        .args(["copy", "en", "greeting", "--to", "fr"]))?;
    assert_eq!(code, 0);

    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["greeting"], "Hello");
    let ja = test.read_file("locales/ja.json")?;
    assert_eq!(ja, "{}");
    Ok(())
}

#[test]
fn test_copy_skip_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"greeting": "Hello"}"#)?;
    test.write_locale("fr", r#"{"greeting": "Bonjour"}"#)?;
    test.write_locale("ja", "{}")?;

    let (code, stdout, _) = run(test
        .command()
        .args(["copy", "en", "greeting", "--skip-if-exists"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("already set in fr, skipped"), "stdout: {}", stdout);
    assert!(stdout.contains("added 'greeting' in ja"), "stdout: {}", stdout);

    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["greeting"], "Bonjour");
    Ok(())
}

#[test]
fn test_copy_without_source_value_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_locale("fr", "{}")?;

    let (code, _, stderr) = run(test.command().args(["copy", "en", "nope"]))?;
    assert_eq!(code, 1);
    assert!(stderr.contains("'nope' has no usable value in en"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_merge_file_into_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_locale("fr", r#"{"existing": "Gardé"}"#)?;
    test.write_file(
        "incoming.json",
        r#"{"auth.login.title": "Connexion", "greeting": "Bonjour"}"#,
    )?;

    let (code, stdout, _) = run(test.command().args(["merge", "fr", "incoming.json"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("added 'auth.login.title' in fr"), "stdout: {}", stdout);
    assert!(stdout.contains("added 'greeting' in fr"), "stdout: {}", stdout);

    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["existing"], "Gardé");
    assert_eq!(fr["auth"]["login"]["title"], "Connexion");
    assert_eq!(fr["greeting"], "Bonjour");
    Ok(())
}

#[test]
fn test_merge_continues_past_bad_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("fr", "{}")?;
    test.write_file(
        "incoming.json",
        r#"{"good.key": "Bien", "bad..path": "Mauvais"}"#,
    )?;

    let (code, stdout, stderr) = run(test.command().args(["merge", "fr", "incoming.json"]))?;
    assert_eq!(code, 1);
    assert!(stdout.contains("added 'good.key' in fr"), "stdout: {}", stdout);
    assert!(stdout.contains("failed to set 'bad..path' in fr"), "stdout: {}", stdout);
    assert!(stderr.contains("warning:"), "stderr: {}", stderr);

    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["good"]["key"], "Bien");
    Ok(())
}

#[test]
fn test_merge_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("fr", "{}")?;

    let (code, _, stderr) = run(test.command().args(["merge", "fr", "nope.json"]))?;
    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read file"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_locales_lists_sorted_stems() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("fr", "{}")?;
    test.write_locale("en", "{}")?;
    test.write_file("locales/de.js", "export default {}\n")?;
    test.write_file("locales/index.js", "export default {}\n")?;
    test.write_file("locales/readme.txt", "not a locale\n")?;

    let (code, stdout, _) = run(test.command().args(["locales"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "de\nen\nfr\n");
    Ok(())
}

#[test]
fn test_js_module_fallback_read() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/fr.js",
        "export default {\n  greeting: \"Bonjour\"\n}\n",
    )?;

    let (code, stdout, _) = run(test.command().args(["get", "fr", "greeting"]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Bonjour\n");
    Ok(())
}

#[test]
fn test_write_migrates_js_module_to_json() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "locales/fr.js",
        "export default {\n  greeting: \"Bonjour\"\n}\n",
    )?;

    let (code, _, _) = run(test.command().args(["set", "fr", "farewell", "Au revoir"]))?;
    assert_eq!(code, 0);

    // The write lands in JSON, carrying the keys read from the JS module
    let fr: Value = serde_json::from_str(&test.read_file("locales/fr.json")?)?;
    assert_eq!(fr["greeting"], "Bonjour");
    assert_eq!(fr["farewell"], "Au revoir");
    // The JS module is left in place
    assert!(test.root().join("locales/fr.js").exists());
    Ok(())
}

#[test]
fn test_json_preferred_over_js_module() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("fr", r#"{"greeting": "From JSON"}"#)?;
    test.write_file(
        "locales/fr.js",
        "export default { greeting: \"From JS\" }\n",
    )?;

    let (_, stdout, _) = run(test.command().args(["get", "fr", "greeting"]))?;
    assert_eq!(stdout, "From JSON\n");
    Ok(())
}

#[test]
fn test_corrupt_json_never_clobbered() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{not json")?;

    let (code, stdout, stderr) = run(test.command().args(["set", "en", "greeting", "Hello"]))?;
    assert_eq!(code, 1);
    assert!(stdout.contains("failed to set 'greeting' in en"), "stdout: {}", stdout);
    assert!(stderr.contains("failed to parse"), "stderr: {}", stderr);

    // The unreadable file is left untouched
    assert_eq!(test.read_file("locales/en.json")?, "{not json");
    Ok(())
}

#[test]
fn test_locales_root_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en.json", r#"{"greeting": "Hello"}"#)?;

    let (code, stdout, _) = run(test.command().args([
        "get",
        "en",
        "greeting",
        "--locales-root",
        "translations",
    ]))?;
    assert_eq!(code, 0);
    assert_eq!(stdout, "Hello\n");
    Ok(())
}
