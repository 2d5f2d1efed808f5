use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_flags_hardcoded_template_text() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_file(
        "src/App.vue",
        "<template>\n  <h1>Welcome to our site</h1>\n</template>\n",
    )?;

    let (code, stdout, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 1);
    assert!(
        stdout.contains("high: \"Welcome to our site\""),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("hardcoded-text"), "stdout: {}", stdout);
    assert!(stdout.contains("--> src/App.vue:2:7"), "stdout: {}", stdout);
    assert!(stdout.contains("<h1>Welcome to our site</h1>"), "stdout: {}", stdout);
    assert!(stdout.contains("^^^^"), "stdout: {}", stdout);
    assert!(
        stdout.contains("1 hardcoded string in 1 file"),
        "stdout: {}",
        stdout
    );
    Ok(())
}

#[test]
fn test_translated_template_is_clean() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_file(
        "src/App.vue",
        "<template>\n  <h1>{{ t('page.title') }}</h1>\n</template>\n",
    )?;

    let (code, stdout, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 0);
    assert!(
        stdout.contains("Scanned 1 source file - no hardcoded text found"),
        "stdout: {}",
        stdout
    );
    Ok(())
}

#[test]
fn test_ext_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{"extensions": ["vue"]}"#)?;
    test.write_locale("en", "{}")?;
    test.write_file("src/form.ts", "const msg = \"Please enter your name\"\n")?;

    let (code, _, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run(test.command().args(["hardcode-check", "--ext", "ts"]))?;
    assert_eq!(code, 1);
    assert!(
        stdout.contains("\"Please enter your name\""),
        "stdout: {}",
        stdout
    );
    Ok(())
}

#[test]
fn test_ignore_texts_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{"ignoreTexts": ["Acme Corp"]}"#)?;
    test.write_locale("en", "{}")?;
    test.write_file("src/Footer.vue", "<span>Acme Corp</span>\n")?;

    let (code, stdout, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no hardcoded text found"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_include_comments_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_file(
        "src/notes.js",
        "// placeholder: 'Choose your plan today'\n",
    )?;

    let (code, _, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run(test
        .command()
        .args(["hardcode-check", "--include-comments"]))?;
    assert_eq!(code, 1);
    assert!(
        stdout.contains("\"Choose your plan today\""),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("hardcoded-placeholder"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_ignores_config_skips_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{"ignores": ["vendor"]}"#)?;
    test.write_locale("en", "{}")?;
    test.write_file("src/vendor/Widget.vue", "<p>Buy this great thing</p>\n")?;
    test.write_file("src/App.vue", "<p>{{ t('offer.cta') }}</p>\n")?;

    let (code, stdout, stderr) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no hardcoded text found"), "stdout: {}", stdout);
    assert!(stderr.contains("1 file(s) skipped"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_min_text_length_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{"minTextLength": 10}"#)?;
    test.write_locale("en", "{}")?;
    test.write_file("src/Toolbar.vue", "<button>Save</button>\n")?;

    let (code, stdout, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no hardcoded text found"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_findings_sorted_across_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_file("src/b.vue", "<p>Second finding here</p>\n")?;
    test.write_file("src/a.vue", "<p>First finding here</p>\n")?;

    let (code, stdout, _) = run(test.command().args(["hardcode-check"]))?;
    assert_eq!(code, 1);
    let first = stdout.find("First finding here").unwrap();
    let second = stdout.find("Second finding here").unwrap();
    assert!(first < second, "stdout: {}", stdout);
    assert!(
        stdout.contains("2 hardcoded strings in 2 files"),
        "stdout: {}",
        stdout
    );
    Ok(())
}
