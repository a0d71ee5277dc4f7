use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_generate_named_export() -> Result<()> {
    let test = CliTest::with_file(
        "src/controllers/test-routable.ts",
        r#"
      export const ROUTABLE_TARGETS = ['user/:id', 'dashboard'];
    "#,
    )?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "export const RoutableRegistry = [\n\
         { match: [\"user/:id\", \"dashboard\"], loader: () => import(\"/src/controllers/test-routable.ts\") }\n\
         ];\n"
    );

    Ok(())
}

#[test]
fn test_generate_decorator() -> Result<()> {
    let test = CliTest::with_file(
        "src/decorator-test.ts",
        r#"
      @Routable('profile/:id')
      export class ProfileComponent {
        // component code
      }
    "#,
    )?;

    let output = test.generate_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains(
        r#"{ match: ["profile/:id"], loader: () => import("/src/decorator-test.ts") }"#
    ));

    Ok(())
}

#[test]
fn test_generate_object_configuration_with_regex() -> Result<()> {
    let test = CliTest::with_file(
        "__TESTS__/fixtures/object-config.ts",
        r#"
      export const ROUTABLE_TARGETS = {
        match: ['admin/:section', /^api\/v\d+/],
        matchTarget: 'path'
      };
    "#,
    )?;

    let output = test
        .generate_command()
        .args(["--paths", "__TESTS__/fixtures"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains(r#"match: ["admin/:section", /^api\/v\d+/]"#));

    Ok(())
}

#[test]
fn test_generate_empty_project() -> Result<()> {
    let test = CliTest::with_file("src/plain.ts", "export const x = 1;")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "export const RoutableRegistry = [\n\n];\n");

    Ok(())
}

#[test]
fn test_generate_reports_malformed_declaration() -> Result<()> {
    let test = CliTest::with_file(
        "src/bad.ts",
        "export const ROUTABLE_TARGETS = { matchTarget: 'path' };\n",
    )?;
    test.write_file("src/good.ts", "export const ROUTABLE_TARGETS = ['ok'];\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: malformed ROUTABLE_TARGETS export"));
    assert!(err.contains("--> src/bad.ts:1"));
    let out = stdout(&output);
    assert!(out.contains("/src/good.ts"));
    assert!(!out.contains("/src/bad.ts"));

    Ok(())
}

#[test]
fn test_generate_parse_error_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/broken.ts", "export const ROUTABLE_TARGETS = ['a'")?;
    test.write_file("src/good.ts", "export const ROUTABLE_TARGETS = ['ok'];\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to parse"));

    Ok(())
}

#[test]
fn test_generate_missing_directory_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error:"));

    Ok(())
}

#[test]
fn test_generate_file_as_path_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/main.ts", "export const ROUTABLE_TARGETS = ['a'];")?;
    test.write_file(".routablerc.json", r#"{ "paths": ["src/main.ts"] }"#)?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("main.ts"));

    Ok(())
}

#[test]
fn test_generate_uses_config_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".routablerc.json", r#"{ "paths": ["app/routes"] }"#)?;
    test.write_file("app/routes/home.ts", "export const ROUTABLE_TARGETS = ['home'];")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(r#"import("/app/routes/home.ts")"#));

    Ok(())
}

#[test]
fn test_generate_to_output_file() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "export const ROUTABLE_TARGETS = [/^a/g];")?;

    let output = test
        .generate_command()
        .args(["-o", "generated/manifest.js"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Wrote generated/manifest.js (1 entry from 1 scanned file)"));
    let manifest = test.read_file("generated/manifest.js")?;
    assert!(manifest.contains(r#"{ match: [/^a/g], loader: () => import("/src/a.ts") }"#));

    Ok(())
}

#[test]
fn test_generate_with_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/src/a.ts", "export const ROUTABLE_TARGETS = 'a';")?;

    let output = test
        .generate_command()
        .arg("--root")
        .arg(test.root().join("web"))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(r#"import("/src/a.ts")"#));

    Ok(())
}

#[test]
fn test_verbose_warns_about_empty_declarations() -> Result<()> {
    let test = CliTest::with_file(
        "src/ref.ts",
        "const shared = ['a'];\nexport const ROUTABLE_TARGETS = shared;\n",
    )?;

    let output = test.generate_command().arg("-v").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: /src/ref.ts declares routable targets"));

    Ok(())
}
