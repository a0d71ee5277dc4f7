use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_list_records() -> Result<()> {
    let test = CliTest::with_file(
        "src/orders.ts",
        r#"
      @Routable({ match: ['orders', /^orders\.\d+$/], matchTarget: 'name-chain' })
      export class OrdersController {}
    "#,
    )?;

    let output = test.list_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "/src/orders.ts  [name-chain] \"orders\", /^orders\\.\\d+$/\n"
    );
    assert!(stderr(&output).contains("Found 1 routable file in 1 scanned file"));

    Ok(())
}

#[test]
fn test_list_json() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.ts",
        "export const ROUTABLE_TARGETS = { match: ['a', /b/i], matchTarget: 'name' };",
    )?;

    let output = test.list_command().arg("--json").output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        json!([{
            "match": [
                { "kind": "literal", "text": "a" },
                { "kind": "regex", "source": "b", "flags": "i" }
            ],
            "path": "/src/a.ts",
            "matchTarget": "name"
        }])
    );

    Ok(())
}

#[test]
fn test_list_multiple_paths_in_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("pages/p.ts", "export const ROUTABLE_TARGETS = ['p'];")?;
    test.write_file("controllers/c.ts", "export const ROUTABLE_TARGETS = ['c'];")?;

    let output = test
        .list_command()
        .args(["--json", "--paths", "controllers,pages"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    let paths: Vec<&str> = parsed
        .as_array()
        .map(|records| records.iter().filter_map(|r| r["path"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(paths, vec!["/controllers/c.ts", "/pages/p.ts"]);

    Ok(())
}

#[test]
fn test_list_rejects_absolute_paths() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.list_command().args(["--paths", "/etc"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must be relative"));

    Ok(())
}
