use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_resolve_virtual_module() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["resolve", "virtual:vue3-routable-manifest"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\\0virtual:vue3-routable-manifest\n");

    Ok(())
}

#[test]
fn test_resolve_other_id() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["resolve", "./src/main.ts"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("is not the routable manifest module"));

    Ok(())
}
