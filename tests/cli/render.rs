use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

const T1_MODEL: &str = r#"
name: t1
columns:
  - { name: id, type: integer, primary_key: true }
  - { name: name, type: varchar(255), index: { unique: true } }
"#;

#[test]
fn test_render_model_file() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_model("t1.yaml", T1_MODEL)?;

    helper
        .command()
        .args(["render", "t1.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CREATE TABLE IF NOT EXISTS t1 (id INT NOT NULL, name VARCHAR(255) NOT NULL, CONSTRAINT PK_t1 PRIMARY KEY (id));",
        ))
        .stdout(predicate::str::contains(
            "CREATE UNIQUE INDEX IX_t1_name ON t1 (name);",
        ));

    Ok(())
}

#[test]
fn test_render_bound_defaults_listed() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_model(
        "t.yaml",
        r#"
name: t
columns:
  - { name: s, type: varchar(100), default: test }
  - { name: l, type: long, default: 42 }
"#,
    )?;

    helper
        .command()
        .args(["render", "t.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CREATE TABLE IF NOT EXISTS t (s VARCHAR(100) NOT NULL DEFAULT ?, l BIGINT NOT NULL DEFAULT 42);\n-- params: [\"test\"]",
        ));

    Ok(())
}

#[test]
fn test_render_directory_as_json_for_postgres() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_model("models/t1.yaml", T1_MODEL)?;
    helper.write_model("models/empty.yml", "name: test_named_table\n")?;

    let output = helper
        .command()
        .args(["render", "models", "--dialect", "postgres", "--quote", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    // Files are read in alphabetical order
    assert_eq!(value[0]["table"], "test_named_table");
    assert_eq!(
        value[0]["statements"][0]["sql"],
        "CREATE TABLE IF NOT EXISTS \"test_named_table\""
    );
    assert_eq!(
        value[1]["statements"][1]["sql"],
        "CREATE UNIQUE INDEX \"IX_t1_name\" ON \"t1\" (\"name\")"
    );

    Ok(())
}

#[test]
fn test_config_file_sets_dialect() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("dialect: postgres\nrender:\n  string_defaults: inline\n")?;
    helper.write_model(
        "t.yaml",
        "name: t\ncolumns:\n  - { name: s, type: text, default: test }\n",
    )?;

    helper
        .command()
        .args(["render", "t.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CREATE TABLE IF NOT EXISTS t (s TEXT NOT NULL DEFAULT 'test');",
        ));

    Ok(())
}

#[test]
fn test_render_error_exits_non_zero() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_model(
        "bad.yaml",
        "name: bad\ncolumns:\n  - { name: id, type: varchar(10), auto_increment: true }\n",
    )?;

    helper
        .command()
        .args(["render", "bad.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render table 'bad'"))
        .stderr(predicate::str::contains("auto-increment is not allowed"));

    Ok(())
}

#[test]
fn test_unnamed_model_is_rejected() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_model("anon.yaml", "columns:\n  - { name: id, type: integer }\n")?;

    helper
        .command()
        .args(["render", "anon.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("table has no name"));

    Ok(())
}
