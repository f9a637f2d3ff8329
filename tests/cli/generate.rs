use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, OUTPUT_FILE, stderr, stdout};

const HEADER: &str = r#"msgid ""
msgstr ""
"Project-Id-Version: gopot\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8-bit\n"
"#;

fn scene_and_resource() -> Result<CliTest> {
    let test = CliTest::project()?;
    test.write_file(
        "scene.tscn",
        r#"[gd_scene format=3]

[node name="Title" type="Label" parent="."]
text = "_Hello"

[node name="Start" type="Button" parent="."]
tooltip = "_Hi"
"#,
    )?;
    test.write_file(
        "ui/other.tres",
        r#"[gd_resource type="Resource" format=3]

[resource]
label = "_Hello"
hint_label = "_Bye"
"#,
    )?;
    Ok(test)
}

#[test]
fn test_generate_catalog() -> Result<()> {
    let test = scene_and_resource()?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} POT file generated successfully\nGenerated 3 entries\n"
    );
    assert_eq!(
        test.read_catalog()?,
        format!(
            "{}{}",
            HEADER,
            r#"
#: scene.tscn
msgid "_Hello"
msgstr ""

msgid "_Hi"
msgstr ""


#: ui/other.tres
msgid "_Bye"
msgstr ""

"#
        )
    );

    Ok(())
}

#[test]
fn test_verbose_lists_entries() -> Result<()> {
    let test = scene_and_resource()?;

    let output = test.generate_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "scene.tscn: 2 entries\n- _Hello\n- _Hi\nui/other.tres: 1 entry\n- _Bye\n\
         \u{2713} POT file generated successfully\nGenerated 3 entries\n"
    );
    assert!(stderr(&output).contains("No .gopotrc.json found"));

    Ok(())
}

#[test]
fn test_missing_project_file_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("scene.tscn", "text = \"_Hello\"\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("project.godot not found"));
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_missing_project_file_keeps_previous_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(OUTPUT_FILE, "previous")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_catalog()?, "previous");

    Ok(())
}

#[test]
fn test_unmarked_value_is_skipped() -> Result<()> {
    let test = CliTest::project()?;
    test.write_file("menu.tscn", "text = \"Greeting\"\n")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Generated 0 entries"));
    assert_eq!(test.read_catalog()?, HEADER);

    Ok(())
}

#[test]
fn test_custom_types_and_fields() -> Result<()> {
    let test = CliTest::project()?;
    test.write_file("dialog.scn.txt", "title = \"_Quest\"\ntext = \"_Ignored\"\n")?;
    test.write_file("main.tscn", "title = \"_Skipped\"\n")?;

    let output = test
        .generate_command()
        .args(["-t", "TXT", "-f", "title"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_catalog()?,
        format!("{}\n#: dialog.scn.txt\nmsgid \"_Quest\"\nmsgstr \"\"\n\n", HEADER)
    );

    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::project()?;
    test.write_file(
        ".gopotrc.json",
        r#"{ "fields": ["title"], "ignores": ["addons/**"] }"#,
    )?;
    test.write_file("main.tscn", "title = \"_Main\"\ntext = \"_Text\"\n")?;
    test.write_file("addons/plugin/panel.tscn", "title = \"_Plugin\"\n")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_catalog()?,
        format!("{}\n#: main.tscn\nmsgid \"_Main\"\nmsgstr \"\"\n\n", HEADER)
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::project()?;
    test.write_file(".gopotrc.json", "{ nope")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid configuration"));

    Ok(())
}

#[test]
fn test_unreadable_file_aborts() -> Result<()> {
    let test = CliTest::project()?;
    std::fs::write(test.root().join("broken.tscn"), [0xff, 0xfe, b'\n'])?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("broken.tscn"));
    assert!(!test.root().join(OUTPUT_FILE).exists());

    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let test = scene_and_resource()?;

    test.generate_command().output()?;
    let first = test.read_catalog()?;
    test.generate_command().output()?;
    let second = test.read_catalog()?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_missing_arguments_show_usage() -> Result<()> {
    let test = CliTest::project()?;

    let output = test.command().output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("--input"));

    Ok(())
}
