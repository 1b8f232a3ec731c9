use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_config_sprite_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".joisrc.json", r#"{ "spritePath": "static/sprite.svg" }"#)?;
    test.write_file(
        "static/sprite.svg",
        r#"<svg><symbol id="home"/><symbol id="star"/></svg>"#,
    )?;
    test.write_file("src/App.tsx", r#"export const App = () => <Icon id="star" />;"#)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Unused icons found:
    - home

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_cli_svg_path_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".joisrc.json", r#"{ "spritePath": "missing.svg" }"#)?;
    test.write_file("icons.svg", r#"<svg><symbol id="home"/></svg>"#)?;
    test.write_file("src/App.tsx", r#"export const App = () => <Icon id="home" />;"#)?;

    assert_cmd_snapshot!(test.command().args(["-s", "icons.svg"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    No unused icons found!

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_component_and_attribute() -> Result<()> {
    let test = CliTest::with_sprite()?;
    test.write_file(
        ".joisrc.json",
        r#"{ "componentName": "SpriteIcon", "idAttribute": "name" }"#,
    )?;
    test.write_file(
        "src/App.tsx",
        r#"
  export const App = ({ on }: { on: boolean }) => (
      <>
          <SpriteIcon name={on ? "home" : "search"} />
          <Icon id="trash" />
      </>
  );
  "#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Unused icons found:
    - trash

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_includes_and_ignores() -> Result<()> {
    let test = CliTest::with_sprite()?;
    test.write_file(
        ".joisrc.json",
        r#"{ "includes": ["**/*.js"], "ignores": ["**/stories/**"] }"#,
    )?;
    test.write_file("src/home.js", r#"export const A = () => <Icon id="home" />;"#)?;
    test.write_file(
        "src/stories/Search.stories.tsx",
        r#"export const S = () => <Icon id="search" />;"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Unused icons found:
    - search
    - trash

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_sprite()?;
    test.write_file(".joisrc.json", r#"{ "componentName": "" }"#)?;

    let output = test.command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("'componentName' must not be empty"));

    Ok(())
}
