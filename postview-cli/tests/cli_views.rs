use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SNAPSHOT: &str = r#"{
  "entities": {
    "users": {
      "currentUserId": "u1",
      "profiles": {
        "u1": {"id": "u1", "username": "alice"},
        "u2": {"id": "u2", "username": "bob"}
      }
    },
    "posts": {
      "posts": {
        "a": {"id": "a", "channel_id": "1", "message": "hello"},
        "b": {"id": "b", "channel_id": "1"},
        "c": {"id": "c", "root_id": "a", "channel_id": "1", "message": "hi back"},
        "d": {"id": "d", "root_id": "b", "channel_id": "1"},
        "e": {"id": "e", "root_id": "a", "channel_id": "1"},
        "f": {"id": "f", "channel_id": "f"}
      },
      "postsInChannel": {"1": ["a", "b", "c", "d", "e", "f"]},
      "reactions": {
        "a": {
          "u2-smile": {"user_id": "u2", "emoji_name": "smile"},
          "ghost-+1": {"user_id": "ghost", "emoji_name": "+1"},
          "u1-+1": {"user_id": "u1", "emoji_name": "+1"}
        }
      }
    },
    "files": {
      "files": {"file1": {"id": "file1", "name": "notes.txt"}},
      "fileIdsByPostId": {"c": ["file1"]}
    }
  }
}"#;

fn write_snapshot(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(dir.join("state.json"), SNAPSHOT)?;
    fs::write(dir.join("postview.yml"), "snapshot: state.json\n")?;
    Ok(())
}

fn postview(dir: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("postview")?;
    cmd.current_dir(dir);
    Ok(cmd)
}

#[test]
fn thread_json_lists_posts_in_channel_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_snapshot(dir.path())?;

    let assert = postview(dir.path())?
        .args(["thread", "--channel", "1", "--root", "a", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let ids: Vec<_> = value["posts"]
        .as_array()
        .expect("posts array")
        .iter()
        .map(|p| p["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "c", "e"]);
    assert_eq!(value["posts"][1]["message"], "hi back");

    Ok(())
}

#[test]
fn thread_text_marks_root() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_snapshot(dir.path())?;

    postview(dir.path())?
        .args(["thread", "--channel", "1", "--root", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* a: hello"))
        .stdout(predicate::str::contains("- c: hi back"));

    Ok(())
}

#[test]
fn unknown_thread_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_snapshot(dir.path())?;

    postview(dir.path())?
        .args(["thread", "--channel", "9", "--root", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found"));

    Ok(())
}

#[test]
fn reactions_with_profiles_skip_unknown_users() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_snapshot(dir.path())?;

    let assert = postview(dir.path())?
        .args(["reactions", "--post", "a", "--with-profiles", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["reactions"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["reactions"][0]["emoji_name"], "smile");

    let users: Vec<_> = value["profiles"]
        .as_array()
        .expect("profiles array")
        .iter()
        .map(|p| p["username"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(users, vec!["bob", "alice"]);

    Ok(())
}

#[test]
fn files_text_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_snapshot(dir.path())?;

    postview(dir.path())?
        .args(["files", "--post", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt (file1)"));

    Ok(())
}

#[test]
fn stats_reports_hits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_snapshot(dir.path())?;

    let assert = postview(dir.path())?
        .args(["stats", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let thread = value
        .as_array()
        .expect("metrics array")
        .iter()
        .find(|m| m["selector_name"] == "posts_for_thread")
        .expect("thread metrics");
    // Roots a, b, f in channel 1, each selected twice
    assert_eq!(thread["misses"], 3);
    assert_eq!(thread["hits"], 3);

    Ok(())
}

#[test]
fn snapshot_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("other.json"), SNAPSHOT)?;

    postview(dir.path())?
        .args(["--snapshot", "other.json", "files", "--post", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"));

    Ok(())
}

#[test]
fn missing_snapshot_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    postview(dir.path())?
        .args(["thread", "--channel", "1", "--root", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No snapshot configured"));

    Ok(())
}

#[test]
fn malformed_snapshot_fails_loudly() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("state.json"), r#"{"entities": {"users": {"profiles": {}}}}"#)?;
    fs::write(dir.path().join("postview.yml"), "snapshot: state.json\n")?;

    postview(dir.path())?
        .args(["thread", "--channel", "1", "--root", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed state"));

    Ok(())
}
