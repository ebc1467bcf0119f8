//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

fn reavital() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in [
        "REAVITAL_LOG_LEVEL",
        "REAVITAL_STATE_FILE",
        "REAVITAL_DEFAULT_LANG",
        "REAVITAL_AUTO_ADVANCE_MS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_site(dir: &Path) -> PathBuf {
    let path = dir.join("index.html");
    fs::write(&path, common::SITE_HTML).unwrap();
    path
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
mod passing {
    use std::fs;

    use super::*;

    #[test]
    fn renders_default_language() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        let html = stdout_of(reavital().arg(&input).arg("--no-state"));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Tu bienestar es lo primero"));
        assert!(html.contains(r#"<div class="gallery-slide active" id="slide-0">"#));
    }

    #[test]
    fn lang_flag_translates_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        let html = stdout_of(reavital().arg(&input).args(["--no-state", "--lang", "en"]));

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("Your wellbeing comes first"));
        assert!(html.contains(r#"alt="Massage room""#));
        // The feedback fade has finished by the time the page is written
        assert!(html.contains(r#"<body style="opacity: 1;">"#));
    }

    #[test]
    fn locale_flag_picks_language() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        let html = stdout_of(reavital().arg(&input).args(["--no-state", "--locale", "en-GB"]));

        assert!(html.contains("Welcome to <strong>ReaVital</strong>"));
    }

    #[test]
    fn reads_stdin() {
        let html = stdout_of(
            reavital()
                .args(["-", "--no-state", "--lang", "en"])
                .write_stdin(common::SITE_HTML),
        );

        assert!(html.contains("ReaVital Massages"));
    }

    #[test]
    fn state_file_persists_preference() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());
        let state = dir.path().join("state").join("storage.json");

        reavital()
            .arg(&input)
            .arg("--state")
            .arg(&state)
            .args(["--lang", "en"])
            .assert()
            .success();

        let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&state).unwrap()).unwrap();
        assert_eq!(saved["preferredLanguage"], "en");

        let html = stdout_of(reavital().arg(&input).arg("--state").arg(&state));
        assert!(html.contains("Your wellbeing comes first"));
    }

    #[test]
    fn state_file_from_environment() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());
        let state = dir.path().join("env-state.json");

        reavital()
            .arg(&input)
            .args(["--lang", "en"])
            .env("REAVITAL_STATE_FILE", &state)
            .assert()
            .success();

        assert!(fs::read_to_string(&state).unwrap().contains("preferredLanguage"));
    }

    #[test]
    fn output_flag_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());
        let output = dir.path().join("out.html");

        let stdout = stdout_of(reavital().arg(&input).arg("--no-state").arg("-o").arg(&output));

        assert!(stdout.is_empty());
        assert!(fs::read_to_string(&output).unwrap().contains("Masajes ReaVital"));
    }

    #[test]
    fn advance_moves_carousel() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        let html = stdout_of(reavital().arg(&input).args(["--no-state", "--advance-ms", "10000"]));

        assert!(html.contains(r#"<div class="gallery-slide active" id="slide-2">"#));
    }

    #[test]
    fn config_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());
        let config = dir.path().join("site.toml");
        fs::write(&config, "[carousel]\nauto_advance_ms = 1000\n").unwrap();

        let html = stdout_of(
            reavital()
                .arg(&input)
                .arg("--no-state")
                .arg("--config")
                .arg(&config)
                .args(["--advance-ms", "1000"]),
        );

        assert!(html.contains(r#"<div class="gallery-slide active" id="slide-1">"#));
    }

    #[test]
    fn help_env_lists_variables() {
        let text = stdout_of(reavital().arg("--help-env"));

        assert!(text.contains("REAVITAL_LOG_LEVEL"));
        assert!(text.contains("REAVITAL_STATE_FILE"));
        assert!(text.contains("REAVITAL_DEFAULT_LANG"));
        assert!(text.contains("REAVITAL_AUTO_ADVANCE_MS"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use std::fs;

    use super::*;

    #[test]
    fn unsupported_lang_flag() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        reavital()
            .arg(&input)
            .args(["--no-state", "--lang", "fr"])
            .assert()
            .failure();
    }

    #[test]
    fn missing_input_argument() {
        reavital().arg("--no-state").assert().failure();
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();

        reavital()
            .arg(dir.path().join("nope.html"))
            .arg("--no-state")
            .assert()
            .failure();
    }

    #[test]
    fn invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());
        let config = dir.path().join("site.toml");
        fs::write(&config, "[i18n]\nlanguages = []\n").unwrap();

        reavital()
            .arg(&input)
            .arg("--no-state")
            .arg("--config")
            .arg(&config)
            .assert()
            .failure();
    }

    #[test]
    fn out_of_range_environment_override() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        reavital()
            .arg(&input)
            .arg("--no-state")
            .env("REAVITAL_AUTO_ADVANCE_MS", "5")
            .assert()
            .failure();
    }

    #[test]
    fn invalid_log_level_environment() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        let output = reavital()
            .arg(&input)
            .arg("--no-state")
            .env("REAVITAL_LOG_LEVEL", "loud")
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        assert!(String::from_utf8_lossy(&output).contains("REAVITAL_LOG_LEVEL"));
    }

    #[test]
    fn corrupt_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());
        let state = dir.path().join("storage.json");
        fs::write(&state, "not json").unwrap();

        reavital().arg(&input).arg("--state").arg(&state).assert().failure();
    }

    #[test]
    fn state_and_no_state_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_site(dir.path());

        reavital()
            .arg(&input)
            .arg("--no-state")
            .arg("--state")
            .arg(dir.path().join("s.json"))
            .assert()
            .failure();
    }
}
