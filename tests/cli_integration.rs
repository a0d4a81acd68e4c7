// ABOUTME: Runs the traduora-sync binary with piped output
// ABOUTME: Checks progress lines and exit codes as a CI job would see them

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_traduora-sync"))
}

async fn mock_traduora() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "test_token"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/proj-1/translations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"locale": {"code": "en", "language": "English"}},
                {"locale": {"code": "fr", "language": "French"}}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/proj-1/exports"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"key\" = \"value\";"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects/proj-1/exports"))
        .and(query_param("locale", "fr"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    server
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn test_piped_output_keeps_per_locale_lines() {
    let mock_server = mock_traduora().await;

    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join(".env");
    let output_dir = temp.path().join("Resources");
    fs::write(
        &config_path,
        format!(
            "TRADUORA_BASE_URL={}\n\
             TRADUORA_EMAIL=ci@example.com\n\
             TRADUORA_PASSWORD=secret\n\
             PROJECT_ID=proj-1\n\
             LOCALIZATION_PATH={}\n\
             TARGET_LOCALES=en,fr\n",
            mock_server.uri(),
            output_dir.display()
        ),
    )
    .unwrap();

    let output = tokio::task::spawn_blocking(move || {
        bin().arg("--config").arg(&config_path).output().unwrap()
    })
    .await
    .unwrap();

    let out = stdout(&output);
    let err = stderr(&output);
    assert!(output.status.success(), "stdout: {}\nstderr: {}", out, err);

    assert!(out.contains("[download] en: downloading"), "{}", out);
    assert!(out.contains("[mkdir] en: using"), "{}", out);
    assert!(out.contains("[save] en: saved"), "{}", out);
    assert!(out.contains("[download] fr: downloading"), "{}", out);
    assert!(err.contains("[error] fr:"), "{}", err);
    assert!(out.contains("synced 1 of 2 locales (1 failed)"), "{}", out);
    assert!(!err.contains("secret"), "{}", err);

    assert_eq!(
        fs::read_to_string(output_dir.join("en.lproj").join("Localizable.strings")).unwrap(),
        "\"key\" = \"value\";"
    );
}

#[test]
fn test_missing_config_prints_guidance_and_fails() {
    let temp = TempDir::new().unwrap();

    let output = bin()
        .arg("--config")
        .arg(temp.path().join(".env"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("configuration file not found"), "{}", err);
    assert!(err.contains("TARGET_LOCALES"), "{}", err);
}
