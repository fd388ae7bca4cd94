//! End-to-end tests of `run_check` against a local mock server.

use std::io::Write;
use std::path::{Path, PathBuf};

use js_status::{run_check, Config, InputError, LogFormat, LogLevel};
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_lines(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

fn create_test_config(input: PathBuf, out: &Path) -> Config {
    Config {
        input,
        timeout: 5,
        workers: 4,
        retries: 0,
        backoff: 0.0,
        check_js_header: false,
        download: false,
        out_dir: out.join("downloads"),
        csv: out.join("report.csv"),
        active_out: out.join("active.txt"),
        inactive_out: out.join("inactive.txt"),
        user_agent: "js_status_test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}

async fn mount_fixtures(server: &MockServer) {
    Mock::given(method("HEAD"))
        .and(path("/ok.js"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("content-type", "application/javascript"),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok.js"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("ok();", "application/javascript"),
        )
        .mount(server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/gone.js"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone.js"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_run_check_writes_all_artifacts() {
    let server = MockServer::start().await;
    mount_fixtures(&server).await;

    let ok = format!("{}/ok.js", server.uri());
    let gone = format!("{}/gone.js", server.uri());
    let input = write_lines(&[
        "# scripts from crawl".to_string(),
        ok.clone(),
        String::new(),
        gone.clone(),
        format!("  {ok}  "),
    ]);
    let out = TempDir::new().expect("temp dir");
    let config = create_test_config(input.path().to_path_buf(), out.path());

    let report = run_check(config).await.expect("run_check should succeed");

    assert_eq!(report.total_urls, 2, "duplicates are checked once");
    assert_eq!(report.active, 1);
    assert_eq!(report.inactive, 1);
    assert_eq!(report.downloaded, 0);

    let active = std::fs::read_to_string(out.path().join("active.txt")).expect("active list");
    assert_eq!(active, format!("{ok}\n"));
    let inactive =
        std::fs::read_to_string(out.path().join("inactive.txt")).expect("inactive list");
    assert_eq!(inactive, format!("{gone}\n"));

    let mut reader = csv::Reader::from_path(out.path().join("report.csv")).expect("csv");
    let mut rows: Vec<csv::StringRecord> =
        reader.records().collect::<Result<_, _>>().expect("rows");
    rows.sort_by(|a, b| a[0].cmp(&b[0]));
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], gone);
    assert_eq!(&rows[0][1], "false");
    assert_eq!(&rows[0][2], "404");
    assert_eq!(&rows[1][0], ok);
    assert_eq!(&rows[1][1], "true");
    assert_eq!(&rows[1][2], "200");
    assert_eq!(&rows[1][3], "application/javascript");

    assert!(!out.path().join("downloads").exists(), "nothing downloaded without --download");
}

#[tokio::test]
async fn test_run_check_downloads_active_scripts() {
    let server = MockServer::start().await;
    mount_fixtures(&server).await;

    let input = write_lines(&[
        format!("{}/ok.js", server.uri()),
        format!("{}/gone.js", server.uri()),
    ]);
    let out = TempDir::new().expect("temp dir");
    let config = Config {
        download: true,
        ..create_test_config(input.path().to_path_buf(), out.path())
    };

    let report = run_check(config).await.expect("run_check should succeed");

    assert_eq!(report.downloaded, 1);
    assert_eq!(report.download_failures, 0);
    let script = std::fs::read(out.path().join("downloads").join("ok.js")).expect("script");
    assert_eq!(script, b"ok();");
}

#[tokio::test]
async fn test_run_check_empty_input_writes_nothing() {
    let input = write_lines(&["# nothing here".to_string(), "   ".to_string()]);
    let out = TempDir::new().expect("temp dir");
    let config = create_test_config(input.path().to_path_buf(), out.path());

    let report = run_check(config).await.expect("empty input is not an error");

    assert_eq!(report.total_urls, 0);
    assert!(!out.path().join("report.csv").exists());
    assert!(!out.path().join("active.txt").exists());
    assert!(!out.path().join("inactive.txt").exists());
}

#[tokio::test]
async fn test_run_check_missing_input() {
    let out = TempDir::new().expect("temp dir");
    let missing = out.path().join("missing.txt");
    let config = create_test_config(missing.clone(), out.path());

    let err = run_check(config).await.expect_err("missing input must fail");

    match err.downcast_ref::<InputError>() {
        Some(InputError::NotFound(path)) => assert_eq!(path, &missing),
        other => panic!("expected InputError::NotFound, got {other:?}"),
    }
    assert!(!out.path().join("report.csv").exists());
}
