mod common;

use common::TestEnv;

#[test]
fn missing_api_key_fails_before_any_request() {
    let env = TestEnv::new();
    let output = env.run(&["talk.mp3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "run without an API key should fail\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn missing_audio_file_is_reported() {
    let env = TestEnv::new();
    let output = env.run(&["does-not-exist.mp3", "--api-key", "sk-test"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Not found") && stderr.contains("does-not-exist.mp3"),
        "expected not found error, got:\n{}",
        stderr
    );
}

#[test]
fn api_key_is_read_from_environment() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args(["does-not-exist.mp3"])
        .env("SILICONFLOW_API_KEY", "sk-from-env")
        .output()
        .expect("failed to execute asr-summary");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(!stderr.contains("API key is missing"), "stderr:\n{}", stderr);
    assert!(stderr.contains("Not found"), "stderr:\n{}", stderr);
}

#[test]
fn api_key_is_read_from_config_file() {
    let env = TestEnv::new();
    env.write_config("[api]\napi_key = \"sk-from-file\"\n");

    let output = env.run(&["does-not-exist.mp3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(!stderr.contains("API key is missing"), "stderr:\n{}", stderr);
}

#[test]
fn unknown_summary_type_is_rejected() {
    let env = TestEnv::new();
    let output = env.run(&["talk.mp3", "--summary-type", "essay"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid value"), "stderr:\n{}", stderr);
}

#[test]
fn batch_on_missing_folder_fails() {
    let env = TestEnv::new();
    let output = env.run(&["no-such-folder", "--batch", "--api-key", "sk-test"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Not found"), "stderr:\n{}", stderr);
}

#[test]
fn batch_without_audio_files_writes_empty_report() {
    let env = TestEnv::new();
    let folder = env.work_dir().join("recordings");
    std::fs::create_dir(&folder).expect("create folder");
    std::fs::write(folder.join("notes.txt"), "not audio").expect("write file");

    let report = env.work_dir().join("report.txt");
    let output = env.run(&[
        folder.to_str().unwrap(),
        "--batch",
        "--api-key",
        "sk-test",
        "-o",
        report.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "empty batch should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Processed 0 files"));
    assert!(stdout.contains("Results saved to"));
    assert_eq!(std::fs::read_to_string(&report).expect("read report"), "");
}

#[test]
fn directory_without_batch_flag_is_rejected() {
    let env = TestEnv::new();
    let output = env.run(&[env.work_dir().to_str().unwrap(), "--api-key", "sk-test"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("--batch"), "stderr:\n{}", stderr);
}
