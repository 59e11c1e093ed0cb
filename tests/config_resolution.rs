use linkup_mcp::cli::CliArgs;
use linkup_mcp::config::{ConfigSource, EnvSnapshot, RuntimeConfig};
use linkup_mcp::constants::{
    DEFAULT_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_REQUEST_TIMEOUT_MS,
    ERROR_INVALID_CONFIG, MISSING_API_KEY_MESSAGE,
};
use linkup_mcp::error::AppError;
use serial_test::serial;

const KEY_A: &str = "6f1c8a2e-3b4d-4e5f-8a9b-0c1d2e3f4a5b";
const KEY_B: &str = "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d";

fn flags(api_key: Option<&str>, base_url: Option<&str>) -> CliArgs {
    CliArgs {
        api_key: api_key.map(str::to_string),
        base_url: base_url.map(str::to_string),
    }
}

fn violations(error: AppError) -> Vec<String> {
    match error {
        AppError::InvalidConfig { violations } => violations,
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn explicit_flags_win_over_environment() {
    let env = EnvSnapshot::from_iter([
        ("LINKUP_API_KEY", KEY_B),
        ("LINKUP_API_BASE_URL", "https://env.example.com/v1"),
    ]);

    let config = RuntimeConfig::resolve(
        &flags(Some(KEY_A), Some("https://flag.example.com/v1")),
        &env,
    )
    .expect("config should resolve");

    assert_eq!(config.api_key, KEY_A);
    assert_eq!(config.api_key_source, ConfigSource::Flag);
    assert_eq!(config.base_url, "https://flag.example.com/v1");
    assert_eq!(config.base_url_source, ConfigSource::Flag);
}

#[test]
fn environment_fills_in_missing_flags() {
    let env = EnvSnapshot::from_iter([
        ("LINKUP_API_KEY", KEY_B),
        ("LINKUP_API_BASE_URL", "http://localhost:8080/v1"),
    ]);

    let config = RuntimeConfig::resolve(&flags(None, None), &env).expect("config should resolve");

    assert_eq!(config.api_key, KEY_B);
    assert_eq!(config.api_key_source, ConfigSource::Env);
    assert_eq!(config.base_url, "http://localhost:8080/v1");
    assert_eq!(config.base_url_source, ConfigSource::Env);
}

#[test]
fn base_url_defaults_to_linkup_endpoint_exactly() {
    let config = RuntimeConfig::resolve(&flags(Some(KEY_A), None), &EnvSnapshot::default())
        .expect("config should resolve");

    assert_eq!(config.base_url, "https://api.linkup.so/v1");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.base_url_source, ConfigSource::Default);
}

#[test]
fn missing_api_key_names_both_remediation_paths() {
    let error = RuntimeConfig::resolve(&flags(None, None), &EnvSnapshot::default())
        .expect_err("missing key must fail");

    assert_eq!(error.code(), ERROR_INVALID_CONFIG);
    let message = error.to_string();
    assert_eq!(message, MISSING_API_KEY_MESSAGE);
    assert!(message.contains("--api-key"));
    assert!(message.contains("LINKUP_API_KEY"));
}

#[test]
fn blank_values_count_as_absent() {
    let env = EnvSnapshot::from_iter([("LINKUP_API_KEY", KEY_B), ("LINKUP_API_BASE_URL", "  ")]);

    let config =
        RuntimeConfig::resolve(&flags(Some("   "), Some("")), &env).expect("config should resolve");
    assert_eq!(config.api_key, KEY_B);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    let blank_everywhere = EnvSnapshot::from_iter([("LINKUP_API_KEY", "\t")]);
    let error = RuntimeConfig::resolve(&flags(Some(""), None), &blank_everywhere)
        .expect_err("blank key must fail");
    assert_eq!(violations(error), vec![MISSING_API_KEY_MESSAGE.to_string()]);
}

#[test]
fn values_are_trimmed() {
    let config = RuntimeConfig::resolve(
        &flags(Some(format!("  {KEY_A}\n").as_str()), Some(" https://api.example.com/v1 ")),
        &EnvSnapshot::default(),
    )
    .expect("config should resolve");

    assert_eq!(config.api_key, KEY_A);
    assert_eq!(config.base_url, "https://api.example.com/v1");
}

#[test]
fn invalid_base_url_flag_fails_validation() {
    let error = RuntimeConfig::resolve(
        &flags(Some(KEY_A), Some("not-a-url")),
        &EnvSnapshot::default(),
    )
    .expect_err("relative url must fail");

    let violations = violations(error);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("not-a-url"));
    assert!(violations[0].contains("absolute URL"));
}

#[test]
fn non_http_base_url_is_rejected() {
    let error = RuntimeConfig::resolve(
        &flags(Some(KEY_A), Some("ftp://files.example.com/v1")),
        &EnvSnapshot::default(),
    )
    .expect_err("ftp url must fail");

    assert!(error.to_string().contains("http(s)"));
}

#[test]
fn invalid_base_url_from_environment_is_reported() {
    let env = EnvSnapshot::from_iter([("LINKUP_API_BASE_URL", "linkup.so/v1")]);
    let error = RuntimeConfig::resolve(&flags(Some(KEY_A), None), &env)
        .expect_err("env url must be validated too");

    assert!(error.to_string().contains("linkup.so/v1"));
}

#[test]
fn all_violations_are_reported_together_in_field_order() {
    let error = RuntimeConfig::resolve(&flags(None, Some("not-a-url")), &EnvSnapshot::default())
        .expect_err("both rules must fail");

    let message = error.to_string();
    let parts = message.split('|').collect::<Vec<&str>>();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], MISSING_API_KEY_MESSAGE);
    assert!(parts[1].contains("not-a-url"));

    let details = error.details().expect("config errors carry details");
    assert_eq!(details["violations"].as_array().map(Vec::len), Some(2));
}

#[test]
fn tuning_knobs_use_defaults_and_floors() {
    let config = RuntimeConfig::resolve(&flags(Some(KEY_A), None), &EnvSnapshot::default())
        .expect("config should resolve");
    assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(config.max_response_bytes, DEFAULT_MAX_RESPONSE_BYTES);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

    let env = EnvSnapshot::from_iter([
        ("LINKUP_MCP_TIMEOUT_MS", "5"),
        ("LINKUP_MCP_MAX_RESPONSE_BYTES", "10"),
        ("LINKUP_MCP_LOG", "debug"),
    ]);
    let config =
        RuntimeConfig::resolve(&flags(Some(KEY_A), None), &env).expect("config should resolve");
    assert_eq!(config.request_timeout_ms, 100);
    assert_eq!(config.max_response_bytes, 1_024);
    assert_eq!(config.log_filter, "debug");

    let env = EnvSnapshot::from_iter([("LINKUP_MCP_TIMEOUT_MS", "soon")]);
    let config =
        RuntimeConfig::resolve(&flags(Some(KEY_A), None), &env).expect("config should resolve");
    assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn uuid_shape_check_is_advisory() {
    let config = RuntimeConfig::resolve(&flags(Some("not-a-uuid"), None), &EnvSnapshot::default())
        .expect("non-uuid keys still resolve");
    assert!(!config.api_key_looks_valid());

    let config = RuntimeConfig::resolve(&flags(Some(KEY_A), None), &EnvSnapshot::default())
        .expect("config should resolve");
    assert!(config.api_key_looks_valid());
}

#[test]
fn debug_output_redacts_api_key() {
    let config = RuntimeConfig::resolve(&flags(Some(KEY_A), None), &EnvSnapshot::default())
        .expect("config should resolve");

    let rendered = format!("{config:?}");
    assert!(!rendered.contains(KEY_A));
    assert!(rendered.contains("<redacted>"));
}

#[test]
#[serial]
fn capture_reads_process_environment() {
    temp_env::with_vars(
        [
            ("LINKUP_API_KEY", Some(KEY_B)),
            ("LINKUP_API_BASE_URL", None::<&str>),
        ],
        || {
            let config = RuntimeConfig::resolve(&flags(None, None), &EnvSnapshot::capture())
                .expect("config should resolve from the process env");
            assert_eq!(config.api_key, KEY_B);
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
        },
    );
}

#[test]
fn cli_parses_equals_and_space_forms() {
    use clap::Parser;

    let args = CliArgs::try_parse_from([
        "linkup-mcp",
        "--api-key=abc",
        "--base-url",
        "https://api.example.com/v1",
    ])
    .expect("flags should parse");
    assert_eq!(args.api_key.as_deref(), Some("abc"));
    assert_eq!(args.base_url.as_deref(), Some("https://api.example.com/v1"));

    let error = CliArgs::try_parse_from(["linkup-mcp", "--unknown=1"])
        .expect_err("unknown flags are rejected");
    assert!(error.use_stderr());

    let help = CliArgs::try_parse_from(["linkup-mcp", "-h"]).expect_err("help short-circuits");
    assert!(!help.use_stderr());
    assert!(help.to_string().contains("--api-key"));
}
