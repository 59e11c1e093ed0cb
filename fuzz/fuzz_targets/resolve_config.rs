#![no_main]

use libfuzzer_sys::fuzz_target;
use linkup_mcp::cli::CliArgs;
use linkup_mcp::config::{EnvSnapshot, RuntimeConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = text.splitn(3, '\n');
    let api_key = parts.next().map(str::to_string);
    let base_url = parts.next().map(str::to_string);
    let env = EnvSnapshot::from_iter([("LINKUP_API_BASE_URL", parts.next().unwrap_or_default())]);

    let args = CliArgs { api_key, base_url };
    if let Ok(config) = RuntimeConfig::resolve(&args, &env) {
        assert!(!config.api_key.trim().is_empty());
        assert!(url::Url::parse(&config.base_url).is_ok());
    }
});
