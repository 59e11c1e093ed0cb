use clap::Parser;

/// Raw command-line input. Resolution against the environment happens in
/// [`crate::config::RuntimeConfig::resolve`].
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "linkup-mcp",
    version,
    about = "Linkup web search MCP server (stdio)",
    after_help = "Environment:\n  LINKUP_API_KEY         API key used when --api-key is not given\n  LINKUP_API_BASE_URL    API base URL used when --base-url is not given\n  LINKUP_MCP_LOG         tracing filter directive (default: warn,linkup_mcp=info)"
)]
pub struct CliArgs {
    /// Your Linkup API key (required unless LINKUP_API_KEY is set)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Custom API base URL (default: https://api.linkup.so/v1)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
