use clap::Parser;
use linkup_mcp::cli::CliArgs;
use linkup_mcp::config::{EnvSnapshot, RuntimeConfig};
use linkup_mcp::error::AppError;
use linkup_mcp::mcp_server::LinkupMcpServer;
use linkup_mcp::service::SearchService;
use mcpkit::ServerBuilder;
use mcpkit::transport::stdio::StdioTransport;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            // --help and --version land here too and are not failures.
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Fatal error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<(), AppError> {
    let config = RuntimeConfig::resolve(&args, &EnvSnapshot::capture())?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.clone())
        .with_writer(std::io::stderr)
        .init();

    if !config.api_key_looks_valid() {
        tracing::warn!(
            source = config.api_key_source.as_str(),
            "API key must be an uuid. Linkup will likely reject requests with this key"
        );
    }

    let service = SearchService::new(config)?;
    tracing::info!(
        endpoint = service.endpoint(),
        api_key_source = service.config().api_key_source.as_str(),
        base_url_source = service.config().base_url_source.as_str(),
        version = service.server_version(),
        "starting linkup-mcp over stdio"
    );

    let handler = LinkupMcpServer::new(service);
    let server = ServerBuilder::new(handler.clone())
        .with_tools(handler)
        .build();
    server
        .serve(StdioTransport::new())
        .await
        .map_err(|error| AppError::Transport(error.to_string()))
}
