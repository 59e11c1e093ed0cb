pub const API_VERSION: &str = "v1";
pub const PROVIDER_NAME: &str = "linkup";
pub const SERVER_NAME: &str = "linkup-mcp";

pub const TOOL_SEARCH_WEB: &str = "search-web";

pub const DEFAULT_BASE_URL: &str = "https://api.linkup.so/v1";
pub const SEARCH_PATH: &str = "search";
pub const OUTPUT_TYPE_SEARCH_RESULTS: &str = "searchResults";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const MIN_REQUEST_TIMEOUT_MS: u64 = 100;
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 8 * 1_048_576;
pub const MIN_MAX_RESPONSE_BYTES: usize = 1_024;
pub const DEFAULT_LOG_FILTER: &str = "warn,linkup_mcp=info";

pub const ENV_API_KEY: &str = "LINKUP_API_KEY";
pub const ENV_API_BASE_URL: &str = "LINKUP_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "LINKUP_MCP_TIMEOUT_MS";
pub const ENV_MAX_RESPONSE_BYTES: &str = "LINKUP_MCP_MAX_RESPONSE_BYTES";
pub const ENV_LOG: &str = "LINKUP_MCP_LOG";

pub const ERROR_INVALID_CONFIG: &str = "INVALID_CONFIG";
pub const ERROR_INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const ERROR_CANCELLED: &str = "CANCELLED";
pub const ERROR_UPSTREAM: &str = "UPSTREAM_ERROR";
pub const ERROR_PARSE: &str = "PARSE_ERROR";
pub const ERROR_TRANSPORT: &str = "TRANSPORT_ERROR";
pub const ERROR_INTERNAL: &str = "INTERNAL_ERROR";

pub const MISSING_API_KEY_MESSAGE: &str = "Linkup API key not provided. Please either pass it as an argument --api-key=$KEY or set the LINKUP_API_KEY environment variable.";

pub const SEARCH_WEB_DESCRIPTION: &str = "A team member that will search the internet to answer your question. Ask it all your questions that require browsing the web. \
Note that this agent is using a powerful language model and it can do the search and analyse the results. \
Ask questions in a way that lets the language model perform best: provide as much context as possible and ask in a clear way, in particular if you need to search on a specific timeframe. \
Don't hesitate to hand it a complex search task, like finding a difference between two webpages. \
Your request must be a real sentence, not a google search! Like \"Find me this information (...)\" rather than a few keywords.";

pub const QUERY_DESCRIPTION: &str =
    "The natural-language question to research. Write a full sentence with context, not a list of keywords.";

pub const DEPTH_DESCRIPTION: &str = "Search depth. Use \"standard\" for direct questions that a quick search can answer; it is fast and cheap. \
Use \"deep\" only for multi-hop, ambiguous, or jargon-heavy questions that need comprehensive research; it is slower and more expensive.";

pub const SERVER_INSTRUCTIONS: &str = "Use search-web whenever a question needs fresh information from the web. Prefer depth=standard and switch to depth=deep only for multi-hop, ambiguous, or jargon-heavy research.";
