/// MCP transport: stdio server and the `lookupProviderDocs` tool.
pub mod server;
pub mod tools;
