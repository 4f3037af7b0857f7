/// MCP tool handler for provider documentation lookup.
///
/// Exposes a single tool, `lookupProviderDocs`, whose description comes from
/// the config file. Every lookup failure is reported as a tool error result
/// (`isError: true`), never as a protocol error.
use crate::error::LookupError;
use crate::lookup;
use crate::mcp::server::{McpContext, SERVER_NAME};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::service::RequestContext;
use rmcp::{
    ErrorData as McpError, RoleServer, handler::server::tool::ToolRouter, model::*, tool,
    tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Tool name as registered with MCP clients.
pub const LOOKUP_TOOL_NAME: &str = "lookupProviderDocs";

// ── Parameter structs ────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupParams {
    /// Fully qualified Terraform/Tofu resource or data source name (e.g., google_compute_instance).
    pub provider_name: String,
}

impl LookupParams {
    /// Decode raw tool arguments. A missing or non-string `provider_name` is
    /// a malformed request, reported separately from "not found".
    pub fn from_arguments(args: JsonObject) -> Result<Self, LookupError> {
        serde_json::from_value(serde_json::Value::Object(args))
            .map_err(|_| LookupError::InvalidArgument)
    }

    /// JSON schema advertised as the tool's input schema.
    fn input_schema() -> Arc<JsonObject> {
        match serde_json::to_value(schemars::schema_for!(LookupParams)) {
            Ok(serde_json::Value::Object(map)) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }
}

// ── Response helpers ─────────────────────────────────────────────────

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn error_result(msg: &str) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg.to_string())]))
}

// ── Tool implementations ─────────────────────────────────────────────

#[derive(Clone)]
pub struct AppTools {
    pub ctx: McpContext,
    pub tool_router: ToolRouter<Self>,
}

impl ServerHandler for AppTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(format!(
                "Call {LOOKUP_TOOL_NAME} with a resource or data source name to read its documentation."
            )),
            ..Default::default()
        }
    }
}

#[tool_router]
impl AppTools {
    pub fn new(ctx: McpContext) -> Self {
        let mut tool_router = Self::tool_router();

        // Description is configured per deployment; arguments are validated by
        // the handler, so the advertised schema is set here.
        if let Some(route) = tool_router.map.get_mut(LOOKUP_TOOL_NAME) {
            route.attr.description = Some(ctx.config.tool_description.clone().into());
            route.attr.input_schema = LookupParams::input_schema();
        }

        Self { ctx, tool_router }
    }

    #[tool(
        name = "lookupProviderDocs",
        description = "Look up provider documentation by resource or data source name"
    )]
    async fn lookup_provider_docs(
        &self,
        params: Parameters<JsonObject>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.handle_lookup(params.0, &context.ct).await
    }
}

impl AppTools {
    /// Run a lookup for raw tool arguments and turn the outcome into a tool result.
    pub async fn handle_lookup(
        &self,
        args: JsonObject,
        cancel: &CancellationToken,
    ) -> Result<CallToolResult, McpError> {
        let params = match LookupParams::from_arguments(args) {
            Ok(p) => p,
            Err(e) => {
                warn!("{LOOKUP_TOOL_NAME}: {e}");
                return error_result(&e.to_string());
            }
        };

        match lookup::lookup(&self.ctx.index, &params.provider_name, cancel).await {
            Ok(docs) => {
                info!(
                    "{LOOKUP_TOOL_NAME}: '{}' -> {} bytes",
                    params.provider_name,
                    docs.len()
                );
                text_result(docs)
            }
            Err(e) => {
                warn!("{LOOKUP_TOOL_NAME}: {e}");
                error_result(&e.to_string())
            }
        }
    }
}
