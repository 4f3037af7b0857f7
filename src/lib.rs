//! # mcp-tf-provider-docs: Provider documentation MCP Server
//!
//! Indexes a directory of Terraform/OpenTofu provider documentation by the
//! resource names found in each file, then serves the matching documents to
//! AI assistants via the Model Context Protocol (MCP).
//!
//! ## Architecture
//!
//! - **[`config`]**: YAML configuration loading and validation
//! - **[`indexer`]**: Token extraction and the documentation directory walk
//! - **[`index`]**: In-memory token → documents index (read-only once built)
//! - **[`lookup`]**: Fresh document reads, front-matter stripping, aggregation
//! - **[`frontmatter`]**: YAML/TOML/JSON front-matter detection and removal
//! - **[`mcp`]**: MCP server exposing `lookupProviderDocs` (stdio transport via rmcp)
//! - **[`error`]**: Index build and lookup error types

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod index;
pub mod indexer;
pub mod lookup;
pub mod mcp;
