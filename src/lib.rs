//! Memer: a chat-bot command dispatcher.
//!
//! Inbound messages from a messaging gateway are resolved to registered
//! commands, passed through a fixed gate sequence and executed on their own
//! tasks, isolated from one another. Handlers reach a small set of shared
//! components through their invocation context: per-tenant feed cursors,
//! the per-tenant voice session, and tenant configuration.
//!
//! # Architecture
//!
//! Each subsystem follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and errors with no infrastructure dependencies
//! - **Ports**: Trait contracts for collaborators and shared components
//! - **Adapters**: In-memory and console implementations of the ports
//! - **Services**: Orchestration built on the ports
//!
//! # Modules
//!
//! - [`gateway`]: Messaging-gateway contract and message types
//! - [`command`]: Command descriptors, handler contract and registry
//! - [`tenant`]: Tenant configuration and the block list
//! - [`cooldown`]: Per-user command cooldowns
//! - [`rotation`]: Per-tenant feed cursors
//! - [`audio`]: Per-tenant voice sessions
//! - [`dispatch`]: The dispatcher, gate sequence and execution supervisor
//! - [`handlers`]: Built-in command handlers
//! - [`config`]: Layered configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod audio;
pub mod command;
pub mod config;
pub mod cooldown;
pub mod dispatch;
pub mod gateway;
pub mod handlers;
pub mod rotation;
pub mod telemetry;
pub mod tenant;
