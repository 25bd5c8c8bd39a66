//! Dispatch orchestration.

mod dispatcher;
mod gates;
mod supervisor;

pub use dispatcher::{Dispatcher, DispatcherPorts};
