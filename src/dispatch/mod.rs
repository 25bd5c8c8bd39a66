//! Message dispatch: prefix resolution, the gate sequence and supervised
//! concurrent execution.
//!
//! [`services::Dispatcher::dispatch`] runs the filter, prefix, tokenize,
//! lookup and gate stages inline and hands the handler to its own task.
//! The dispatcher never waits for that task; the returned
//! [`domain::DispatchOutcome`] carries its join handle for callers that
//! want to.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
