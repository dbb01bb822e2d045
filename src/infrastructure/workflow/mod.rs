//! Workflow infrastructure implementations

mod executor_impl;

pub use executor_impl::WorkflowExecutorImpl;
