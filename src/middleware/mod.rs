pub mod cors;
pub mod request_trace;
pub mod trace_span;
