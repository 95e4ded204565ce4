//! Consumer-facing integration tests for `rangr-core`.

mod pipeline;
