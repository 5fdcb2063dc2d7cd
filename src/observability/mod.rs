//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides distributed tracing infrastructure for the
//! application, using OpenTelemetry OTLP format with file-based exporting.
//! Traces are written to JSON files for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `cinescope-otlp.json` under the
//!   platform data directory (`~/.local/share/cinescope` on Linux)
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Resource Metadata**: Includes the service name
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `CINESCOPE_TRACE_LEVEL` through `Config::trace_level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`export`]: File-based tracer provider and OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod export;
mod file_writer;
mod init;

pub use init::init_tracing;
