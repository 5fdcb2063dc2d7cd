//! File-based OpenTelemetry span export in OTLP JSON format.
//!
//! This module implements a custom `SpanExporter` that serializes span
//! batches to OTLP (OpenTelemetry Protocol) JSON and appends them to a
//! rotating file instead of sending them over the network. The output is
//! compatible with OTLP trace collectors and analysis tools.

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope name recorded in exported batches.
const SCOPE_NAME: &str = "cinescope";

/// File-based OpenTelemetry span exporter.
///
/// Implements the `SpanExporter` trait to write spans to a rotating file in
/// OTLP JSON format. Each exported batch becomes one line holding a complete
/// OTLP document with resource attributes and scope information.
struct FileSpanExporter {
    /// File writer with rotation support.
    writer: FileWriter,
    /// Resource metadata included in every batch.
    resource: Resource,
    /// Shutdown flag (prevents export after shutdown).
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            resource,
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let json = format_batch(&self.resource, &batch).to_string();
        match self.writer.write_line(&json) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Resource is fixed at construction.
    fn set_resource(&mut self, res: &Resource) {
        let _ = res;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider with file-based export.
///
/// Constructs a complete OpenTelemetry tracer provider configured with the
/// file-based span exporter, the given resource metadata, and a simple
/// (immediate, non-batched) export strategy.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

/// Formats a batch of spans as one OTLP JSON document.
///
/// # OTLP Format
///
/// ```json
/// {
///   "resourceSpans": [{
///     "resource": {
///       "attributes": [{"key": "service.name", "value": {"stringValue": "cinescope"}}]
///     },
///     "scopeSpans": [{
///       "scope": {"name": "cinescope"},
///       "spans": [...]
///     }]
///   }]
/// }
/// ```
fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(k, v)| {
            serde_json::json!({
                "key": k.to_string(),
                "value": format_attribute_value(v)
            })
        })
        .collect();

    let spans_json: Vec<JsonValue> = batch.iter().map(format_span).collect();

    serde_json::json!({
        "resourceSpans": [{
            "resource": {
                "attributes": resource_attrs
            },
            "scopeSpans": [{
                "scope": {
                    "name": SCOPE_NAME,
                },
                "spans": spans_json
            }]
        }]
    })
}

/// Formats a single span as OTLP JSON.
///
/// IDs become hex strings (trace ID 32 chars, span ID 16 chars), timestamps
/// become nanoseconds since the Unix epoch, and the status code maps to the
/// OTLP integer (0=unset, 1=ok, 2=error).
fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = format_status(&span.status);

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": span_kind_to_int(&span.span_kind),
        "startTimeUnixNano": format!("{}", unix_nanos(span.start_time)),
        "endTimeUnixNano": format!("{}", unix_nanos(span.end_time)),
        "attributes": format_attributes(&span.attributes),
        "events": format_events(&span.events),
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

fn unix_nanos(time: std::time::SystemTime) -> u128 {
    time.duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or(std::time::Duration::from_secs(0))
        .as_nanos()
}

/// Converts span kind to the OTLP integer code.
const fn span_kind_to_int(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

fn format_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| {
            serde_json::json!({
                "key": kv.key.to_string(),
                "value": format_attribute_value(&kv.value)
            })
        })
        .collect()
}

/// Formats an attribute value as OTLP JSON.
///
/// Maps OpenTelemetry value types to OTLP value types:
/// - Bool → `{"boolValue": true}`
/// - I64 → `{"intValue": "123"}` (as string)
/// - F64 → `{"doubleValue": 1.23}`
/// - String → `{"stringValue": "..."}`
/// - Array → `{"stringValue": "[debug format]"}` (fallback)
fn format_attribute_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    }
}

fn format_events(events: &[opentelemetry::trace::Event]) -> Vec<JsonValue> {
    events
        .iter()
        .map(|event| {
            serde_json::json!({
                "timeUnixNano": format!("{}", unix_nanos(event.timestamp)),
                "name": event.name,
                "attributes": format_attributes(&event.attributes),
            })
        })
        .collect()
}

/// Formats span status as the OTLP code and message pair.
fn format_status(status: &opentelemetry::trace::Status) -> (u8, String) {
    match status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{SpanKind, Status};
    use opentelemetry::{KeyValue, Value};

    #[test]
    fn attribute_values_map_to_otlp_types() {
        assert_eq!(
            format_attribute_value(&Value::Bool(true)),
            serde_json::json!({ "boolValue": true })
        );
        assert_eq!(
            format_attribute_value(&Value::I64(42)),
            serde_json::json!({ "intValue": "42" })
        );
        assert_eq!(
            format_attribute_value(&Value::F64(0.5)),
            serde_json::json!({ "doubleValue": 0.5 })
        );
        assert_eq!(
            format_attribute_value(&Value::String("batman".into())),
            serde_json::json!({ "stringValue": "batman" })
        );
    }

    #[test]
    fn status_maps_to_otlp_codes() {
        assert_eq!(format_status(&Status::Unset), (0, String::new()));
        assert_eq!(format_status(&Status::Ok), (1, String::new()));
        assert_eq!(
            format_status(&Status::error("request failed")),
            (2, "request failed".to_string())
        );
    }

    #[test]
    fn span_kinds_map_to_otlp_codes() {
        assert_eq!(span_kind_to_int(&SpanKind::Internal), 1);
        assert_eq!(span_kind_to_int(&SpanKind::Client), 3);
    }

    #[test]
    fn batch_document_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "cinescope")]);
        let doc = format_batch(&resource, &[]);

        let resource_spans = &doc["resourceSpans"][0];
        let attrs = resource_spans["resource"]["attributes"]
            .as_array()
            .expect("attributes array");
        assert!(attrs.iter().any(|attr| {
            attr["key"] == "service.name" && attr["value"]["stringValue"] == "cinescope"
        }));

        let scope_spans = &resource_spans["scopeSpans"][0];
        assert_eq!(scope_spans["scope"]["name"], "cinescope");
        assert_eq!(scope_spans["spans"].as_array().map(Vec::len), Some(0));
    }
}
