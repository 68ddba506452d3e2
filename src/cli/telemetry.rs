//! Logging setup plus optional OTLP trace export.
//!
//! Spans always go to a pretty `fmt` layer filtered by verbosity and
//! `RUST_LOG`. When `OTEL_EXPORTER_OTLP_ENDPOINT` is set they are also
//! exported over gRPC, honoring `OTEL_EXPORTER_OTLP_HEADERS` (keys ending
//! in `-bin` carry base64 values) and `OTEL_SERVICE_INSTANCE_ID`.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::OnceCell;
use opentelemetry::{global, propagation::TextMapCompositePropagator, trace::TracerProvider as _, KeyValue};
use opentelemetry_otlp::{Compression, WithExportConfig, WithTonicConfig};
use opentelemetry_sdk::{
    propagation::{BaggagePropagator, TraceContextPropagator},
    trace::SdkTracerProvider,
    Resource,
};
use std::{env::var, time::Duration};
use tonic::metadata::{Ascii, Binary, MetadataKey, MetadataMap, MetadataValue};
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};
use ulid::Ulid;

static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

const EXPORT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug)]
struct OtlpConfig {
    endpoint: String,
    metadata: MetadataMap,
    instance_id: String,
}

impl OtlpConfig {
    /// `None` when no collector endpoint is configured.
    fn from_env() -> Result<Option<Self>> {
        let Ok(endpoint) = var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
            return Ok(None);
        };

        let metadata = match var("OTEL_EXPORTER_OTLP_HEADERS") {
            Ok(raw) => metadata_from_headers(&raw)?,
            Err(_) => MetadataMap::new(),
        };

        Ok(Some(Self {
            endpoint: with_scheme(&endpoint),
            metadata,
            instance_id: var("OTEL_SERVICE_INSTANCE_ID").unwrap_or_else(|_| Ulid::new().to_string()),
        }))
    }

    fn into_provider(self) -> Result<SdkTracerProvider> {
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(self.endpoint)
            .with_metadata(self.metadata)
            .with_compression(Compression::Gzip)
            .with_timeout(EXPORT_TIMEOUT)
            .build()
            .context("Failed to build OTLP span exporter")?;

        let resource = Resource::builder_empty()
            .with_attributes([
                KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
                KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
                KeyValue::new("service.instance.id", self.instance_id),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(resource)
            .build())
    }
}

/// `key=value` pairs separated by commas; entries without `=` are skipped.
fn header_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

fn metadata_from_headers(raw: &str) -> Result<MetadataMap> {
    let mut metadata = MetadataMap::new();

    for (key, value) in header_pairs(raw) {
        let key = key.to_ascii_lowercase();

        if key.ends_with("-bin") {
            let bytes = STANDARD
                .decode(value)
                .with_context(|| format!("OTLP header {key} is not valid base64"))?;
            let name = MetadataKey::<Binary>::from_bytes(key.as_bytes())
                .with_context(|| format!("Invalid binary OTLP header name {key}"))?;
            metadata.insert_bin(name, MetadataValue::from_bytes(&bytes));
        } else {
            let name = MetadataKey::<Ascii>::from_bytes(key.as_bytes())
                .with_context(|| format!("Invalid OTLP header name {key}"))?;
            let value = MetadataValue::<Ascii>::try_from(value)
                .with_context(|| format!("Invalid OTLP header value for {key}"))?;
            metadata.insert(name, value);
        }
    }

    Ok(metadata)
}

fn with_scheme(endpoint: &str) -> String {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    }
}

fn install_provider(provider: &SdkTracerProvider) {
    let _ = TRACER_PROVIDER.set(provider.clone());

    global::set_tracer_provider(provider.clone());
    global::set_text_map_propagator(TextMapCompositePropagator::new(vec![
        Box::new(TraceContextPropagator::new()),
        Box::new(BaggagePropagator::new()),
    ]));
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the OTLP settings are invalid, the exporter cannot be
/// built, or a global subscriber is already set.
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.unwrap_or(Level::ERROR).into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?)
        .add_directive("opentelemetry_sdk=warn".parse()?);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .pretty();

    let otel_layer = match OtlpConfig::from_env()? {
        Some(config) => {
            let provider = config.into_provider()?;
            install_provider(&provider);
            Some(tracing_opentelemetry::layer().with_tracer(provider.tracer(env!("CARGO_PKG_NAME"))))
        }
        None => None,
    };

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(otel_layer)
        .with(filter);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Flush pending spans; does nothing when export was never enabled.
pub fn shutdown_tracer() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        debug!("shutting down tracer provider");
        if let Err(err) = provider.shutdown() {
            debug!("Tracer provider shutdown failed: {}", err);
        }
    }
}
