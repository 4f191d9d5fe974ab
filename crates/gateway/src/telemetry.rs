//! Subscriber setup for the server and for one-shot CLI commands.

use anyhow::Context;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig as _;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sp_domain::config::ObservabilityConfig;

/// Install JSON logging for `serve`, plus an OTLP span exporter when
/// `otlp_endpoint` is set.
///
/// The returned provider must be shut down on exit to flush pending spans.
/// An exporter that cannot be built is reported and skipped; logging still
/// comes up.
pub fn init_tracing(obs: &ObservabilityConfig) -> Option<SdkTracerProvider> {
    let provider = obs.otlp_endpoint.as_deref().and_then(|endpoint| {
        match otlp_tracer_provider(endpoint, obs) {
            Ok(provider) => Some(provider),
            Err(e) => {
                eprintln!("WARNING: {e:#}; starting without OpenTelemetry");
                None
            }
        }
    });

    let otel_layer = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer("storepilot")));

    tracing_subscriber::registry()
        .with(default_filter("info,sp_gateway=debug"))
        .with(tracing_subscriber::fmt::layer().json())
        .with(otel_layer)
        .init();

    provider
}

/// Compact stderr logging for one-shot commands, `warn` unless `RUST_LOG`
/// says otherwise, so stdout carries only the answer.
pub fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter("warn"))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn default_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn otlp_tracer_provider(
    endpoint: &str,
    obs: &ObservabilityConfig,
) -> anyhow::Result<SdkTracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .with_context(|| format!("creating OTLP exporter for {endpoint}"))?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(obs.service_name.clone())
        .build();

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(Sampler::TraceIdRatioBased(obs.sample_rate))
        .with_resource(resource)
        .build())
}
