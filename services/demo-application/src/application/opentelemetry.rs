use crate::application::APPLICATION_NAME;
use crate::application::settings::DemoSettings;
use anyhow::Result;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig as _;
use opentelemetry_otlp::WithHttpConfig as _;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::sync::LazyLock;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

static OTEL_SDK_DISABLED: LazyLock<bool> = LazyLock::new(|| {
    matches!(std::env::var("OTEL_SDK_DISABLED"), Ok(value) if value.eq_ignore_ascii_case("true"))
});

// Exporting providers, flushed when dropped
struct ExportPipelines {
    tracer_provider: SdkTracerProvider,
    meter_provider: SdkMeterProvider,
}

impl ExportPipelines {
    fn new(resource: Resource) -> Result<Self> {
        let span_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_http()
            .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
            .with_compression(opentelemetry_otlp::Compression::Gzip)
            .build()?;
        let metric_exporter = opentelemetry_otlp::MetricExporter::builder()
            .with_http()
            .with_protocol(opentelemetry_otlp::Protocol::HttpBinary)
            .with_compression(opentelemetry_otlp::Compression::Gzip)
            .build()?;

        let tracer_provider = SdkTracerProvider::builder()
            .with_resource(resource.clone())
            .with_batch_exporter(span_exporter)
            .build();
        let meter_provider = SdkMeterProvider::builder()
            .with_resource(resource)
            .with_periodic_exporter(metric_exporter)
            .build();

        // The paginator counters are created on the global meter
        opentelemetry::global::set_tracer_provider(tracer_provider.clone());
        opentelemetry::global::set_meter_provider(meter_provider.clone());

        Ok(Self {
            tracer_provider,
            meter_provider,
        })
    }
}

impl Drop for ExportPipelines {
    fn drop(&mut self) {
        if let Err(err) = self.tracer_provider.shutdown() {
            eprintln!("{err:?}");
        }
        if let Err(err) = self.meter_provider.shutdown() {
            eprintln!("{err:?}");
        }
    }
}

pub struct OpentelemetryHandler {
    _pipelines: Option<ExportPipelines>,
}

impl OpentelemetryHandler {
    pub fn new(settings: &DemoSettings) -> Result<Self> {
        let pipelines = if *OTEL_SDK_DISABLED {
            None
        } else {
            Some(ExportPipelines::new(Self::create_resource(settings))?)
        };

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(pipelines.as_ref().map(|pipelines| {
                tracing_opentelemetry::MetricsLayer::new(pipelines.meter_provider.clone())
            }))
            .with(pipelines.as_ref().map(|pipelines| {
                tracing_opentelemetry::OpenTelemetryLayer::new(
                    pipelines.tracer_provider.tracer(APPLICATION_NAME),
                )
            }))
            .try_init()?;

        if pipelines.is_none() {
            tracing::debug!("OpenTelemetry export disabled, logging only");
        }

        Ok(Self {
            _pipelines: pipelines,
        })
    }

    fn create_resource(settings: &DemoSettings) -> Resource {
        const APPLICATION_VERSION: &str = env!("CARGO_PKG_VERSION");

        let paginator = settings.paginator();

        Resource::builder()
            .with_service_name(APPLICATION_NAME)
            .with_attributes([
                KeyValue::new(
                    opentelemetry_semantic_conventions::resource::SERVICE_VERSION,
                    APPLICATION_VERSION,
                ),
                KeyValue::new("paginator.data_total", Self::as_attribute(settings.data_total())),
                KeyValue::new(
                    "paginator.items_per_page",
                    Self::as_attribute(paginator.items_per_page),
                ),
                KeyValue::new(
                    "paginator.items_per_load",
                    Self::as_attribute(paginator.items_per_load),
                ),
            ])
            .with_detectors(&[
                Box::new(opentelemetry_resource_detectors::OsResourceDetector),
                Box::new(opentelemetry_resource_detectors::ProcessResourceDetector),
            ])
            .build()
    }

    fn as_attribute(value: usize) -> i64 {
        i64::try_from(value).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use big_dataset_paginator::PaginatorConfig;
    use opentelemetry::Key;
    use opentelemetry::Value;

    #[test]
    fn resource_carries_the_paginator_geometry() {
        let settings = DemoSettings::new(
            1000,
            0,
            PaginatorConfig {
                items_per_page: 25,
                items_per_load: 200,
            },
        );

        let resource = OpentelemetryHandler::create_resource(&settings);

        assert_eq!(
            resource.get(&Key::from_static_str("paginator.data_total")),
            Some(Value::I64(1000))
        );
        assert_eq!(
            resource.get(&Key::from_static_str("paginator.items_per_load")),
            Some(Value::I64(200))
        );
    }
}
