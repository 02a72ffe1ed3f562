use anyhow::Context as _;
use anyhow::Result;
use big_dataset_paginator::PaginatorConfig;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, serde::Serialize)]
pub struct DemoSettings {
    data_total: usize,
    load_latency_ms: u64,
    paginator: PaginatorConfig,
}

impl DemoSettings {
    const DATA_TOTAL_ENV_VAR: &str = "PAGINATOR_DATA_TOTAL";
    const ITEMS_PER_PAGE_ENV_VAR: &str = "PAGINATOR_ITEMS_PER_PAGE";
    const ITEMS_PER_LOAD_ENV_VAR: &str = "PAGINATOR_ITEMS_PER_LOAD";
    const LOAD_LATENCY_MS_ENV_VAR: &str = "PAGINATOR_LOAD_LATENCY_MS";

    const DEFAULT_DATA_TOTAL: &str = "1000";
    const DEFAULT_ITEMS_PER_PAGE: &str = "25";
    const DEFAULT_ITEMS_PER_LOAD: &str = "200";
    const DEFAULT_LOAD_LATENCY_MS: &str = "50";

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_total: Self::read_env(Self::DATA_TOTAL_ENV_VAR, Self::DEFAULT_DATA_TOTAL)?,
            load_latency_ms: Self::read_env(
                Self::LOAD_LATENCY_MS_ENV_VAR,
                Self::DEFAULT_LOAD_LATENCY_MS,
            )?,
            paginator: PaginatorConfig {
                items_per_page: Self::read_env(
                    Self::ITEMS_PER_PAGE_ENV_VAR,
                    Self::DEFAULT_ITEMS_PER_PAGE,
                )?,
                items_per_load: Self::read_env(
                    Self::ITEMS_PER_LOAD_ENV_VAR,
                    Self::DEFAULT_ITEMS_PER_LOAD,
                )?,
            },
        })
    }

    #[cfg(test)]
    pub(crate) const fn new(
        data_total: usize,
        load_latency_ms: u64,
        paginator: PaginatorConfig,
    ) -> Self {
        Self {
            data_total,
            load_latency_ms,
            paginator,
        }
    }

    fn read_env<T>(name: &str, default: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

        value
            .parse()
            .with_context(|| format!("Invalid value for {name}: {value:?}"))
    }

    pub const fn data_total(&self) -> usize {
        self.data_total
    }

    pub const fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    pub const fn paginator(&self) -> &PaginatorConfig {
        &self.paginator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_falls_back_to_default() {
        let value: usize =
            DemoSettings::read_env("PAGINATOR_TEST_UNSET_VARIABLE", "42").unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn unparsable_default_is_reported() {
        let err = DemoSettings::read_env::<usize>("PAGINATOR_TEST_UNSET_VARIABLE", "many")
            .unwrap_err();
        assert!(err.to_string().contains("PAGINATOR_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn default_settings_build_a_valid_paginator() {
        let settings = DemoSettings {
            data_total: 1000,
            load_latency_ms: 0,
            paginator: PaginatorConfig {
                items_per_page: 25,
                items_per_load: 200,
            },
        };

        let paginator = crate::application::context::create_paginator(&settings).unwrap();
        assert_eq!(paginator.total_pages(), 40);
        assert_eq!(paginator.total_loads(), 5);
    }
}
