use crate::domain::record::Record;
use anyhow::Result;
use big_dataset_paginator::DataSource;
use std::time::Duration;

/// Synthetic dataset of numbered records, answering each load after a fixed delay.
pub struct RecordSource {
    data_total: usize,
    latency: Duration,
}

impl RecordSource {
    pub fn new(data_total: usize, latency: Duration) -> Self {
        tracing::debug!("Initializing the record source with {data_total} records");

        Self {
            data_total,
            latency,
        }
    }
}

impl DataSource for RecordSource {
    type Item = Record;

    fn data_total(&self) -> usize {
        self.data_total
    }

    fn get_load(
        &self,
        load_number: usize,
        items_per_load: usize,
        is_last_load: bool,
    ) -> impl Future<Output = Result<Vec<Record>>> + Send {
        let data_total = self.data_total;
        let latency = self.latency;

        async move {
            let first_id = (load_number - 1) * items_per_load + 1;
            anyhow::ensure!(
                first_id <= data_total,
                "Load {load_number} starts past the last record ({data_total})"
            );

            let last_id = if is_last_load {
                data_total
            } else {
                first_id + items_per_load - 1
            };

            tracing::debug!("Reading records {first_id} to {last_id}");

            tokio::time::sleep(latency).await;

            Ok((first_id..=last_id).map(Record::new).collect::<Vec<_>>())
        }
    }
}
