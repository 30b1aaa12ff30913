//! Category aggregation for the dashboard chart.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::api::ApiError;
use crate::net::types::Product;

/// Parallel label/count series: `values[i]` products carry `labels[i]`.
///
/// Labels appear in first-seen order. Recomputed on every fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl CategoryBreakdown {
    pub fn from_products(products: &[Product]) -> Self {
        let mut breakdown = Self::default();
        for product in products {
            let label = product.category.label();
            match breakdown.labels.iter().position(|l| l == label) {
                Some(index) => breakdown.values[index] += 1,
                None => {
                    breakdown.labels.push(label.to_owned());
                    breakdown.values.push(1);
                }
            }
        }
        breakdown
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }
}

/// Product list fetched for the chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryChartState {
    pub breakdown: CategoryBreakdown,
    pub loading: bool,
    pub error: Option<String>,
}

impl CategoryChartState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Product>, ApiError>) {
        self.loading = false;
        match result {
            Ok(products) => {
                self.breakdown = CategoryBreakdown::from_products(&products);
                self.error = None;
            }
            Err(err) => {
                self.breakdown = CategoryBreakdown::default();
                self.error = Some(err.user_message());
            }
        }
    }
}
