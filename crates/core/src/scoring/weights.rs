//! Per-category value vectors and weight normalization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::lenient;

/// One `f64` per category. Used both for normalized weights and for an
/// employee's per-category score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../frontend/src/types/generated/"))]
pub struct CategoryValues {
    pub job_performance: f64,
    pub behavioral: f64,
    pub attendance: f64,
    pub learning: f64,
    pub leadership: f64,
    pub customer: f64,
    pub innovation: f64,
    pub cultural: f64,
}

impl CategoryValues {
    /// The default weight vector (sums to 1.0).
    pub fn default_weights() -> Self {
        Self::from_fn(Category::default_weight)
    }

    /// Build a vector by evaluating `f` for every category.
    pub fn from_fn(mut f: impl FnMut(Category) -> f64) -> Self {
        let mut values = Self::default();
        for category in Category::ALL {
            *values.get_mut(category) = f(category);
        }
        values
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::JobPerformance => self.job_performance,
            Category::Behavioral => self.behavioral,
            Category::Attendance => self.attendance,
            Category::Learning => self.learning,
            Category::Leadership => self.leadership,
            Category::Customer => self.customer,
            Category::Innovation => self.innovation,
            Category::Cultural => self.cultural,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::JobPerformance => &mut self.job_performance,
            Category::Behavioral => &mut self.behavioral,
            Category::Attendance => &mut self.attendance,
            Category::Learning => &mut self.learning,
            Category::Leadership => &mut self.leadership,
            Category::Customer => &mut self.customer,
            Category::Innovation => &mut self.innovation,
            Category::Cultural => &mut self.cultural,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Σ self[c] * other[c] over all categories.
    pub fn weighted_by(&self, weights: &CategoryValues) -> f64 {
        Category::ALL
            .iter()
            .map(|&c| self.get(c) * weights.get(c))
            .sum()
    }
}

/// Caller-supplied partial weight overrides. Unknown keys are ignored;
/// null or non-numeric values count as "not overridden".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeightOverrides {
    #[serde(deserialize_with = "lenient::optional_number")]
    pub job_performance: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub behavioral: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub attendance: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub learning: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub leadership: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub customer: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub innovation: Option<f64>,
    #[serde(deserialize_with = "lenient::optional_number")]
    pub cultural: Option<f64>,
}

impl WeightOverrides {
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::JobPerformance => self.job_performance,
            Category::Behavioral => self.behavioral,
            Category::Attendance => self.attendance,
            Category::Learning => self.learning,
            Category::Leadership => self.leadership,
            Category::Customer => self.customer,
            Category::Innovation => self.innovation,
            Category::Cultural => self.cultural,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c).is_none())
    }

    /// Merge the overrides onto the defaults and normalize to sum 1.0.
    ///
    /// Negative values are clamped to 0. If every weight ends up 0 the
    /// categories are weighted equally.
    pub fn resolve(&self) -> CategoryValues {
        let raw = CategoryValues::from_fn(|c| {
            self.get(c)
                .unwrap_or_else(|| c.default_weight())
                .max(0.0)
        });
        normalize(raw)
    }
}

/// Scale `raw` so its components sum to 1.0.
pub fn normalize(raw: CategoryValues) -> CategoryValues {
    let total = raw.sum();
    if total <= 0.0 || !total.is_finite() {
        let equal = 1.0 / Category::ALL.len() as f64;
        return CategoryValues::from_fn(|_| equal);
    }
    CategoryValues::from_fn(|c| raw.get(c) / total)
}
