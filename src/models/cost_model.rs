use crate::models::{Dataset, Label};
use crate::types::{Cost, CostMatrix, CostVector, LabelValue};
use crate::utils::count_class_frequencies;
use crate::Error;
use std::fmt;

/// Cost-matrix cells, as `[predicted][true]` indices, that make up each class's cost vector
/// (false positive, false negative, true positive, true negative). Indexed by `Label::index`.
const COST_VECTOR_CELLS: [[(usize, usize); 4]; 2] = [
    // Growth
    [(0, 1), (1, 0), (0, 0), (1, 1)],
    // Recession
    [(1, 0), (0, 1), (1, 1), (0, 0)],
];

/// Asymmetric misclassification costs for the growth/recession problem.
///
/// Immutable once built; every derived quantity is recomputed from the four costs on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    cost_recession_predicted_recession: Cost,
    cost_recession_predicted_growth: Cost,
    cost_growth_predicted_recession: Cost,
    cost_growth_predicted_growth: Cost,
}

impl CostModel {
    /// Builds a cost model from the two misclassification costs. Correct predictions cost nothing.
    pub fn new(
        cost_recession_predicted_growth: Cost,
        cost_growth_predicted_recession: Cost,
    ) -> Result<Self, Error> {
        Self::with_diagonal(
            cost_recession_predicted_growth,
            cost_growth_predicted_recession,
            0.0,
            0.0,
        )
    }

    pub fn with_diagonal(
        cost_recession_predicted_growth: Cost,
        cost_growth_predicted_recession: Cost,
        cost_recession_predicted_recession: Cost,
        cost_growth_predicted_growth: Cost,
    ) -> Result<Self, Error> {
        let costs = [
            (
                "cost_recession_predicted_growth",
                cost_recession_predicted_growth,
            ),
            (
                "cost_growth_predicted_recession",
                cost_growth_predicted_recession,
            ),
            (
                "cost_recession_predicted_recession",
                cost_recession_predicted_recession,
            ),
            ("cost_growth_predicted_growth", cost_growth_predicted_growth),
        ];

        for (name, cost) in costs {
            if !cost.is_finite() || cost < 0.0 {
                return Err(Error::NegativeCostError(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, cost
                )));
            }
        }

        Ok(Self {
            cost_recession_predicted_recession,
            cost_recession_predicted_growth,
            cost_growth_predicted_recession,
            cost_growth_predicted_growth,
        })
    }

    pub fn cost_recession_predicted_recession(&self) -> Cost {
        self.cost_recession_predicted_recession
    }

    pub fn cost_recession_predicted_growth(&self) -> Cost {
        self.cost_recession_predicted_growth
    }

    pub fn cost_growth_predicted_recession(&self) -> Cost {
        self.cost_growth_predicted_recession
    }

    pub fn cost_growth_predicted_growth(&self) -> Cost {
        self.cost_growth_predicted_growth
    }

    /// Row 0 holds the growth predictions, row 1 the recession predictions; column 0 is the
    /// true-growth column, column 1 the true-recession column.
    pub fn cost_matrix(&self) -> CostMatrix {
        [
            [
                self.cost_growth_predicted_growth,
                self.cost_recession_predicted_growth,
            ],
            [
                self.cost_growth_predicted_recession,
                self.cost_recession_predicted_recession,
            ],
        ]
    }

    /// Cost vector for an instance whose true label is `label`, ordered as
    /// (false positive, false negative, true positive, true negative).
    ///
    /// # Errors
    /// * `InvalidLabelError` - if `label` is neither `0` nor `1`.
    pub fn cost_vector(&self, label: LabelValue) -> Result<CostVector, Error> {
        let label = Label::from_value(label)?;
        Ok(self.cost_vector_for(label))
    }

    pub fn cost_vector_for(&self, label: Label) -> CostVector {
        let cost_matrix = self.cost_matrix();
        COST_VECTOR_CELLS[label.index()].map(|(row, column)| cost_matrix[row][column])
    }

    /// Aggregate cost of a true-growth instance.
    pub fn cost_growth(&self) -> Cost {
        self.class_cost(Label::Growth)
    }

    /// Aggregate cost of a true-recession instance.
    pub fn cost_recession(&self) -> Cost {
        self.class_cost(Label::Recession)
    }

    fn class_cost(&self, label: Label) -> Cost {
        self.cost_matrix().iter().map(|row| row[label.index()]).sum()
    }

    /// Rebalancing weight of the recession class over the given labels.
    ///
    /// # Errors
    /// * `MultiClassError` - if a label other than `0` or `1` appears.
    /// * `DegenerateCostModelError` - if the weighted class total is zero.
    pub fn recession_weight(&self, labels: &[LabelValue]) -> Result<f64, Error> {
        self.class_weight(Label::Recession, labels)
    }

    /// Rebalancing weight of the growth class over the dataset's labels.
    pub fn growth_weight(&self, dataset: &Dataset) -> Result<f64, Error> {
        self.class_weight(Label::Growth, dataset.labels())
    }

    /// `n * class_cost / (n_growth * cost_growth + n_recession * cost_recession)`
    pub fn class_weight(&self, label: Label, labels: &[LabelValue]) -> Result<f64, Error> {
        let counts = count_class_frequencies(labels)?;

        let cost_growth = self.cost_growth();
        let cost_recession = self.cost_recession();

        let denominator =
            counts.growth as f64 * cost_growth + counts.recession as f64 * cost_recession;

        if denominator == 0.0 {
            return Err(Error::DegenerateCostModelError(format!(
                "weighted class total is zero ({} growth at cost {}, {} recession at cost {})",
                counts.growth, cost_growth, counts.recession, cost_recession
            )));
        }

        Ok(counts.total() as f64 * self.class_cost(label) / denominator)
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CostModel (\n\trecession|recession: {},\n\trecession|growth: {},\n\tgrowth|recession: {},\n\tgrowth|growth: {}\n)",
            self.cost_recession_predicted_recession,
            self.cost_recession_predicted_growth,
            self.cost_growth_predicted_recession,
            self.cost_growth_predicted_growth
        )
    }
}
