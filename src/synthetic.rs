//! Synthetic field layouts for demos and stress testing.
//!
//! Fields are scattered over a square area with random sizes. Layouts are
//! reproducible from the seed.

use rand::prelude::*;

use crate::models::{Field, PlanRequest};

/// Generator for synthetic planning requests.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rng: StdRng,
    /// Side length of the square area fields are placed in.
    pub extent: f64,
    /// Smallest field side.
    pub min_side: f64,
    /// Largest field side.
    pub max_side: f64,
}

impl SyntheticGenerator {
    /// Creates a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            extent: 1000.0,
            min_side: 20.0,
            max_side: 150.0,
        }
    }

    /// Sets the placement area side length. Negative or NaN becomes 0.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent.max(0.0);
        self
    }

    /// Sets the field side range.
    pub fn with_side_range(mut self, min_side: f64, max_side: f64) -> Self {
        self.min_side = min_side.max(0.0);
        self.max_side = max_side.max(self.min_side);
        self
    }

    /// Generates `count` fields, labelled `F1`, `F2`, ...
    pub fn fields(&mut self, count: usize) -> Vec<Field> {
        (1..=count)
            .map(|n| {
                let width = self.side();
                let height = self.side();
                let x = self.rng.random_range(0.0..=self.extent);
                let y = self.rng.random_range(0.0..=self.extent);
                Field::new(round2(x), round2(y), round2(width), round2(height))
                    .with_id(format!("F{n}"))
            })
            .collect()
    }

    /// Generates a full request.
    pub fn request(&mut self, field_count: usize, machine_count: usize) -> PlanRequest {
        PlanRequest::new(machine_count, self.fields(field_count))
    }

    fn side(&mut self) -> f64 {
        if self.max_side > self.min_side {
            self.rng.random_range(self.min_side..self.max_side)
        } else {
            self.min_side
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
