//! TOML scenario files: a `[sim]` table, an `[[orders]]` list and optional
//! seeded random orders.

use std::path::Path;

use agv_core::{Coord, OrderId, SimConfig};
use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Built-in scenario used when no file is given: the 12×12 single-order run.
pub const DEFAULT_SCENARIO: &str = r#"
[sim]
rows       = 12
cols       = 12
agv_starts = [[0, 0]]

[[orders]]
id   = "O1"
pick = [1, 1]
drop = [10, 10]
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub sim: SimConfig,

    #[serde(default)]
    pub orders: Vec<OrderSpec>,

    pub random_orders: Option<RandomOrders>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSpec {
    pub id:   String,
    pub pick: Coord,
    pub drop: Coord,
}

/// `count` orders with pick and drop drawn uniformly from non-obstacle cells.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomOrders {
    pub count: usize,
    #[serde(default)]
    pub seed:  u64,
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Listed orders followed by the random ones, as `(id, pick, drop)`.
    pub fn all_orders(&self) -> Vec<(OrderId, Coord, Coord)> {
        let mut out: Vec<_> = self
            .orders
            .iter()
            .map(|o| (OrderId::new(o.id.clone()), o.pick, o.drop))
            .collect();
        if let Some(random) = &self.random_orders {
            out.extend(random.generate(&self.sim));
        }
        out
    }
}

impl RandomOrders {
    /// Ids are `R1..=Rn`.  Returns nothing when the grid has no free cell.
    pub fn generate(&self, config: &SimConfig) -> Vec<(OrderId, Coord, Coord)> {
        let free: Vec<Coord> = (0..config.rows)
            .flat_map(|row| (0..config.cols).map(move |col| Coord::new(row, col)))
            .filter(|c| !config.obstacles.contains(c))
            .collect();
        if free.is_empty() {
            return Vec::new();
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        (1..=self.count)
            .map(|i| {
                let pick = free[rng.gen_range(0..free.len())];
                let drop = free[rng.gen_range(0..free.len())];
                (OrderId::new(format!("R{i}")), pick, drop)
            })
            .collect()
    }
}
