//! Catalog of classic 0/1 knapsack benchmark instances.
//!
//! Datasets are numbered `1..=15`, with their best known objective value
//! stored as [`Knapsack::optimum`]. Any other id maps to a small 4-item
//! instance whose optimum is 5.

use crate::knapsack::Knapsack;

/// Number of datasets in the catalog.
pub const DATASET_COUNT: usize = 15;

struct Dataset {
    optimum: f64,
    capacity: f64,
    weights: &'static [f64],
    values: &'static [f64],
}

impl Dataset {
    fn to_knapsack(&self) -> Knapsack {
        Knapsack {
            capacity: self.capacity,
            weights: self.weights.to_vec(),
            values: self.values.to_vec(),
            optimum: self.optimum,
        }
    }
}

const DEFAULT: Dataset = Dataset {
    optimum: 5.0,
    capacity: 5.0,
    weights: &[1.0, 2.0, 3.0, 4.0],
    values: &[1.0, 2.0, 3.0, 4.0],
};

const DATASETS: [Dataset; DATASET_COUNT] = [
    // 1
    Dataset {
        optimum: 295.0,
        capacity: 269.0,
        weights: &[
            95.0, 4.0, 60.0, 32.0, 23.0, 72.0, 80.0, 62.0, 65.0, 46.0,
        ],
        values: &[
            55.0, 10.0, 47.0, 5.0, 4.0, 50.0, 8.0, 61.0, 85.0, 87.0,
        ],
    },
    // 2
    Dataset {
        optimum: 1024.0,
        capacity: 878.0,
        weights: &[
            92.0, 4.0, 43.0, 83.0, 84.0, 68.0, 92.0, 82.0, 6.0, 44.0, 32.0, 18.0, 56.0,
            83.0, 25.0, 96.0, 70.0, 48.0, 14.0, 58.0,
        ],
        values: &[
            44.0, 46.0, 90.0, 72.0, 91.0, 40.0, 75.0, 35.0, 8.0, 54.0, 78.0, 40.0, 77.0,
            15.0, 61.0, 17.0, 75.0, 29.0, 75.0, 63.0,
        ],
    },
    // 3
    Dataset {
        optimum: 35.0,
        capacity: 20.0,
        weights: &[
            6.0, 5.0, 9.0, 7.0,
        ],
        values: &[
            9.0, 11.0, 13.0, 15.0,
        ],
    },
    // 4
    Dataset {
        optimum: 23.0,
        capacity: 11.0,
        weights: &[
            2.0, 4.0, 6.0, 7.0,
        ],
        values: &[
            6.0, 10.0, 12.0, 13.0,
        ],
    },
    // 5
    Dataset {
        optimum: 481.0694,
        capacity: 375.0,
        weights: &[
            56.35853, 80.87405, 47.9873, 89.59624, 74.66048, 85.89435, 51.3535, 1.498459,
            36.4452, 16.58986, 44.56923, 0.466933, 37.78802, 57.11844, 60.71657,
        ],
        values: &[
            0.125126, 19.33042, 58.50093, 35.02914, 82.284, 17.41081, 71.05014, 30.39949,
            9.140294, 14.73128, 98.8525, 11.90832, 0.89114, 53.16629, 60.1764,
        ],
    },
    // 6
    Dataset {
        optimum: 52.0,
        capacity: 60.0,
        weights: &[
            30.0, 25.0, 20.0, 18.0, 17.0, 11.0, 5.0, 2.0, 1.0, 1.0,
        ],
        values: &[
            20.0, 18.0, 17.0, 15.0, 15.0, 10.0, 5.0, 3.0, 1.0, 1.0,
        ],
    },
    // 7
    Dataset {
        optimum: 107.0,
        capacity: 50.0,
        weights: &[
            31.0, 10.0, 20.0, 19.0, 4.0, 3.0, 6.0,
        ],
        values: &[
            70.0, 20.0, 39.0, 37.0, 7.0, 5.0, 10.0,
        ],
    },
    // 8
    Dataset {
        optimum: 9767.0,
        capacity: 10000.0,
        weights: &[
            983.0, 982.0, 981.0, 980.0, 979.0, 978.0, 488.0, 976.0, 972.0, 486.0, 486.0,
            972.0, 972.0, 485.0, 485.0, 969.0, 966.0, 483.0, 964.0, 963.0, 961.0, 958.0,
            959.0,
        ],
        values: &[
            981.0, 980.0, 979.0, 978.0, 977.0, 976.0, 487.0, 974.0, 970.0, 485.0, 485.0,
            970.0, 970.0, 484.0, 484.0, 976.0, 974.0, 482.0, 962.0, 961.0, 959.0, 958.0,
            857.0,
        ],
    },
    // 9
    Dataset {
        optimum: 130.0,
        capacity: 80.0,
        weights: &[
            15.0, 20.0, 17.0, 8.0, 31.0,
        ],
        values: &[
            33.0, 24.0, 36.0, 37.0, 12.0,
        ],
    },
    // 10
    Dataset {
        optimum: 1025.0,
        capacity: 879.0,
        weights: &[
            84.0, 83.0, 43.0, 4.0, 44.0, 6.0, 82.0, 92.0, 25.0, 83.0, 56.0, 18.0, 58.0,
            14.0, 48.0, 70.0, 96.0, 32.0, 68.0, 92.0,
        ],
        values: &[
            91.0, 72.0, 90.0, 46.0, 55.0, 8.0, 35.0, 75.0, 61.0, 15.0, 77.0, 40.0, 63.0,
            75.0, 29.0, 75.0, 17.0, 78.0, 40.0, 44.0,
        ],
    },
    // 11
    Dataset {
        optimum: 1437.0,
        capacity: 577.0,
        weights: &[
            46.0, 17.0, 35.0, 1.0, 26.0, 17.0, 17.0, 48.0, 38.0, 17.0, 32.0, 21.0, 29.0,
            48.0, 31.0, 8.0, 42.0, 37.0, 6.0, 9.0, 15.0, 22.0, 27.0, 14.0, 42.0, 40.0,
            14.0, 31.0, 6.0, 34.0,
        ],
        values: &[
            57.0, 64.0, 50.0, 6.0, 52.0, 6.0, 85.0, 60.0, 70.0, 65.0, 63.0, 96.0, 18.0,
            48.0, 85.0, 50.0, 77.0, 18.0, 70.0, 92.0, 17.0, 43.0, 5.0, 23.0, 67.0, 88.0,
            35.0, 3.0, 91.0, 48.0,
        ],
    },
    // 12
    Dataset {
        optimum: 1689.0,
        capacity: 655.0,
        weights: &[
            7.0, 4.0, 36.0, 47.0, 6.0, 33.0, 8.0, 35.0, 32.0, 3.0, 40.0, 50.0, 22.0, 18.0,
            3.0, 12.0, 30.0, 31.0, 13.0, 33.0, 4.0, 48.0, 5.0, 17.0, 33.0, 26.0, 27.0,
            19.0, 39.0, 15.0, 33.0, 47.0, 17.0, 41.0, 40.0,
        ],
        values: &[
            35.0, 67.0, 30.0, 69.0, 40.0, 40.0, 21.0, 73.0, 82.0, 93.0, 52.0, 20.0, 61.0,
            20.0, 42.0, 86.0, 43.0, 93.0, 38.0, 70.0, 59.0, 11.0, 42.0, 93.0, 6.0, 39.0,
            25.0, 23.0, 36.0, 93.0, 51.0, 81.0, 36.0, 46.0, 96.0,
        ],
    },
    // 13
    Dataset {
        optimum: 1821.0,
        capacity: 819.0,
        weights: &[
            28.0, 23.0, 35.0, 38.0, 20.0, 29.0, 11.0, 48.0, 26.0, 14.0, 12.0, 48.0, 35.0,
            36.0, 33.0, 39.0, 30.0, 26.0, 44.0, 20.0, 13.0, 15.0, 46.0, 36.0, 43.0, 19.0,
            32.0, 2.0, 47.0, 24.0, 26.0, 39.0, 17.0, 32.0, 17.0, 16.0, 33.0, 22.0, 6.0,
            12.0,
        ],
        values: &[
            13.0, 16.0, 42.0, 69.0, 66.0, 68.0, 1.0, 13.0, 77.0, 85.0, 75.0, 95.0, 92.0,
            23.0, 51.0, 79.0, 53.0, 62.0, 56.0, 74.0, 7.0, 50.0, 23.0, 34.0, 56.0, 75.0,
            42.0, 51.0, 13.0, 22.0, 30.0, 45.0, 25.0, 27.0, 90.0, 59.0, 94.0, 62.0, 26.0,
            11.0,
        ],
    },
    // 14
    Dataset {
        optimum: 2033.0,
        capacity: 907.0,
        weights: &[
            18.0, 12.0, 38.0, 12.0, 23.0, 13.0, 18.0, 46.0, 1.0, 7.0, 20.0, 43.0, 11.0,
            47.0, 49.0, 19.0, 50.0, 7.0, 39.0, 29.0, 32.0, 25.0, 12.0, 8.0, 32.0, 41.0,
            34.0, 24.0, 48.0, 30.0, 12.0, 35.0, 17.0, 38.0, 50.0, 14.0, 47.0, 35.0, 5.0,
            13.0, 47.0, 24.0, 45.0, 39.0, 1.0,
        ],
        values: &[
            98.0, 70.0, 66.0, 33.0, 2.0, 58.0, 4.0, 27.0, 20.0, 45.0, 77.0, 63.0, 32.0,
            30.0, 8.0, 18.0, 73.0, 9.0, 92.0, 43.0, 8.0, 58.0, 84.0, 35.0, 78.0, 71.0,
            60.0, 38.0, 40.0, 43.0, 43.0, 22.0, 50.0, 4.0, 57.0, 5.0, 88.0, 87.0, 34.0,
            98.0, 96.0, 99.0, 16.0, 1.0, 25.0,
        ],
    },
    // 15
    Dataset {
        optimum: 2440.0,
        capacity: 882.0,
        weights: &[
            15.0, 40.0, 22.0, 28.0, 50.0, 35.0, 49.0, 5.0, 45.0, 3.0, 7.0, 32.0, 19.0,
            16.0, 40.0, 16.0, 31.0, 24.0, 15.0, 42.0, 29.0, 4.0, 14.0, 9.0, 29.0, 11.0,
            25.0, 37.0, 48.0, 39.0, 5.0, 47.0, 49.0, 31.0, 48.0, 17.0, 46.0, 1.0, 25.0,
            8.0, 16.0, 9.0, 30.0, 33.0, 18.0, 3.0, 3.0, 3.0, 4.0, 1.0,
        ],
        values: &[
            78.0, 69.0, 87.0, 59.0, 63.0, 12.0, 22.0, 4.0, 45.0, 33.0, 29.0, 50.0, 19.0,
            94.0, 95.0, 60.0, 1.0, 91.0, 69.0, 8.0, 100.0, 32.0, 81.0, 47.0, 59.0, 48.0,
            56.0, 18.0, 59.0, 16.0, 45.0, 54.0, 47.0, 84.0, 100.0, 98.0, 75.0, 20.0, 4.0,
            19.0, 58.0, 63.0, 37.0, 64.0, 90.0, 26.0, 29.0, 13.0, 53.0, 83.0,
        ],
    },
];

/// Returns dataset `id`, or the default instance if `id` is not in `1..=15`.
pub fn get(id: usize) -> Knapsack {
    match id.checked_sub(1).and_then(|i| DATASETS.get(i)) {
        Some(dataset) => dataset.to_knapsack(),
        None => DEFAULT.to_knapsack(),
    }
}

/// The 4-item instance `{capacity 5, weights [1,2,3,4], values [1,2,3,4]}`.
pub fn default_instance() -> Knapsack {
    DEFAULT.to_knapsack()
}

/// All catalog datasets paired with their ids, in order.
pub fn all() -> impl Iterator<Item = (usize, Knapsack)> {
    (1..=DATASET_COUNT).map(|id| (id, get(id)))
}
