//! Text rendering of the town map.

use town_rules::{LandmarkCategory, TownGrid};

/// Render the town as a grid of category codes, with a legend and intersection
/// numbers along the top and left edges.
pub fn town_map(grid: &TownGrid) -> String {
    let size = grid.size();
    let mut map = String::from("--- Town Map Layout ---\n");
    map.push_str("Legend (each character represents a unique instance of that building type):\n");
    for category in LandmarkCategory::ALL {
        map.push_str(&format!("  '{}': {}\n", category.code(), category));
    }
    map.push_str(&"-".repeat(size * 4 + 3));
    map.push('\n');

    let header: Vec<String> = (0..=size).map(|i| format!("{i:>3}")).collect();
    map.push_str(&format!("  {}\n", header.join(" ")));
    map.push_str(&format!("0  +{}\n", "---+".repeat(size)));

    for (row, landmarks) in grid.rows().enumerate() {
        map.push_str("   |");
        for landmark in landmarks {
            map.push_str(&format!(" {} |", landmark.code()));
        }
        map.push('\n');
        map.push_str(&format!("{:<2} +{}\n", row + 1, "---+".repeat(size)));
    }

    map
}
