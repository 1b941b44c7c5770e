//! # Item Catalogue
//!
//! The fixed list of PCB templates on offer, plus the category chips shown
//! above the grid. Everything here is compiled in: items are never created,
//! mutated, or deleted at runtime.
//!
//! ```text
//! CATALOGUE ──filter_by_category("Power")──▶ [USB-C PD Sink, Li-ion Charger]
//! CATALOGUE ──filter_by_category("All")────▶ CATALOGUE (unchanged)
//! CATALOGUE ──filter_by_category("New")────▶ []
//! ```

use serde::Serialize;

/// Category sentinel that matches every item.
pub const ALL_CATEGORY: &str = "All";

/// Chips shown in the category row, in display order.
pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORY,
    "Power",
    "Robotics",
    "Sensors",
    "Audio",
    "Connectivity",
    "New",
];

/// A single marketplace listing.
///
/// Every field is a display string, including the numeric-looking ones.
/// Prices and costs are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    /// Short tagline shown under the title on compact tiles.
    pub meta: &'static str,
    pub category: &'static str,
    pub creator: &'static str,
    /// Remote preview image. Opaque to us; only displayed as text.
    pub image: &'static str,
    pub layers: &'static str,
    pub size: &'static str,
    pub est_cost: &'static str,
    pub dfm_status: &'static str,
    pub description: &'static str,
}

impl Item {
    /// Creator handle without the leading `@`, as shown on grid tiles.
    pub fn creator_name(&self) -> &'static str {
        self.creator.strip_prefix('@').unwrap_or(self.creator)
    }
}

pub static CATALOGUE: &[Item] = &[
    Item {
        id: "1",
        title: "USB-C PD Sink",
        price: "$9.00",
        meta: "2-layer",
        category: "Power",
        creator: "@kofilabs",
        image: "https://picsum.photos/seed/pcb1/600/400",
        layers: "2",
        size: "45×28mm",
        est_cost: "$2.40",
        dfm_status: "Passed",
        description: "A highly optimized USB-C Power Delivery sink module. Supports fixed voltages up to 20V at 5A.",
    },
    Item {
        id: "2",
        title: "Li-ion Charger",
        price: "$12.00",
        meta: "45×28mm",
        category: "Power",
        creator: "@circuitart",
        image: "https://picsum.photos/seed/pcb2/600/400",
        layers: "2",
        size: "45×28mm",
        est_cost: "$3.10",
        dfm_status: "Passed",
        description: "Compact Li-ion battery charger with integrated protection and status LEDs.",
    },
    Item {
        id: "3",
        title: "DRV8833 Driver",
        price: "$15.00",
        meta: "2-layer",
        category: "Robotics",
        creator: "@niarobotics",
        image: "https://picsum.photos/seed/pcb3/600/400",
        layers: "2",
        size: "32×32mm",
        est_cost: "$1.80",
        dfm_status: "Passed",
        description: "Dual H-bridge motor driver for small robotics projects. Efficient and easy to interface.",
    },
    Item {
        id: "4",
        title: "IMU Breakout",
        price: "$6.00",
        meta: "I2C",
        category: "Sensors",
        creator: "@sensornode",
        image: "https://picsum.photos/seed/pcb4/600/400",
        layers: "2",
        size: "10×10mm",
        est_cost: "$1.20",
        dfm_status: "Passed",
        description: "Ultra-compact 6-axis IMU breakout board with I2C interface.",
    },
    Item {
        id: "5",
        title: "ESP32-S3 Mini",
        price: "$25.00",
        meta: "4-layer",
        category: "Connectivity",
        creator: "@espdev",
        image: "https://picsum.photos/seed/pcb5/600/400",
        layers: "4",
        size: "40×20mm",
        est_cost: "$5.50",
        dfm_status: "Passed",
        description: "Minimalist ESP32-S3 development board with USB-C and LiPo charging.",
    },
    Item {
        id: "6",
        title: "Audio Amp D",
        price: "$18.00",
        meta: "Stereo",
        category: "Audio",
        creator: "@soundwave",
        image: "https://picsum.photos/seed/pcb6/600/400",
        layers: "2",
        size: "35×25mm",
        est_cost: "$2.10",
        dfm_status: "Passed",
        description: "Class D stereo audio amplifier with high efficiency and low distortion.",
    },
];

/// Items whose category equals `category`, in catalogue order.
///
/// The `All` sentinel returns every item. An unknown category is not an
/// error; it simply matches nothing.
pub fn filter_by_category<'a>(items: &'a [Item], category: &str) -> Vec<&'a Item> {
    if category == ALL_CATEGORY {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category == category).collect()
}

/// Look up a chip by name, ignoring ASCII case. Used to validate config and CLI input.
pub fn find_category(name: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[&Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.title).collect()
    }

    #[test]
    fn test_all_returns_full_catalogue_in_order() {
        let all = filter_by_category(CATALOGUE, ALL_CATEGORY);
        assert_eq!(all.len(), CATALOGUE.len());
        for (filtered, original) in all.iter().zip(CATALOGUE) {
            assert!(std::ptr::eq(*filtered, original));
        }
    }

    #[test]
    fn test_power_returns_two_items_in_order() {
        let power = filter_by_category(CATALOGUE, "Power");
        assert_eq!(titles(&power), vec!["USB-C PD Sink", "Li-ion Charger"]);
    }

    #[test]
    fn test_new_category_is_empty() {
        assert!(CATEGORIES.contains(&"New"));
        assert!(filter_by_category(CATALOGUE, "New").is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filter_by_category(CATALOGUE, "Quantum").is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        // Chips are compared verbatim, so lowercase does not match
        assert!(filter_by_category(CATALOGUE, "power").is_empty());
    }

    #[test]
    fn test_every_category_yields_exact_subset() {
        for &category in CATEGORIES.iter().filter(|c| **c != ALL_CATEGORY) {
            let filtered = filter_by_category(CATALOGUE, category);
            let expected: Vec<&Item> =
                CATALOGUE.iter().filter(|i| i.category == category).collect();
            assert_eq!(filtered, expected, "category {category}");
            assert!(filtered.iter().all(|i| i.category == category));
        }
    }

    #[test]
    fn test_creator_name_strips_at() {
        assert_eq!(CATALOGUE[0].creator_name(), "kofilabs");
    }

    #[test]
    fn test_find_category_ignores_case() {
        assert_eq!(find_category("robotics"), Some("Robotics"));
        assert_eq!(find_category("ALL"), Some(ALL_CATEGORY));
        assert_eq!(find_category("Quantum"), None);
    }

    #[test]
    fn test_catalogue_ids_are_unique() {
        let mut ids: Vec<_> = CATALOGUE.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CATALOGUE.len());
    }
}
