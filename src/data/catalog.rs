use crate::shared::*;

/// Populate the Catalog resource with every purchasable item type.
///
/// Tables:
///   buildings       — passive-income toys scattered around the yard
///   furniture       — home decorations, placed on the home board
///   gardening       — garden decorations, placed on the garden board
///   cat_accessories — wearables, placed on the cat overlay board
///   homes / gardens — floor plans, each providing a square board
pub fn populate_catalog(catalog: &mut Catalog) {
    // ═══════════════════════════════════════════════════════════════
    // PASSIVE-INCOME BUILDINGS
    // ═══════════════════════════════════════════════════════════════

    let buildings: Vec<(&str, &str, u64, u64)> = vec![
        // (id, display name, cost, income per tick per unit)
        ("tanbark", "Tanbark", 50, 1),
        ("tiny_ball", "Tiny Ball", 250, 2),
        ("football", "Football", 2_500, 1),
        ("teddy_bear", "Teddy Bear", 50_000, 1),
        ("stuffed_snowman", "Stuffed Snowman", 2_000_000, 1),
        ("ferns_bird", "Fern's Bird", 175_000_000, 1),
    ];
    for (id, name, cost, income) in buildings {
        catalog.buildings.insert(
            id.into(),
            BuildingDef {
                name: name.into(),
                cost,
                income,
            },
        );
    }

    // ═══════════════════════════════════════════════════════════════
    // HOME FURNITURE
    // ═══════════════════════════════════════════════════════════════

    let furniture: Vec<(&str, &str, u64, &str)> = vec![
        ("chair", "Chair", 25_000, "sprites/chair.png"),
        ("table", "Table", 75_000, "sprites/table.png"),
        ("sofa", "Sofa", 150_000, "sprites/sofa.png"),
        ("bed", "Bed", 350_000, "sprites/bed.png"),
    ];
    for (id, name, cost, sprite) in furniture {
        catalog.furniture.insert(
            id.into(),
            DecorDef {
                name: name.into(),
                cost,
                sprite: sprite.into(),
            },
        );
    }

    // ═══════════════════════════════════════════════════════════════
    // GARDEN DECORATIONS
    // ═══════════════════════════════════════════════════════════════

    let gardening: Vec<(&str, &str, u64, &str)> = vec![
        ("garden_chair", "Garden Chair", 35_000, "sprites/bench.png"),
        ("fountain", "Fountain", 1_000_000, "sprites/fountain.png"),
    ];
    for (id, name, cost, sprite) in gardening {
        catalog.gardening.insert(
            id.into(),
            DecorDef {
                name: name.into(),
                cost,
                sprite: sprite.into(),
            },
        );
    }

    // ═══════════════════════════════════════════════════════════════
    // CAT ACCESSORIES
    // ═══════════════════════════════════════════════════════════════

    let accessories: Vec<(&str, &str, u64, &str)> = vec![
        ("hat", "Hat", 50, "sprites/hat.png"),
        ("bowtie", "Bowtie", 30, "sprites/bowtie.png"),
    ];
    for (id, name, cost, sprite) in accessories {
        catalog.cat_accessories.insert(
            id.into(),
            DecorDef {
                name: name.into(),
                cost,
                sprite: sprite.into(),
            },
        );
    }

    // ═══════════════════════════════════════════════════════════════
    // FLOOR PLANS — homes and gardens
    // ═══════════════════════════════════════════════════════════════
    //
    // Costs strictly increase with grid size within each table, which is
    // what makes the upgrade path well-defined (upgrade requires a
    // strictly more expensive plan).

    let homes: Vec<(&str, &str, u64, u8, &str)> = vec![
        ("shack", "Shack", 1_000_000, 3, "sprites/small_house.png"),
        (
            "regular_house",
            "Regular House",
            100_000_000,
            4,
            "sprites/large_house.png",
        ),
        (
            "garden_house",
            "Garden House",
            500_000_000,
            5,
            "sprites/large_house.png",
        ),
        ("castle", "Castle", 1_000_000_000, 6, "sprites/large_house.png"),
    ];
    for (id, name, cost, grid_size, sprite) in homes {
        catalog.homes.insert(
            id.into(),
            PlanDef {
                name: name.into(),
                cost,
                grid_size,
                sprite: sprite.into(),
            },
        );
    }

    let gardens: Vec<(&str, &str, u64, u8, &str)> = vec![
        (
            "small_garden",
            "Small Garden",
            500_000,
            3,
            "sprites/small_garden.png",
        ),
        (
            "medium_garden",
            "Medium Garden",
            2_000_000,
            4,
            "sprites/medium_garden.png",
        ),
        (
            "large_garden",
            "Large Garden",
            5_000_000,
            5,
            "sprites/large_garden.png",
        ),
    ];
    for (id, name, cost, grid_size, sprite) in gardens {
        catalog.gardens.insert(
            id.into(),
            PlanDef {
                name: name.into(),
                cost,
                grid_size,
                sprite: sprite.into(),
            },
        );
    }
}
