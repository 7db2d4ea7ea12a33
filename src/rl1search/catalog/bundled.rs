//! The catalog shipped inside the binary.
//!
//! Files are embedded at compile time and listed in loader order: shields
//! first, throwing blades last, then the two spell schools. Tie-breaking in
//! sorts follows this order, so it must not change between builds.

/// `(category, file contents)` for each weapon category.
pub const WEAPON_FILES: [(&str, &str); 42] = [
    (
        "Thrusting Shields",
        include_str!("../../../data/weapons_thrusting_shields.json"),
    ),
    (
        "Greatshields",
        include_str!("../../../data/weapons_greatshields.json"),
    ),
    (
        "Medium Shields",
        include_str!("../../../data/weapons_medium_shields.json"),
    ),
    (
        "Small Shields",
        include_str!("../../../data/weapons_small_shields.json"),
    ),
    (
        "Torches",
        include_str!("../../../data/weapons_torches.json"),
    ),
    (
        "Sacred Seals",
        include_str!("../../../data/weapons_sacred_seals.json"),
    ),
    (
        "Staves",
        include_str!("../../../data/weapons_staves.json"),
    ),
    (
        "Ballistas",
        include_str!("../../../data/weapons_ballistas.json"),
    ),
    (
        "Crossbows",
        include_str!("../../../data/weapons_crossbows.json"),
    ),
    (
        "Greatbows",
        include_str!("../../../data/weapons_greatbows.json"),
    ),
    (
        "Bows",
        include_str!("../../../data/weapons_bows.json"),
    ),
    (
        "Light Bows",
        include_str!("../../../data/weapons_light_bows.json"),
    ),
    (
        "Perfume Bottles",
        include_str!("../../../data/weapons_perfume_bottles.json"),
    ),
    (
        "Beast Claws",
        include_str!("../../../data/weapons_beast_claws.json"),
    ),
    (
        "Claws",
        include_str!("../../../data/weapons_claws.json"),
    ),
    (
        "Hand-to-Hand",
        include_str!("../../../data/weapons_hand_to_hand.json"),
    ),
    (
        "Fists",
        include_str!("../../../data/weapons_fists.json"),
    ),
    (
        "Whips",
        include_str!("../../../data/weapons_whips.json"),
    ),
    (
        "Reapers",
        include_str!("../../../data/weapons_reapers.json"),
    ),
    (
        "Halberds",
        include_str!("../../../data/weapons_halberds.json"),
    ),
    (
        "Great Spears",
        include_str!("../../../data/weapons_great_spears.json"),
    ),
    (
        "Spears",
        include_str!("../../../data/weapons_spears.json"),
    ),
    (
        "Colossal Weapons",
        include_str!("../../../data/weapons_colossal_weapons.json"),
    ),
    (
        "Great Hammers",
        include_str!("../../../data/weapons_great_hammers.json"),
    ),
    (
        "Flails",
        include_str!("../../../data/weapons_flails.json"),
    ),
    (
        "Hammers",
        include_str!("../../../data/weapons_hammers.json"),
    ),
    (
        "Greataxes",
        include_str!("../../../data/weapons_greataxes.json"),
    ),
    (
        "Axes",
        include_str!("../../../data/weapons_axes.json"),
    ),
    (
        "Twinblades",
        include_str!("../../../data/weapons_twinblades.json"),
    ),
    (
        "Great Katanas",
        include_str!("../../../data/weapons_great_katanas.json"),
    ),
    (
        "Katanas",
        include_str!("../../../data/weapons_katanas.json"),
    ),
    (
        "Backhand Blades",
        include_str!("../../../data/weapons_backhand_blades.json"),
    ),
    (
        "Curved Greatswords",
        include_str!("../../../data/weapons_curved_greatswords.json"),
    ),
    (
        "Curved Swords",
        include_str!("../../../data/weapons_curved_swords.json"),
    ),
    (
        "Heavy Thrusting Swords",
        include_str!("../../../data/weapons_heavy_thrusting_swords.json"),
    ),
    (
        "Thrusting Swords",
        include_str!("../../../data/weapons_thrusting_swords.json"),
    ),
    (
        "Colossal Swords",
        include_str!("../../../data/weapons_colossal_swords.json"),
    ),
    (
        "Greatswords",
        include_str!("../../../data/weapons_greatswords.json"),
    ),
    (
        "Light Greatswords",
        include_str!("../../../data/weapons_light_greatswords.json"),
    ),
    (
        "Straight Swords",
        include_str!("../../../data/weapons_straight_swords.json"),
    ),
    (
        "Daggers",
        include_str!("../../../data/weapons_daggers.json"),
    ),
    (
        "Throwing Blades",
        include_str!("../../../data/weapons_throwing_blades.json"),
    ),
];

/// `(school, file contents)` for each spell school.
pub const SPELL_FILES: [(&str, &str); 2] = [
    ("Sorcery", include_str!("../../../data/spells_sorcery.json")),
    (
        "Incantation",
        include_str!("../../../data/spells_incantation.json"),
    ),
];
