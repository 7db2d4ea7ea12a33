//! Source record shapes and their conversion into [`Item`]s.
//!
//! The data files are scraped from the wikis, so every field is read
//! leniently: a missing, null or wrongly typed value becomes zero, an empty
//! string or an empty list instead of failing the record. Only records that
//! are not JSON objects, or that carry no name at all, are skipped.

use crate::model::{
    is_spell_tool_category, AttackTypes, Item, ItemKind, Links, RequiredAttributes, NONE_LABEL,
    PHYSICAL,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeaponRecord {
    #[serde(deserialize_with = "lenient_string")]
    weapon_name: String,
    #[serde(deserialize_with = "lenient_string")]
    weapon_type: String,
    #[serde(rename = "wikiGGLink", deserialize_with = "lenient_string")]
    wiki_gg_link: String,
    #[serde(rename = "wikiFextralifeLink", deserialize_with = "lenient_string")]
    fextralife_link: String,
    #[serde(deserialize_with = "lenient")]
    attributes: WeaponAttributes,
    #[serde(deserialize_with = "lenient")]
    damage_types: DamagePair,
    #[serde(deserialize_with = "lenient")]
    attack_types: AttackPair,
    #[serde(deserialize_with = "lenient_string")]
    status_buildup: String,
    #[serde(deserialize_with = "lenient")]
    image: ImageRef,
    #[serde(deserialize_with = "lenient_bool")]
    dlc_exclusive: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeaponAttributes {
    #[serde(deserialize_with = "lenient_strength")]
    strength: Strength,
    #[serde(deserialize_with = "lenient_u32")]
    dexterity: u32,
    #[serde(deserialize_with = "lenient_u32")]
    intelligence: u32,
    #[serde(deserialize_with = "lenient_u32")]
    faith: u32,
    #[serde(deserialize_with = "lenient_u32")]
    arcane: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Strength {
    one_hand: u32,
    two_hand: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DamagePair {
    #[serde(deserialize_with = "lenient_string")]
    major: String,
    #[serde(deserialize_with = "lenient_strings")]
    minor: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AttackPair {
    #[serde(deserialize_with = "lenient_string")]
    primary: String,
    #[serde(deserialize_with = "lenient_string")]
    secondary: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageRef {
    #[serde(deserialize_with = "lenient_string")]
    src: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SpellRecord {
    #[serde(deserialize_with = "lenient_string")]
    spell_name: String,
    #[serde(deserialize_with = "lenient_string")]
    spell_type: String,
    #[serde(deserialize_with = "lenient")]
    requirements: SpellRequirements,
    #[serde(deserialize_with = "lenient_strings")]
    damage_types: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    status_buildup: String,
    #[serde(rename = "wikiGGLink", deserialize_with = "lenient_string")]
    wiki_gg_link: String,
    #[serde(rename = "wikiFextralifeLink", deserialize_with = "lenient_string")]
    fextralife_link: String,
    #[serde(rename = "imageUrl", deserialize_with = "lenient_string")]
    image_url: String,
    #[serde(deserialize_with = "lenient_bool")]
    dlc_exclusive: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SpellRequirements {
    #[serde(deserialize_with = "lenient_u32")]
    intelligence: u32,
    #[serde(deserialize_with = "lenient_u32")]
    faith: u32,
    #[serde(deserialize_with = "lenient_u32")]
    arcane: u32,
}

/// Converts the records of one weapon file. `category` labels records that
/// do not name their own weapon type.
pub fn weapon_items(category: &str, records: Vec<Value>, origin: &str) -> Vec<Item> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(pos, value)| {
            let record: WeaponRecord = decode_record(value, origin, pos)?;
            if record.weapon_name.trim().is_empty() {
                tracing::warn!(origin, pos, "skipping weapon record without a name");
                return None;
            }
            Some(weapon_item(category, record))
        })
        .collect()
}

/// Converts the records of one spell file. `school` labels records that do
/// not name their own spell type.
pub fn spell_items(school: &str, records: Vec<Value>, origin: &str) -> Vec<Item> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(pos, value)| {
            let record: SpellRecord = decode_record(value, origin, pos)?;
            if record.spell_name.trim().is_empty() {
                tracing::warn!(origin, pos, "skipping spell record without a name");
                return None;
            }
            Some(spell_item(school, record))
        })
        .collect()
}

fn decode_record<T: DeserializeOwned>(value: Value, origin: &str, pos: usize) -> Option<T> {
    if !value.is_object() {
        tracing::warn!(origin, pos, "skipping catalog record that is not an object");
        return None;
    }
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(origin, pos, error = %e, "skipping unreadable catalog record");
            None
        }
    }
}

fn weapon_item(fallback_category: &str, record: WeaponRecord) -> Item {
    let category = non_empty_or(record.weapon_type, fallback_category);
    let attrs = record.attributes;
    Item {
        name: record.weapon_name.trim().to_string(),
        kind: ItemKind::Weapon,
        damage_types: tracked_weapon_damage(&category, &record.damage_types),
        category,
        required: RequiredAttributes {
            strength_one_hand: attrs.strength.one_hand,
            strength_two_hand: attrs.strength.two_hand,
            dexterity: attrs.dexterity,
            intelligence: attrs.intelligence,
            faith: attrs.faith,
            arcane: attrs.arcane,
        },
        attack_types: AttackTypes {
            primary: non_empty_or(record.attack_types.primary, NONE_LABEL),
            secondary: non_empty_or(record.attack_types.secondary, NONE_LABEL),
        },
        status_buildup: status_label(&record.status_buildup),
        dlc_exclusive: record.dlc_exclusive,
        links: Links {
            wiki_gg: record.wiki_gg_link,
            fextralife: record.fextralife_link,
        },
        image: record.image.src,
    }
}

fn spell_item(fallback_school: &str, record: SpellRecord) -> Item {
    let req = record.requirements;
    Item {
        name: record.spell_name.trim().to_string(),
        kind: ItemKind::Spell,
        category: non_empty_or(record.spell_type, fallback_school),
        required: RequiredAttributes {
            intelligence: req.intelligence,
            faith: req.faith,
            arcane: req.arcane,
            ..Default::default()
        },
        damage_types: tracked_spell_damage(record.damage_types),
        attack_types: AttackTypes::none(),
        status_buildup: status_label(&record.status_buildup),
        dlc_exclusive: record.dlc_exclusive,
        links: Links {
            wiki_gg: record.wiki_gg_link,
            fextralife: record.fextralife_link,
        },
        image: record.image_url,
    }
}

/// Applies the physical-suppression rule to a weapon's major/minor damage.
///
/// Catalysts track nothing. Otherwise any non-physical type hides
/// `Physical`, and a weapon with no other type tracks exactly `Physical`.
fn tracked_weapon_damage(category: &str, pair: &DamagePair) -> Vec<String> {
    if is_spell_tool_category(category) {
        return Vec::new();
    }
    let mut elemental: Vec<String> = Vec::new();
    for label in std::iter::once(&pair.major).chain(pair.minor.iter()) {
        let label = label.trim();
        if label.is_empty() || label == NONE_LABEL || label == PHYSICAL {
            continue;
        }
        if !elemental.iter().any(|seen| seen == label) {
            elemental.push(label.to_string());
        }
    }
    if elemental.is_empty() {
        vec![PHYSICAL.to_string()]
    } else {
        elemental
    }
}

fn tracked_spell_damage(types: Vec<String>) -> Vec<String> {
    let types: Vec<String> = types
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if types.is_empty() {
        vec![NONE_LABEL.to_string()]
    } else {
        types
    }
}

/// Display form of a status buildup: `blood_loss` becomes `Blood Loss`, an
/// absent value or `none` becomes `None`.
pub fn status_label(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
        return NONE_LABEL.to_string();
    }
    raw.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

// --- lenient field readers ---

fn lenient<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(de)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_strings<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn lenient_u32<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    Ok(number(&Value::deserialize(de)?))
}

/// Strength is either `{ "one_hand": n, "two_hand": m }` or a flat number
/// that applies to both grips.
fn lenient_strength<'de, D: Deserializer<'de>>(de: D) -> Result<Strength, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(match &value {
        Value::Object(map) => Strength {
            one_hand: map.get("one_hand").map(number).unwrap_or(0),
            two_hand: map.get("two_hand").map(number).unwrap_or(0),
        },
        flat => {
            let n = number(flat);
            Strength {
                one_hand: n,
                two_hand: n,
            }
        }
    })
}

fn number(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.round() as u64))
            .map(|n| n.min(u32::MAX as u64) as u32)
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
