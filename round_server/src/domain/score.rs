// Scoring rules: per-player containers scanned against a weighted wool table.

// Only stacks of this item type count toward a score.
pub const SCORED_ITEM_TYPE: &str = "minecraft:wool";

// Weight for any wool variant not listed below (white and the rest).
pub const COMMON_WEIGHT: i64 = 1;

// Variant data value -> weight.
const VARIANT_WEIGHTS: [(u32, i64); 4] = [
    (2, 5),   // purple
    (11, 3),  // blue
    (14, 2),  // red
    (15, 10), // black
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockLocation {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockLocation {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub type_id: String,
    pub variant: u32,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(type_id: impl Into<String>, variant: u32, quantity: u32) -> Self {
        Self {
            type_id: type_id.into(),
            variant,
            quantity,
        }
    }

    pub fn wool(variant: u32, quantity: u32) -> Self {
        Self::new(SCORED_ITEM_TYPE, variant, quantity)
    }
}

// Indexed slots of a container block; empty slots are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub slots: Vec<Option<ItemStack>>,
}

impl Container {
    pub fn new(slots: Vec<Option<ItemStack>>) -> Self {
        Self { slots }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn item(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

pub fn variant_weight(variant: u32) -> i64 {
    VARIANT_WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == variant)
        .map_or(COMMON_WEIGHT, |(_, weight)| *weight)
}

// Full rescan of the container.
pub fn container_score(container: &Container) -> i64 {
    (0..container.size())
        .filter_map(|index| container.item(index))
        .filter(|stack| stack.type_id == SCORED_ITEM_TYPE)
        .map(|stack| variant_weight(stack.variant) * i64::from(stack.quantity))
        .sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player_name: String,
    pub value: i64,
}

/// Running leader of the current round.
///
/// The record is only replaced by a strictly higher score, so within a round
/// the score never goes down and ties keep the earlier leader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinningRecord {
    pub player_name: String,
    pub score: i64,
}

impl WinningRecord {
    /// Returns true when the entry took the lead.
    pub fn observe(&mut self, entry: &ScoreEntry) -> bool {
        if entry.value <= self.score {
            return false;
        }
        self.player_name = entry.player_name.clone();
        self.score = entry.value;
        true
    }

    pub fn has_winner(&self) -> bool {
        self.score > 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
