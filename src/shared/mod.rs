//! Shared resources, events, and states for Purrville.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain module is imported by any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// ITEM IDENTITY & CATEGORIES
// ═══════════════════════════════════════════════════════════════════════

pub type ItemId = String;

/// The four purchasable item categories. Each owns one catalog table and
/// one inventory stock; the purchase flow is the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Buildings,
    Furniture,
    Gardening,
    CatAccessories,
}

/// Which plan slot a buy/upgrade addresses. At most one plan of each kind
/// can be owned at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanKind {
    Home,
    Garden,
}

/// One of the three placement boards. Home and garden boards only exist
/// while the matching plan is owned; the cat overlay is always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridKind {
    Home,
    Garden,
    CatOverlay,
}

impl GridKind {
    /// The inventory category this board draws from and refunds into.
    pub fn category(self) -> Category {
        match self {
            GridKind::Home => Category::Furniture,
            GridKind::Garden => Category::Gardening,
            GridKind::CatOverlay => Category::CatAccessories,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CATALOG — static reference data, populated once at boot
// ═══════════════════════════════════════════════════════════════════════

/// A passive-income building type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingDef {
    pub name: String,
    pub cost: u64,
    /// Points credited per owned unit per income tick.
    pub income: u64,
}

/// A placeable decoration or accessory type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorDef {
    pub name: String,
    pub cost: u64,
    /// Asset path for whatever front end renders this item.
    pub sprite: String,
}

/// A home or garden floor plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDef {
    pub name: String,
    pub cost: u64,
    /// Side length of the square placement board this plan provides.
    pub grid_size: u8,
    pub sprite: String,
}

/// All purchasable item definitions, keyed by item id within each table.
/// Read-only after `DataPlugin` populates it during `GameState::Loading`.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    pub buildings: HashMap<ItemId, BuildingDef>,
    pub furniture: HashMap<ItemId, DecorDef>,
    pub gardening: HashMap<ItemId, DecorDef>,
    pub cat_accessories: HashMap<ItemId, DecorDef>,
    pub homes: HashMap<ItemId, PlanDef>,
    pub gardens: HashMap<ItemId, PlanDef>,
}

impl Catalog {
    /// Price of an item in any of the four shop categories, or `None` if
    /// the id is not in that category's table.
    pub fn price(&self, category: Category, item_id: &str) -> Option<u64> {
        match category {
            Category::Buildings => self.buildings.get(item_id).map(|d| d.cost),
            Category::Furniture => self.furniture.get(item_id).map(|d| d.cost),
            Category::Gardening => self.gardening.get(item_id).map(|d| d.cost),
            Category::CatAccessories => self.cat_accessories.get(item_id).map(|d| d.cost),
        }
    }

    pub fn plans(&self, kind: PlanKind) -> &HashMap<ItemId, PlanDef> {
        match kind {
            PlanKind::Home => &self.homes,
            PlanKind::Garden => &self.gardens,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WALLET — spendable points + lifetime counter
// ═══════════════════════════════════════════════════════════════════════

/// The player's currency. `balance` can never go negative: the only way
/// down is `try_debit`, which refuses overdrafts. `lifetime_earned` only
/// ever grows and is what cat-unlock thresholds are measured against.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: u64,
    pub lifetime_earned: u64,
}

impl Wallet {
    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.lifetime_earned = self.lifetime_earned.saturating_add(amount);
    }

    /// Deducts `amount` iff the balance covers it. Returns whether the
    /// debit went through; on failure the balance is untouched.
    #[must_use]
    pub fn try_debit(&mut self, amount: u64) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            true
        } else {
            false
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HOLDINGS — owned-but-not-placed counts, one stock per category
// ═══════════════════════════════════════════════════════════════════════

/// Owned counts for one category. Ids absent from the map count as zero;
/// entries are dropped when they reach zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stock {
    counts: HashMap<ItemId, u32>,
}

impl Stock {
    pub fn count(&self, item_id: &str) -> u32 {
        self.counts.get(item_id).copied().unwrap_or(0)
    }

    pub fn add_one(&mut self, item_id: &str) {
        *self.counts.entry(item_id.to_string()).or_insert(0) += 1;
    }

    /// Removes one unit iff at least one is owned.
    #[must_use]
    pub fn take_one(&mut self, item_id: &str) -> bool {
        match self.counts.get_mut(item_id) {
            Some(n) if *n > 0 => {
                *n -= 1;
                if *n == 0 {
                    self.counts.remove(item_id);
                }
                true
            }
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.counts.iter().map(|(id, n)| (id, *n))
    }
}

/// All four inventories. Buildings live here too — owning a building is
/// just a count; the income scheduler reads it every tick.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holdings {
    pub buildings: Stock,
    pub furniture: Stock,
    pub gardening: Stock,
    pub cat_accessories: Stock,
}

impl Holdings {
    pub fn stock(&self, category: Category) -> &Stock {
        match category {
            Category::Buildings => &self.buildings,
            Category::Furniture => &self.furniture,
            Category::Gardening => &self.gardening,
            Category::CatAccessories => &self.cat_accessories,
        }
    }

    pub fn stock_mut(&mut self, category: Category) -> &mut Stock {
        match category {
            Category::Buildings => &mut self.buildings,
            Category::Furniture => &mut self.furniture,
            Category::Gardening => &mut self.gardening,
            Category::CatAccessories => &mut self.cat_accessories,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLACEMENT BOARDS
// ═══════════════════════════════════════════════════════════════════════

/// Placement rotation, advancing clockwise in 90° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

/// One placed decoration on a board. The id is unique per board for the
/// lifetime of the session, so drag/gesture layers can track items across
/// rotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: u64,
    pub item_id: ItemId,
    /// Flat cell index, `0..size²`, row-major.
    pub position: usize,
    pub rotation: Rotation,
}

/// The pending "tapped an inventory item, about to place it" handle.
/// At most one per board; persists until placed, replaced, or deselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub item_id: ItemId,
    pub rotation: Rotation,
}

/// A square placement board: `size²` cells, each holding at most one item.
/// The same structure backs the home floor, the garden, and the cat
/// accessory overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub size: u8,
    pub items: Vec<PlacedItem>,
    pub selection: Option<Selection>,
    next_id: u64,
}

impl Board {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            items: Vec::new(),
            selection: None,
            next_id: 0,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    pub fn item_at(&self, position: usize) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.position == position)
    }

    pub fn is_occupied(&self, position: usize) -> bool {
        self.item_at(position).is_some()
    }

    /// Inserts an item at a cell the caller has already validated as empty
    /// and in bounds. Returns the new item's id.
    pub fn insert(&mut self, item_id: ItemId, position: usize, rotation: Rotation) -> u64 {
        debug_assert!(position < self.cell_count());
        debug_assert!(!self.is_occupied(position));
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(PlacedItem {
            id,
            item_id,
            position,
            rotation,
        });
        id
    }

    /// Advances the rotation of the item at `position` by 90°. Returns
    /// false if the cell is empty.
    pub fn rotate_at(&mut self, position: usize) -> bool {
        match self.items.iter_mut().find(|item| item.position == position) {
            Some(item) => {
                item.rotation = item.rotation.next();
                true
            }
            None => false,
        }
    }

    /// Deletes and returns the item at `position`, if any. The caller is
    /// responsible for refunding the unit to the matching stock.
    pub fn remove_at(&mut self, position: usize) -> Option<PlacedItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.position == position)?;
        Some(self.items.remove(index))
    }

    /// Empties the board, returning every placed item (upgrade refund path).
    pub fn drain_items(&mut self) -> Vec<PlacedItem> {
        self.selection = None;
        std::mem::take(&mut self.items)
    }
}

/// An owned home or garden: the plan id, the board it provides, and the
/// grid size frozen at purchase time (catalog edits never resize an owned
/// plan).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub plan_id: ItemId,
    pub grid_size: u8,
    pub board: Board,
}

impl Plan {
    pub fn new(plan_id: ItemId, grid_size: u8) -> Self {
        Self {
            plan_id,
            grid_size,
            board: Board::new(grid_size),
        }
    }
}

/// The owned home, if any. `None` means the home board is in its Empty
/// state and every placement operation against it is a no-op.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeState {
    pub plan: Option<Plan>,
}

/// The owned garden, if any. Same Empty-state rules as [`HomeState`].
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct GardenState {
    pub plan: Option<Plan>,
}

pub const CAT_BOARD_SIZE: u8 = 3;

/// The cat accessory overlay. Unlike home/garden it needs no plan: it is
/// always a fixed 3×3 board.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CatBoard {
    pub board: Board,
}

impl Default for CatBoard {
    fn default() -> Self {
        Self {
            board: Board::new(CAT_BOARD_SIZE),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CATS
// ═══════════════════════════════════════════════════════════════════════

/// An unlocked cat and its customization accessory list. Accessories come
/// from the shared CatAccessories pool but dressing does not consume
/// stock; only overlay placement does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub id: usize,
    pub accessories: Vec<ItemId>,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatCollection {
    pub cats: Vec<Cat>,
}

impl CatCollection {
    /// Lifetime-earned points required to unlock the next cat.
    pub fn next_unlock_threshold(&self, points_per_cat: u64) -> u64 {
        points_per_cat * (self.cats.len() as u64 + 1)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CONFIG & SESSION STATS
// ═══════════════════════════════════════════════════════════════════════

/// Session tunables, gathered in one place so tests and embedders can
/// shrink the numbers.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_balance: u64,
    pub tap_reward: u64,
    pub income_interval_secs: f32,
    pub points_per_cat: u64,
    pub max_cats: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance: 1_000_000_000,
            tap_reward: 1_000,
            income_interval_secs: 1.0,
            points_per_cat: 150,
            max_cats: 4,
        }
    }
}

/// Running per-session counters, for the HUD and debugging.
#[derive(Resource, Debug, Clone, Default)]
pub struct SessionStats {
    pub taps: u64,
    pub purchases: u64,
    pub income_ticks: u64,
}

// ═══════════════════════════════════════════════════════════════════════
// CROSS-DOMAIN EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// A user-facing notification. The engine emits these for every denied
/// operation; whatever front end is attached decides how to show them.
#[derive(Event, Debug, Clone)]
pub struct ToastEvent {
    pub message: String,
    pub duration_secs: f32,
}
