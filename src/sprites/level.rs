//! In-memory level inventory.
//!
//! `LevelInventory` answers every `SpriteInventory` query from precomputed
//! tables. It can be assembled directly from counts with
//! `LevelInventoryBuilder`, or derived from an ASCII level layout with
//! `LevelInventory::from_layout`.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::InventoryError;

use super::descriptor::{SpriteCategory, SpriteDescriptor};
use super::inventory::{Presence, SpriteInventory};

/// Sprite catalog plus per-level statistics.
///
/// ## Example
///
/// ```
/// use arcade_rulegen::sprites::{LevelInventory, Presence, SpriteCategory, SpriteDescriptor, SpriteInventory};
///
/// let layout = "\
/// wwwww
/// wA.gw
/// wwwww";
///
/// let inventory = LevelInventory::from_layout(
///     layout,
///     &[('w', &["wall"]), ('A', &["avatar"]), ('g', &["goal"]), ('.', &[])],
///     [
///         SpriteDescriptor::new("wall", SpriteCategory::Immovable),
///         SpriteDescriptor::new("avatar", SpriteCategory::Avatar),
///         SpriteDescriptor::new("goal", SpriteCategory::Portal).with_subtype("Door"),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(inventory.area(), 15);
/// assert_eq!(inventory.perimeter(), 12);
/// assert_eq!(inventory.population("wall"), 12);
/// assert_eq!(inventory.portals(Presence::Live).len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct LevelInventory {
    width: usize,
    height: usize,
    descriptors: Vec<SpriteDescriptor>,
    populations: Vec<usize>,
    border_counts: Vec<usize>,
    index: FxHashMap<String, usize>,
    /// Descriptor index pairs `(low, high)` sharing at least one tile.
    same_tile: FxHashSet<(usize, usize)>,
}

impl LevelInventory {
    /// Start building an inventory for a `width` x `height` level.
    pub fn builder(width: usize, height: usize) -> LevelInventoryBuilder {
        LevelInventoryBuilder::new(width, height)
    }

    /// Derive an inventory from an ASCII layout.
    ///
    /// Each character of `layout` is one tile; `legend` maps a character to
    /// the sprites stacked on that tile. Blank lines are ignored. Sprites
    /// declared in `descriptors` but absent from the map get a population
    /// of zero.
    pub fn from_layout(
        layout: &str,
        legend: &[(char, &[&str])],
        descriptors: impl IntoIterator<Item = SpriteDescriptor>,
    ) -> Result<Self, InventoryError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        if rows.is_empty() {
            return Err(InventoryError::EmptyLayout);
        }

        let width = rows[0].len();
        let height = rows.len();
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != width {
                return Err(InventoryError::RaggedLayout {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
        }

        let descriptors: Vec<SpriteDescriptor> = descriptors.into_iter().collect();
        let declared: FxHashSet<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();

        let mut symbols: FxHashMap<char, &[&str]> = FxHashMap::default();
        for &(symbol, names) in legend {
            if let Some(unknown) = names.iter().find(|name| !declared.contains(*name)) {
                return Err(InventoryError::UnknownSprite((*unknown).to_string()));
            }
            symbols.insert(symbol, names);
        }

        let mut populations: FxHashMap<&str, usize> = FxHashMap::default();
        let mut border_counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut stacked: Vec<(&str, &str)> = Vec::new();

        for (row, tiles) in rows.iter().enumerate() {
            for (column, symbol) in tiles.iter().enumerate() {
                let names = symbols.get(symbol).ok_or(InventoryError::UnmappedSymbol {
                    symbol: *symbol,
                    row,
                    column,
                })?;
                let on_border = row == 0 || column == 0 || row + 1 == height || column + 1 == width;

                for (i, name) in names.iter().enumerate() {
                    *populations.entry(*name).or_default() += 1;
                    if on_border {
                        *border_counts.entry(*name).or_default() += 1;
                    }
                    for other in &names[i + 1..] {
                        stacked.push((*name, *other));
                    }
                }
            }
        }

        let mut builder = LevelInventoryBuilder::new(width, height);
        for descriptor in descriptors.iter().cloned() {
            let population = populations.get(descriptor.name.as_str()).copied().unwrap_or(0);
            let border = border_counts.get(descriptor.name.as_str()).copied().unwrap_or(0);
            let name = descriptor.name.clone();
            builder = builder.sprite(descriptor, population).border_count(name, border);
        }
        for (a, b) in stacked {
            builder = builder.same_tile(a, b);
        }
        builder.build()
    }

    /// Level width in tiles.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Level height in tiles.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Look up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpriteDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    /// Iterate over all descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SpriteDescriptor> {
        self.descriptors.iter()
    }

    fn listing(&self, category: SpriteCategory, presence: Presence) -> Vec<SpriteDescriptor> {
        self.descriptors
            .iter()
            .zip(&self.populations)
            .filter(|(d, population)| {
                d.category == category && (presence == Presence::Any || **population > 0)
            })
            .map(|(d, _)| d.clone())
            .collect()
    }
}

impl SpriteInventory for LevelInventory {
    fn avatars(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        self.listing(SpriteCategory::Avatar, presence)
    }

    fn resources(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        self.listing(SpriteCategory::Resource, presence)
    }

    fn movables(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        self.listing(SpriteCategory::Movable, presence)
    }

    fn npcs(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        self.listing(SpriteCategory::Npc, presence)
    }

    fn spawners(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        self.listing(SpriteCategory::Spawner, presence)
    }

    fn portals(&self, presence: Presence) -> Vec<SpriteDescriptor> {
        self.listing(SpriteCategory::Portal, presence)
    }

    fn immovables(&self, min_population: usize, max_population: usize) -> Vec<SpriteDescriptor> {
        self.descriptors
            .iter()
            .zip(&self.populations)
            .filter(|(d, population)| {
                d.category == SpriteCategory::Immovable
                    && (min_population..=max_population).contains(*population)
            })
            .map(|(d, _)| d.clone())
            .collect()
    }

    fn population(&self, name: &str) -> usize {
        self.index.get(name).map_or(0, |&i| self.populations[i])
    }

    fn border_objects(&self, area_share: f64, border_share: f64) -> Vec<SpriteDescriptor> {
        let area = self.area();
        let perimeter = self.perimeter();
        if area == 0 || perimeter == 0 {
            return Vec::new();
        }

        self.descriptors
            .iter()
            .enumerate()
            .filter(|(i, d)| {
                d.category == SpriteCategory::Immovable
                    && self.populations[*i] as f64 / area as f64 >= area_share
                    && self.border_counts[*i] as f64 / perimeter as f64 >= border_share
            })
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn sprites_on_same_tile(&self, name: &str) -> Vec<SpriteDescriptor> {
        let Some(&target) = self.index.get(name) else {
            return Vec::new();
        };

        self.descriptors
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target && self.same_tile.contains(&ordered_pair(*i, target)))
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn perimeter(&self) -> usize {
        match (self.width, self.height) {
            (0, _) | (_, 0) => 0,
            (1, h) => h,
            (w, 1) => w,
            (w, h) => 2 * (w + h) - 4,
        }
    }

    fn area(&self) -> usize {
        self.width * self.height
    }
}

fn ordered_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Builder for a `LevelInventory` from precomputed counts.
#[derive(Clone, Debug, Default)]
pub struct LevelInventoryBuilder {
    width: usize,
    height: usize,
    sprites: Vec<(SpriteDescriptor, usize)>,
    border_counts: Vec<(String, usize)>,
    same_tile: Vec<(String, String)>,
}

impl LevelInventoryBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Declare a sprite with its live population.
    #[must_use]
    pub fn sprite(mut self, descriptor: SpriteDescriptor, population: usize) -> Self {
        self.sprites.push((descriptor, population));
        self
    }

    /// Number of instances of `name` on the outer ring of the level.
    #[must_use]
    pub fn border_count(mut self, name: impl Into<String>, count: usize) -> Self {
        self.border_counts.push((name.into(), count));
        self
    }

    /// Record that `a` and `b` share at least one tile.
    #[must_use]
    pub fn same_tile(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.same_tile.push((a.into(), b.into()));
        self
    }

    /// Validate and build the inventory.
    pub fn build(self) -> Result<LevelInventory, InventoryError> {
        let mut index = FxHashMap::default();
        let mut descriptors = Vec::with_capacity(self.sprites.len());
        let mut populations = Vec::with_capacity(self.sprites.len());

        for (descriptor, population) in self.sprites {
            if index.contains_key(&descriptor.name) {
                return Err(InventoryError::DuplicateSprite(descriptor.name));
            }
            index.insert(descriptor.name.clone(), descriptors.len());
            descriptors.push(descriptor);
            populations.push(population);
        }

        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| InventoryError::UnknownSprite(name.to_string()))
        };

        let mut border_counts = vec![0; descriptors.len()];
        for (name, count) in &self.border_counts {
            let i = lookup(name.as_str())?;
            if *count > populations[i] {
                return Err(InventoryError::BorderExceedsPopulation {
                    name: name.clone(),
                    border: *count,
                    population: populations[i],
                });
            }
            border_counts[i] = *count;
        }

        let mut same_tile = FxHashSet::default();
        for (a, b) in &self.same_tile {
            let (i, j) = (lookup(a.as_str())?, lookup(b.as_str())?);
            if i != j {
                same_tile.insert(ordered_pair(i, j));
            }
        }

        Ok(LevelInventory {
            width: self.width,
            height: self.height,
            descriptors,
            populations,
            border_counts,
            index,
            same_tile,
        })
    }
}
