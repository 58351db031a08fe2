//! Fleet composition rules.

use std::collections::BTreeMap;

/// Required composition of a legal fleet: how many ships of each deck count
/// the fleet must contain. The default is the classic ruleset of 4
/// single-deck, 3 double-deck, 2 three-deck and 1 four-deck ship.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetSpec {
    /// Mapping of deck count to the required number of ships of that class.
    classes: BTreeMap<usize, usize>,
}

impl FleetSpec {
    /// Build a spec from `(decks, ships)` pairs. Panics if any deck count or
    /// ship count is 0, or if a deck count repeats.
    pub fn new<I: IntoIterator<Item = (usize, usize)>>(classes: I) -> Self {
        let mut map = BTreeMap::new();
        for (decks, ships) in classes {
            assert!(decks > 0, "ship class must have at least one deck");
            assert!(ships > 0, "ship class must require at least one ship");
            let prev = map.insert(decks, ships);
            assert!(prev.is_none(), "duplicate class of {}-deck ships", decks);
        }
        Self { classes: map }
    }

    /// Total number of ships a legal fleet contains.
    pub fn total_ships(&self) -> usize {
        self.classes.values().sum()
    }

    /// Total number of decks a legal fleet contains.
    pub fn total_decks(&self) -> usize {
        self.classes.iter().map(|(decks, ships)| decks * ships).sum()
    }

    /// Number of ships required with the given deck count. Returns 0 for
    /// classes the spec doesn't mention.
    pub fn required(&self, decks: usize) -> usize {
        self.classes.get(&decks).copied().unwrap_or(0)
    }

    /// Iterate the `(decks, required ships)` classes in ascending deck count.
    pub fn classes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.classes.iter().map(|(&decks, &ships)| (decks, ships))
    }
}

impl Default for FleetSpec {
    /// The classic fleet: {1 deck: 4 ships, 2: 3, 3: 2, 4: 1}.
    fn default() -> Self {
        Self::new(vec![(1, 4), (2, 3), (3, 2), (4, 1)])
    }
}
