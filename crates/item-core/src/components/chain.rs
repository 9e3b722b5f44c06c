//! Ability Chain
//!
//! Singly linked list of abilities ordered by unlock level. Nodes live in an
//! arena owned by the chain and link to each other by [`AbilityId`], so the
//! chain can be relinked (inserted into, merge sorted) without moving any
//! ability.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ability::{Ability, AbilityDefinition};

/// Stable index of an ability inside its chain's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbilityId(usize);

impl AbilityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a new ability is attached to a non-empty chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsertPolicy {
    /// Splice in after every node whose level is <= the new level.
    /// The chain stays sorted after each insertion.
    #[default]
    Ordered,
    /// Attach at the tail regardless of level. The chain needs a
    /// [`AbilityChain::merge_sort`] afterwards to be level-ordered.
    Append,
}

#[derive(Debug)]
struct ChainNode {
    ability: Ability,
    next: Option<AbilityId>,
}

/// Abilities of one item, linked head to tail.
#[derive(Debug, Default)]
pub struct AbilityChain {
    nodes: Vec<ChainNode>,
    head: Option<AbilityId>,
}

impl AbilityChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Ability> {
        self.head.map(|id| self.ability(id))
    }

    pub fn get(&self, id: AbilityId) -> Option<&Ability> {
        self.nodes.get(id.0).map(|node| &node.ability)
    }

    pub fn get_mut(&mut self, id: AbilityId) -> Option<&mut Ability> {
        self.nodes.get_mut(id.0).map(|node| &mut node.ability)
    }

    /// First ability in chain order with exactly this unlock level.
    pub fn find_by_level_mut(&mut self, unlock_level: u32) -> Option<&mut Ability> {
        let id = self
            .ids()
            .into_iter()
            .find(|id| self.level_of(*id) == unlock_level)?;
        self.get_mut(id)
    }

    /// Inserts an ability using the given policy.
    ///
    /// `None` leaves the chain unchanged. Into an empty chain the ability
    /// becomes the head under either policy.
    pub fn insert(
        &mut self,
        ability: impl Into<Option<Ability>>,
        policy: InsertPolicy,
    ) -> Option<AbilityId> {
        let ability = ability.into()?;
        let id = match policy {
            InsertPolicy::Ordered => self.insert_ordered(ability),
            InsertPolicy::Append => self.append(ability),
        };
        Some(id)
    }

    /// Attaches the ability at the tail.
    pub fn append(&mut self, ability: Ability) -> AbilityId {
        let tail = self.tail();
        let id = self.push_node(ability);
        match tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        id
    }

    /// Splices the ability in after the last node whose level is <= its own.
    pub fn insert_ordered(&mut self, ability: Ability) -> AbilityId {
        let level = ability.unlock_level();
        let id = self.push_node(ability);

        let mut prev = None;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            if self.level_of(current) > level {
                break;
            }
            prev = Some(current);
            cursor = self.next_of(current);
        }

        self.set_next(id, cursor);
        match prev {
            Some(prev) => self.set_next(prev, Some(id)),
            None => self.head = Some(id),
        }
        id
    }

    /// Stable merge sort by unlock level.
    pub fn merge_sort(&mut self) {
        self.head = self.sort_run(self.head);
    }

    /// Returns true if levels never decrease from head to tail.
    pub fn is_sorted(&self) -> bool {
        let levels: Vec<u32> = self.iter().map(Ability::unlock_level).collect();
        levels.windows(2).all(|w| w[0] <= w[1])
    }

    /// First ability in chain order whose level exceeds `current_level`.
    pub fn find_next_locked(&self, current_level: u32) -> Option<&Ability> {
        self.iter()
            .find(|ability| ability.unlock_level() > current_level)
    }

    /// Every ability with level <= `current_level`, in chain order.
    ///
    /// Scans the whole chain, so the result is right even before an
    /// append-built chain has been sorted.
    pub fn all_unlocked_at_or_below(&self, current_level: u32) -> Vec<&Ability> {
        self.iter()
            .filter(|ability| ability.is_unlocked_at(current_level))
            .collect()
    }

    pub fn to_vec(&self) -> Vec<&Ability> {
        self.iter().collect()
    }

    /// Ids in chain order.
    pub fn ids(&self) -> Vec<AbilityId> {
        let mut ids = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(id) = cursor {
            ids.push(id);
            cursor = self.next_of(id);
        }
        ids
    }

    /// Walks the chain one node per call to `next`.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: self.head,
        }
    }

    fn ability(&self, id: AbilityId) -> &Ability {
        &self.nodes[id.0].ability
    }

    fn level_of(&self, id: AbilityId) -> u32 {
        self.nodes[id.0].ability.unlock_level()
    }

    fn next_of(&self, id: AbilityId) -> Option<AbilityId> {
        self.nodes[id.0].next
    }

    fn set_next(&mut self, id: AbilityId, next: Option<AbilityId>) {
        self.nodes[id.0].next = next;
    }

    fn push_node(&mut self, ability: Ability) -> AbilityId {
        let id = AbilityId(self.nodes.len());
        self.nodes.push(ChainNode {
            ability,
            next: None,
        });
        id
    }

    fn tail(&self) -> Option<AbilityId> {
        let mut cursor = self.head?;
        while let Some(next) = self.next_of(cursor) {
            cursor = next;
        }
        Some(cursor)
    }

    fn sort_run(&mut self, head: Option<AbilityId>) -> Option<AbilityId> {
        let first = match head {
            Some(id) if self.next_of(id).is_some() => id,
            _ => return head,
        };

        let second = self.split(first);
        let left = self.sort_run(Some(first));
        let right = self.sort_run(second);
        self.merge(left, right)
    }

    /// Cuts the run after its midpoint and returns the head of the second half.
    ///
    /// The slow cursor moves one node for every two the fast cursor moves.
    fn split(&mut self, head: AbilityId) -> Option<AbilityId> {
        let mut slow = head;
        let mut fast = Some(head);

        while let Some(current) = fast {
            let Some(after) = self.next_of(current) else {
                break;
            };
            fast = self.next_of(after);
            if fast.is_some() {
                if let Some(next) = self.next_of(slow) {
                    slow = next;
                }
            }
        }

        let second = self.next_of(slow);
        self.set_next(slow, None);
        second
    }

    fn merge(
        &mut self,
        mut left: Option<AbilityId>,
        mut right: Option<AbilityId>,
    ) -> Option<AbilityId> {
        let mut head = None;
        let mut tail: Option<AbilityId> = None;

        loop {
            let picked = match (left, right) {
                (Some(l), Some(r)) => {
                    // Left wins ties to keep equal levels in their original order
                    if self.level_of(l) <= self.level_of(r) {
                        left = self.next_of(l);
                        l
                    } else {
                        right = self.next_of(r);
                        r
                    }
                }
                (rest, None) | (None, rest) => {
                    self.link(&mut head, tail, rest);
                    break;
                }
            };
            self.link(&mut head, tail, Some(picked));
            tail = Some(picked);
        }

        head
    }

    fn link(&mut self, head: &mut Option<AbilityId>, tail: Option<AbilityId>, next: Option<AbilityId>) {
        match tail {
            Some(tail) => self.set_next(tail, next),
            None => *head = next,
        }
    }
}

/// Iterator over a chain in link order.
pub struct ChainIter<'a> {
    chain: &'a AbilityChain,
    cursor: Option<AbilityId>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Ability;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.chain.next_of(id);
        Some(self.chain.ability(id))
    }
}

impl<'a> IntoIterator for &'a AbilityChain {
    type Item = &'a Ability;
    type IntoIter = ChainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drops every definition whose unlock level was already seen.
pub fn dedup_by_unlock_level(
    definitions: impl IntoIterator<Item = AbilityDefinition>,
) -> Vec<AbilityDefinition> {
    let mut seen = HashSet::new();
    definitions
        .into_iter()
        .filter(|def| seen.insert(def.unlock_level))
        .collect()
}

/// Builds a level-ordered chain from definitions.
///
/// Definitions are deduplicated by unlock level first (first occurrence
/// wins). Under [`InsertPolicy::Append`] the chain is merge sorted once all
/// definitions are in.
pub fn build_chain(
    definitions: impl IntoIterator<Item = AbilityDefinition>,
    policy: InsertPolicy,
) -> AbilityChain {
    let mut chain = AbilityChain::new();
    for def in dedup_by_unlock_level(definitions) {
        chain.insert(def.into_ability(), policy);
    }

    if policy == InsertPolicy::Append {
        chain.merge_sort();
    }

    tracing::debug!(abilities = chain.len(), ?policy, "built ability chain");
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(chain: &AbilityChain) -> Vec<u32> {
        chain.iter().map(Ability::unlock_level).collect()
    }

    fn names(abilities: &[&Ability]) -> Vec<String> {
        abilities.iter().map(|a| a.name().to_string()).collect()
    }

    fn chain_of(levels: &[u32], policy: InsertPolicy) -> AbilityChain {
        let mut chain = AbilityChain::new();
        for (i, level) in levels.iter().enumerate() {
            chain.insert(Ability::new(format!("a{}", i), "", *level), policy);
        }
        chain
    }

    #[test]
    fn test_insert_none_is_noop() {
        let mut chain = chain_of(&[1, 3], InsertPolicy::Ordered);
        assert!(chain.insert(None, InsertPolicy::Ordered).is_none());
        assert!(chain.insert(None, InsertPolicy::Append).is_none());
        assert_eq!(levels(&chain), vec![1, 3]);
    }

    #[test]
    fn test_first_insert_becomes_head() {
        for policy in [InsertPolicy::Ordered, InsertPolicy::Append] {
            let mut chain = AbilityChain::new();
            chain.insert(Ability::new("Glow", "", 4), policy);
            assert_eq!(chain.head().map(Ability::name), Some("Glow"));
            assert_eq!(chain.len(), 1);
        }
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let chain = chain_of(&[5, 1, 3], InsertPolicy::Append);
        assert_eq!(levels(&chain), vec![5, 1, 3]);
        assert!(!chain.is_sorted());
    }

    #[test]
    fn test_ordered_insert_stays_sorted() {
        let chain = chain_of(&[5, 1, 3, 0, 4], InsertPolicy::Ordered);
        assert_eq!(levels(&chain), vec![0, 1, 3, 4, 5]);
    }

    #[test]
    fn test_ordered_insert_ties_keep_insertion_order() {
        let chain = chain_of(&[2, 1, 2, 2], InsertPolicy::Ordered);
        assert_eq!(levels(&chain), vec![1, 2, 2, 2]);
        assert_eq!(names(&chain.to_vec()), vec!["a1", "a0", "a2", "a3"]);
    }

    #[test]
    fn test_merge_sort_orders_levels() {
        let mut chain = chain_of(&[9, 2, 7, 1, 8, 3], InsertPolicy::Append);
        chain.merge_sort();
        assert_eq!(levels(&chain), vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(chain.len(), 6);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let mut chain = chain_of(&[3, 1, 3, 1], InsertPolicy::Append);
        chain.merge_sort();
        assert_eq!(names(&chain.to_vec()), vec!["a1", "a3", "a0", "a2"]);
    }

    #[test]
    fn test_merge_sort_small_chains() {
        let mut empty = AbilityChain::new();
        empty.merge_sort();
        assert!(empty.is_empty());

        let mut single = chain_of(&[4], InsertPolicy::Append);
        single.merge_sort();
        assert_eq!(levels(&single), vec![4]);

        let mut pair = chain_of(&[4, 2], InsertPolicy::Append);
        pair.merge_sort();
        assert_eq!(levels(&pair), vec![2, 4]);
    }

    #[test]
    fn test_find_next_locked() {
        let chain = chain_of(&[1, 3, 5], InsertPolicy::Ordered);
        assert_eq!(chain.find_next_locked(0).map(Ability::unlock_level), Some(1));
        assert_eq!(chain.find_next_locked(3).map(Ability::unlock_level), Some(5));
        assert!(chain.find_next_locked(5).is_none());
        assert!(AbilityChain::new().find_next_locked(0).is_none());
    }

    #[test]
    fn test_all_unlocked_at_or_below() {
        let chain = chain_of(&[1, 3, 5], InsertPolicy::Ordered);
        let unlocked: Vec<u32> = chain
            .all_unlocked_at_or_below(4)
            .into_iter()
            .map(Ability::unlock_level)
            .collect();
        assert_eq!(unlocked, vec![1, 3]);
        assert!(AbilityChain::new().all_unlocked_at_or_below(10).is_empty());
    }

    #[test]
    fn test_all_unlocked_on_unsorted_chain() {
        let chain = chain_of(&[5, 1, 3], InsertPolicy::Append);
        let unlocked: Vec<u32> = chain
            .all_unlocked_at_or_below(3)
            .into_iter()
            .map(Ability::unlock_level)
            .collect();
        assert_eq!(unlocked, vec![1, 3]);
    }

    #[test]
    fn test_build_chain_dedups_first_wins() {
        let defs = vec![
            AbilityDefinition::new("Spark", "", 2),
            AbilityDefinition::new("Glow", "", 1),
            AbilityDefinition::new("Blaze", "", 2),
        ];
        let chain = build_chain(defs, InsertPolicy::Append);
        assert_eq!(names(&chain.to_vec()), vec!["Glow", "Spark"]);
    }

    #[test]
    fn test_find_by_level_mut() {
        let mut chain = chain_of(&[1, 3], InsertPolicy::Ordered);
        assert_eq!(chain.find_by_level_mut(3).map(|a| a.name().to_string()), Some("a1".to_string()));
        assert!(chain.find_by_level_mut(2).is_none());
    }

    #[test]
    fn test_ids_follow_links() {
        let chain = chain_of(&[5, 1], InsertPolicy::Ordered);
        let ids: Vec<usize> = chain.ids().into_iter().map(AbilityId::index).collect();
        assert_eq!(ids, vec![1, 0]);
    }
}
