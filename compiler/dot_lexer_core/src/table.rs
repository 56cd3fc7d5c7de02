//! Ordered rule table.
//!
//! Priority is position in the table: the first rule that matches wins,
//! even when a later rule would match a longer prefix. Reordering rules
//! changes tokenization and is part of the grammar, not an implementation
//! detail.

use crate::{LexRule, RuleMatch, SourcePosition};

/// Read-only, ordered list of rules. Holds no per-run state.
#[derive(Clone, Debug)]
pub struct RuleTable<K> {
    rules: Vec<LexRule<K>>,
}

impl<K: Copy> RuleTable<K> {
    pub fn new(rules: Vec<LexRule<K>>) -> Self {
        Self { rules }
    }

    /// First rule matching at the cursor, with its index in the table.
    pub fn first_match<'src>(
        &self,
        position: &SourcePosition<'src>,
    ) -> Option<(usize, RuleMatch<'src, K>)> {
        self.rules
            .iter()
            .enumerate()
            .find_map(|(index, rule)| rule.try_match(position).map(|m| (index, m)))
    }

    pub fn rules(&self) -> &[LexRule<K>] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&LexRule<K>> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LexRule<K>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a, K> IntoIterator for &'a RuleTable<K> {
    type Item = &'a LexRule<K>;
    type IntoIter = std::slice::Iter<'a, LexRule<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests;
