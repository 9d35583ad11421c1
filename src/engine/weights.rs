use super::movements::Movement;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairEntry {
    pub token: String,
    pub count: u32,
    pub weight: f64,
}

/// Cumulative weight per token string. Remembers first-insertion order so
/// equal weights rank deterministically.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    entries: Vec<PairEntry>,
    index: HashMap<String, usize>,
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward key always; reverse key too unless it is a palindrome.
    pub fn from_movements(movements: &[Movement]) -> Self {
        let mut table = Self::new();
        for m in movements {
            table.add(&m.token, m.weight);
            if m.reverse != m.token {
                table.add(&m.reverse, m.weight);
            }
        }
        table
    }

    pub fn add(&mut self, token: &str, weight: f64) {
        match self.index.get(token) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.count += 1;
                entry.weight += weight;
            }
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(PairEntry {
                    token: token.to_string(),
                    count: 1,
                    weight,
                });
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<&PairEntry> {
        self.index.get(token).map(|&i| &self.entries[i])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[PairEntry] {
        &self.entries
    }

    /// Descending by weight; the sort is stable so ties keep insertion order.
    pub fn ranked(&self) -> Vec<&PairEntry> {
        let mut ranked: Vec<&PairEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
