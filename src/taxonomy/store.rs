//! In-memory taxonomy backed by a hypernym DAG.
//!
//! Loaded from a TSV file with one sense per line:
//!
//! ```text
//! sense_key \t pos \t lemma1,lemma2,... \t hypernym_key1,hypernym_key2
//! ```
//!
//! The fourth field is empty for category roots. The ranking order of a
//! lemma's senses is the order their lines appear in the file.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use crate::error::{Result, WordsimError};
use crate::taxonomy::{PartOfSpeech, Sense, Taxonomy, TaxonomyError};

#[derive(Debug)]
struct SenseNode {
    key: String,
    pos: PartOfSpeech,
    hypernyms: Vec<Sense>,
    depth: u32,
}

/// Concrete [`Taxonomy`] over an in-memory hypernym graph.
#[derive(Debug)]
pub struct TaxonomyStore {
    nodes: Vec<SenseNode>,
    by_lemma: HashMap<String, Vec<Sense>>,
    max_depths: HashMap<PartOfSpeech, u32>,
}

impl TaxonomyStore {
    /// Loads a taxonomy TSV file. Hypernym references may point forward.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut builder = TaxonomyBuilder::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 4 {
                return Err(WordsimError::Parse(format!(
                    "{}:{}: expected 4 tab-separated fields, got {}",
                    path.display(),
                    lineno + 1,
                    fields.len()
                )));
            }
            let pos: PartOfSpeech = fields[1].parse().map_err(|e| {
                WordsimError::Parse(format!("{}:{}: {}", path.display(), lineno + 1, e))
            })?;
            let lemmas: Vec<&str> = fields[2].split(',').filter(|s| !s.is_empty()).collect();
            let hypernyms: Vec<&str> = fields[3].split(',').filter(|s| !s.is_empty()).collect();
            builder.sense(fields[0], pos, &lemmas, &hypernyms);
        }
        builder.build()
    }

    /// Upward BFS from a sense, returning the minimum hypernym distance to
    /// every ancestor (the sense itself included at distance 0).
    fn ancestor_distances(&self, s: Sense) -> HashMap<u32, u32> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(s.0, 0u32);
        queue.push_back(s.0);
        while let Some(id) = queue.pop_front() {
            let d = dist[&id];
            for hypernym in &self.nodes[id as usize].hypernyms {
                if !dist.contains_key(&hypernym.0) {
                    dist.insert(hypernym.0, d + 1);
                    queue.push_back(hypernym.0);
                }
            }
        }
        dist
    }
}

impl Taxonomy for TaxonomyStore {
    fn senses(&self, lemma: &str, pos: Option<PartOfSpeech>) -> Vec<Sense> {
        let folded = caseless::default_case_fold_str(lemma);
        let candidates = match self.by_lemma.get(&folded) {
            Some(senses) => senses,
            None => return Vec::new(),
        };
        match pos {
            None => candidates.clone(),
            Some(p) => candidates
                .iter()
                .copied()
                .filter(|s| self.nodes[s.0 as usize].pos == p)
                .collect(),
        }
    }

    fn key(&self, sense: Sense) -> &str {
        &self.nodes[sense.0 as usize].key
    }

    fn part_of_speech(&self, sense: Sense) -> PartOfSpeech {
        self.nodes[sense.0 as usize].pos
    }

    fn depth(&self, sense: Sense) -> u32 {
        self.nodes[sense.0 as usize].depth
    }

    fn max_depth(&self, pos: PartOfSpeech) -> u32 {
        self.max_depths.get(&pos).copied().unwrap_or(0)
    }

    fn shortest_path_len(&self, a: Sense, b: Sense) -> Option<u32> {
        let dist_a = self.ancestor_distances(a);
        let dist_b = self.ancestor_distances(b);
        dist_a
            .iter()
            .filter_map(|(id, da)| dist_b.get(id).map(|db| da + db))
            .min()
    }

    fn comparable_subsumer(&self, a: Sense, b: Sense) -> std::result::Result<Sense, TaxonomyError> {
        if self.part_of_speech(a) != self.part_of_speech(b) {
            return Err(TaxonomyError::CrossCategory(
                self.key(a).to_string(),
                self.key(b).to_string(),
            ));
        }
        let dist_a = self.ancestor_distances(a);
        let dist_b = self.ancestor_distances(b);
        // Deepest common ancestor; key order breaks depth ties so the choice
        // is deterministic.
        dist_a
            .keys()
            .filter(|id| dist_b.contains_key(*id))
            .map(|&id| Sense(id))
            .max_by(|&x, &y| {
                self.depth(x)
                    .cmp(&self.depth(y))
                    .then_with(|| self.key(y).cmp(self.key(x)))
            })
            .ok_or_else(|| {
                TaxonomyError::NoCommonSubsumer(
                    self.key(a).to_string(),
                    self.key(b).to_string(),
                )
            })
    }
}

/// Incremental construction of a [`TaxonomyStore`], mainly for tests and
/// synthetic hierarchies.
#[derive(Default)]
pub struct TaxonomyBuilder {
    entries: Vec<(String, PartOfSpeech, Vec<String>, Vec<String>)>,
}

impl TaxonomyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one sense. `hypernyms` are sense keys and may reference senses
    /// added later.
    pub fn sense(
        &mut self,
        key: &str,
        pos: PartOfSpeech,
        lemmas: &[&str],
        hypernyms: &[&str],
    ) -> &mut Self {
        self.entries.push((
            key.to_string(),
            pos,
            lemmas.iter().map(|l| l.to_string()).collect(),
            hypernyms.iter().map(|h| h.to_string()).collect(),
        ));
        self
    }

    /// Resolves hypernym references and computes depths. Fails on duplicate
    /// or unknown sense keys and on hypernym cycles.
    pub fn build(self) -> Result<TaxonomyStore> {
        let mut index: HashMap<String, u32> = HashMap::with_capacity(self.entries.len());
        for (i, (key, _, _, _)) in self.entries.iter().enumerate() {
            if index.insert(key.clone(), i as u32).is_some() {
                return Err(WordsimError::Parse(format!(
                    "duplicate sense key {:?}",
                    key
                )));
            }
        }

        let mut nodes = Vec::with_capacity(self.entries.len());
        let mut by_lemma: HashMap<String, Vec<Sense>> = HashMap::new();
        for (i, (key, pos, lemmas, hypernym_keys)) in self.entries.iter().enumerate() {
            let mut hypernyms = Vec::with_capacity(hypernym_keys.len());
            for h in hypernym_keys {
                let id = index.get(h).ok_or_else(|| {
                    WordsimError::Parse(format!(
                        "sense {:?} references unknown hypernym {:?}",
                        key, h
                    ))
                })?;
                hypernyms.push(Sense(*id));
            }
            for lemma in lemmas {
                by_lemma
                    .entry(caseless::default_case_fold_str(lemma))
                    .or_default()
                    .push(Sense(i as u32));
            }
            nodes.push(SenseNode {
                key: key.clone(),
                pos: *pos,
                hypernyms,
                depth: 0,
            });
        }

        let mut memo: Vec<Option<u32>> = vec![None; nodes.len()];
        let mut visiting = vec![false; nodes.len()];
        for i in 0..nodes.len() {
            let depth = compute_depth(i, &nodes, &mut memo, &mut visiting)?;
            nodes[i].depth = depth;
        }

        let mut max_depths: HashMap<PartOfSpeech, u32> = HashMap::new();
        for node in &nodes {
            let entry = max_depths.entry(node.pos).or_insert(0);
            *entry = (*entry).max(node.depth);
        }

        Ok(TaxonomyStore {
            nodes,
            by_lemma,
            max_depths,
        })
    }
}

/// Depth = 1 + shortest hypernym chain to a root; roots have depth 1.
fn compute_depth(
    idx: usize,
    nodes: &[SenseNode],
    memo: &mut Vec<Option<u32>>,
    visiting: &mut Vec<bool>,
) -> Result<u32> {
    if let Some(d) = memo[idx] {
        return Ok(d);
    }
    if visiting[idx] {
        return Err(WordsimError::Parse(format!(
            "hypernym cycle involving sense {:?}",
            nodes[idx].key
        )));
    }
    visiting[idx] = true;
    let mut depth = 1;
    if !nodes[idx].hypernyms.is_empty() {
        let mut min_parent = u32::MAX;
        for h in &nodes[idx].hypernyms {
            let d = compute_depth(h.0 as usize, nodes, memo, visiting)?;
            min_parent = min_parent.min(d);
        }
        depth = min_parent + 1;
    }
    visiting[idx] = false;
    memo[idx] = Some(depth);
    Ok(depth)
}
