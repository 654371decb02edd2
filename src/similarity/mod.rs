//! The similarity battery: six pairwise metrics over taxonomy senses.
//!
//! Every metric returns `Option<f64>`, with `None` as the single missing-data
//! representation no matter which internal cause produced it. The underlying
//! taxonomy signals category-incompatibility with errors; this module is the
//! only place those are caught.

pub mod ic;

pub use ic::InformationContent;

use crate::taxonomy::{Sense, Taxonomy};

/// The six supported similarity metrics, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Path,
    Lch,
    Wup,
    Res,
    Jcn,
    Lin,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Path,
        Metric::Lch,
        Metric::Wup,
        Metric::Res,
        Metric::Jcn,
        Metric::Lin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Path => "path",
            Metric::Lch => "lch",
            Metric::Wup => "wup",
            Metric::Res => "res",
            Metric::Jcn => "jcn",
            Metric::Lin => "lin",
        }
    }
}

/// One evaluated pair: the human score plus all six computed columns.
#[derive(Debug, Clone)]
pub struct SimilarityRow {
    pub reference: f64,
    pub path: Option<f64>,
    pub lch: Option<f64>,
    pub wup: Option<f64>,
    pub res: Option<f64>,
    pub jcn: Option<f64>,
    pub lin: Option<f64>,
}

impl SimilarityRow {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Path => self.path,
            Metric::Lch => self.lch,
            Metric::Wup => self.wup,
            Metric::Res => self.res,
            Metric::Jcn => self.jcn,
            Metric::Lin => self.lin,
        }
    }
}

/// Computes the similarity battery against one taxonomy and one
/// informativeness model, both injected at construction and read-only for
/// the whole run.
pub struct SimilarityEngine<'a, T: Taxonomy> {
    taxonomy: &'a T,
    ic: InformationContent,
}

impl<'a, T: Taxonomy> SimilarityEngine<'a, T> {
    pub fn new(taxonomy: &'a T, ic: InformationContent) -> Self {
        SimilarityEngine { taxonomy, ic }
    }

    /// Path similarity: 1 / (shortest path length + 1).
    pub fn path(&self, s1: Sense, s2: Sense) -> Option<f64> {
        self.taxonomy
            .shortest_path_len(s1, s2)
            .map(|d| 1.0 / (d as f64 + 1.0))
    }

    /// Leacock-Chodorow: −ln((d + 1) / (2 · D)) with D the max depth of the
    /// senses' category. Undefined across categories.
    pub fn lch(&self, s1: Sense, s2: Sense) -> Option<f64> {
        if self.taxonomy.comparable_subsumer(s1, s2).is_err() {
            return None;
        }
        let d = self.taxonomy.shortest_path_len(s1, s2)? as f64;
        let max_depth = self
            .taxonomy
            .max_depth(self.taxonomy.part_of_speech(s1)) as f64;
        Some(-((d + 1.0) / (2.0 * max_depth)).ln())
    }

    /// Wu-Palmer: 2 · depth(lcs) / (depth(s1) + depth(s2)).
    pub fn wup(&self, s1: Sense, s2: Sense) -> Option<f64> {
        let lcs = self.taxonomy.least_common_subsumer(s1, s2)?;
        let depth_sum = (self.taxonomy.depth(s1) + self.taxonomy.depth(s2)) as f64;
        Some(2.0 * self.taxonomy.depth(lcs) as f64 / depth_sum)
    }

    /// Resnik: information content of the least common subsumer.
    pub fn res(&self, s1: Sense, s2: Sense) -> Option<f64> {
        let lcs = self.taxonomy.comparable_subsumer(s1, s2).ok()?;
        self.ic.value(self.taxonomy.key(lcs))
    }

    /// Jiang-Conrath: 1 / (IC(s1) + IC(s2) − 2 · IC(lcs)). Undefined when the
    /// denominator degenerates to zero (e.g. a sense compared with itself).
    pub fn jcn(&self, s1: Sense, s2: Sense) -> Option<f64> {
        let (ic1, ic2, ic_lcs) = self.content_triple(s1, s2)?;
        let denominator = ic1 + ic2 - 2.0 * ic_lcs;
        if denominator == 0.0 {
            return None;
        }
        Some(1.0 / denominator)
    }

    /// Lin: 2 · IC(lcs) / (IC(s1) + IC(s2)).
    pub fn lin(&self, s1: Sense, s2: Sense) -> Option<f64> {
        let (ic1, ic2, ic_lcs) = self.content_triple(s1, s2)?;
        let denominator = ic1 + ic2;
        if denominator == 0.0 {
            return None;
        }
        Some(2.0 * ic_lcs / denominator)
    }

    pub fn score(&self, metric: Metric, s1: Sense, s2: Sense) -> Option<f64> {
        match metric {
            Metric::Path => self.path(s1, s2),
            Metric::Lch => self.lch(s1, s2),
            Metric::Wup => self.wup(s1, s2),
            Metric::Res => self.res(s1, s2),
            Metric::Jcn => self.jcn(s1, s2),
            Metric::Lin => self.lin(s1, s2),
        }
    }

    /// Runs all six metrics for one pair. Metric calls are independent: one
    /// metric being undefined never affects the others.
    pub fn battery(&self, reference: f64, s1: Sense, s2: Sense) -> SimilarityRow {
        SimilarityRow {
            reference,
            path: self.path(s1, s2),
            lch: self.lch(s1, s2),
            wup: self.wup(s1, s2),
            res: self.res(s1, s2),
            jcn: self.jcn(s1, s2),
            lin: self.lin(s1, s2),
        }
    }

    /// IC values of both senses and of their least common subsumer, or
    /// `None` if the pair is incomparable or the model misses a node.
    fn content_triple(&self, s1: Sense, s2: Sense) -> Option<(f64, f64, f64)> {
        let lcs = self.taxonomy.comparable_subsumer(s1, s2).ok()?;
        let ic1 = self.ic.value(self.taxonomy.key(s1))?;
        let ic2 = self.ic.value(self.taxonomy.key(s2))?;
        let ic_lcs = self.ic.value(self.taxonomy.key(lcs))?;
        Some((ic1, ic2, ic_lcs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{PartOfSpeech, TaxonomyBuilder, TaxonomyStore};

    /// entity > animal > carnivore > {canine > dog, feline > cat}
    /// entity > artifact > vehicle > {car, bus}
    /// run.v is a lone verb root.
    fn taxonomy() -> TaxonomyStore {
        let mut b = TaxonomyBuilder::new();
        b.sense("entity.n.01", PartOfSpeech::Noun, &["entity"], &[]);
        b.sense("animal.n.01", PartOfSpeech::Noun, &["animal"], &["entity.n.01"]);
        b.sense(
            "carnivore.n.01",
            PartOfSpeech::Noun,
            &["carnivore"],
            &["animal.n.01"],
        );
        b.sense("canine.n.01", PartOfSpeech::Noun, &["canine"], &["carnivore.n.01"]);
        b.sense("dog.n.01", PartOfSpeech::Noun, &["dog"], &["canine.n.01"]);
        b.sense("feline.n.01", PartOfSpeech::Noun, &["feline"], &["carnivore.n.01"]);
        b.sense("cat.n.01", PartOfSpeech::Noun, &["cat"], &["feline.n.01"]);
        b.sense("artifact.n.01", PartOfSpeech::Noun, &["artifact"], &["entity.n.01"]);
        b.sense("vehicle.n.01", PartOfSpeech::Noun, &["vehicle"], &["artifact.n.01"]);
        b.sense("car.n.01", PartOfSpeech::Noun, &["car"], &["vehicle.n.01"]);
        b.sense("bus.n.01", PartOfSpeech::Noun, &["bus"], &["vehicle.n.01"]);
        b.sense("run.v.01", PartOfSpeech::Verb, &["run"], &[]);
        b.build().unwrap()
    }

    /// Synthetic model; deliberately has no entry for vehicle.n.01.
    fn model() -> InformationContent {
        InformationContent::from_entries(vec![
            ("dog.n.01".to_string(), 8.0),
            ("cat.n.01".to_string(), 7.5),
            ("carnivore.n.01".to_string(), 4.0),
            ("car.n.01".to_string(), 6.0),
            ("bus.n.01".to_string(), 6.5),
        ])
    }

    fn sense(store: &TaxonomyStore, lemma: &str) -> Sense {
        store.senses(lemma, None)[0]
    }

    #[test]
    fn path_is_inverse_distance() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, cat) = (sense(&store, "dog"), sense(&store, "cat"));
        // dog-canine-carnivore-feline-cat: 4 edges
        let got = engine.path(dog, cat).unwrap();
        assert!((got - 0.2).abs() < 1e-9);
        assert!((engine.path(dog, dog).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lch_scales_by_category_depth() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, cat) = (sense(&store, "dog"), sense(&store, "cat"));
        // -ln((4 + 1) / (2 * 5)) = ln 2
        let got = engine.lch(dog, cat).unwrap();
        assert!((got - 2.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn wup_uses_subsumer_depth() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, cat) = (sense(&store, "dog"), sense(&store, "cat"));
        // lcs = carnivore (depth 3), both senses at depth 5
        let got = engine.wup(dog, cat).unwrap();
        assert!((got - 0.6).abs() < 1e-9);
    }

    #[test]
    fn res_is_subsumer_content() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, cat) = (sense(&store, "dog"), sense(&store, "cat"));
        let got = engine.res(dog, cat).unwrap();
        assert!((got - 4.0).abs() < 1e-9);
    }

    #[test]
    fn jcn_and_lin_combine_contents() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, cat) = (sense(&store, "dog"), sense(&store, "cat"));
        // jcn = 1 / (8.0 + 7.5 - 2*4.0) = 1 / 7.5
        let jcn = engine.jcn(dog, cat).unwrap();
        assert!((jcn - 1.0 / 7.5).abs() < 1e-9);
        // lin = 2*4.0 / 15.5
        let lin = engine.lin(dog, cat).unwrap();
        assert!((lin - 8.0 / 15.5).abs() < 1e-9);
    }

    #[test]
    fn cross_category_pair_is_undefined_not_an_error() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, run) = (sense(&store, "dog"), sense(&store, "run"));
        for metric in Metric::ALL {
            assert_eq!(engine.score(metric, dog, run), None, "{}", metric.name());
        }
    }

    #[test]
    fn jcn_degenerate_denominator_is_undefined() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let dog = sense(&store, "dog");
        // Identical senses: IC(s1) + IC(s2) - 2*IC(lcs) == 0.
        assert_eq!(engine.jcn(dog, dog), None);
    }

    #[test]
    fn missing_model_entry_only_kills_content_metrics() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (car, bus) = (sense(&store, "car"), sense(&store, "bus"));
        // lcs = vehicle, absent from the model: res/jcn/lin undefined,
        // the purely structural metrics still produce values.
        assert_eq!(engine.res(car, bus), None);
        assert_eq!(engine.jcn(car, bus), None);
        assert_eq!(engine.lin(car, bus), None);
        assert!(engine.path(car, bus).is_some());
        assert!(engine.wup(car, bus).is_some());
        assert!(engine.lch(car, bus).is_some());
    }

    #[test]
    fn battery_fills_every_column_independently() {
        let store = taxonomy();
        let engine = SimilarityEngine::new(&store, model());
        let (dog, run) = (sense(&store, "dog"), sense(&store, "run"));
        let row = engine.battery(0.3, dog, run);
        assert!((row.reference - 0.3).abs() < 1e-9);
        for metric in Metric::ALL {
            assert_eq!(row.get(metric), None);
        }

        let (dog, cat) = (sense(&store, "dog"), sense(&store, "cat"));
        let row = engine.battery(0.8, dog, cat);
        for metric in Metric::ALL {
            assert!(row.get(metric).is_some(), "{}", metric.name());
        }
    }
}
