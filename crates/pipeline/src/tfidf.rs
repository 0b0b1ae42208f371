//! TF-IDF term weighting.
//!
//! A [`TermWeightSpace`] is fitted over one corpus and never updated; the
//! similarity engine fits a fresh space for every request.
//!
//! ## Weighting
//! - tf: raw count of the term in the document
//! - idf: `ln((1 + n) / (1 + df)) + 1`, n = number of documents
//! - every document vector is scaled to unit L2 length

use crate::tokenizer::tokenize;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Position of a term in the (alphabetically ordered) vocabulary
pub type TermId = usize;

/// Sparse weight vector, entries sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(TermId, f32)>,
}

impl SparseVector {
    /// Build from `(term, weight)` pairs; zero weights are dropped.
    pub fn from_entries(mut entries: Vec<(TermId, f32)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(term, _)| term);
        Self { entries }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Dot product, walking both sorted entry lists once
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// Vocabulary, idf weights and one weight vector per fitted document
#[derive(Debug, Clone, Default)]
pub struct TermWeightSpace {
    vocabulary: HashMap<String, TermId>,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
}

impl TermWeightSpace {
    /// Fit the weighting over `documents`. Vector `i` belongs to document `i`.
    pub fn fit<S: AsRef<str> + Sync>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let vocabulary: HashMap<String, TermId> = terms
            .into_iter()
            .enumerate()
            .map(|(id, term)| (term.to_string(), id))
            .collect();

        let counts: Vec<BTreeMap<TermId, u32>> = tokenized
            .par_iter()
            .map(|tokens| {
                let mut counts = BTreeMap::new();
                for token in tokens {
                    if let Some(&id) = vocabulary.get(token.as_str()) {
                        *counts.entry(id).or_insert(0) += 1;
                    }
                }
                counts
            })
            .collect();

        let mut df = vec![0u32; vocabulary.len()];
        for doc_counts in &counts {
            for &id in doc_counts.keys() {
                df[id] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let vectors = counts
            .par_iter()
            .map(|doc_counts| {
                let entries = doc_counts
                    .iter()
                    .map(|(&id, &tf)| (id, tf as f32 * idf[id]))
                    .collect();
                SparseVector::from_entries(entries).normalized()
            })
            .collect();

        Self { vocabulary, idf, vectors }
    }

    /// Number of fitted documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn vector(&self, document: usize) -> Option<&SparseVector> {
        self.vectors.get(document)
    }
}
