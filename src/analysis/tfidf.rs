// src/analysis/tfidf.rs
//! Document-local TF-IDF vectorization and cosine similarity.
//!
//! Fitted freshly on each (small) document set. With a single document the
//! idf term degenerates to a constant, which is the intended behavior for
//! ranking document-local term salience.

use anyhow::Result;
use std::collections::HashMap;

pub struct TfidfVectorizer {
    max_features: Option<usize>,
}

pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self { max_features: None }
    }

    /// Cap the vocabulary at the `n` highest-global-frequency terms. Ties
    /// keep insertion order, so ranking downstream stays stable.
    pub fn with_max_features(n: usize) -> Self {
        Self {
            max_features: Some(n),
        }
    }

    pub fn fit_transform(&self, documents: &[&str]) -> Result<TfidfMatrix> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Vocabulary in insertion order with global frequencies.
        let mut vocabulary: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut global_counts: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            for token in tokens {
                match index.get(token) {
                    Some(&i) => global_counts[i] += 1,
                    None => {
                        index.insert(token.clone(), vocabulary.len());
                        vocabulary.push(token.clone());
                        global_counts.push(1);
                    }
                }
            }
        }

        if vocabulary.is_empty() {
            anyhow::bail!("empty vocabulary: input contains no extractable terms");
        }

        if let Some(cap) = self.max_features {
            if vocabulary.len() > cap {
                let mut order: Vec<usize> = (0..vocabulary.len()).collect();
                order.sort_by(|&a, &b| global_counts[b].cmp(&global_counts[a]));
                order.truncate(cap);
                order.sort_unstable();
                vocabulary = order.iter().map(|&i| vocabulary[i].clone()).collect();
                index = vocabulary
                    .iter()
                    .enumerate()
                    .map(|(i, t)| (t.clone(), i))
                    .collect();
            }
        }

        // Document frequencies for smoothed idf.
        let n_docs = tokenized.len();
        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen = vec![false; vocabulary.len()];
            for token in tokens {
                if let Some(&i) = index.get(token) {
                    if !seen[i] {
                        seen[i] = true;
                        doc_freq[i] += 1;
                    }
                }
            }
        }
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0f64; vocabulary.len()];
                for token in tokens {
                    if let Some(&i) = index.get(token) {
                        row[i] += 1.0;
                    }
                }
                for (i, value) in row.iter_mut().enumerate() {
                    *value *= idf[i];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(TfidfMatrix { vocabulary, rows })
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Sum of weights per vocabulary term across all rows.
    pub fn term_weights(&self) -> Vec<(String, f64)> {
        let mut sums = vec![0.0f64; self.vocabulary.len()];
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                sums[i] += value;
            }
        }
        self.vocabulary
            .iter()
            .cloned()
            .zip(sums)
            .collect()
    }
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

/// Lowercase word tokens of two or more alphanumeric characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| t.chars().count() >= 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        assert!(TfidfVectorizer::new().fit_transform(&[""]).is_err());
        assert!(TfidfVectorizer::new().fit_transform(&["! ? ."]).is_err());
    }

    #[test]
    fn test_singleton_document_weights_rank_by_frequency() {
        let matrix = TfidfVectorizer::new()
            .fit_transform(&["python python python rust rust java"])
            .unwrap();
        let mut weights = matrix.term_weights();
        weights.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        assert_eq!(weights[0].0, "python");
        assert_eq!(weights[1].0, "rust");
        assert_eq!(weights[2].0, "java");
    }

    #[test]
    fn test_max_features_keeps_most_frequent_terms() {
        let matrix = TfidfVectorizer::with_max_features(2)
            .fit_transform(&["alpha alpha beta beta gamma"])
            .unwrap();
        let vocabulary: Vec<&str> = matrix.vocabulary().iter().map(String::as_str).collect();
        assert_eq!(vocabulary, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        let matrix = TfidfVectorizer::new()
            .fit_transform(&["rust systems programming", "rust systems programming"])
            .unwrap();
        let sim = cosine_similarity(matrix.row(0), matrix.row(1));
        assert!((sim - 1.0).abs() < 1e-9);

        let disjoint = TfidfVectorizer::new()
            .fit_transform(&["rust tokio", "pandas numpy"])
            .unwrap();
        let sim = cosine_similarity(disjoint.row(0), disjoint.row(1));
        assert!(sim.abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector_guard() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
