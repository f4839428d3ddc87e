use crate::utils::{Result, SweepError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Bucket a local branch ends up in after a classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Present on the remote; nothing to do.
    Ok,
    /// Gone from the remote and carrying no local work; safe to delete.
    Stale,
    /// Gone from the remote but holding unpushed work.
    PendingChanges,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Ok, Category::Stale, Category::PendingChanges];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ok => "ok",
            Category::Stale => "stale",
            Category::PendingChanges => "pending_changes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one classification run: three ordered lists of branch names.
///
/// The plain `push_*` methods never validate or deduplicate, callers are
/// expected to classify each branch exactly once. [`try_push`] is the
/// checked variant used by the classifier.
///
/// [`try_push`]: BranchClassification::try_push
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Buckets")]
pub struct BranchClassification {
    ok: Vec<String>,
    stale: Vec<String>,
    pending_changes: Vec<String>,
    /// First bucket each name was pushed into.
    #[serde(skip)]
    index: HashMap<String, Category>,
}

#[derive(Deserialize)]
struct Buckets {
    #[serde(default)]
    ok: Vec<String>,
    #[serde(default)]
    stale: Vec<String>,
    #[serde(default)]
    pending_changes: Vec<String>,
}

impl PartialEq for BranchClassification {
    fn eq(&self, other: &Self) -> bool {
        self.ok == other.ok
            && self.stale == other.stale
            && self.pending_changes == other.pending_changes
    }
}

impl Eq for BranchClassification {}

impl From<Buckets> for BranchClassification {
    fn from(buckets: Buckets) -> Self {
        let mut classification = Self::new();
        for name in buckets.ok {
            classification.push_ok(name);
        }
        for name in buckets.stale {
            classification.push_stale(name);
        }
        for name in buckets.pending_changes {
            classification.push_pending_changes(name);
        }
        classification
    }
}

impl BranchClassification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&mut self, name: impl Into<String>) {
        self.push(Category::Ok, name);
    }

    pub fn push_stale(&mut self, name: impl Into<String>) {
        self.push(Category::Stale, name);
    }

    pub fn push_pending_changes(&mut self, name: impl Into<String>) {
        self.push(Category::PendingChanges, name);
    }

    pub fn push(&mut self, category: Category, name: impl Into<String>) {
        let name = name.into();
        self.index.entry(name.clone()).or_insert(category);
        self.bucket_mut(category).push(name);
    }

    /// Appends `name` unless it is empty or already present in any bucket.
    pub fn try_push(&mut self, category: Category, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SweepError::invalid_branch_name(name, "name is empty"));
        }
        if let Some(existing) = self.category_of(&name) {
            return Err(SweepError::already_classified(name, existing));
        }
        self.push(category, name);
        Ok(())
    }

    pub fn ok(&self) -> &[String] {
        &self.ok
    }

    pub fn stale(&self) -> &[String] {
        &self.stale
    }

    pub fn pending_changes(&self) -> &[String] {
        &self.pending_changes
    }

    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Ok => &self.ok,
            Category::Stale => &self.stale,
            Category::PendingChanges => &self.pending_changes,
        }
    }

    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ok.len() + self.stale.len() + self.pending_changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every classified name with its bucket, bucket by bucket in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .iter()
                .map(move |name| (category, name.as_str()))
        })
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Ok => &mut self.ok,
            Category::Stale => &mut self.stale,
            Category::PendingChanges => &mut self.pending_changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_classification_is_empty() {
        let classification = BranchClassification::new();
        assert!(classification.ok().is_empty());
        assert!(classification.stale().is_empty());
        assert!(classification.pending_changes().is_empty());
        assert!(classification.is_empty());
        assert_eq!(classification, BranchClassification::default());
    }

    #[test]
    fn test_each_bucket_is_independent() {
        let mut classification = BranchClassification::new();
        classification.push_stale("feature/a");
        classification.push_ok("main");

        assert_eq!(classification.stale(), ["feature/a"]);
        assert_eq!(classification.ok(), ["main"]);
        assert!(classification.pending_changes().is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let mut classification = BranchClassification::new();
        classification.push_pending_changes("x");
        classification.push_pending_changes("x");

        assert_eq!(classification.pending_changes(), ["x", "x"]);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut classification = BranchClassification::new();
        classification.push_stale("b1");
        classification.push_stale("b2");
        assert_eq!(classification.stale(), ["b1", "b2"]);

        let mut reversed = BranchClassification::new();
        reversed.push_stale("b2");
        reversed.push_stale("b1");
        assert_eq!(reversed.stale(), ["b2", "b1"]);
    }

    #[test]
    fn test_lengths_match_number_of_appends() {
        let mut classification = BranchClassification::new();
        for i in 0..5 {
            classification.push_ok(format!("ok-{i}"));
        }
        for i in 0..3 {
            classification.push(Category::Stale, format!("stale-{i}"));
        }
        classification.push_pending_changes("wip");

        assert_eq!(classification.ok().len(), 5);
        assert_eq!(classification.stale().len(), 3);
        assert_eq!(classification.pending_changes().len(), 1);
        assert_eq!(classification.len(), 9);
    }

    #[test]
    fn test_partition_of_simulated_run() {
        let input = ["main", "feature/a", "feature/b", "fix/c", "spike/d", "docs"];
        let mut classification = BranchClassification::new();
        for (i, name) in input.iter().enumerate() {
            let category = Category::ALL[i % 3];
            classification.try_push(category, *name).unwrap();
        }

        let ok: HashSet<_> = classification.ok().iter().cloned().collect();
        let stale: HashSet<_> = classification.stale().iter().cloned().collect();
        let pending: HashSet<_> = classification.pending_changes().iter().cloned().collect();

        assert!(ok.is_disjoint(&stale));
        assert!(ok.is_disjoint(&pending));
        assert!(stale.is_disjoint(&pending));

        let union: HashSet<String> = ok.union(&stale).chain(pending.iter()).cloned().collect();
        let expected: HashSet<String> = input.iter().map(|s| s.to_string()).collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_try_push_rejects_double_classification() {
        let mut classification = BranchClassification::new();
        classification.try_push(Category::Ok, "main").unwrap();

        let err = classification
            .try_push(Category::Stale, "main")
            .unwrap_err();
        assert!(matches!(err, SweepError::AlreadyClassified { .. }));
        assert_eq!(classification.ok(), ["main"]);
        assert!(classification.stale().is_empty());
    }

    #[test]
    fn test_try_push_rejects_empty_name() {
        let mut classification = BranchClassification::new();
        let err = classification.try_push(Category::Stale, "  ").unwrap_err();
        assert!(matches!(err, SweepError::InvalidBranchName { .. }));
        assert!(classification.is_empty());
    }

    #[test]
    fn test_category_of_and_iter() {
        let mut classification = BranchClassification::new();
        classification.push_pending_changes("wip");
        classification.push_ok("main");
        classification.push_stale("old");

        assert_eq!(classification.category_of("old"), Some(Category::Stale));
        assert_eq!(classification.category_of("missing"), None);

        let entries: Vec<_> = classification.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Category::Ok, "main"),
                (Category::Stale, "old"),
                (Category::PendingChanges, "wip"),
            ]
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let mut classification = BranchClassification::new();
        classification.push_pending_changes("wip");
        let json = serde_json::to_value(&classification).unwrap();
        assert_eq!(json["pending_changes"][0], "wip");
        assert_eq!(
            serde_json::to_value(Category::PendingChanges).unwrap(),
            "pending_changes"
        );
        assert_eq!(Category::PendingChanges.to_string(), "pending_changes");
    }

    #[test]
    fn test_deserialized_classification_still_rejects_duplicates() {
        let mut classification: BranchClassification =
            serde_json::from_str(r#"{ "ok": ["main"], "stale": ["old"] }"#).unwrap();

        assert_eq!(classification.category_of("old"), Some(Category::Stale));
        assert!(classification.pending_changes().is_empty());
        assert!(classification.try_push(Category::Ok, "old").is_err());
        classification.try_push(Category::Ok, "new").unwrap();
        assert_eq!(classification.ok(), ["main", "new"]);
    }

    #[test]
    fn test_try_push_scales_linearly() {
        let mut classification = BranchClassification::new();
        for i in 0..20_000 {
            classification
                .try_push(Category::ALL[i % 3], format!("branch-{i}"))
                .unwrap();
        }
        assert_eq!(classification.len(), 20_000);
        assert!(classification
            .try_push(Category::Stale, "branch-19999")
            .is_err());
    }
}
