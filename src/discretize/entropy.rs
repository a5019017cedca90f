//! Shannon entropy and information gain over class-count vectors.

/// Shannon entropy, in bits, of a class-count vector.
///
/// For counts summing to `N > 0` this is `-Σ (c/N)·log2(c/N)` over the
/// classes with nonzero counts. An empty or all-zero vector, or one with
/// a single nonzero class, has entropy 0.
pub fn entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Information gain of a partition: the parent's entropy minus the
/// size-weighted entropy of its children.
///
/// Non-negative for any partition of the parent, and zero exactly when
/// every child reproduces the parent's class proportions.
pub fn information_gain(parent: &[usize], children: &[Vec<usize>]) -> f64 {
    let total: usize = parent.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let weighted: f64 = children
        .iter()
        .map(|child| {
            let size: usize = child.iter().sum();
            (size as f64 / n) * entropy(child)
        })
        .sum();
    entropy(parent) - weighted
}
