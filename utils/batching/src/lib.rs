//! Stable sequential partitioning of keyed items into size-bounded batches.

use sha2::Digest as _;
use sha2::Sha256;

/// Count of leading zero bits in the SHA-256 fingerprint of `key`.
fn hash_prefix_zero_bits(key: &str) -> u32 {
    let fingerprint = Sha256::digest(key.as_bytes());
    let mut bits = 0;
    for byte in fingerprint {
        if byte == 0 {
            bits += 8;
        } else {
            bits += byte.leading_zeros();
            break;
        }
    }
    bits
}

/// Stably partitions `items` into batches of around `size_target` items.
///
/// Items are sorted by `key`, and batch boundaries are chosen from the key
/// hashes alone, so an unchanged input always produces byte-identical batches
/// and adding or removing one item only disturbs the batches adjacent to it.
/// No batch exceeds `size_max`, which defaults to `4 * size_target`.
pub fn partition_sequentially<T>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> String,
    size_target: usize,
    size_max: Option<usize>,
) -> Vec<Vec<T>> {
    let size_target = size_target.max(1);
    let size_max = size_max.unwrap_or(size_target * 4).max(size_target);

    // A boundary fires after roughly every `size_target` keys: a key whose
    // hash carries at least log2(size_target) leading zero bits closes the
    // current batch once the batch has reached half the target size.
    let zero_prefix_threshold = size_target.ilog2();
    let min_batch = (size_target / 2).max(1);

    let mut keyed: Vec<(String, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut batches = Vec::new();
    let mut batch = Vec::new();
    for (item_key, item) in keyed {
        batch.push(item);
        let natural_boundary = batch.len() >= min_batch
            && hash_prefix_zero_bits(&item_key) >= zero_prefix_threshold;
        if natural_boundary || batch.len() >= size_max {
            batches.push(std::mem::take(&mut batch));
        }
    }
    if !batch.is_empty() {
        batches.push(batch);
    }
    batches
}
