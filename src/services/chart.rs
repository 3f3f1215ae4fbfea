use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Charted<T> {
    pub position: usize,
    #[serde(flatten)]
    pub item: T,
}

/// Give each item a chart position, for items already ordered by score,
/// highest first.
///
/// Adjacent items with the same score share a position, so positions can
/// skip: 1, 2, 2, 4. Items scoring `cutoff` or less are dropped. With
/// `ensure_chartiness`, a chart where every item has the same score is
/// returned empty.
pub fn chartify<T, F>(
    items: Vec<T>,
    score: F,
    cutoff: Option<i64>,
    ensure_chartiness: bool,
) -> Vec<Charted<T>>
where
    F: Fn(&T) -> i64,
{
    let mut chart = Vec::new();
    let mut position = 0;
    let mut prev_score = None;

    for (counter, item) in items.into_iter().enumerate() {
        let item_score = score(&item);

        if prev_score != Some(item_score) {
            position = counter + 1;
        }
        prev_score = Some(item_score);

        if cutoff.map_or(true, |cutoff| item_score > cutoff) {
            chart.push(Charted { position, item });
        }
    }

    if ensure_chartiness {
        if let (Some(first), Some(last)) = (chart.first(), chart.last()) {
            if score(&first.item) == score(&last.item) {
                chart.clear();
            }
        }
    }

    chart
}
