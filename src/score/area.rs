use crate::model::score::ScoreSet;

/// Area of the MPO radar plot as a percentage of the full hexagon.
///
/// Components are sorted in descending order before being placed on the six
/// axes, so the result depends only on the multiset of scores. Each pair of
/// neighbouring axes spans a triangle of area `a·b·sin(60°)/2`; the common
/// `sin(60°)/2` factor cancels against the area of the unit hexagon.
/// Rounded to two decimals.
pub fn radar_area(scores: &ScoreSet) -> f64 {
    let mut values = scores.components();
    values.sort_by(|a, b| b.total_cmp(a));

    let n = values.len();
    let paired: f64 = (0..n).map(|i| values[i] * values[(i + 1) % n]).sum();
    let percent = paired / n as f64 * 100.0;

    (percent * 100.0).round() / 100.0
}
