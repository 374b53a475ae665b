//! Top/bottom-K selection over a color histogram.

use std::collections::HashMap;

use crate::filter::{ColorCount, SortOrder};
use crate::histogram::CountedColor;

/// Pick up to `limit` colors from `counts`, grouped by identical count.
///
/// Distinct count values are sorted per `ordering` (left in first-seen order
/// for [`SortOrder::Unordered`]). Whole tie-groups are taken while they fit;
/// the group that would reach the limit is taken one color at a time. Inside
/// a group colors keep the order they have in `counts`.
pub fn select_colors<I>(counts: I, ordering: SortOrder, limit: ColorCount) -> Vec<CountedColor>
where
    I: IntoIterator<Item = CountedColor>,
{
    let mut groups: Vec<(u32, Vec<CountedColor>)> = Vec::new();
    let mut group_of: HashMap<u32, usize> = HashMap::new();
    let mut distinct = 0usize;

    for counted in counts {
        distinct += 1;
        let slot = *group_of.entry(counted.count).or_insert_with(|| {
            groups.push((counted.count, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(counted);
    }

    match ordering {
        SortOrder::Ascending => groups.sort_unstable_by_key(|&(count, _)| count),
        SortOrder::Descending => groups.sort_unstable_by(|a, b| b.0.cmp(&a.0)),
        SortOrder::Unordered => {}
    }

    let wanted = limit.resolve(distinct);
    let mut selected = Vec::with_capacity(wanted);
    for (_, group) in groups {
        if selected.len() + group.len() < wanted {
            selected.extend(group);
        } else {
            let room = wanted - selected.len();
            selected.extend(group.into_iter().take(room));
            break;
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantize::color_from_rgba;

    fn counted(v: u8, count: u32) -> CountedColor {
        CountedColor {
            color: color_from_rgba([v, v, v, 255]),
            count,
        }
    }

    fn sample() -> Vec<CountedColor> {
        vec![
            counted(1, 4),
            counted(2, 30),
            counted(3, 2),
            counted(4, 4),
            counted(5, 10),
        ]
    }

    fn counts(colors: &[CountedColor]) -> Vec<u32> {
        colors.iter().map(|c| c.count).collect()
    }

    #[test]
    fn descending_unlimited() {
        let selected = select_colors(sample(), SortOrder::Descending, ColorCount::Unlimited);
        assert_eq!(counts(&selected), [30, 10, 4, 4, 2]);
        assert_eq!(selected[2], counted(1, 4));
        assert_eq!(selected[3], counted(4, 4));
    }

    #[test]
    fn ascending_reverses_count_values() {
        let asc = select_colors(sample(), SortOrder::Ascending, ColorCount::Unlimited);
        let desc = select_colors(sample(), SortOrder::Descending, ColorCount::Unlimited);
        let mut reversed = counts(&desc);
        reversed.reverse();
        assert_eq!(counts(&asc), reversed);
    }

    #[test]
    fn limit_splits_tie_group() {
        let selected = select_colors(sample(), SortOrder::Descending, ColorCount::from_requested(3));
        assert_eq!(counts(&selected), [30, 10, 4]);
        assert_eq!(selected[2], counted(1, 4));
    }

    #[test]
    fn limit_exactly_at_group_boundary() {
        let selected = select_colors(sample(), SortOrder::Descending, ColorCount::from_requested(4));
        assert_eq!(counts(&selected), [30, 10, 4, 4]);
    }

    #[test]
    fn limit_above_distinct_returns_all() {
        let selected = select_colors(sample(), SortOrder::Ascending, ColorCount::from_requested(50));
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn unordered_keeps_first_seen_groups() {
        let selected = select_colors(sample(), SortOrder::Unordered, ColorCount::Unlimited);
        assert_eq!(counts(&selected), [4, 4, 30, 2, 10]);

        let limited = select_colors(sample(), SortOrder::Unordered, ColorCount::from_requested(2));
        assert_eq!(limited, vec![counted(1, 4), counted(4, 4)]);
    }

    #[test]
    fn empty_input() {
        let selected = select_colors(Vec::new(), SortOrder::Descending, ColorCount::from_requested(3));
        assert!(selected.is_empty());
    }
}
