use std::cmp::Ordering;
use std::fmt;

/// Comparator shared by every sortable view.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

/// (kills + assists) / deaths, with a deathless game counted as infinite.
pub fn kda_ratio(kills: f64, deaths: f64, assists: f64) -> f64 {
    if deaths == 0.0 {
        f64::INFINITY
    } else {
        (kills + assists) / deaths
    }
}

pub fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Orders two entities by a numeric field.
pub fn compare_by<T>(a: &T, b: &T, field: fn(&T) -> f64) -> Ordering {
    compare_numbers(field(a), field(b))
}

/// Character-by-character comparison, shorter name first on a shared prefix.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    for (a_char, b_char) in a.chars().zip(b.chars()) {
        match (a_char as u32).cmp(&(b_char as u32)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

pub struct SortDescriptor<T> {
    pub name: &'static str,
    pub compare: CompareFn<T>,
    pub desc: bool,
}

impl<T> Clone for SortDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortDescriptor<T> {}

impl<T> fmt::Debug for SortDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDescriptor")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .finish()
    }
}

impl<T> SortDescriptor<T> {
    pub const fn new(name: &'static str, compare: CompareFn<T>, desc: bool) -> Self {
        SortDescriptor {
            name,
            compare,
            desc,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.desc = !self.desc;
        self
    }

    pub fn find(descriptors: &[SortDescriptor<T>], name: &str) -> Option<SortDescriptor<T>> {
        descriptors
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }
}

/// Primary comparator first, then each fallback in order until one differs.
pub fn chain_compare<T>(
    a: &T,
    b: &T,
    primary: &SortDescriptor<T>,
    fallbacks: &[SortDescriptor<T>],
) -> Ordering {
    fallbacks
        .iter()
        .fold((primary.compare)(a, b), |ordering, fallback| {
            ordering.then_with(|| (fallback.compare)(a, b))
        })
}

/// Stable ascending sort by the chain, reversed afterwards for descending
/// descriptors.
pub fn sort_with_fallbacks<T>(
    items: &mut [T],
    primary: &SortDescriptor<T>,
    fallbacks: &[SortDescriptor<T>],
) {
    items.sort_by(|a, b| chain_compare(a, b, primary, fallbacks));
    if primary.desc {
        items.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        score: f64,
        games: f64,
    }

    fn row(name: &'static str, score: f64, games: f64) -> Row {
        Row { name, score, games }
    }

    fn by_score(a: &Row, b: &Row) -> Ordering {
        compare_by(a, b, |r| r.score)
    }

    fn by_games(a: &Row, b: &Row) -> Ordering {
        compare_by(a, b, |r| r.games)
    }

    fn by_name(a: &Row, b: &Row) -> Ordering {
        compare_names(a.name, b.name)
    }

    const SCORE: SortDescriptor<Row> = SortDescriptor::new("score", by_score, true);
    const GAMES: SortDescriptor<Row> = SortDescriptor::new("games", by_games, true);
    const NAME: SortDescriptor<Row> = SortDescriptor::new("name", by_name, false);

    #[test]
    fn numbers_compare_tri_state() {
        assert_eq!(compare_numbers(1.0, 2.0), Ordering::Less);
        assert_eq!(compare_numbers(2.0, 2.0), Ordering::Equal);
        assert_eq!(compare_numbers(3.0, 2.0), Ordering::Greater);
        assert_eq!(compare_numbers(f64::NAN, 2.0), Ordering::Equal);
    }

    #[test]
    fn shorter_name_wins_on_shared_prefix() {
        assert_eq!(compare_names("Vi", "Viego"), Ordering::Less);
        assert_eq!(compare_names("Viego", "Vi"), Ordering::Greater);
        assert_eq!(compare_names("Ahri", "Ahri"), Ordering::Equal);
        // uppercase code points come before lowercase ones
        assert_eq!(compare_names("Zed", "ahri"), Ordering::Less);
    }

    #[test]
    fn deathless_kda_is_infinite() {
        assert!(kda_ratio(0.0, 0.0, 0.0).is_infinite());
        assert_eq!(kda_ratio(4.0, 2.0, 6.0), 5.0);
    }

    #[test]
    fn descending_sort_reverses_after_ascending_pass() {
        let mut rows = vec![row("a", 1.0, 0.0), row("b", 3.0, 0.0), row("c", 2.0, 0.0)];
        sort_with_fallbacks(&mut rows, &SCORE, &[]);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_fall_through_to_next_comparator() {
        let mut rows = vec![row("a", 0.5, 2.0), row("b", 0.5, 9.0), row("c", 0.9, 1.0)];
        sort_with_fallbacks(&mut rows, &SCORE, &[GAMES]);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn ascending_name_sort() {
        let mut rows = vec![row("Viego", 0.0, 0.0), row("Ahri", 0.0, 0.0), row("Vi", 0.0, 0.0)];
        sort_with_fallbacks(&mut rows, &NAME, &[SCORE]);
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ahri", "Vi", "Viego"]);
    }

    #[test]
    fn infinite_values_lead_descending_sorts() {
        let mut rows = vec![
            row("a", kda_ratio(10.0, 1.0, 10.0), 0.0),
            row("b", kda_ratio(0.0, 0.0, 0.0), 0.0),
            row("c", kda_ratio(3.0, 2.0, 1.0), 0.0),
        ];
        sort_with_fallbacks(&mut rows, &SCORE, &[]);
        assert_eq!(rows[0].name, "b");
    }

    #[test]
    fn find_is_case_insensitive() {
        let table = [SCORE, GAMES, NAME];
        assert_eq!(SortDescriptor::find(&table, "GAMES").map(|d| d.name), Some("games"));
        assert!(SortDescriptor::find(&table, "gold").is_none());
        assert!(!SortDescriptor::find(&table, "score").unwrap().reversed().desc);
    }
}
