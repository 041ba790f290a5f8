//! Uniform random selection over a non-empty slice.

use rand::Rng;

use crate::error::{CoreError, CoreResult};

/// Pick one element of `items` uniformly at random.
///
/// # Panics
///
/// Panics if `items` is empty. Every built-in table is non-empty, so an
/// empty slice here is a programming error. Use [`try_pick`] for slices
/// of unknown provenance.
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    assert!(!items.is_empty(), "cannot pick from an empty list");
    let index = rng.random_range(0..items.len());
    tracing::trace!(index, len = items.len(), "pick");
    &items[index]
}

/// Checked variant of [`pick`]: returns an error instead of panicking.
pub fn try_pick<'a, T, R: Rng + ?Sized>(
    list: &str,
    items: &'a [T],
    rng: &mut R,
) -> CoreResult<&'a T> {
    if items.is_empty() {
        return Err(CoreError::EmptyWordList {
            list: list.to_string(),
        });
    }
    Ok(pick(items, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn singleton_always_picked() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(*pick(&["only"], &mut rng), "only");
        }
    }

    #[test]
    #[should_panic(expected = "empty list")]
    fn empty_slice_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        pick(&empty, &mut rng);
    }

    #[test]
    fn try_pick_reports_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [&str; 0] = [];
        let err = try_pick("location", &empty, &mut rng).unwrap_err();
        assert_eq!(
            err,
            CoreError::EmptyWordList {
                list: "location".into()
            }
        );
    }

    #[test]
    fn try_pick_returns_member() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = [1, 2, 3];
        let got = try_pick("numbers", &items, &mut rng).unwrap();
        assert!(items.contains(got));
    }

    #[test]
    fn roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = [0usize, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut counts = [0u32; 10];
        for _ in 0..10_000 {
            counts[*pick(&items, &mut rng)] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            assert!((800..=1200).contains(&c), "element {i} drawn {c} times");
        }
    }

    #[test]
    fn reaches_every_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ["a", "b", "c", "d"];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let picked = pick(&items, &mut rng);
            let pos = items.iter().position(|i| i == picked).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
