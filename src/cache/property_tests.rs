//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the image cache against a simple model and the
//! listing order contract against arbitrary file names.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::test_support::ScriptedLister;
use crate::cache::{ImageListCache, LookupOutcome, ManualClock, TTL_MS};
use crate::listing::{is_image_file, prepare_listing, NameOrder};

// == Strategies ==
/// Generates directory entry names, images and otherwise
fn file_name_strategy() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z]{0,6}",
        prop::option::of(0u32..200),
        prop::sample::select(vec!["png", "PNG", "jpg", "Jpeg", "webp", "gif", "txt", ""]),
    )
        .prop_map(|(stem, number, ext)| {
            let number = number.map(|n| n.to_string()).unwrap_or_default();
            if ext.is_empty() {
                format!("{}{}", stem, number)
            } else {
                format!("{}{}.{}", stem, number, ext)
            }
        })
}

/// Operations driving the cache model
#[derive(Debug, Clone)]
enum CacheOp {
    Advance { ms: u64 },
    ListerSucceeds { tag: u8 },
    ListerFails,
    Get { force: bool },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        prop_oneof![0..1_000u64, (TTL_MS - 10)..(TTL_MS + 10)]
            .prop_map(|ms| CacheOp::Advance { ms }),
        any::<u8>().prop_map(|tag| CacheOp::ListerSucceeds { tag }),
        Just(CacheOp::ListerFails),
        any::<bool>().prop_map(|force| CacheOp::Get { force }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Listing output keeps exactly the image files, in natural order.
    #[test]
    fn prop_listing_filters_and_orders(names in prop::collection::vec(file_name_strategy(), 0..30)) {
        let expected_count = names.iter().filter(|n| is_image_file(n)).count();
        let listing = prepare_listing(names).unwrap();

        prop_assert_eq!(listing.len(), expected_count);

        let bare: Vec<&str> = listing
            .iter()
            .map(|p| p.strip_prefix("/backgroundImages/").unwrap())
            .collect();
        for name in &bare {
            prop_assert!(is_image_file(name), "{} is not an image", name);
        }
        let order = NameOrder::new().unwrap();
        for pair in bare.windows(2) {
            prop_assert_ne!(order.compare(pair[0], pair[1]), Ordering::Greater);
        }
    }

    // Name comparison is antisymmetric and only equal for identical names.
    #[test]
    fn prop_name_order_antisymmetric(a in file_name_strategy(), b in file_name_strategy()) {
        let order = NameOrder::new().unwrap();
        prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
        prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
    }

    // The cache agrees with a model of hit, refresh and fallback.
    #[test]
    fn prop_cache_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let lister = Arc::new(ScriptedLister::failing());
        let clock = Arc::new(ManualClock::new(1_000));
        let cache = ImageListCache::with_clock(lister.clone(), clock.clone());

        let mut now: u64 = 1_000;
        let mut lister_ok: Option<String> = None;
        let mut model: Option<(u64, String)> = None;
        let mut expected_calls = 0usize;

        for op in ops {
            match op {
                CacheOp::Advance { ms } => {
                    now += ms;
                    clock.advance(Duration::from_millis(ms));
                }
                CacheOp::ListerSucceeds { tag } => {
                    let item = format!("/backgroundImages/{}.png", tag);
                    lister.succeed_with(&[item.as_str()]);
                    lister_ok = Some(item);
                }
                CacheOp::ListerFails => {
                    lister.fail();
                    lister_ok = None;
                }
                CacheOp::Get { force } => {
                    let lookup = tokio_test::block_on(cache.get(force));
                    let valid = model
                        .as_ref()
                        .map(|(at, _)| now - at < TTL_MS)
                        .unwrap_or(false);

                    if valid && !force {
                        let (_, item) = model.as_ref().unwrap();
                        prop_assert_eq!(lookup.outcome(), LookupOutcome::Hit);
                        prop_assert_eq!(lookup.items(), [item.clone()]);
                    } else {
                        expected_calls += 1;
                        match (&lister_ok, &model) {
                            (Some(item), _) => {
                                prop_assert_eq!(lookup.outcome(), LookupOutcome::Refreshed);
                                prop_assert_eq!(lookup.items(), [item.clone()]);
                                model = Some((now, item.clone()));
                            }
                            (None, Some((_, item))) => {
                                prop_assert_eq!(lookup.outcome(), LookupOutcome::Fallback);
                                prop_assert_eq!(lookup.items(), [item.clone()]);
                            }
                            (None, None) => {
                                prop_assert_eq!(lookup.outcome(), LookupOutcome::Empty);
                                prop_assert!(lookup.items().is_empty());
                            }
                        }
                    }

                    let entry = tokio_test::block_on(cache.entry());
                    prop_assert_eq!(entry.map(|e| e.produced_at), model.as_ref().map(|(at, _)| *at));
                }
            }
        }

        prop_assert_eq!(lister.calls(), expected_calls);
    }
}
