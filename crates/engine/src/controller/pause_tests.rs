#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;

#[test]
fn test_nested_reasons() {
    let mut set = PauseSet::default();
    assert_eq!(set.hold(PauseReason::HOVER), 1);
    assert_eq!(set.hold(PauseReason::VISIBILITY), 2);
    assert_eq!(set.release(&PauseReason::HOVER), Some(1));
    assert!(set.holds(&PauseReason::VISIBILITY));
    assert_eq!(set.release(&PauseReason::VISIBILITY), Some(0));
    assert!(set.is_empty());
}

#[test]
fn test_release_unknown_reason_is_ignored() {
    let mut set = PauseSet::default();
    set.hold(PauseReason::DRAG);
    assert_eq!(set.release(&PauseReason::HOVER), None);
    assert_eq!(set.depth(), 1);
}

#[test]
fn test_same_reason_counts() {
    let mut set = PauseSet::default();
    set.hold("modal".into());
    set.hold("modal".into());
    assert_eq!(set.release(&"modal".into()), Some(1));
    assert!(set.holds(&"modal".into()));
    assert_eq!(set.release(&"modal".into()), Some(0));
    assert_eq!(set.release(&"modal".into()), None);
}

#[test]
fn test_constants_equal_owned_names() {
    assert_eq!(PauseReason::HOVER, PauseReason::from("hover"));
    assert_eq!(PauseReason::from(String::from("drag")), PauseReason::DRAG);
    assert_eq!(PauseReason::MEDIA.to_string(), "media");
    assert_eq!(PauseReason::RESPONSIVE.as_str(), "responsive");
}

#[test]
fn test_reasons_sorted() {
    let mut set = PauseSet::default();
    set.hold(PauseReason::VISIBILITY);
    set.hold(PauseReason::DRAG);
    set.hold(PauseReason::HOVER);
    let names: Vec<String> = set.reasons().iter().map(|r| r.to_string()).collect();
    assert_eq!(names, vec!["drag", "hover", "visibility"]);
}

proptest! {
    #[test]
    fn depth_never_negative(ops in prop::collection::vec((any::<bool>(), 0usize..3), 0..50)) {
        let names = ["a", "b", "c"];
        let mut set = PauseSet::default();
        let mut expected = [0usize; 3];
        for (hold, which) in ops {
            let reason = PauseReason::from(names[which]);
            if hold {
                set.hold(reason);
                expected[which] += 1;
            } else {
                set.release(&reason);
                expected[which] = expected[which].saturating_sub(1);
            }
            prop_assert_eq!(set.depth(), expected.iter().sum::<usize>());
        }
    }
}
