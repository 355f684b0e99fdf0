//! Named sort orders for listings
//!
//! Every listing the registry hands out is sorted with one of these pure
//! functions, so each order can be checked without building a store.

use crate::{Artefact, Employee, InHouseProject, OutsourcedProject, Revision};
use std::cmp::Ordering;

/// Artefact history: highest stored number first
pub fn revision_number_desc(a: &Revision, b: &Revision) -> Ordering {
    b.number.cmp(&a.number)
}

/// Personal history: newest date, then higher number, then project id ascending
pub fn personal_revision_order(a: &Revision, b: &Revision) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.number.cmp(&a.number))
        .then_with(|| a.project.cmp(&b.project))
}

/// Project artefacts: most recently revised first, then name ascending
pub fn artefact_listing_order(a: &Artefact, b: &Artefact) -> Ordering {
    b.last_date()
        .cmp(&a.last_date())
        .then_with(|| a.name().cmp(b.name()))
}

/// In-house keyword matches: newest ledger date, then more revisions, then id
///
/// Projects without any ledger entry sort after every dated project.
pub fn keyword_match_order(a: &InHouseProject, b: &InHouseProject) -> Ordering {
    b.recent_revision_date()
        .cmp(&a.recent_revision_date())
        .then_with(|| b.num_revisions().cmp(&a.num_revisions()))
        .then_with(|| a.id().cmp(b.id()))
}

/// Outsourced keyword matches: id ascending
pub fn outsourced_match_order(a: &OutsourcedProject, b: &OutsourcedProject) -> Ordering {
    a.id().cmp(b.id())
}

/// Confidentiality range results: id ascending
pub fn confidentiality_order(a: &InHouseProject, b: &InHouseProject) -> Ordering {
    a.id().cmp(b.id())
}

/// Workaholic ranking: more revisions, more projects, newest activity, then username
pub fn workaholic_order(a: &Employee, b: &Employee) -> Ordering {
    b.num_revisions()
        .cmp(&a.num_revisions())
        .then_with(|| b.num_projects().cmp(&a.num_projects()))
        .then_with(|| b.last_revision_date().cmp(&a.last_revision_date()))
        .then_with(|| a.username().cmp(b.username()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Developer, Manager};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, d).unwrap()
    }

    fn rev(number: u32, day: u32, project: &str) -> Revision {
        Revision::new(number, "bob", date(1, day), "c", "a", project)
    }

    #[test]
    fn test_personal_order_breaks_ties_by_project() {
        let a = rev(2, 5, "P2");
        let b = rev(2, 5, "P1");
        assert_eq!(personal_revision_order(&a, &b), Ordering::Greater);
        assert_eq!(personal_revision_order(&rev(1, 6, "Z"), &b), Ordering::Less);
        assert_eq!(personal_revision_order(&rev(3, 5, "Z"), &b), Ordering::Less);
    }

    #[test]
    fn test_keyword_order_puts_undated_projects_last() {
        let empty = InHouseProject::new("A", "alice", "k", 1);
        let mut dated = InHouseProject::new("B", "alice", "k", 1);
        dated.record_revision(rev(1, 3, "B"));

        assert_eq!(keyword_match_order(&dated, &empty), Ordering::Less);
        assert_eq!(keyword_match_order(&empty, &dated), Ordering::Greater);
    }

    #[test]
    fn test_workaholic_order_prefers_more_updates() {
        let mut busy: Employee = Developer::new("zed", "alice", 1).into();
        busy.record_revision(rev(1, 1, "P1"));
        busy.record_revision(rev(2, 2, "P1"));
        let mut idle: Employee = Manager::new("amy", 1).into();
        idle.record_revision(rev(1, 9, "P1"));

        assert_eq!(workaholic_order(&busy, &idle), Ordering::Less);
    }

    #[test]
    fn test_workaholic_order_falls_back_to_username() {
        let mut a: Employee = Developer::new("amy", "alice", 1).into();
        let mut b: Employee = Developer::new("bea", "alice", 1).into();
        a.record_revision(rev(1, 1, "P1"));
        b.record_revision(rev(1, 1, "P1"));

        assert_eq!(workaholic_order(&a, &b), Ordering::Less);
        assert_eq!(workaholic_order(&b, &a), Ordering::Greater);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn arb_revision() -> impl Strategy<Value = Revision> {
        (1u32..6, 1u32..28, "[A-C]{1,2}").prop_map(|(number, day, project)| {
            let date = NaiveDate::from_ymd_opt(2023, 5, day).unwrap();
            Revision::new(number, "bob", date, "c", "a", project)
        })
    }

    proptest! {
        /// Property: swapping the arguments reverses the personal order
        #[test]
        fn test_personal_order_is_antisymmetric(a in arb_revision(), b in arb_revision()) {
            prop_assert_eq!(personal_revision_order(&a, &b), personal_revision_order(&b, &a).reverse());
        }

        /// Property: a sorted personal list never has a later date after an earlier one
        #[test]
        fn test_personal_order_sorts_dates_descending(mut revisions in prop::collection::vec(arb_revision(), 0..20)) {
            revisions.sort_by(personal_revision_order);
            for pair in revisions.windows(2) {
                prop_assert!(pair[0].date >= pair[1].date);
                if pair[0].date == pair[1].date {
                    prop_assert!(pair[0].number >= pair[1].number);
                }
            }
        }

        /// Property: artefact history order is strictly by number
        #[test]
        fn test_number_order_matches_numbers(a in arb_revision(), b in arb_revision()) {
            prop_assert_eq!(revision_number_desc(&a, &b), b.number.cmp(&a.number));
        }
    }
}
