//! Pure vacancy filters.
//!
//! Both filters are side-effect-free over their input sequence and preserve
//! input order. All matching is case-insensitive; blank filter entries are
//! ignored.

use crate::domain::Vacancy;

/// Keep vacancies whose facility set contains every `required` entry and
/// none of the `forbidden` ones.
pub fn filter_by_facilities(
    vacancies: &[Vacancy],
    required: &[String],
    forbidden: &[String],
) -> Vec<Vacancy> {
    vacancies
        .iter()
        .filter(|v| has_required_facilities(v, required) && !has_forbidden_facility(v, forbidden))
        .cloned()
        .collect()
}

/// Keep vacancies whose area name contains every `require` substring and
/// none of the `forbid` substrings.
pub fn filter_by_area_name(
    vacancies: &[Vacancy],
    require: &[String],
    forbid: &[String],
) -> Vec<Vacancy> {
    vacancies
        .iter()
        .filter(|v| area_name_ok(&v.area_name, require, forbid))
        .cloned()
        .collect()
}

fn normalized(entries: &[String]) -> impl Iterator<Item = String> + '_ {
    entries
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
}

fn has_required_facilities(vacancy: &Vacancy, required: &[String]) -> bool {
    normalized(required).all(|need| vacancy.has_facility(&need))
}

fn has_forbidden_facility(vacancy: &Vacancy, forbidden: &[String]) -> bool {
    normalized(forbidden).any(|bad| vacancy.has_facility(&bad))
}

fn area_name_ok(area_name: &str, require: &[String], forbid: &[String]) -> bool {
    let name = area_name.to_lowercase();
    normalized(require).all(|sub| name.contains(&sub))
        && !normalized(forbid).any(|sub| name.contains(&sub))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{vacancy, vacancy_with_facilities};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn required_facilities_are_a_superset_test() {
        let vacancies = vec![
            vacancy_with_facilities("R1", 1, 5, &["Online meeting available", "86 inch MAXHUB"]),
            vacancy_with_facilities("R2", 1, 5, &["Online meeting available"]),
            vacancy_with_facilities("R3", 1, 5, &[]),
        ];

        let kept = filter_by_facilities(
            &vacancies,
            &strings(&["online MEETING available"]),
            &[],
        );
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|v| v.room_id != "R3"));

        let kept = filter_by_facilities(
            &vacancies,
            &strings(&["Online meeting available", "86 inch maxhub"]),
            &[],
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].room_id, "R1");
    }

    #[test]
    fn forbidden_facilities_are_disjointness_test() {
        let vacancies = vec![
            vacancy_with_facilities("R1", 1, 5, &["86 inch MAXHUB"]),
            vacancy_with_facilities("R2", 1, 5, &["Whiteboard"]),
        ];

        let kept = filter_by_facilities(&vacancies, &[], &strings(&["86 INCH maxhub"]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].room_id, "R2");
    }

    #[test]
    fn blank_filter_entries_are_ignored() {
        let vacancies = vec![vacancy("R1", 1, 5)];
        let kept = filter_by_facilities(&vacancies, &strings(&["", "  "]), &strings(&[""]));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn no_filters_keeps_everything_in_order() {
        let vacancies = vec![vacancy("R2", 3, 6), vacancy("R1", 1, 5)];
        let kept = filter_by_facilities(&vacancies, &[], &[]);
        assert_eq!(kept, vacancies);
    }

    #[test]
    fn area_name_requires_all_substrings() {
        let mut a = vacancy("R1", 1, 5);
        a.area_name = "SIP Campus-Meeting Rooms in Central Building".to_string();
        let mut b = vacancy("R2", 1, 5);
        b.area_name = "Foundation Building".to_string();
        let vacancies = vec![a, b];

        let kept = filter_by_area_name(
            &vacancies,
            &strings(&["central", "BUILDING"]),
            &[],
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].room_id, "R1");
    }

    #[test]
    fn area_name_forbids_any_substring() {
        let mut a = vacancy("R1", 1, 5);
        a.area_name = "Central Building".to_string();
        let mut b = vacancy("R2", 1, 5);
        b.area_name = "Foundation Building".to_string();
        let vacancies = vec![a, b];

        let kept = filter_by_area_name(&vacancies, &[], &strings(&["foundation"]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].room_id, "R1");
    }
}
