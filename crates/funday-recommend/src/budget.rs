//! Display-time budget filtering, independent of the composer's own
//! selection.

use funday_core::BudgetLevel;

use crate::types::Activity;

// Localized "free" markers recognized in model-written price text.
const FREE_TOKENS: [&str; 4] = ["free", "kostenlos", "gratis", "gratuit"];

const EURO: &str = "\u{20ac}";
const DOUBLE_EURO: &str = "\u{20ac}\u{20ac}";

fn is_free(price: &str) -> bool {
    FREE_TOKENS.iter().any(|token| price.contains(token))
}

/// Keep only the activities whose price text fits the budget.
///
/// `Free` keeps free-equivalent prices; `Cheap` additionally keeps
/// single-currency-glyph prices (double-glyph strings are excluded);
/// `Medium` and `Any` keep everything.
pub fn filter_by_budget(activities: Vec<Activity>, budget: BudgetLevel) -> Vec<Activity> {
    match budget {
        BudgetLevel::Medium | BudgetLevel::Any => activities,
        BudgetLevel::Free => activities
            .into_iter()
            .filter(|a| is_free(&a.price_range.to_lowercase()))
            .collect(),
        BudgetLevel::Cheap => activities
            .into_iter()
            .filter(|a| {
                let price = a.price_range.to_lowercase();
                is_free(&price) || (price.contains(EURO) && !price.contains(DOUBLE_EURO))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivitySource;

    fn activity(price: &str) -> Activity {
        Activity {
            id: "a1".into(),
            name: "Test".into(),
            description: String::new(),
            address: String::new(),
            distance: String::new(),
            price_range: price.to_string(),
            age_range: String::new(),
            opening_hours: None,
            is_indoor: false,
            image_url: None,
            website_url: None,
            maps_url: String::new(),
            reasoning: String::new(),
            tags: vec![],
            source: ActivitySource::Suggestion,
        }
    }

    fn prices(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.price_range.as_str()).collect()
    }

    #[test]
    fn test_free_keeps_only_free_equivalents() {
        let input = vec![
            activity("Free"),
            activity("\u{20ac}5-10"),
            activity("Kostenlos"),
            activity("gratuit"),
        ];
        let kept = filter_by_budget(input, BudgetLevel::Free);
        assert_eq!(prices(&kept), vec!["Free", "Kostenlos", "gratuit"]);
    }

    #[test]
    fn test_cheap_excludes_double_glyph() {
        let input = vec![
            activity("\u{20ac}\u{20ac}"),
            activity("\u{20ac}5"),
            activity("gratis"),
            activity("\u{20ac}20-30"),
        ];
        let kept = filter_by_budget(input, BudgetLevel::Cheap);
        assert_eq!(prices(&kept), vec!["\u{20ac}5", "gratis", "\u{20ac}20-30"]);
    }

    #[test]
    fn test_medium_and_any_keep_everything() {
        let input = vec![activity("\u{20ac}\u{20ac}\u{20ac}"), activity("Free")];
        assert_eq!(filter_by_budget(input.clone(), BudgetLevel::Medium).len(), 2);
        assert_eq!(filter_by_budget(input, BudgetLevel::Any).len(), 2);
    }
}
