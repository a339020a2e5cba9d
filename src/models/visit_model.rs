// Visit model mapping place categories to expected duration and spending

use crate::models::{Category, Cost, Minutes};

/// Expected visit duration and spending for one stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitProfile {
    /// Time spent at the place, in minutes
    pub duration: Minutes,

    /// Expected spending at the place, in local currency
    pub cost: Cost,
}

impl VisitProfile {
    pub fn new(duration: Minutes, cost: Cost) -> Self {
        Self { duration, cost }
    }
}

/// Static lookup from category to visit duration and spending.
///
/// The table is a design parameter rather than derived data. Callers may
/// substitute their own values, but the defaults must stay as-is to keep
/// planned schedules compatible with previously saved trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitModel {
    pub lodging: VisitProfile,
    pub restaurant: VisitProfile,
    pub tourist_attraction: VisitProfile,
    pub cafe: VisitProfile,
    pub shopping_mall: VisitProfile,

    /// Profile used for unknown or missing categories
    pub fallback: VisitProfile,
}

impl Default for VisitModel {
    fn default() -> Self {
        Self {
            lodging: VisitProfile::new(0, 80_000),
            restaurant: VisitProfile::new(90, 15_000),
            tourist_attraction: VisitProfile::new(120, 10_000),
            cafe: VisitProfile::new(60, 6_000),
            shopping_mall: VisitProfile::new(90, 30_000),
            fallback: VisitProfile::new(60, 0),
        }
    }
}

impl VisitModel {
    /// Looks up the visit profile for a category, falling back for
    /// unknown or missing categories
    pub fn profile(&self, category: Option<Category>) -> VisitProfile {
        match category {
            Some(Category::Lodging) => self.lodging,
            Some(Category::Restaurant) => self.restaurant,
            Some(Category::TouristAttraction) => self.tourist_attraction,
            Some(Category::Cafe) => self.cafe,
            Some(Category::ShoppingMall) => self.shopping_mall,
            Some(Category::Other) | None => self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let model = VisitModel::default();

        assert_eq!(model.profile(Some(Category::Lodging)), VisitProfile::new(0, 80_000));
        assert_eq!(model.profile(Some(Category::Restaurant)), VisitProfile::new(90, 15_000));
        assert_eq!(
            model.profile(Some(Category::TouristAttraction)),
            VisitProfile::new(120, 10_000)
        );
        assert_eq!(model.profile(Some(Category::Cafe)), VisitProfile::new(60, 6_000));
        assert_eq!(
            model.profile(Some(Category::ShoppingMall)),
            VisitProfile::new(90, 30_000)
        );
    }

    #[test]
    fn test_missing_category_uses_fallback() {
        let model = VisitModel::default();
        assert_eq!(model.profile(None), VisitProfile::new(60, 0));
    }

    #[test]
    fn test_unknown_category_uses_fallback() {
        let model = VisitModel::default();
        assert_eq!(model.profile(Some(Category::Other)), VisitProfile::new(60, 0));
    }
}
