//! List filters and the ordering each one implies.

use std::cmp::Ordering;

use crate::mueble::Mueble;

/// Selection applied when listing the catalogue.
///
/// At most one criterion is honoured; see [`ListFilter::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListFilter {
    /// Every record, in code order.
    All,
    /// Records whose category equals the value, sorted by name ascending.
    Category(String),
    /// Records with `price >= threshold`, sorted by price ascending.
    MinPrice(f64),
    /// Records with `price <= threshold`, sorted by price descending.
    MaxPrice(f64),
}

/// Sort order of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    Code,
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl ListFilter {
    /// Pick the filter from raw query values.
    ///
    /// Priority is category, then minimum price, then maximum price. Blank
    /// values count as absent. A price threshold that does not parse as a
    /// number yields a filter that matches nothing.
    #[must_use]
    pub fn resolve(category: Option<&str>, min_price: Option<&str>, max_price: Option<&str>) -> Self {
        if let Some(category) = present(category) {
            return Self::Category(category.to_string());
        }
        if let Some(min) = present(min_price) {
            return Self::MinPrice(parse_threshold(min));
        }
        if let Some(max) = present(max_price) {
            return Self::MaxPrice(parse_threshold(max));
        }
        Self::All
    }

    /// Ordering applied to the matching records.
    #[must_use]
    pub fn order(&self) -> ListOrder {
        match self {
            Self::All => ListOrder::Code,
            Self::Category(_) => ListOrder::NameAsc,
            Self::MinPrice(_) => ListOrder::PriceAsc,
            Self::MaxPrice(_) => ListOrder::PriceDesc,
        }
    }

    /// `true` when no record can ever match (unparsable price threshold).
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        match self {
            Self::MinPrice(threshold) | Self::MaxPrice(threshold) => threshold.is_nan(),
            Self::All | Self::Category(_) => false,
        }
    }

    /// Check whether a single record passes the filter.
    #[must_use]
    pub fn matches(&self, mueble: &Mueble) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => mueble.category == *category,
            Self::MinPrice(threshold) => mueble.price >= *threshold,
            Self::MaxPrice(threshold) => mueble.price <= *threshold,
        }
    }

    /// Filter and sort an in-memory collection.
    #[must_use]
    pub fn apply(&self, muebles: impl IntoIterator<Item = Mueble>) -> Vec<Mueble> {
        let mut selected: Vec<Mueble> = muebles.into_iter().filter(|m| self.matches(m)).collect();
        let order = self.order();
        selected.sort_by(|a, b| order.compare(a, b));
        selected
    }
}

impl ListOrder {
    /// Compare two records; ties fall back to code order.
    #[must_use]
    pub fn compare(self, a: &Mueble, b: &Mueble) -> Ordering {
        let primary = match self {
            Self::Code => Ordering::Equal,
            Self::NameAsc => a.name.cmp(&b.name),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
        };
        primary.then_with(|| a.code.cmp(&b.code))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_threshold(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Code;
    use crate::mueble::MuebleFields;

    fn mueble(code: i64, name: &str, price: f64, category: &str) -> Mueble {
        Mueble::new(
            Code::new(code),
            MuebleFields::builder()
                .name(name)
                .price(price)
                .category(category)
                .build()
                .unwrap(),
        )
    }

    fn catalogue() -> Vec<Mueble> {
        vec![
            mueble(1, "Silla Roja", 120.0, "Sillas"),
            mueble(2, "Mesa", 300.0, "Mesas"),
            mueble(3, "Banqueta", 45.5, "Sillas"),
            mueble(4, "Sofá", 900.0, "Sofás"),
        ]
    }

    fn codes(muebles: &[Mueble]) -> Vec<i64> {
        muebles.iter().map(|m| m.code.value()).collect()
    }

    #[test]
    fn should_resolve_all_when_no_filter_given() {
        assert_eq!(ListFilter::resolve(None, None, None), ListFilter::All);
    }

    #[test]
    fn should_prefer_category_over_price_filters() {
        let filter = ListFilter::resolve(Some("Sillas"), Some("10"), Some("20"));
        assert_eq!(filter, ListFilter::Category("Sillas".to_string()));
    }

    #[test]
    fn should_prefer_min_price_over_max_price() {
        let filter = ListFilter::resolve(None, Some("10"), Some("20"));
        assert_eq!(filter, ListFilter::MinPrice(10.0));
    }

    #[test]
    fn should_skip_blank_values() {
        let filter = ListFilter::resolve(Some(""), Some("  "), Some("250"));
        assert_eq!(filter, ListFilter::MaxPrice(250.0));
    }

    #[test]
    fn should_flag_unparsable_threshold_as_unsatisfiable() {
        let filter = ListFilter::resolve(None, Some("cheap"), None);
        assert!(filter.is_unsatisfiable());
        assert!(filter.apply(catalogue()).is_empty());
    }

    #[test]
    fn should_keep_code_order_when_unfiltered() {
        let mut shuffled = catalogue();
        shuffled.reverse();
        let all = ListFilter::All.apply(shuffled);
        assert_eq!(codes(&all), vec![1, 2, 3, 4]);
    }

    #[test]
    fn should_filter_by_category_sorted_by_name() {
        let result = ListFilter::Category("Sillas".to_string()).apply(catalogue());
        assert_eq!(codes(&result), vec![3, 1]);
    }

    #[test]
    fn should_filter_by_min_price_sorted_ascending() {
        let result = ListFilter::MinPrice(120.0).apply(catalogue());
        assert_eq!(codes(&result), vec![1, 2, 4]);
    }

    #[test]
    fn should_filter_by_max_price_sorted_descending() {
        let result = ListFilter::MaxPrice(300.0).apply(catalogue());
        assert_eq!(codes(&result), vec![2, 1, 3]);
    }
}
