//! Cart totals for the checkout summary.
//!
//! The commerce backend returns the cart as packages (catering menus) with
//! the products chosen per category. Packages are priced per guest; extras
//! are priced per item on top of the package.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Category ids treated as extras when neither the cart nor the package
/// table defines them.
pub const DEFAULT_EXTRA_CATEGORY_IDS: [u64; 3] = [63, 66, 69];

/// Extras categories of each package on the catering menu.
const PACKAGE_EXTRA_CATEGORY_IDS: [(&str, &[u64]); 6] = [
    ("Classic Menü", &[66, 69]),
    ("Signature Menü", &[66, 69]),
    ("Exclusive Menü", &[66, 69]),
    ("Fingerfood Menü", &[66, 69]),
    ("BBQ Menü", &[66, 69]),
    ("Fisch Menü", &[66, 69]),
];

const EXTRAS_MENU_NAME: &str = "Extras";

/// Cart payload as returned by the commerce backend's cart view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartPayload {
    #[serde(default)]
    pub cart: Option<Cart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub order: Option<PackageOrders>,
    #[serde(default)]
    pub menu: Option<CartMenu>,
}

/// The backend sends packages either as an array or keyed by cart row id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PackageOrders {
    List(Vec<PackageOrder>),
    Keyed(BTreeMap<String, PackageOrder>),
}

impl PackageOrders {
    fn iter(&self) -> Box<dyn Iterator<Item = &PackageOrder> + '_> {
        match self {
            PackageOrders::List(list) => Box::new(list.iter()),
            PackageOrders::Keyed(map) => Box::new(map.values()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageOrder {
    #[serde(default)]
    pub package: String,
    /// Per-guest package price.
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub guests: Option<u32>,
    /// Products keyed by category id.
    #[serde(default)]
    pub products: BTreeMap<String, Vec<CartProduct>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CartProduct {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    /// Sent as a string by the backend; numbers are accepted too.
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartMenu {
    /// Overrides the package table for every package in the cart, even when empty.
    #[serde(default)]
    pub contents: Option<Vec<MenuContent>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuContent {
    pub name: String,
    /// An explicit empty list means the menu has no extras.
    #[serde(default)]
    pub ids: Option<Vec<MenuCategoryId>>,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MenuCategoryId {
    Number(u64),
    Text(String),
}

impl MenuCategoryId {
    fn as_u64(&self) -> Option<u64> {
        match self {
            MenuCategoryId::Number(n) => Some(*n),
            MenuCategoryId::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub sub_total: Decimal,
    pub extras_total: Decimal,
    pub total_price: Decimal,
}

impl CartTotals {
    /// Render an amount the way the checkout shows it, e.g. `"130.00€"`.
    #[must_use]
    pub fn display(amount: Decimal) -> String {
        format!(
            "{:.2}€",
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}

/// Compute subtotal, extras and grand total for a cart.
///
/// Missing or empty carts total zero.
#[must_use]
pub fn calculate_cart_totals(payload: &CartPayload) -> CartTotals {
    let Some(cart) = payload.cart.as_ref() else {
        return CartTotals {
            sub_total: Decimal::ZERO,
            extras_total: Decimal::ZERO,
            total_price: Decimal::ZERO,
        };
    };

    let extras_total = extras_total(cart);
    let sub_total = sub_total(cart);

    CartTotals {
        sub_total,
        extras_total,
        total_price: sub_total + extras_total,
    }
}

/// Extras categories for one package: the cart's own menu first, then the
/// package table, then [`DEFAULT_EXTRA_CATEGORY_IDS`].
fn extra_category_ids(cart: &Cart, package: &str) -> Vec<u64> {
    let from_cart = cart.menu.as_ref().and_then(|menu| menu.contents.as_deref());

    let from_menu: Option<Vec<u64>> = match from_cart {
        Some(contents) => contents
            .iter()
            .find(|c| c.name == EXTRAS_MENU_NAME)
            .and_then(|c| c.ids.as_ref())
            .map(|ids| ids.iter().filter_map(MenuCategoryId::as_u64).collect()),
        None => PACKAGE_EXTRA_CATEGORY_IDS
            .iter()
            .find(|(name, _)| *name == package)
            .map(|(_, ids)| ids.to_vec()),
    };

    from_menu.unwrap_or_else(|| DEFAULT_EXTRA_CATEGORY_IDS.to_vec())
}

fn extras_total(cart: &Cart) -> Decimal {
    let Some(order) = cart.order.as_ref() else {
        return Decimal::ZERO;
    };

    order
        .iter()
        .map(|pkg| {
            let extra_ids = extra_category_ids(cart, &pkg.package);
            pkg.products
                .iter()
                .filter(|(category_id, _)| {
                    category_id
                        .trim()
                        .parse::<u64>()
                        .is_ok_and(|id| extra_ids.contains(&id))
                })
                .flat_map(|(_, products)| products.iter())
                .map(|p| p.total)
                .sum::<Decimal>()
        })
        .sum()
}

fn sub_total(cart: &Cart) -> Decimal {
    let Some(order) = cart.order.as_ref() else {
        return Decimal::ZERO;
    };

    order
        .iter()
        .map(|pkg| {
            let guests = Decimal::from(pkg.guests.filter(|g| *g > 0).unwrap_or(1));
            let base = pkg.price * guests;
            let bulk: Decimal = pkg
                .products
                .values()
                .flatten()
                .filter(|p| is_bulk_line(p))
                .map(|p| p.total)
                .sum();
            base + bulk
        })
        .sum()
}

/// Products ordered in steps of ten are charged on top of the package price.
fn is_bulk_line(product: &CartProduct) -> bool {
    let ten = Decimal::TEN;
    product.quantity >= ten && (product.quantity % ten).is_zero() && product.price > Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("valid decimal")
    }

    fn parse(value: &serde_json::Value) -> CartPayload {
        serde_json::from_value(value.clone()).expect("cart payload should parse")
    }

    #[test]
    fn empty_payload_totals_zero() {
        let totals = calculate_cart_totals(&CartPayload::default());
        assert_eq!(totals.total_price, Decimal::ZERO);
        assert_eq!(CartTotals::display(totals.sub_total), "0.00€");
    }

    #[test]
    fn package_price_is_multiplied_by_guests() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [
                    { "package": "Menü 1", "price": 25.5, "guests": 4, "products": {} }
                ]
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.sub_total, dec("102.0"));
        assert_eq!(CartTotals::display(totals.total_price), "102.00€");
    }

    #[test]
    fn zero_or_missing_guests_count_as_one() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": {
                    "a": { "package": "A", "price": 10, "guests": 0, "products": {} },
                    "b": { "package": "B", "price": 12, "products": {} }
                }
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.sub_total, dec("22"));
    }

    #[test]
    fn bulk_products_add_to_subtotal_only_in_steps_of_ten() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [{
                    "package": "Menü 2",
                    "price": 20,
                    "guests": 1,
                    "products": {
                        "59": [
                            { "product_id": "1", "name": "Börek", "quantity": "20", "price": 1.5, "total": 30 },
                            { "product_id": "2", "name": "Salat", "quantity": "15", "price": 2, "total": 30 },
                            { "product_id": "3", "name": "Brot", "quantity": "10", "price": 0, "total": 0 },
                            { "product_id": "4", "name": "Dip", "quantity": "5", "price": 1, "total": 5 }
                        ]
                    }
                }]
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.sub_total, dec("50"));
        assert_eq!(totals.extras_total, Decimal::ZERO);
    }

    #[test]
    fn unknown_package_without_menu_uses_default_extras() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [{
                    "package": "Saisonmenü",
                    "price": 10,
                    "guests": 2,
                    "products": {
                        "63": [{ "product_id": "9", "name": "Baklava", "quantity": "3", "price": 2.5, "total": 7.5 }],
                        "70": [{ "product_id": "8", "name": "Reis", "quantity": "1", "price": 4, "total": 4 }]
                    }
                }]
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.extras_total, dec("7.5"));
        assert_eq!(totals.sub_total, dec("20"));
        assert_eq!(CartTotals::display(totals.total_price), "27.50€");
    }

    #[test]
    fn extras_follow_cart_menu_definition() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [{
                    "package": "Menü 3",
                    "price": 0,
                    "products": {
                        "63": [{ "quantity": "1", "price": 3, "total": 3 }],
                        "81": [{ "quantity": 2, "price": 4, "total": 8 }]
                    }
                }],
                "menu": {
                    "contents": [
                        { "name": "Vorspeisen", "ids": [59], "count": 2 },
                        { "name": "Extras", "ids": ["81"], "count": 0 }
                    ]
                }
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.extras_total, dec("8"));
    }

    #[test]
    fn known_package_without_menu_uses_package_extras() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [{
                    "package": "Classic Menü",
                    "price": 19.9,
                    "guests": 20,
                    "products": {
                        "63": [{ "product_id": "5", "name": "Börek", "quantity": "1", "price": 5, "total": 5 }],
                        "66": [{ "product_id": "6", "name": "Ayran", "quantity": "2", "price": 1.5, "total": 3 }]
                    }
                }]
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.extras_total, dec("3"));
        assert_eq!(CartTotals::display(totals.sub_total), "398.00€");
    }

    #[test]
    fn empty_extras_ids_in_menu_mean_no_extras() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [{
                    "package": "Saisonmenü",
                    "price": 0,
                    "products": {
                        "63": [{ "quantity": "1", "price": 3, "total": 3 }],
                        "66": [{ "quantity": "1", "price": 2, "total": 2 }]
                    }
                }],
                "menu": { "contents": [{ "name": "Extras", "ids": [], "count": 0 }] }
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.extras_total, Decimal::ZERO);
    }

    #[test]
    fn menu_without_extras_entry_uses_default_extras() {
        let payload = parse(&serde_json::json!({
            "cart": {
                "order": [{
                    "package": "Classic Menü",
                    "price": 0,
                    "products": {
                        "63": [{ "quantity": "1", "price": 3, "total": 3 }]
                    }
                }],
                "menu": { "contents": [{ "name": "Vorspeise", "ids": [59], "count": 1 }] }
            }
        }));
        let totals = calculate_cart_totals(&payload);
        assert_eq!(totals.extras_total, dec("3"));
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        assert_eq!(CartTotals::display(dec("12.345")), "12.35€");
        assert_eq!(CartTotals::display(dec("2.125")), "2.13€");
        assert_eq!(CartTotals::display(dec("2.124")), "2.12€");
        assert_eq!(CartTotals::display(dec("7")), "7.00€");
    }
}
