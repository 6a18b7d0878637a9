//! Plain-text catalog report.

use std::fmt::Write as _;

use catalog_categories::{Category, category_count, product_count};
use catalog_core::format_amount;
use catalog_products::{Catalogued, Product};

/// Render one block per category followed by the process-wide counters.
pub fn render(categories: &[Category]) -> String {
    let mut out = String::new();

    for category in categories {
        let _ = writeln!(out, "{category}");
        let _ = writeln!(out, "{}", category.description());
        let _ = writeln!(out, "Товаров: {}", category.len());
        for product in category {
            let _ = writeln!(out, "  {product}");
        }
        let _ = writeln!(
            out,
            "Средняя цена: {}",
            format_amount(category.middle_price())
        );
        out.push('\n');
    }

    let _ = writeln!(out, "Категорий: {}", category_count());
    let _ = write!(out, "Продуктов: {}", product_count());
    out
}

/// Show that a product with zero stock is refused.
pub fn zero_quantity_check() -> String {
    match Product::new("Бракованный товар", "Неверное количество", 1000.0, 0) {
        Err(err) => {
            tracing::info!(error = %err, "zero quantity rejected");
            format!("Товар с нулевым количеством не создан: {err}")
        }
        Ok(product) => format!("Товар с нулевым количеством создан: {}", product.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_every_category() {
        let category = Category::new(
            "Телевизоры",
            "Современные телевизоры",
            vec![Product::new("55\" QLED 4K", "Фоновая подсветка", 123000.0, 7).unwrap()],
        );
        let report = render(std::slice::from_ref(&category));

        assert!(report.starts_with("Телевизоры, количество продуктов: 7 шт.\n"));
        assert!(report.contains("  55\" QLED 4K, 123000.0 руб. Остаток: 7 шт.\n"));
        assert!(report.contains("Средняя цена: 123000.0\n"));
        assert!(report.contains("Категорий: "));
    }

    #[test]
    fn zero_quantity_is_refused() {
        let line = zero_quantity_check();
        assert!(line.starts_with("Товар с нулевым количеством не создан"));
    }
}
