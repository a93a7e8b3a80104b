//! Мок-данные каталога.
//!
//! Линейка джинсов (названия × цвета × размерная сетка) с остатками 0..=100
//! из детерминированного генератора, плюс несколько витринных товаров с
//! фиксированными остатками.

use super::aggregate::{ColorVariant, SizeDetail};
use super::catalog::{Catalog, ProductRecord};
use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Верхняя граница случайного остатка (включительно)
pub const MAX_MOCK_AVAILABLE: u32 = 100;

const PRODUCT_NAMES: &[&str] = &[
    "501 ORIGINAL",
    "501 ORIGINAL",
    "501 ORIGINAL",
    "501 ORIGINAL",
    "501 ORIGINAL",
    "501 ORIGINAL",
    "501 ORIGINAL",
    "505 REGULAR FIT",
    "505 REGULAR FIT",
    "505 REGULAR",
    "514 STRAIGHT",
    "514 STRAIGHT",
    "514 STRAIGHT",
    "514 STRAIGHT",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "511 SLIM",
    "510 SKINNY",
    "510 SKINNY",
    "510 SKINNY",
    "510 SKINNY",
    "510 SKINNY",
    "510 SKINNY",
    "527 STD BOOT CUT",
    "527 STD BOOT CUT",
    "541 ATH TAPER BT",
    "512 SLIM TAPER",
    "512 SLIM TAPER",
    "512 SLIM TAPER",
    "512 SLIM TAPER",
    "512 SLIM TAPER",
    "512 SLIM TAPER",
    "502 TAPER",
    "502 TAPER",
    "502 TAPER",
    "502 TAPER",
    "502 TAPER",
    "502 TAPER",
    "502 TAPER",
    "LO-BALL CARGO",
];

// "CALM N COOL" встречается дважды: в каталог попадает только первый
const COLOR_LIST: &[&str] = &[
    "MEDIUM INDIGO GRMT DYE",
    "MEX MID 82",
    "CHOLLA SUBTLE ADAPT TNL",
    "L4L",
    "ONEWASH",
    "STONEWASH",
    "BLACK STF",
    "FIRST CLASS",
    "WE'RE FINALLY LANDING",
    "RESTORE THE FEELING STR",
    "TIMBERWOLF",
    "OLIVE NIGHT CORD",
    "LAST FOREVER",
    "FLUORITA",
    "CLEANER ADV",
    "CLEAN RUN ADV",
    "CALM N COOL",
    "ON THE COOL",
    "DARK INDIGO WORN IN",
    "ALWAYS ADAPT",
    "CALM N COOL",
    "WANNA GO BACK",
    "JUST BE YOU",
];

const SIZE_HEADERS: &[&str] = &[
    "XSmall", "Small", "Medium", "Large", "XLarge", "XXLarge", "2XL", "3XL",
    "L30-W28", "L30-W29", "L30-W30", "L30-W31", "L30-W32", "L30-W33", "L30-W34", "L30-W36", "L30-W38", "L30-W40",
    "L32-W28", "L32-W29", "L32-W30", "L32-W31", "L32-W32", "L32-W33", "L32-W34", "L32-W36", "L32-W38", "L32-W40",
    "L32-W42", "L32-W44", "L32-W46", "L32-W48", "L32-W50",
    "L34-W32", "L34-W33", "L34-W34", "L34-W36", "L34-W38", "L34-W40", "L34-W42",
    "W29", "W30", "W31",
];

/// Витринные товары с фиксированными остатками: (товар, цвет, [(размер, остаток)])
const SHOWCASE: &[(&str, &str, &[(&str, u32)])] = &[
    (
        "Jeans 511",
        "red",
        &[("xs", 25), ("sm", 105), ("md", 80), ("lg", 65), ("xl", 45), ("xxl", 30)],
    ),
    (
        "Jeans 511",
        "blue",
        &[("xs", 40), ("sm", 0), ("md", 12), ("lg", 70), ("xl", 8), ("xxl", 20)],
    ),
    ("ABC Jacket", "or", &[("sm", 40), ("large", 75)]),
    ("Premium Denim", "blue", &[("md", 6), ("lg", 0)]),
    ("Classic Tee", "white", &[("sm", 150), ("md", 200), ("lg", 9)]),
];

/// Витринные товары в порядке первого упоминания, цвета сгруппированы
pub fn showcase_records() -> Vec<ProductRecord> {
    let mut records: Vec<ProductRecord> = Vec::new();

    for (name, color, sizes) in SHOWCASE {
        let variant = ColorVariant::new(
            *color,
            sizes
                .iter()
                .map(|(size, available)| SizeDetail::new(*size, *available))
                .collect(),
        );
        match records.iter_mut().find(|r| r.name == *name) {
            Some(record) => record.colors.push(variant),
            None => records.push(ProductRecord::new(*name, vec![variant])),
        }
    }

    records
}

/// Линейка джинсов со случайными остатками из генератора с заданным seed
pub fn generated_records(seed: u64) -> Vec<ProductRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let colors = unique_colors();

    PRODUCT_NAMES
        .iter()
        .map(|name| {
            let variants = colors
                .iter()
                .map(|color| {
                    let sizes = SIZE_HEADERS
                        .iter()
                        .map(|size| SizeDetail::new(*size, rng.gen_range(0..=MAX_MOCK_AVAILABLE)))
                        .collect();
                    ColorVariant::new(*color, sizes)
                })
                .collect();
            ProductRecord::new(*name, variants)
        })
        .collect()
}

/// Полный демо-каталог: витрина + сгенерированная линейка
pub fn demo_catalog(seed: u64) -> anyhow::Result<Catalog> {
    let mut records = showcase_records();
    records.extend(generated_records(seed));

    let catalog = Catalog::from_records(records).context("failed to build demo catalog")?;
    log::debug!(
        "demo catalog built: {} products (seed {})",
        catalog.len(),
        seed
    );
    Ok(catalog)
}

fn unique_colors() -> Vec<&'static str> {
    let mut colors: Vec<&'static str> = Vec::with_capacity(COLOR_LIST.len());
    for color in COLOR_LIST {
        if !colors.contains(color) {
            colors.push(*color);
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_builds() {
        let catalog = demo_catalog(42).unwrap();

        assert_eq!(catalog.len(), 4 + PRODUCT_NAMES.len());
        let jeans = catalog.find_by_str("jeans-511").unwrap();
        let red = jeans.find_color("red").unwrap();
        let red_sizes: Vec<(&str, u32)> = red
            .sizes
            .iter()
            .map(|s| (s.size.as_str(), s.available_quantity))
            .collect();
        assert_eq!(
            red_sizes,
            vec![("xs", 25), ("sm", 105), ("md", 80), ("lg", 65), ("xl", 45), ("xxl", 30)]
        );
        assert!(jeans.find_color("blue").is_some());

        assert!(catalog.find_by_str("501-original-7").is_some());
        assert!(catalog.find_by_str("501-original-8").is_none());
    }

    #[test]
    fn test_generated_line_shape() {
        let records = generated_records(7);
        let first = &records[0];

        assert_eq!(first.colors.len(), COLOR_LIST.len() - 1);
        assert!(first.colors.iter().all(|c| c.sizes.len() == SIZE_HEADERS.len()));
        assert!(records
            .iter()
            .flat_map(|r| r.colors.iter())
            .flat_map(|c| c.sizes.iter())
            .all(|s| s.available_quantity <= MAX_MOCK_AVAILABLE));
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        assert_eq!(generated_records(1), generated_records(1));
        assert_ne!(generated_records(1), generated_records(2));
    }
}
