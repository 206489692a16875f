use std::sync::LazyLock;

use crate::models::{Category, Package, PackageId};

fn package(id: PackageId, description: &'static str, categories: Vec<Category>) -> Package {
    Package {
        id,
        title: format!("AED {} Menu", id.value()),
        description,
        per_pax_price: id.value() as f64,
        categories,
    }
}

/// The four fixed-price packages, ordered by price.
pub static PACKAGES: LazyLock<Vec<Package>> = LazyLock::new(|| {
    vec![
        package(
            PackageId::Aed65,
            "16 items included in this package",
            vec![
                Category::new("Welcome Drinks", &[("Mint Lime", 4.75)]),
                Category::new(
                    "Starters",
                    &[
                        ("Chicken Lollipop", 5.50),
                        ("Gobi 65", 5.25),
                        ("Gobi Manchurian", 3.25),
                    ],
                ),
                Category::new(
                    "Salads",
                    &[("Tossed Salad", 4.50), ("Garden Fresh Salad", 2.25)],
                ),
                Category::new(
                    "Soups",
                    &[("Sweet Corn Soup", 2.75), ("Hot & Sour Soup", 2.75)],
                ),
                Category::new(
                    "Main Course",
                    &[
                        ("Achayan Chicken Curry", 7.50),
                        ("Angamaly Beef Varattu", 7.25),
                        ("Veg Khorma", 4.00),
                        ("Veg Fried Rice", 3.75),
                    ],
                ),
                Category::new("Breads", &[("Kallappam", 1.50), ("Kerala Porotta", 2.00)]),
                Category::new("Desserts", &[("Fruit Salad", 5.00), ("Ice Cream", 3.00)]),
            ],
        ),
        package(
            PackageId::Aed75,
            "21 items included in this premium package",
            vec![
                Category::new("Welcome Drinks", &[("Honey Grape", 2.50)]),
                Category::new(
                    "Starters",
                    &[
                        ("Dragon Chicken", 3.75),
                        ("Gobi 65", 5.25),
                        ("Chilli Gobi", 3.50),
                    ],
                ),
                Category::new(
                    "Salads",
                    &[("Green Salad", 2.25), ("Chef Special Salad", 2.25)],
                ),
                Category::new(
                    "Soups",
                    &[("Sweet Corn Soup", 2.75), ("Hot & Sour Soup", 2.75)],
                ),
                Category::new(
                    "Main Course",
                    &[
                        ("Achayan Chicken Curry", 7.50),
                        ("Angamaly Beef Varattu", 7.25),
                        ("Fish Kumarakom", 5.75),
                        ("Hamour Kanthari", 6.50),
                        ("Veg Kuruma", 4.00),
                        ("Ghee Rice", 3.25),
                        ("Veg Fried Rice", 3.75),
                        ("Kappa Thalichathu", 3.50),
                    ],
                ),
                Category::new(
                    "Breads",
                    &[
                        ("Kallappam", 1.50),
                        ("Kerala Porotta", 2.00),
                        ("Chappathi", 1.50),
                    ],
                ),
                Category::new(
                    "Desserts",
                    &[("Tender Coconut Pudding", 2.25), ("Gulab Jamun", 3.00)],
                ),
            ],
        ),
        package(
            PackageId::Aed85,
            "25 items included for a grand feast",
            vec![
                Category::new(
                    "Welcome Drinks",
                    &[("Passion Fruit Mojito", 2.25), ("Ginger Pishardi", 1.50)],
                ),
                Category::new(
                    "Starters",
                    &[
                        ("Injipuly Chicken", 5.50),
                        ("Hamour Kanthari", 6.50),
                        ("Chicken Tikka / Seekh", 3.50),
                        ("Crispy Fried Veg", 3.50),
                        ("Gobi Manchurian", 3.25),
                    ],
                ),
                Category::new(
                    "Salads",
                    &[
                        ("Garden Fresh Salad", 2.25),
                        ("Chef Special Salad", 2.25),
                        ("Fattoush", 2.50),
                    ],
                ),
                Category::new(
                    "Soups",
                    &[("Sweet Corn Soup", 2.75), ("Hot & Sour Soup", 2.75)],
                ),
                Category::new(
                    "Main Course",
                    &[
                        ("Kuttanadan Kozhi Curry", 6.50),
                        ("Angamaly Beef Ularthu", 5.00),
                        ("Fish Mango Curry", 5.75),
                        ("Mutton Pepper Varattu", 6.75),
                        ("Mushroom Masala", 4.00),
                        ("Ghee Rice", 3.25),
                        ("Chicken Fried Rice", 3.75),
                    ],
                ),
                Category::new(
                    "Breads",
                    &[
                        ("Kallappam", 1.50),
                        ("Kerala Porotta", 2.00),
                        ("Chappathi", 1.50),
                    ],
                ),
                Category::new(
                    "Desserts",
                    &[
                        ("Gulab Jamun", 3.00),
                        ("Ice Cream", 3.00),
                        ("Cut Fruits", 2.00),
                    ],
                ),
            ],
        ),
        package(
            PackageId::Aed100,
            "26 items for the ultimate catering experience",
            vec![
                Category::new(
                    "Welcome Drinks",
                    &[("Passion Fruit Mojito", 2.25), ("Honey Grape", 2.50)],
                ),
                Category::new(
                    "Starters",
                    &[
                        ("Chicken Lollipop", 5.50),
                        ("Thai Grill Fish", 7.50),
                        ("Chicken Malai Tikka", 6.00),
                        ("Gobi 65", 5.25),
                    ],
                ),
                Category::new(
                    "Salads",
                    &[
                        ("Garden Fresh Salad", 2.25),
                        ("Chef Special Salad", 2.25),
                        ("Fattoush", 2.50),
                        ("Grilled Chicken w/ Avocado", 4.00),
                    ],
                ),
                Category::new(
                    "Soups",
                    &[("Sweet Corn Soup", 2.75), ("Cream of Soup", 3.50)],
                ),
                Category::new(
                    "Main Course",
                    &[
                        ("Beef Koorka Varattu", 6.00),
                        ("Fish Mango Curry", 5.75),
                        ("Mutton Pepper Varattu", 6.75),
                        ("Veg Kuruma / Mushroom Masala", 4.00),
                        ("Paneer Butter Masala", 3.50),
                        ("Biryani", 7.00),
                        ("Chicken Fried Rice / Noodles", 3.75),
                        ("Kappa Thalichathu", 3.50),
                    ],
                ),
                Category::new(
                    "Breads",
                    &[
                        ("Kerala Porotta", 2.00),
                        ("Idiyappam or Kallappam", 1.50),
                        ("Chappathi / Wheat Porotta", 1.50),
                    ],
                ),
                Category::new(
                    "Desserts",
                    &[
                        ("Gulab Jamun", 3.00),
                        ("Ice Cream", 3.00),
                        ("Cut Fruits", 2.00),
                    ],
                ),
            ],
        ),
    ]
});
