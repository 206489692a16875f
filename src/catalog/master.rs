use std::sync::LazyLock;

use crate::models::Category;

/// Full à la carte list offered when customizing a menu.
pub static MASTER_MENU: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category::new(
            "Welcome Drinks",
            &[
                ("Mint Lime", 4.75),
                ("Honey Grape", 2.50),
                ("Passion Fruit Mojito", 2.25),
                ("Ginger Pishardi", 1.50),
            ],
        ),
        Category::new(
            "Starters",
            &[
                ("Chicken Lollipop", 5.50),
                ("Dragon Chicken", 3.75),
                ("Injipuly Chicken", 5.50),
                ("Chicken Malai Tikka", 6.00),
                ("Chicken Tikka / Seekh", 3.50),
                ("Thai Grill Fish", 7.50),
                ("Grilled Chicken w/ Avocado", 4.00),
                ("Gobi 65", 5.25),
                ("Chilli Gobi", 3.50),
                ("Gobi Manchurian", 3.25),
                ("Crispy Fried Veg", 3.50),
            ],
        ),
        Category::new(
            "Salads",
            &[
                ("Garden Fresh Salad", 2.25),
                ("Green Salad", 2.25),
                ("Chef Special Salad", 2.25),
                ("Tossed Salad", 4.50),
                ("Fattoush", 2.50),
            ],
        ),
        Category::new(
            "Soups",
            &[
                ("Sweet Corn Soup", 2.75),
                ("Hot & Sour Soup", 2.75),
                ("Cream of Soup", 3.50),
            ],
        ),
        Category::new(
            "Main Course",
            &[
                ("Achayan Chicken Curry", 7.50),
                ("Kuttanadan Kozhi Curry", 6.50),
                ("Angamaly Beef Varattu", 7.25),
                ("Angamaly Beef Ularthu", 5.00),
                ("Beef Koorka Varattu / Beef Coconut Fry", 6.00),
                ("Mutton Pepper Varattu", 6.75),
                ("Fish Mango Curry / Kumarakom Fish", 5.75),
                ("Hamour Kanthari", 6.50),
                ("Veg Khorma", 4.00),
                ("Veg Kuruma / Mushroom Masala", 4.00),
                ("Paneer Butter Masala", 3.50),
                ("Veg Fried Rice", 3.75),
                ("Ghee Rice", 3.25),
                ("Chicken Fried Rice / Noodles", 3.75),
                ("Biryani", 7.00),
                ("Kappa Thalichathu", 3.50),
            ],
        ),
        Category::new(
            "Breads",
            &[
                ("Kerala Porotta", 2.00),
                ("Kallappam / Idiyappam", 1.50),
                ("Chappathi / Wheat Porotta", 1.50),
            ],
        ),
        Category::new(
            "Desserts",
            &[
                ("Fruit Salad", 5.00),
                ("Cut Fruits", 2.00),
                ("Tender Coconut Pudding", 2.25),
                ("Gulab Jamun", 3.00),
                ("Ice Cream", 3.00),
            ],
        ),
    ]
});
