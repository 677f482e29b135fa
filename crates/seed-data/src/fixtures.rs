//! The fixed restaurants written by the seeder.

use restaurants::models::{NewRestaurant, YesNo};

fn fixture(
    name: &str,
    address: &str,
    style: &str,
    vegetarian: YesNo,
    open_hour: &str,
    close_hour: &str,
    deliveries: YesNo,
) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        address: Some(address.to_string()),
        style: style.to_string(),
        vegetarian,
        open_hour: open_hour.to_string(),
        close_hour: close_hour.to_string(),
        deliveries: Some(deliveries),
    }
}

/// Returns the seed restaurants in insertion order.
pub fn seed_restaurants() -> Vec<NewRestaurant> {
    vec![
        fixture(
            "Pasta Paradise",
            "123 Spaghetti Lane",
            "Italian",
            YesNo::No,
            "10:00",
            "22:00",
            YesNo::Yes,
        ),
        fixture(
            "Seoul Food",
            "789 Kimchi Blvd",
            "Korean",
            YesNo::Yes,
            "11:00",
            "23:00",
            YesNo::No,
        ),
        fixture(
            "French Fries",
            "456 Baguette St",
            "French",
            YesNo::No,
            "12:00",
            "21:00",
            YesNo::Yes,
        ),
    ]
}
