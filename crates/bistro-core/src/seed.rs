//! Default catalog
//!
//! The menu, roster and floor plan a fresh restaurant opens with. Ids for
//! menu items and waiters are generated on every call, so two catalogs never
//! share them.

use crate::constants::{BAR_ID, ENTRANCE_ID, KITCHEN_ID, RESTROOM_1_ID, RESTROOM_2_ID};
use crate::types::{Location, LocationKind, MenuItem, RestaurantTable, Waiter};

/// Everything needed to seed a restaurant
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Menu items, in listing order
    pub menu: Vec<MenuItem>,
    /// Waiters, in rotation order
    pub waiters: Vec<Waiter>,
    /// Dining tables
    pub tables: Vec<RestaurantTable>,
    /// Walkable locations; tables included
    pub locations: Vec<Location>,
}

impl Catalog {
    /// The house catalog
    pub fn standard() -> Self {
        let tables = standard_tables();
        let mut locations = standard_landmarks();
        locations.extend(tables.iter().map(RestaurantTable::to_location));
        Self { menu: standard_menu(), waiters: standard_waiters(), tables, locations }
    }
}

const IMAGE_QUERY: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// name, category, price, description, minutes, pexels photo path
const MENU: &[(&str, &str, f64, &str, u32, &str)] = &[
    ("Garlic Bread", "Starters", 5.99,
        "Freshly baked bread with garlic butter and herbs", 8,
        "1166120/pexels-photo-1166120.jpeg"),
    ("Bruschetta", "Starters", 7.99,
        "Toasted bread topped with fresh tomatoes, basil, and olive oil", 10,
        "2762939/pexels-photo-2762939.jpeg"),
    ("Mozzarella Sticks", "Starters", 8.99,
        "Breaded and fried mozzarella served with marinara sauce", 12,
        "15126954/pexels-photo-15126954/free-photo-of-close-up-of-mozzarella-sticks.jpeg"),
    ("Margherita Pizza", "Main Courses", 12.99,
        "Classic pizza with tomato sauce, mozzarella, and fresh basil", 15,
        "2147491/pexels-photo-2147491.jpeg"),
    ("Spaghetti Carbonara", "Main Courses", 14.99,
        "Spaghetti with creamy sauce, pancetta, eggs, and parmesan", 18,
        "4518830/pexels-photo-4518830.jpeg"),
    ("Grilled Salmon", "Main Courses", 19.99,
        "Fresh salmon fillet grilled to perfection with lemon butter sauce", 20,
        "3763847/pexels-photo-3763847.jpeg"),
    ("Beef Burger", "Main Courses", 15.99,
        "Juicy beef patty with lettuce, tomato, cheese, and special sauce", 15,
        "2702674/pexels-photo-2702674.jpeg"),
    ("Tiramisu", "Desserts", 8.99,
        "Italian dessert with coffee-soaked ladyfingers and mascarpone cream", 10,
        "6249477/pexels-photo-6249477.jpeg"),
    ("Chocolate Cake", "Desserts", 7.99,
        "Rich chocolate cake with ganache frosting", 8,
        "2144200/pexels-photo-2144200.jpeg"),
    ("Sparkling Water", "Drinks", 3.99,
        "Refreshing sparkling water with ice and lemon", 3,
        "2995333/pexels-photo-2995333.jpeg"),
    ("House Red Wine", "Drinks", 9.99,
        "Glass of our house red wine selection", 4,
        "1479706/pexels-photo-1479706.jpeg"),
];

/// The house menu
pub fn standard_menu() -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(name, category, price, description, minutes, photo)| {
            let url = format!("https://images.pexels.com/photos/{}{}", photo, IMAGE_QUERY);
            MenuItem::new(name, category, price, description, minutes).with_image_url(&url)
        })
        .collect()
}

/// The house roster, three sections of three tables
pub fn standard_waiters() -> Vec<Waiter> {
    vec![
        Waiter::new("Alex Johnson", vec![1, 2, 3]),
        Waiter::new("Emma Davis", vec![4, 5, 6]),
        Waiter::new("Michael Smith", vec![7, 8, 9]),
    ]
}

/// Nine tables on a 3×3 grid, numbered row by row
pub fn standard_tables() -> Vec<RestaurantTable> {
    const SEATS: [u32; 9] = [2, 2, 4, 4, 6, 6, 8, 2, 2];
    const COORDS: [f64; 3] = [10.0, 30.0, 50.0];

    let mut tables = Vec::with_capacity(SEATS.len());
    for (row, &y) in COORDS.iter().enumerate() {
        for (col, &x) in COORDS.iter().enumerate() {
            let n = row * COORDS.len() + col;
            tables.push(RestaurantTable::new(n as u32 + 1, x, y, SEATS[n]));
        }
    }
    tables
}

/// Kitchen, bar, entrance and the two restrooms
pub fn standard_landmarks() -> Vec<Location> {
    vec![
        Location::new(KITCHEN_ID, "Kitchen", LocationKind::Kitchen, 30.0, 5.0),
        Location::new(BAR_ID, "Bar", LocationKind::Bar, 55.0, 5.0),
        Location::new(ENTRANCE_ID, "Entrance", LocationKind::Entrance, 30.0, 70.0),
        Location::new(RESTROOM_1_ID, "Restroom 1", LocationKind::Restroom, 5.0, 70.0),
        Location::new(RESTROOM_2_ID, "Restroom 2", LocationKind::Restroom, 55.0, 70.0),
    ]
}
