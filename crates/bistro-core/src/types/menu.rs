//! Menu items

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dish or drink on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// UUID v4
    pub id: String,
    /// Display name
    pub name: String,
    /// Menu section, e.g. "Starters"
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Short description
    pub description: String,
    /// Preparation time in minutes
    pub preparation_time: u32,
    /// Optional picture
    pub image_url: Option<String>,
}

impl MenuItem {
    /// New menu item with a fresh id
    pub fn new(name: &str, category: &str, price: f64, description: &str, preparation_time: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
            preparation_time,
            image_url: None,
        }
    }

    /// Attach a picture
    pub fn with_image_url(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }
}

/// Menu browsing order: category first, then name
pub fn by_category_then_name(a: &MenuItem, b: &MenuItem) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.name.cmp(&b.name))
}

/// Comparator type used by the menu tree
pub type MenuOrder = fn(&MenuItem, &MenuItem) -> Ordering;
