//! Restaurant Factory
//!
//! Builds a seeded [`Restaurant`] from configuration and a catalog, and
//! wires the walking edges of the floor plan.

use crate::constants::{BAR_ID, ENTRANCE_ID, KITCHEN_ID, RESTROOM_1_ID, RESTROOM_2_ID};
use crate::core::config::Config;
use crate::core::restaurant::Restaurant;
use crate::seed::Catalog;
use crate::structures::Graph;
use crate::types::{Error, Location, LocationKind, Result};
use crate::{log_error, log_info};

/// Create a restaurant seeded with the house catalog
pub fn create_restaurant(config: &Config) -> Result<Restaurant> {
    build_restaurant(config, Catalog::standard())
}

/// Create a restaurant from an arbitrary catalog
///
/// Waiters join the rotation in catalog order; every menu item goes into
/// both the ordered tree and the id index; every location becomes a vertex
/// before any edge is added.
pub fn build_restaurant(config: &Config, catalog: Catalog) -> Result<Restaurant> {
    config.validate()?;
    log_info!(
        "Creating restaurant: {} menu items, {} waiters, {} locations",
        catalog.menu.len(),
        catalog.waiters.len(),
        catalog.locations.len()
    );

    let mut restaurant = Restaurant::new(config.clone());
    for waiter in catalog.waiters {
        restaurant.add_waiter(waiter);
    }
    for item in catalog.menu {
        let id = item.id.clone();
        if !restaurant.add_menu_item(item) {
            return Err(Error::config(format!("duplicate menu item id {}", id)));
        }
    }
    for table in catalog.tables {
        restaurant.add_table(table);
    }
    for location in &catalog.locations {
        if !restaurant.add_location(location.clone()) {
            return Err(Error::config(format!("duplicate location id {}", location.id)));
        }
    }

    if let Err(e) = connect_floor(
        restaurant.floor_mut(),
        &catalog.locations,
        config.floor.table_link_threshold,
    ) {
        log_error!("Failed to wire floor plan: {}", e);
        return Err(e);
    }
    log_info!(
        "Floor plan ready: {} vertices, {} edges",
        restaurant.floor().vertex_count(),
        restaurant.floor().edge_count()
    );
    Ok(restaurant)
}

fn find<'a>(locations: &'a [Location], id: &str) -> Option<&'a Location> {
    locations.iter().find(|l| l.id == id)
}

fn link(graph: &mut Graph, a: &Location, b: &Location) -> Result<()> {
    graph.add_edge(&a.id, &b.id, a.distance_to(b))?;
    Ok(())
}

/// Add the walking edges between `locations`.
///
/// Kitchen, entrance and bar form a triangle. Restroom 1 reaches the
/// entrance and the bar; restroom 2 reaches all three. Each table reaches
/// all three, plus every other table closer than `table_threshold`.
pub fn connect_floor(graph: &mut Graph, locations: &[Location], table_threshold: f64) -> Result<()> {
    let (Some(kitchen), Some(entrance), Some(bar)) = (
        find(locations, KITCHEN_ID),
        find(locations, ENTRANCE_ID),
        find(locations, BAR_ID),
    ) else {
        return Err(Error::config(format!(
            "floor plan needs '{}', '{}' and '{}' locations",
            KITCHEN_ID, ENTRANCE_ID, BAR_ID
        )));
    };

    link(graph, entrance, kitchen)?;
    link(graph, entrance, bar)?;
    link(graph, kitchen, bar)?;

    if let Some(restroom) = find(locations, RESTROOM_1_ID) {
        link(graph, restroom, entrance)?;
        link(graph, restroom, bar)?;
    }
    if let Some(restroom) = find(locations, RESTROOM_2_ID) {
        link(graph, restroom, entrance)?;
        link(graph, restroom, kitchen)?;
        link(graph, restroom, bar)?;
    }

    let tables: Vec<&Location> = locations.iter().filter(|l| l.kind == LocationKind::Table).collect();
    for &table in &tables {
        link(graph, table, entrance)?;
        link(graph, table, kitchen)?;
        link(graph, table, bar)?;
        for &other in &tables {
            if other.id != table.id && table.distance_to(other) < table_threshold {
                link(graph, table, other)?;
            }
        }
    }
    Ok(())
}
