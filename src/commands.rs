//! Operator commands
//!
//! Each command renders to a `String` (plain text or JSON) and leaves
//! printing to the caller.

use std::fmt::Write as _;

use anyhow::{bail, Context};
use bistro_core::types::Error as CoreError;
use bistro_core::{NewOrder, OrderItem, OrderStatus, Restaurant};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct GraphView<'a> {
    vertices: Vec<&'a str>,
    edges: Vec<EdgeView<'a>>,
}

#[derive(Serialize)]
struct EdgeView<'a> {
    from: &'a str,
    to: &'a str,
    weight: f64,
}

/// Vertices and edges of the floor plan
pub fn graph(restaurant: &Restaurant, json: bool) -> anyhow::Result<String> {
    if !json {
        return Ok(restaurant.graph_dump());
    }
    let floor = restaurant.floor();
    let view = GraphView {
        vertices: floor.get_vertices(),
        edges: floor
            .get_all_edges()
            .into_iter()
            .map(|(from, to, weight)| EdgeView { from, to, weight })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Shortest walking path between two locations.
///
/// Unknown location ids are an error; a known but unreachable pair is not.
pub fn path(restaurant: &Restaurant, from: &str, to: &str, json: bool) -> anyhow::Result<String> {
    for id in [from, to] {
        if restaurant.location(id).is_none() {
            let known: Vec<_> = restaurant.locations().iter().map(|l| l.id.as_str()).collect();
            bail!("unknown location '{}' (known: {})", id, known.join(", "));
        }
    }

    let result = restaurant.find_shortest_path(from, to);
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(match result {
        Some(found) => format!("{}\ndistance: {:.2}", found.path.join(" -> "), found.distance),
        None => format!("no path between {} and {}", from, to),
    })
}

/// Menu in category, then name order
pub fn menu(restaurant: &Restaurant, category: Option<&str>, json: bool) -> anyhow::Result<String> {
    let items = match category {
        Some(category) => restaurant.menu_by_category(category),
        None => restaurant.menu_in_order(),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&items)?);
    }
    if items.is_empty() {
        return Ok(match category {
            Some(category) => format!(
                "no items in category '{}' (categories: {})",
                category,
                restaurant.categories().join(", ")
            ),
            None => "menu is empty".to_string(),
        });
    }

    let mut out = String::new();
    let mut section: Option<&str> = None;
    for item in &items {
        if section != Some(item.category.as_str()) {
            if section.is_some() {
                out.push('\n');
            }
            writeln!(out, "{}", item.category)?;
            section = Some(item.category.as_str());
        }
        writeln!(
            out,
            "  {:<24} {:>6.2}  {:>2} min  {}",
            item.name, item.price, item.preparation_time, item.description
        )?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct DemoSnapshot {
    pending: Vec<String>,
    kitchen: Vec<String>,
    served: Vec<String>,
    history: Vec<bistro_core::Change>,
}

/// Scripted lifecycle: create, assign, cook, serve half, then close one
/// order and undo that.
pub fn demo(restaurant: &mut Restaurant, orders: usize, json: bool) -> anyhow::Result<String> {
    let menu = restaurant.menu_in_order();
    let tables: Vec<u32> = restaurant.tables().iter().map(|t| t.id).collect();
    let mut log = Vec::new();
    let mut ids = Vec::with_capacity(orders);

    for i in 0..orders {
        let items = [i, i + 3]
            .iter()
            .filter_map(|&k| menu.get(k % menu.len().max(1)))
            .map(|m| OrderItem::new(m.id.as_str(), m.name.as_str(), 1, m.price))
            .collect();
        let table_number = tables.get(i % tables.len().max(1)).copied().unwrap_or(1);
        let order = restaurant.add_order(NewOrder { table_number, items, special_instructions: None });
        info!(order = %order.id, table = table_number, "demo: order placed");
        log.push(format!("placed   {} table {:<2} total {:.2}", short(&order.id), table_number, order.total_price));

        match restaurant.assign_waiter_to_order(&order.id) {
            Ok(waiter) => log.push(format!("assigned {} -> {}", short(&order.id), waiter.name)),
            Err(CoreError::NoWaitersOnShift) => {
                warn!("demo: no waiters on shift");
                log.push(format!("assigned {} -> nobody on shift", short(&order.id)));
            }
            Err(e) => return Err(e).context("assigning waiter"),
        }
        ids.push(order.id);
    }

    for id in &ids {
        restaurant.move_order_to_kitchen(id).context("moving order to kitchen")?;
        log.push(format!("kitchen  {}", short(id)));
    }
    for id in ids.iter().step_by(2) {
        restaurant.move_order_to_served(id).context("serving order")?;
        log.push(format!("served   {}", short(id)));
    }

    if let Some(first) = ids.first() {
        restaurant.update_order_status(first, OrderStatus::Completed)?;
        log.push(format!("status   {} -> {}", short(first), OrderStatus::Completed));
        if let Some(change) = restaurant.undo_last_change() {
            info!(order = %change.order_id, "demo: undo");
            log.push(format!("undo     {} back to {}", short(&change.order_id), change.previous_status));
        }
    }

    if json {
        let snapshot = DemoSnapshot {
            pending: restaurant.pending_orders().into_iter().map(|o| o.id).collect(),
            kitchen: restaurant.kitchen_orders().into_iter().map(|o| o.id).collect(),
            served: restaurant.served_orders().into_iter().map(|o| o.id).collect(),
            history: restaurant.change_history(),
        };
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    log.push(format!(
        "pending {}, kitchen {}, served {}, history {}",
        restaurant.pending_orders().len(),
        restaurant.kitchen_orders().len(),
        restaurant.served_orders().len(),
        restaurant.change_history().len()
    ));
    Ok(log.join("\n"))
}

/// First eight characters of an id
fn short(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
