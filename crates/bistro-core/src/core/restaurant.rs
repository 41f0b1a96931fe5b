//! Restaurant state
//!
//! Owns every container instance and the entity collections, and drives an
//! order through its lifecycle:
//!
//! ```text
//! add_order ──► pending Queue ──► kitchen LinkedList ──► served DoublyLinkedList
//!                     move_order_to_kitchen      move_order_to_served
//! ```
//!
//! Each transition pushes a [`Change`] onto the history stack. The order
//! record in `orders` is the source of truth for status; the copy in a stage
//! container is refreshed only when the order migrates. `update_order_status`
//! and `undo_last_change` touch the record alone and never move an order
//! between containers.

use ahash::AHashMap;

use crate::core::config::Config;
use crate::structures::{
    BinaryTree, CircularList, DoublyLinkedList, Graph, HashTable, LinkedList, PathResult, Queue,
    SortedTree, Stack,
};
use crate::types::{
    by_category_then_name, Change, Error, Location, MenuItem, MenuOrder, NewOrder, Order,
    OrderStatus, RestaurantTable, Result, TableStatus, Waiter,
};
use crate::{log_debug, log_info, log_warn};

/// All restaurant state in one place
pub struct Restaurant {
    config: Config,

    orders: Vec<Order>,
    order_index: AHashMap<String, usize>,
    tables: Vec<RestaurantTable>,
    locations: Vec<Location>,

    pending: Queue<Order>,
    kitchen: LinkedList<Order>,
    served: DoublyLinkedList<Order>,
    history: Stack<Change>,
    waiters: CircularList<Waiter>,
    menu_tree: SortedTree<MenuItem, MenuOrder>,
    menu_index: HashTable<MenuItem>,
    floor: Graph,
}

impl Restaurant {
    /// Empty restaurant: no menu, staff or floor plan
    pub fn new(config: Config) -> Self {
        let menu_index = HashTable::with_buckets(config.menu.bucket_count);
        Self {
            config,
            orders: Vec::new(),
            order_index: AHashMap::new(),
            tables: Vec::new(),
            locations: Vec::new(),
            pending: Queue::new(),
            kitchen: LinkedList::new(),
            served: DoublyLinkedList::new(),
            history: Stack::new(),
            waiters: CircularList::new(),
            menu_tree: BinaryTree::with_comparator(by_category_then_name as MenuOrder),
            menu_index,
            floor: Graph::new(),
        }
    }

    /// Configuration this restaurant was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ---- seeding ----------------------------------------------------------

    /// Put a menu item into both the ordered tree and the id index.
    ///
    /// Returns false, leaving both untouched, if the id is already on the menu.
    pub fn add_menu_item(&mut self, item: MenuItem) -> bool {
        if self.menu_index.has(&item.id) {
            log_warn!("menu item {} ({}) already on the menu", item.id, item.name);
            return false;
        }
        self.menu_index.set(item.id.clone(), item.clone());
        self.menu_tree.insert(item);
        true
    }

    /// Add a waiter at the end of the rotation
    pub fn add_waiter(&mut self, waiter: Waiter) {
        log_debug!("waiter {} joins rotation", waiter.name);
        self.waiters.add(waiter);
    }

    /// Remove a waiter from the rotation. Returns whether they were on it.
    pub fn remove_waiter(&mut self, waiter_id: &str) -> bool {
        self.waiters.remove_by(|w| w.id == waiter_id).is_some()
    }

    /// Register a table
    pub fn add_table(&mut self, table: RestaurantTable) {
        self.tables.push(table);
    }

    /// Register a location as a graph vertex. Returns false if the id is taken.
    pub fn add_location(&mut self, location: Location) -> bool {
        if !self.floor.add_vertex(location.id.clone()) {
            log_warn!("location {} already registered", location.id);
            return false;
        }
        self.locations.push(location);
        true
    }

    /// Floor-plan graph, for wiring edges
    pub fn floor_mut(&mut self) -> &mut Graph {
        &mut self.floor
    }

    // ---- order lifecycle --------------------------------------------------

    /// Create a pending order from a draft and queue it
    pub fn add_order(&mut self, draft: NewOrder) -> Order {
        let order = Order::from_draft(draft);

        match self.tables.iter_mut().find(|t| t.id == order.table_number) {
            Some(table) => {
                table.status = TableStatus::Occupied;
                table.current_order_id = Some(order.id.clone());
            }
            None => log_warn!("order {} is for unknown table {}", order.id, order.table_number),
        }

        self.pending.enqueue(order.clone());
        self.order_index.insert(order.id.clone(), self.orders.len());
        self.orders.push(order.clone());
        log_info!("order {} added for table {} ({:.2})", order.id, order.table_number, order.total_price);
        order
    }

    fn record_mut(&mut self, order_id: &str) -> Result<&mut Order> {
        let slot = *self
            .order_index
            .get(order_id)
            .ok_or_else(|| Error::order_not_found(order_id))?;
        Ok(&mut self.orders[slot])
    }

    /// Take the order out of the pending queue.
    ///
    /// One full dequeue/re-enqueue pass; every other order keeps its place.
    fn extract_pending(&mut self, order_id: &str) -> Option<Order> {
        let mut found = None;
        for _ in 0..self.pending.size() {
            let Some(order) = self.pending.dequeue() else {
                break;
            };
            if found.is_none() && order.id == order_id {
                found = Some(order);
            } else {
                self.pending.enqueue(order);
            }
        }
        found
    }

    /// Move a pending order to the kitchen
    pub fn move_order_to_kitchen(&mut self, order_id: &str) -> Result<Order> {
        self.record_mut(order_id)?;
        self.extract_pending(order_id)
            .ok_or_else(|| Error::order_not_found(order_id))?;

        let record = self.record_mut(order_id)?;
        let previous = record.status;
        record.set_status(OrderStatus::InProgress);
        let order = record.clone();

        self.kitchen.append(order.clone());
        self.history.push(Change::now(
            order_id,
            previous,
            OrderStatus::InProgress,
            format!("Order {} moved from pending to kitchen", order_id),
        ));
        log_info!("order {} -> kitchen", order_id);
        Ok(order)
    }

    /// Move a kitchen order to served
    pub fn move_order_to_served(&mut self, order_id: &str) -> Result<Order> {
        self.record_mut(order_id)?;
        self.kitchen
            .remove_by(|o| o.id == order_id)
            .ok_or_else(|| Error::order_not_found(order_id))?;

        let record = self.record_mut(order_id)?;
        let previous = record.status;
        record.set_status(OrderStatus::Served);
        let order = record.clone();

        self.served.append(order.clone());
        self.history.push(Change::now(
            order_id,
            previous,
            OrderStatus::Served,
            format!("Order {} moved from kitchen to served", order_id),
        ));
        log_info!("order {} -> served", order_id);
        Ok(order)
    }

    /// Set the status of an order record without moving it between stages
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> Result<Change> {
        let record = self.record_mut(order_id)?;
        let previous = record.status;
        record.set_status(status);

        let change = Change::now(
            order_id,
            previous,
            status,
            format!("Order {} status changed from {} to {}", order_id, previous, status),
        );
        self.history.push(change.clone());
        log_info!("order {} status {} -> {}", order_id, previous, status);
        Ok(change)
    }

    /// Pop the latest change and restore the previous status on the record
    pub fn undo_last_change(&mut self) -> Option<Change> {
        let change = self.history.pop()?;
        match self.record_mut(&change.order_id) {
            Ok(record) => {
                record.set_status(change.previous_status);
                log_info!(
                    "undo: order {} back to {} (was {})",
                    change.order_id,
                    change.previous_status,
                    change.new_status
                );
            }
            Err(e) => log_warn!("undo skipped: {}", e),
        }
        Some(change)
    }

    /// Give the order to the next waiter in the rotation
    pub fn assign_waiter_to_order(&mut self, order_id: &str) -> Result<Waiter> {
        self.record_mut(order_id)?;
        if self.waiters.rotate().is_none() {
            return Err(Error::NoWaitersOnShift);
        }
        let waiter = self.waiters.current_mut().ok_or(Error::NoWaitersOnShift)?;
        waiter.current_orders.push(order_id.to_string());
        let waiter = waiter.clone();

        let record = self.record_mut(order_id)?;
        record.waiter_id = Some(waiter.id.clone());
        record.updated_at = chrono::Utc::now();
        log_info!("order {} assigned to {}", order_id, waiter.name);
        Ok(waiter)
    }

    // ---- queries ----------------------------------------------------------

    /// Order record by id
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.order_index.get(order_id).map(|&slot| &self.orders[slot])
    }

    /// Every order record, oldest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Pending queue snapshot, front first
    pub fn pending_orders(&self) -> Vec<Order> {
        self.pending.get_all()
    }

    /// Kitchen list snapshot, oldest first
    pub fn kitchen_orders(&self) -> Vec<Order> {
        self.kitchen.to_array()
    }

    /// Served list snapshot, oldest first
    pub fn served_orders(&self) -> Vec<Order> {
        self.served.to_array()
    }

    /// Change history, oldest first
    pub fn change_history(&self) -> Vec<Change> {
        self.history.get_all()
    }

    /// Waiters in rotation order starting from the head
    pub fn waiter_rotation(&self) -> Vec<Waiter> {
        self.waiters.to_array()
    }

    /// Waiter under the rotation cursor
    pub fn current_waiter(&self) -> Option<&Waiter> {
        self.waiters.current()
    }

    /// Tables in registration order
    pub fn tables(&self) -> &[RestaurantTable] {
        &self.tables
    }

    /// Locations in registration order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location by vertex id
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Menu item by id
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_index.get(id)
    }

    /// Whole menu in category, then name order
    pub fn menu_in_order(&self) -> Vec<MenuItem> {
        self.menu_tree.to_array()
    }

    /// Items of one category, by name
    pub fn menu_by_category(&self, category: &str) -> Vec<MenuItem> {
        let mut items = Vec::new();
        self.menu_tree.in_order_traversal(|item| {
            if item.category == category {
                items.push(item.clone());
            }
        });
        items
    }

    /// Distinct categories in menu order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.menu_tree.iter() {
            if categories.last() != Some(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Number of menu items
    pub fn menu_len(&self) -> usize {
        self.menu_index.len()
    }

    /// Shortest walking path between two locations
    pub fn find_shortest_path(&self, from: &str, to: &str) -> Option<PathResult> {
        self.floor.dijkstra(from, to)
    }

    /// Floor-plan graph
    pub fn floor(&self) -> &Graph {
        &self.floor
    }

    /// Human-readable listing of the floor-plan graph
    pub fn graph_dump(&self) -> String {
        self.floor.debug_dump()
    }
}

impl std::fmt::Debug for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Restaurant")
            .field("orders", &self.orders.len())
            .field("pending", &self.pending.size())
            .field("kitchen", &self.kitchen.len())
            .field("served", &self.served.len())
            .field("history", &self.history.size())
            .field("waiters", &self.waiters.len())
            .field("menu", &self.menu_index.len())
            .field("locations", &self.locations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LocationKind, OrderItem};

    fn draft(table: u32) -> NewOrder {
        NewOrder {
            table_number: table,
            items: vec![OrderItem::new("m1", "Garlic Bread", 1, 5.99)],
            special_instructions: None,
        }
    }

    fn staffed() -> Restaurant {
        let mut r = Restaurant::new(Config::default());
        r.add_table(RestaurantTable::new(1, 10.0, 10.0, 2));
        r.add_waiter(Waiter::new("Alex", vec![1]));
        r.add_waiter(Waiter::new("Emma", vec![2]));
        r
    }

    #[test]
    fn kitchen_extraction_keeps_queue_order() {
        let mut r = staffed();
        let a = r.add_order(draft(1));
        let b = r.add_order(draft(1));
        let c = r.add_order(draft(1));

        r.move_order_to_kitchen(&b.id).unwrap();
        let pending: Vec<_> = r.pending_orders().into_iter().map(|o| o.id).collect();
        assert_eq!(pending, vec![a.id.clone(), c.id.clone()]);
        assert_eq!(r.kitchen_orders()[0].status, OrderStatus::InProgress);
    }

    #[test]
    fn unknown_and_wrong_stage_ids() {
        let mut r = staffed();
        assert!(matches!(r.move_order_to_kitchen("nope"), Err(Error::OrderNotFound(_))));
        let o = r.add_order(draft(1));
        assert!(matches!(r.move_order_to_served(&o.id), Err(Error::OrderNotFound(_))));
        r.move_order_to_kitchen(&o.id).unwrap();
        assert!(matches!(r.move_order_to_kitchen(&o.id), Err(Error::OrderNotFound(_))));
        assert_eq!(r.change_history().len(), 1);
    }

    #[test]
    fn waiter_survives_migration() {
        let mut r = staffed();
        let o = r.add_order(draft(1));
        let waiter = r.assign_waiter_to_order(&o.id).unwrap();
        r.move_order_to_kitchen(&o.id).unwrap();
        let served = r.move_order_to_served(&o.id).unwrap();
        assert_eq!(served.waiter_id, Some(waiter.id));
        assert_eq!(r.served_orders()[0].waiter_id, served.waiter_id);
    }

    #[test]
    fn assignment_rotates_first() {
        let mut r = staffed();
        let o1 = r.add_order(draft(1));
        let o2 = r.add_order(draft(1));
        assert_eq!(r.assign_waiter_to_order(&o1.id).unwrap().name, "Emma");
        assert_eq!(r.assign_waiter_to_order(&o2.id).unwrap().name, "Alex");
        let alex = r.current_waiter().unwrap();
        assert_eq!(alex.current_orders, vec![o2.id.clone()]);
    }

    #[test]
    fn no_waiters_is_an_error() {
        let mut r = Restaurant::new(Config::default());
        let o = r.add_order(draft(3));
        assert!(matches!(r.assign_waiter_to_order(&o.id), Err(Error::NoWaitersOnShift)));
        assert!(r.order(&o.id).unwrap().waiter_id.is_none());
    }

    #[test]
    fn add_order_occupies_table() {
        let mut r = staffed();
        let o = r.add_order(draft(1));
        let table = &r.tables()[0];
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.current_order_id.as_deref(), Some(o.id.as_str()));
    }

    #[test]
    fn undo_reverts_status_only() {
        let mut r = staffed();
        let o = r.add_order(draft(1));
        r.move_order_to_kitchen(&o.id).unwrap();

        let change = r.undo_last_change().unwrap();
        assert_eq!(change.previous_status, OrderStatus::Pending);
        assert_eq!(r.order(&o.id).unwrap().status, OrderStatus::Pending);
        // membership is not rolled back
        assert_eq!(r.kitchen_orders().len(), 1);
        assert!(r.pending_orders().is_empty());
        assert!(r.undo_last_change().is_none());
    }

    #[test]
    fn update_status_records_previous() {
        let mut r = staffed();
        let o = r.add_order(draft(1));
        r.update_order_status(&o.id, OrderStatus::Ready).unwrap();
        let change = r.update_order_status(&o.id, OrderStatus::Completed).unwrap();
        assert_eq!(change.previous_status, OrderStatus::Ready);
        assert_eq!(change.description, format!("Order {} status changed from READY to COMPLETED", o.id));
        assert!(matches!(
            r.update_order_status("nope", OrderStatus::Ready),
            Err(Error::OrderNotFound(_))
        ));
    }

    #[test]
    fn repeated_menu_id_leaves_both_indexes_alone() {
        let mut r = Restaurant::new(Config::default());
        let item = MenuItem::new("Garlic Bread", "Starters", 4.0, "Toasted", 5);
        let mut repriced = item.clone();
        repriced.price = 6.0;

        assert!(r.add_menu_item(item));
        assert!(!r.add_menu_item(repriced));
        assert_eq!(r.menu_len(), 1);
        let prices: Vec<f64> = r.menu_in_order().iter().map(|m| m.price).collect();
        assert_eq!(prices, vec![4.0]);
        assert_eq!(r.menu_item(&r.menu_in_order()[0].id).map(|m| m.price), Some(4.0));
    }

    #[test]
    fn repeated_location_id_is_registered_once() {
        let mut r = Restaurant::new(Config::default());
        assert!(r.add_location(Location::new("bar", "Bar", LocationKind::Bar, 0.0, 0.0)));
        assert!(!r.add_location(Location::new("bar", "Back bar", LocationKind::Bar, 9.0, 9.0)));
        assert_eq!(r.locations().len(), 1);
        assert_eq!(r.location("bar").map(|l| l.name.as_str()), Some("Bar"));
        assert_eq!(r.floor().vertex_count(), 1);
    }
}
