use bistro_core::core::{build_restaurant, Config};
use bistro_core::seed::{standard_landmarks, Catalog};
use bistro_core::{create_restaurant, Error};

#[test]
fn standard_floor_plan_shape() {
    let r = create_restaurant(&Config::default()).unwrap();
    let floor = r.floor();
    assert_eq!(floor.vertex_count(), 14);
    // hub 3 + restrooms 5 + table-to-hub 27 + table pairs under 50 (all but two corner diagonals) 34
    assert_eq!(floor.edge_count(), 69);
    assert_eq!(
        &floor.get_vertices()[..6],
        &["kitchen", "bar", "entrance", "restroom1", "restroom2", "table-1"]
    );
    assert_eq!(floor.weight("table-1", "table-9"), None);
    assert_eq!(floor.weight("table-1", "table-2"), Some(20.0));
    assert_eq!(floor.weight("restroom1", "kitchen"), None);
    assert_eq!(floor.weight("restroom2", "kitchen"), Some(65.0_f64.hypot(25.0)));
}

#[test]
fn every_location_is_reachable_from_the_entrance() {
    let r = create_restaurant(&Config::default()).unwrap();
    for location in r.locations() {
        let path = r.find_shortest_path("entrance", &location.id).unwrap();
        assert_eq!(path.path.first().map(String::as_str), Some("entrance"));
        assert_eq!(path.path.last(), Some(&location.id));
    }
}

#[test]
fn known_routes() {
    let r = create_restaurant(&Config::default()).unwrap();

    let direct = r.find_shortest_path("entrance", "table-8").unwrap();
    assert_eq!(direct.path, vec!["entrance", "table-8"]);
    assert_eq!(direct.distance, 20.0);

    let across = r.find_shortest_path("restroom1", "restroom2").unwrap();
    assert_eq!(across.path, vec!["restroom1", "entrance", "restroom2"]);
    assert_eq!(across.distance, 50.0);

    assert!(r.find_shortest_path("entrance", "patio").is_none());
}

#[test]
fn lower_threshold_removes_table_links() {
    let mut config = Config::default();
    config.floor.table_link_threshold = 20.0;
    let r = create_restaurant(&config).unwrap();
    // 20 is not strictly below 20, so no table pairs at all
    assert_eq!(r.floor().edge_count(), 3 + 5 + 27);
}

#[test]
fn menu_mirrors_agree() {
    let r = create_restaurant(&Config::default()).unwrap();
    assert_eq!(r.menu_len(), 11);

    let ordered = r.menu_in_order();
    assert_eq!(ordered.len(), 11);
    for item in &ordered {
        assert_eq!(r.menu_item(&item.id), Some(item));
    }
    assert_eq!(r.categories(), vec!["Desserts", "Drinks", "Main Courses", "Starters"]);

    let names: Vec<_> = r.menu_by_category("Drinks").into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["House Red Wine", "Sparkling Water"]);
    assert!(r.menu_by_category("Brunch").is_empty());
}

#[test]
fn roster_rotation_starts_with_first_waiter() {
    let r = create_restaurant(&Config::default()).unwrap();
    let names: Vec<_> = r.waiter_rotation().into_iter().map(|w| w.name).collect();
    assert_eq!(names, vec!["Alex Johnson", "Emma Davis", "Michael Smith"]);
    assert_eq!(r.current_waiter().map(|w| w.name.as_str()), Some("Alex Johnson"));
}

#[test]
fn custom_bucket_count_is_honoured() {
    let mut config = Config::default();
    config.menu.bucket_count = 3;
    let r = create_restaurant(&config).unwrap();
    for item in r.menu_in_order() {
        assert!(r.menu_item(&item.id).is_some());
    }
}

#[test]
fn catalog_without_bar_is_rejected() {
    let mut catalog = Catalog::standard();
    catalog.locations.retain(|l| l.id != "bar");
    let err = build_restaurant(&Config::default(), catalog).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn landmarks_only_floor() {
    let catalog = Catalog { locations: standard_landmarks(), ..Catalog::default() };
    let r = build_restaurant(&Config::default(), catalog).unwrap();
    assert_eq!(r.floor().edge_count(), 8);
    assert!(r.waiter_rotation().is_empty());
    assert_eq!(r.menu_len(), 0);
}
