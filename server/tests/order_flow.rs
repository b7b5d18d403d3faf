//! End-to-end order flow over an in-memory store
//!
//! Uses `ServerState::initialize` against `mem://`, seeds the catalog
//! through the store handle, and drives `OrderService` directly.

use comanda_server::db::models::{
    Category, CustomizationCategory, CustomizationOption, MenuItem, Order, OrderStatus, Restaurant,
    RestaurantSettings,
};
use comanda_server::db::repository::OrderRepository;
use comanda_server::orders::{CreateOrderRequest, OrderService};
use comanda_server::pricing::{CustomizationRef, OrderLineRequest};
use comanda_server::utils::AppError;
use comanda_server::{Config, ServerState};

async fn test_state() -> ServerState {
    let config = Config::with_overrides("mem://", 0);
    ServerState::initialize(&config)
        .await
        .expect("in-memory state")
}

/// Seed one restaurant with a burger (10.00), fries (3.50, unavailable on
/// demand) and an Extra Cheese option (1.50)
async fn seed_catalog(state: &ServerState, fries_available: bool) {
    let db = state.get_db();

    let _: Option<Restaurant> = db
        .create(("restaurant", "demo"))
        .content(Restaurant {
            id: None,
            slug: "demo-diner".to_string(),
            name: "Demo Diner".to_string(),
            is_active: true,
            settings: RestaurantSettings {
                tax_rate: 0.08,
                currency: "EUR".to_string(),
            },
        })
        .await
        .unwrap();

    let _: Option<Category> = db
        .create(("category", "mains"))
        .content(Category {
            id: None,
            restaurant: "restaurant:demo".parse().unwrap(),
            name: "Mains".to_string(),
            description: None,
            sort_order: 1,
            is_active: true,
        })
        .await
        .unwrap();

    let _: Option<MenuItem> = db
        .create(("menu_item", "burger"))
        .content(MenuItem {
            id: None,
            restaurant: "restaurant:demo".parse().unwrap(),
            category: "category:mains".parse().unwrap(),
            name: "Burger".to_string(),
            description: None,
            price: 10.0,
            is_available: true,
            image: None,
            sort_order: 1,
        })
        .await
        .unwrap();

    let _: Option<MenuItem> = db
        .create(("menu_item", "fries"))
        .content(MenuItem {
            id: None,
            restaurant: "restaurant:demo".parse().unwrap(),
            category: "category:mains".parse().unwrap(),
            name: "Fries".to_string(),
            description: None,
            price: 3.5,
            is_available: fries_available,
            image: None,
            sort_order: 2,
        })
        .await
        .unwrap();

    let _: Option<CustomizationCategory> = db
        .create(("customization_category", "extras"))
        .content(CustomizationCategory {
            id: None,
            menu_item: "menu_item:burger".parse().unwrap(),
            name: "Extras".to_string(),
            is_required: false,
            sort_order: 1,
        })
        .await
        .unwrap();

    let _: Option<CustomizationOption> = db
        .create(("customization_option", "cheese"))
        .content(CustomizationOption {
            id: None,
            category: "customization_category:extras".parse().unwrap(),
            name: "Extra Cheese".to_string(),
            price: 1.5,
            is_available: true,
            sort_order: 1,
        })
        .await
        .unwrap();
}

fn burger_request(quantity: serde_json::Value, with_cheese: bool) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_name: Some("Ana".to_string()),
        phone_number: Some("+34 612 345 678".to_string()),
        order_type: None,
        items: vec![OrderLineRequest {
            id: "burger".to_string(),
            quantity: Some(quantity),
            customizations: if with_cheese {
                vec![CustomizationRef {
                    id: "cheese".to_string(),
                }]
            } else {
                Vec::new()
            },
            special_notes: None,
        }],
        notes: None,
    }
}

#[tokio::test]
async fn order_totals_come_from_the_catalog() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    // 2 x (10.00 + 1.50) = 23.00, 8% tax = 1.84
    let created = service
        .create("demo", burger_request(serde_json::json!(2), true))
        .await
        .unwrap();

    assert_eq!(created.order.subtotal, 23.0);
    assert_eq!(created.order.tax, 1.84);
    assert_eq!(created.order.total, 24.84);
    assert_eq!(created.tax_rate, 0.08);
    assert_eq!(created.order.status, OrderStatus::New);
    assert_eq!(created.order.items.len(), 1);
    assert_eq!(created.order.items[0].quantity, 2);
    assert_eq!(created.order.items[0].line_total, 23.0);
    assert_eq!(created.order.items[0].customizations[0].name, "Extra Cheese");
}

#[tokio::test]
async fn tampered_prices_are_ignored() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    // A hostile client attaches its own price and name fields
    let request: CreateOrderRequest = serde_json::from_value(serde_json::json!({
        "customer_name": "Mallory",
        "phone_number": "600000000",
        "items": [{
            "id": "burger",
            "quantity": 1,
            "price": 0.01,
            "name": "Free Burger",
            "customizations": [{ "id": "cheese", "price": 0.0 }]
        }]
    }))
    .unwrap();

    let created = service.create("demo", request).await.unwrap();
    assert_eq!(created.order.subtotal, 11.5);
    assert_eq!(created.order.items[0].name, "Burger");
    assert_eq!(created.order.items[0].price, 10.0);
    assert_eq!(created.order.items[0].customizations[0].price, 1.5);
}

#[tokio::test]
async fn unavailable_item_rejects_the_whole_order() {
    let state = test_state().await;
    seed_catalog(&state, false).await;
    let service = OrderService::new(state.get_db());

    let mut request = burger_request(serde_json::json!(1), false);
    request.items.push(OrderLineRequest {
        id: "fries".to_string(),
        quantity: None,
        customizations: Vec::new(),
        special_notes: None,
    });

    let err = service.create("demo", request).await.unwrap_err();
    match err {
        AppError::UnavailableItem(names) => assert_eq!(names, vec!["Fries".to_string()]),
        other => panic!("expected UnavailableItem, got {other:?}"),
    }

    // All-or-nothing: no row was written
    let orders = service.list("demo", None).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn empty_order_is_rejected_before_any_write() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    let mut request = burger_request(serde_json::json!(1), false);
    request.items.clear();

    let err = service.create("demo", request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(service.list("demo", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_customer_fields_are_rejected() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    let mut request = burger_request(serde_json::json!(1), false);
    request.customer_name = Some("   ".to_string());

    let err = service.create("demo", request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn unknown_customization_ids_are_dropped() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    let mut request = burger_request(serde_json::json!(1), true);
    request.items[0].customizations.push(CustomizationRef {
        id: "no-such-option".to_string(),
    });

    let created = service.create("demo", request).await.unwrap();
    // Only the cheese resolved: 10.00 + 1.50
    assert_eq!(created.order.subtotal, 11.5);
    assert_eq!(created.order.items[0].customizations.len(), 1);
}

#[tokio::test]
async fn quantity_strings_and_garbage_are_coerced() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    let created = service
        .create("demo", burger_request(serde_json::json!("3"), false))
        .await
        .unwrap();
    assert_eq!(created.order.items[0].quantity, 3);
    assert_eq!(created.order.subtotal, 30.0);

    let created = service
        .create("demo", burger_request(serde_json::json!(0), false))
        .await
        .unwrap();
    assert_eq!(created.order.items[0].quantity, 1);

    let created = service
        .create("demo", burger_request(serde_json::json!({"weird": true}), false))
        .await
        .unwrap();
    assert_eq!(created.order.items[0].quantity, 1);
}

#[tokio::test]
async fn status_transitions_and_conflict_detection() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    let created = service
        .create("demo", burger_request(serde_json::json!(1), false))
        .await
        .unwrap();
    let order_id = created.order.id.as_ref().unwrap().to_string();

    let transition = service.transition(&order_id, "preparing").await.unwrap();
    assert_eq!(transition.previous, OrderStatus::New);
    assert_eq!(transition.order.status, OrderStatus::Preparing);

    // Unknown status names are a validation error
    let err = service.transition(&order_id, "vaporized").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // A writer holding a stale expectation loses the conditional update
    let repo = OrderRepository::new(state.get_db());
    let stale = repo
        .update_status_checked(&order_id, OrderStatus::New, OrderStatus::Ready)
        .await
        .unwrap();
    assert!(stale.is_none());

    // The row still carries the winner's status
    let current = repo.find_by_id(&order_id).await.unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Preparing);
}

#[tokio::test]
async fn listing_filters_by_status_and_ignores_unknown_names() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());

    let first = service
        .create("demo", burger_request(serde_json::json!(1), false))
        .await
        .unwrap();
    service
        .create("demo", burger_request(serde_json::json!(1), false))
        .await
        .unwrap();
    let first_id = first.order.id.as_ref().unwrap().to_string();
    service.transition(&first_id, "confirmed").await.unwrap();

    let confirmed = service.list("demo", Some("confirmed")).await.unwrap();
    assert_eq!(confirmed.len(), 1);

    // Unknown names drop out of the filter instead of failing the request
    let mixed = service
        .list("demo", Some("confirmed,bogus,new"))
        .await
        .unwrap();
    assert_eq!(mixed.len(), 2);

    let all: Vec<Order> = service.list("demo", None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn orders_are_scoped_to_their_restaurant() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let db = state.get_db();

    let _: Option<Restaurant> = db
        .create(("restaurant", "other"))
        .content(Restaurant {
            id: None,
            slug: "other-place".to_string(),
            name: "Other Place".to_string(),
            is_active: true,
            settings: RestaurantSettings::default(),
        })
        .await
        .unwrap();

    let service = OrderService::new(state.get_db());
    let created = service
        .create("demo", burger_request(serde_json::json!(1), false))
        .await
        .unwrap();
    let order_id = created.order.id.as_ref().unwrap().to_string();

    // Fetching through the wrong tenant is indistinguishable from absent
    let err = service.get("other", &order_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(service.list("other", None).await.unwrap().is_empty());

    let found = service.get("demo", &order_id).await.unwrap();
    assert_eq!(found.order_number, created.order.order_number);
}

#[tokio::test]
async fn cross_tenant_menu_items_do_not_resolve() {
    let state = test_state().await;
    seed_catalog(&state, true).await;
    let db = state.get_db();

    let _: Option<Restaurant> = db
        .create(("restaurant", "other"))
        .content(Restaurant {
            id: None,
            slug: "other-place".to_string(),
            name: "Other Place".to_string(),
            is_active: true,
            settings: RestaurantSettings::default(),
        })
        .await
        .unwrap();

    // The burger belongs to "demo"; pricing it under "other" must fail
    let service = OrderService::new(state.get_db());
    let err = service
        .create("other", burger_request(serde_json::json!(1), false))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn kitchen_displays_hear_creations_and_every_transition() {
    use comanda_server::notify::{self, KdsEvent};

    let state = test_state().await;
    seed_catalog(&state, true).await;
    let service = OrderService::new(state.get_db());
    let mut rx = state.kds.subscribe();

    let created = service
        .create("demo", burger_request(serde_json::json!(1), false))
        .await
        .unwrap();
    notify::order_created(state.clone(), created.order.clone()).await;

    match rx.recv().await.unwrap() {
        KdsEvent::NewKdsOrder(view) => {
            assert_eq!(view.order_number, created.order.order_number);
            assert_eq!(view.items, vec!["1x Burger".to_string()]);
        }
        other => panic!("expected new order event, got {other:?}"),
    }

    // completed straight from new has no customer template, but the
    // kitchen display still hears it
    let order_id = created.order.id.as_ref().unwrap().to_string();
    let transition = service.transition(&order_id, "completed").await.unwrap();
    notify::status_changed(state.clone(), transition.order, transition.previous).await;

    match rx.recv().await.unwrap() {
        KdsEvent::OrderUpdated(change) => {
            assert_eq!(change.previous, OrderStatus::New);
            assert_eq!(change.status, OrderStatus::Completed);
        }
        other => panic!("expected status event, got {other:?}"),
    }
}
