use rust_decimal::Decimal;
use storefront_inventory::clients::ActorClient;
use storefront_inventory::dashboard::{alert_list, summarize, StockStatus};
use storefront_inventory::inventory_actor::InventoryError;
use storefront_inventory::lifecycle::{DashboardConfig, InventorySystem};
use storefront_inventory::model::{parse_items, sample_inventory, ItemCreate, ItemId, ItemUpdate, Session};

/// Full end-to-end test: seed the catalog, read the dashboard, restock, read again.
#[tokio::test]
async fn test_sample_dashboard_end_to_end() {
    let system = InventorySystem::new(DashboardConfig::default());
    let ids = system
        .seed(sample_inventory())
        .await
        .expect("Failed to seed");
    assert_eq!(ids, (1..=5).map(ItemId).collect::<Vec<_>>());

    let mut dashboard = system.dashboard(Session::anonymous());
    let snapshot = dashboard.refresh().await.expect("Failed to refresh");
    assert_eq!(snapshot.version, 5);
    assert_eq!(snapshot.stats.total_products, 5);
    assert_eq!(snapshot.stats.low_stock, 1);
    assert_eq!(snapshot.stats.out_of_stock, 1);
    assert_eq!(snapshot.display_total_value("$"), "$16934.50");

    let alerts = snapshot.alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].sku, "NB-003");
    assert_eq!(alerts[1].status, StockStatus::OutOfStock);

    // Restock the desk lamp above its threshold
    let desk_lamp = ids[3];
    let quantity = system
        .inventory_client
        .restock(desk_lamp, 6)
        .await
        .expect("Failed to restock");
    assert_eq!(quantity, 6);

    let snapshot = dashboard.refresh().await.expect("Failed to refresh");
    assert_eq!(snapshot.version, 6);
    assert_eq!(snapshot.stats.out_of_stock, 0);
    assert_eq!(snapshot.stats.low_stock, 1);
    assert_eq!(snapshot.stats.total_value, Decimal::new(1711444, 2));
    assert_eq!(dashboard.recompute_count(), 2);

    drop(dashboard);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_reads_do_not_bump_version() {
    let system = InventorySystem::new(DashboardConfig::default());
    let ids = system.seed(sample_inventory()).await.unwrap();
    let client = &system.inventory_client;

    let before = client.version().await.unwrap();
    assert_eq!(client.check_status(ids[2]).await.unwrap(), StockStatus::LowStock);
    client.get(ids[0]).await.unwrap();
    client.snapshot().await.unwrap();
    assert_eq!(client.version().await.unwrap(), before);

    let mut dashboard = system.dashboard(Session::anonymous());
    dashboard.refresh().await.unwrap();
    dashboard.refresh().await.unwrap();
    assert_eq!(dashboard.recompute_count(), 1);

    client.adjust_stock(ids[0], -1).await.unwrap();
    assert_eq!(client.version().await.unwrap(), before + 1);
    dashboard.refresh().await.unwrap();
    assert_eq!(dashboard.recompute_count(), 2);

    drop(dashboard);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_writes_are_rejected_without_changes() {
    let system = InventorySystem::new(DashboardConfig::default());
    let client = &system.inventory_client;
    let ids = system.seed(sample_inventory()).await.unwrap();
    let version = client.version().await.unwrap();

    let bad = ItemCreate {
        name: "Broken".into(),
        category: "Misc".into(),
        price: Decimal::from(-1),
        quantity: 1,
        min_stock: 0,
        sku: "BR-000".into(),
    };
    match client.add_item(bad).await {
        Err(InventoryError::InvalidRecord { field, .. }) => assert_eq!(field, "price"),
        other => panic!("Expected InvalidRecord, got {:?}", other),
    }

    let update = ItemUpdate {
        quantity: Some(-5),
        ..Default::default()
    };
    assert!(matches!(
        client.update_item(ids[0], update).await,
        Err(InventoryError::InvalidRecord { field: "quantity", .. })
    ));

    assert_eq!(
        client.adjust_stock(ids[2], -3).await,
        Err(InventoryError::InsufficientStock {
            requested: 3,
            available: 2
        })
    );
    assert_eq!(client.restock(ids[2], 0).await, Err(InventoryError::InvalidQuantity(0)));
    assert_eq!(
        client.restock(ItemId(99), 1).await,
        Err(InventoryError::NotFound("item_99".into()))
    );

    assert_eq!(client.version().await.unwrap(), version);
    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 5);
    assert_eq!(snapshot.items[0].quantity, 15);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_import_stops_at_first_invalid_item() {
    let system = InventorySystem::new(DashboardConfig::default());
    let items = parse_items(
        r#"[
            {"name": "Pen", "category": "Stationery", "price": 1.5, "quantity": 40, "minStock": 10, "sku": "PN-001"},
            {"name": "", "category": "Stationery", "price": 2.0, "quantity": 4, "minStock": 1, "sku": "XX-002"},
            {"name": "Ink", "category": "Stationery", "price": 9.0, "quantity": 2, "minStock": 3, "sku": "IK-003"}
        ]"#,
    )
    .unwrap();

    match system.seed(items).await {
        Err(InventoryError::InvalidBatch { index, source }) => {
            assert_eq!(index, 1);
            assert!(matches!(*source, InventoryError::InvalidRecord { field: "name", .. }));
        }
        other => panic!("Expected InvalidBatch, got {:?}", other),
    }

    let snapshot = system.inventory_client.snapshot().await.unwrap();
    let names: Vec<&str> = snapshot.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Pen"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_keeps_insertion_order() {
    let system = InventorySystem::new(DashboardConfig::default());
    let client = &system.inventory_client;
    let ids = system.seed(sample_inventory()).await.unwrap();

    client.delete(ids[1]).await.unwrap();
    assert!(client.get(ids[1]).await.unwrap().is_none());
    assert_eq!(client.delete(ids[1]).await, Err(InventoryError::NotFound("item_2".into())));

    let snapshot = client.snapshot().await.unwrap();
    let skus: Vec<&str> = snapshot.items.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(skus, vec!["LP-001", "NB-003", "DL-004", "ST-005"]);

    let stats = summarize(&snapshot.items);
    assert_eq!(stats.total_products, 4);
    let alerts = alert_list(&snapshot.items);
    assert_eq!(alerts.len(), 2);

    system.shutdown().await.unwrap();
}

/// Concurrent writes are serialized by the actor; none are lost.
#[tokio::test]
async fn test_concurrent_restocks() {
    let system = InventorySystem::new(DashboardConfig::default());
    let ids = system.seed(sample_inventory()).await.unwrap();
    let notebook = ids[2];

    let mut handles = vec![];
    for _ in 0..10 {
        let client = system.inventory_client.clone();
        handles.push(tokio::spawn(async move { client.restock(notebook, 3).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let record = system.inventory_client.get(notebook).await.unwrap().unwrap();
    assert_eq!(record.quantity, 32);
    assert_eq!(record.stock_status(), StockStatus::InStock);
    assert_eq!(system.inventory_client.version().await.unwrap(), 15);

    system.shutdown().await.unwrap();
}
