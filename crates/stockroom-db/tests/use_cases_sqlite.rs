//! Use cases wired to the SQLite gateway, end to end.

use std::sync::Arc;

use stockroom_core::{
    CreateProductInput, CreateProductUseCase, CoreError, ListProductUseCase, PersistenceError,
    ProductGateway, UseCase, ValidationError,
};
use stockroom_db::{Database, DbConfig};

async fn gateway() -> (Database, Arc<dyn ProductGateway>) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let gateway: Arc<dyn ProductGateway> = Arc::new(db.products());
    (db, gateway)
}

#[tokio::test]
async fn created_product_is_listed_with_zero_quantity() {
    let (_db, gateway) = gateway().await;
    let create = CreateProductUseCase::new(gateway.clone());
    let list = ListProductUseCase::new(gateway);

    let created = create
        .execute(CreateProductInput::new("Widget", 9.99))
        .await
        .unwrap();
    let listed = list.execute(()).await.unwrap();

    assert_eq!(listed.products.len(), 1);
    let product = &listed.products[0];
    assert_eq!(product.id, created.id);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 9.99);
    assert_eq!(product.quantity, 0);
}

#[tokio::test]
async fn every_create_adds_exactly_one_record() {
    let (db, gateway) = gateway().await;
    let create = CreateProductUseCase::new(gateway.clone());
    let list = ListProductUseCase::new(gateway);

    let mut ids = Vec::new();
    for (name, price) in [("Product 1", 10.5), ("Product 2", 20.5), ("Product 1", 10.5)] {
        ids.push(create.execute(CreateProductInput::new(name, price)).await.unwrap().id);
    }

    let listed = list.execute(()).await.unwrap();
    let listed_ids: Vec<_> = listed.products.iter().map(|p| p.id.clone()).collect();

    assert_eq!(listed_ids, ids);
    assert_eq!(db.products().count().await.unwrap(), 3);
}

#[tokio::test]
async fn empty_database_lists_nothing() {
    let (_db, gateway) = gateway().await;

    let listed = ListProductUseCase::new(gateway).execute(()).await.unwrap();

    assert!(listed.products.is_empty());
}

#[tokio::test]
async fn validation_keeps_bad_input_out_of_the_table() {
    let (db, gateway) = gateway().await;
    let create = CreateProductUseCase::new(gateway).with_input_validation(true);

    let err = create
        .execute(CreateProductInput::new("", 1.0))
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Validation(ValidationError::Required { .. })));
    assert_eq!(db.products().count().await.unwrap(), 0);
}

#[tokio::test]
async fn closed_database_surfaces_persistence_error() {
    let (db, gateway) = gateway().await;
    let create = CreateProductUseCase::new(gateway.clone());
    let list = ListProductUseCase::new(gateway);
    db.close().await;

    let err = create
        .execute(CreateProductInput::new("Widget", 9.99))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Persistence(PersistenceError::Unavailable(_))));

    let err = list.execute(()).await.unwrap_err();
    assert!(matches!(err, CoreError::Persistence(_)));
}
