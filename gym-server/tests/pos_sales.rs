//! POS inventory and sale atomicity against an embedded database

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use gym_server::db::DbService;
use gym_server::db::models::{FoodCreate, FoodItem, FoodUpdate, SaleItem};
use gym_server::db::repository::{FoodRepository, RepoError, SaleRepository};

async fn setup() -> (tempfile::TempDir, Surreal<Db>) {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path().to_str().unwrap()).await.unwrap();
    (tmp, service.db)
}

async fn create_food(db: &Surreal<Db>, name: &str, price: i64, stock: i64, now: i64) -> FoodItem {
    FoodRepository::new(db.clone())
        .create(
            FoodCreate {
                name: name.to_string(),
                price,
                stock,
            },
            now,
        )
        .await
        .unwrap()
}

fn line(food: &FoodItem, quantity: i64) -> SaleItem {
    SaleItem {
        food: food.id.clone().unwrap(),
        name: food.name.clone(),
        quantity,
        price: food.price,
    }
}

#[tokio::test]
async fn sale_decrements_stock_and_totals_from_snapshots() {
    let (_tmp, db) = setup().await;
    let foods = FoodRepository::new(db.clone());
    let sales = SaleRepository::new(db.clone());

    let now = 1_705_300_000_000;
    let water = create_food(&db, "Water", 5_000, 3, now).await;

    let sale = sales
        .create(vec![line(&water, 3)], 15_000, now)
        .await
        .unwrap();
    assert_eq!(sale.total, 15_000);
    assert_eq!(sale.items.len(), 1);
    assert_eq!(sale.items[0].name, "Water");
    assert_eq!(sale.items[0].price, 5_000);
    assert_eq!(sale.items[0].quantity, 3);

    let water_id = water.id.as_ref().unwrap().to_string();
    let after = foods.find_by_id(&water_id).await.unwrap().unwrap();
    assert_eq!(after.stock, 0);

    // The next bottle is not there to sell
    let rejected = sales.create(vec![line(&water, 1)], 5_000, now + 1).await;
    assert!(matches!(rejected, Err(RepoError::InsufficientStock(_))));

    let after = foods.find_by_id(&water_id).await.unwrap().unwrap();
    assert_eq!(after.stock, 0);
    assert_eq!(sales.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failing_line_rolls_back_the_whole_sale() {
    let (_tmp, db) = setup().await;
    let foods = FoodRepository::new(db.clone());
    let sales = SaleRepository::new(db.clone());

    let now = 1_705_300_000_000;
    let water = create_food(&db, "Water", 5_000, 5, now).await;
    let protein = create_food(&db, "Protein Bar", 20_000, 1, now).await;

    // The second line exceeds stock: the first line's decrement must not
    // survive either
    let rejected = sales
        .create(vec![line(&water, 2), line(&protein, 3)], 70_000, now)
        .await;
    assert!(matches!(rejected, Err(RepoError::InsufficientStock(_))));

    let water_after = foods
        .find_by_id(&water.id.as_ref().unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    let protein_after = foods
        .find_by_id(&protein.id.as_ref().unwrap().to_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(water_after.stock, 5);
    assert_eq!(protein_after.stock, 1);
    assert!(sales.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn sale_lines_survive_later_food_edits() {
    let (_tmp, db) = setup().await;
    let foods = FoodRepository::new(db.clone());
    let sales = SaleRepository::new(db.clone());

    let now = 1_705_300_000_000;
    let water = create_food(&db, "Water", 5_000, 10, now).await;
    let water_id = water.id.as_ref().unwrap().to_string();

    sales
        .create(vec![line(&water, 2)], 10_000, now)
        .await
        .unwrap();

    foods
        .update(
            &water_id,
            FoodUpdate {
                name: Some("Mineral Water".to_string()),
                price: Some(7_000),
                stock: None,
            },
        )
        .await
        .unwrap();

    let listed = sales.find_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].items[0].name, "Water");
    assert_eq!(listed[0].items[0].price, 5_000);
    assert_eq!(listed[0].total, 10_000);
}

#[tokio::test]
async fn food_crud_roundtrip() {
    let (_tmp, db) = setup().await;
    let foods = FoodRepository::new(db.clone());

    let water = create_food(&db, "Water", 5_000, 3, 1_705_300_000_000).await;
    let newer = create_food(&db, "Protein Bar", 20_000, 4, 1_705_300_100_000).await;

    let listed = foods.find_all().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, newer.name);
    assert_eq!(listed[1].name, water.name);

    let water_id = water.id.as_ref().unwrap().to_string();
    let updated = foods
        .update(
            &water_id,
            FoodUpdate {
                name: None,
                price: None,
                stock: Some(12),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.stock, 12);
    assert_eq!(updated.price, 5_000);

    assert!(foods.delete(&water_id).await.unwrap());
    assert!(foods.find_by_id(&water_id).await.unwrap().is_none());
    assert!(matches!(
        foods.delete(&water_id).await,
        Err(RepoError::NotFound(_))
    ));
    assert!(matches!(
        foods
            .update(
                "food:doesnotexist",
                FoodUpdate {
                    name: None,
                    price: Some(1),
                    stock: None
                }
            )
            .await,
        Err(RepoError::NotFound(_))
    ));
}
