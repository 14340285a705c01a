//! Tests for the sample data seeder: record counts, associations and
//! all-or-nothing behaviour.

use anyhow::Result;
use chrono::{TimeZone, Utc};
use rideshare::models::{
    InflationAdjustment, Invoice, Menu, MenuItem, Order, Payment, Restaurant, ServiceTier, Trip,
    TripPool, User, Vehicle, inflation_adjustment, invoice, menu, restaurant, trip, user,
    vehicle_type,
};
use rideshare::password::verify_password;
use rideshare::seeds::{RecordCounts, SAMPLE_PASSWORD, count_records, seed_sample_data};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::setup_test_db;

#[tokio::test]
async fn seeding_empty_schema_creates_expected_counts() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(count_records(&db).await?.is_empty());

    seed_sample_data(&db).await?;

    assert_eq!(count_records(&db).await?, RecordCounts::expected());
    Ok(())
}

#[tokio::test]
async fn trip_pool_contains_exactly_the_pool_tier_trips() -> Result<()> {
    let db = setup_test_db().await?;
    let summary = seed_sample_data(&db).await?;

    let pool = TripPool::find_by_id(summary.trip_pool_id)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("trip pool not persisted"))?;

    let mut pooled: Vec<i32> = pool
        .find_related(Trip)
        .all(&db)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    pooled.sort_unstable();

    let pool_tier_ids: Vec<i32> = ServiceTier::find()
        .all(&db)
        .await?
        .into_iter()
        .filter(|tier| tier.is_eligible_for_trip_pooling)
        .map(|tier| tier.id)
        .collect();
    assert_eq!(pool_tier_ids.len(), 1);

    let mut pool_tier_trips: Vec<i32> = Trip::find()
        .filter(trip::Column::ServiceTierId.is_in(pool_tier_ids))
        .all(&db)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    pool_tier_trips.sort_unstable();

    assert_eq!(pooled.len(), 2);
    assert_eq!(pooled, pool_tier_trips);
    assert_eq!(pooled, summary.pooled_trip_ids);
    Ok(())
}

#[tokio::test]
async fn delivery_trip_carries_the_order_instead_of_a_passenger() -> Result<()> {
    let db = setup_test_db().await?;
    let summary = seed_sample_data(&db).await?;

    let delivery = Trip::find_by_id(summary.delivery_trip_id)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("delivery trip not persisted"))?;
    assert_eq!(delivery.passenger_id, None);
    assert_eq!(delivery.order_id, Some(summary.order_id));
    assert_eq!(delivery.driver_id, summary.driver_id);
    assert_eq!(delivery.trip_pool_id, None);

    let tier = delivery
        .find_related(ServiceTier)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("service tier missing"))?;
    assert_eq!(tier.rate, 0);

    let order = Order::find_by_id(summary.order_id)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order not persisted"))?;
    let items = order.find_related(MenuItem).all(&db).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Cheeseburger");
    assert_eq!(items[0].price, 3);

    let customer = User::find_by_id(order.user_id)
        .one(&db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("order customer missing"))?;
    assert_eq!(customer.email, "passenger4@example.com");
    Ok(())
}

#[tokio::test]
async fn users_get_hashed_sample_passwords() -> Result<()> {
    let db = setup_test_db().await?;
    seed_sample_data(&db).await?;

    let users = User::find()
        .order_by_asc(user::Column::Id)
        .all(&db)
        .await?;
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        emails,
        vec![
            "driver1@example.com",
            "passenger2@example.com",
            "passenger3@example.com",
            "passenger4@example.com",
        ]
    );

    let drivers: Vec<&str> = users
        .iter()
        .filter(|u| u.is_driver)
        .map(|u| u.email.as_str())
        .collect();
    assert_eq!(drivers, vec!["driver1@example.com"]);

    for u in &users {
        assert_ne!(u.encrypted_password, SAMPLE_PASSWORD);
        let verified = verify_password(SAMPLE_PASSWORD, &u.encrypted_password)
            .map_err(|e| anyhow::anyhow!("stored hash for {} is malformed: {e}", u.email))?;
        assert!(verified);
    }

    let vehicles = Vehicle::find().all(&db).await?;
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].user_id, users[0].id);
    assert!((vehicles[0].gigawatt_output_rating - 1.21).abs() < f64::EPSILON);
    Ok(())
}

#[tokio::test]
async fn every_invoice_is_paid_in_full() -> Result<()> {
    let db = setup_test_db().await?;
    seed_sample_data(&db).await?;

    let invoices = Invoice::find()
        .order_by_asc(invoice::Column::Id)
        .all(&db)
        .await?;
    let amounts: Vec<i32> = invoices.iter().map(|i| i.amount).collect();
    assert_eq!(amounts, vec![500, 200, 200]);

    for invoice in &invoices {
        let payments = invoice.find_related(Payment).all(&db).await?;
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, invoice.amount);
    }
    Ok(())
}

#[tokio::test]
async fn food_delivery_catalogue_is_dated() -> Result<()> {
    let db = setup_test_db().await?;
    seed_sample_data(&db).await?;

    let year = |y: i32| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap().fixed_offset();

    let restaurants = Restaurant::find()
        .order_by_asc(restaurant::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(restaurants.len(), 2);
    assert_eq!(restaurants[0].name, "Lizzie's Drive-Thru Burgers");
    assert_eq!(restaurants[0].start_date, year(1985));
    assert_eq!(restaurants[0].end_date, Some(year(1995)));
    assert_eq!(restaurants[1].name, "McDonald's");
    assert_eq!(restaurants[1].end_date, None);

    let mcdonalds_menus = restaurants[1]
        .find_related(Menu)
        .order_by_asc(menu::Column::StartDate)
        .all(&db)
        .await?;
    let names: Vec<&str> = mcdonalds_menus.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "McDonalds' Original FoodDelivery::Menu",
            "McDonalds' Updated FoodDelivery::Menu",
        ]
    );

    let adjustments = InflationAdjustment::find()
        .order_by_asc(inflation_adjustment::Column::Id)
        .all(&db)
        .await?;
    let changes: Vec<f64> = adjustments.iter().map(|a| a.percent_change).collect();
    assert_eq!(changes, vec![1.1, 5.2, 10.2, 9.2]);
    Ok(())
}

#[tokio::test]
async fn second_run_fails_and_leaves_data_unchanged() -> Result<()> {
    let db = setup_test_db().await?;
    seed_sample_data(&db).await?;

    let err = seed_sample_data(&db)
        .await
        .expect_err("reseeding must fail on unique emails");
    assert!(err.is_unique_violation(), "unexpected error: {err}");

    assert_eq!(count_records(&db).await?, RecordCounts::expected());
    Ok(())
}

#[tokio::test]
async fn failure_midway_rolls_back_every_record() -> Result<()> {
    let db = setup_test_db().await?;

    // Occupy a name the seeder creates after the users, so the run fails part way.
    let now = Utc::now().fixed_offset();
    vehicle_type::ActiveModel {
        name: Set("delorean-van".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let err = seed_sample_data(&db)
        .await
        .expect_err("conflicting vehicle type must abort seeding");
    assert!(err.is_unique_violation(), "unexpected error: {err}");

    let counts = count_records(&db).await?;
    assert_eq!(counts.users, 0);
    assert_eq!(counts.vehicle_types, 1);
    assert_eq!(counts.total(), 1);
    Ok(())
}
