//! Sample data seeding
//!
//! Creates a fixed list of users, vehicles, trips, invoices, payments,
//! restaurants, menus and orders inside a single transaction. Either every
//! record is written or none is.
//!
//! The run is not idempotent: user emails and vehicle type names are unique,
//! so seeding an already seeded database fails and rolls back.

use chrono::{TimeZone, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};

use crate::error::SeedError;
use crate::models::{
    inflation_adjustment, invoice, menu, menu_item, order, order_item, payment, restaurant,
    service_tier, trip, trip_pool, user, vehicle, vehicle_type,
};
use crate::password::hash_password;

/// Password shared by every seeded user.
pub const SAMPLE_PASSWORD: &str = "password";

/// Identifiers of the records later demos most often start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDataSummary {
    pub driver_id: i32,
    pub passenger_ids: Vec<i32>,
    pub trip_pool_id: i32,
    pub pooled_trip_ids: Vec<i32>,
    pub order_id: i32,
    pub delivery_trip_id: i32,
}

/// Seeds the sample data in one transaction.
///
/// Any failure rolls back every record written so far and is returned to
/// the caller.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<SampleDataSummary, SeedError> {
    log::info!("Creating sample data...");

    let txn = db
        .begin()
        .await
        .map_err(|e| SeedError::database("transaction", e))?;

    let summary = match create_records(&txn).await {
        Ok(summary) => summary,
        Err(err) => {
            log::error!("Sample data creation failed, rolling back: {}", err);
            if let Err(rollback_err) = txn.rollback().await {
                log::warn!("Rollback reported an error: {}", rollback_err);
            }
            return Err(err);
        }
    };

    txn.commit()
        .await
        .map_err(|e| SeedError::database("transaction", e))?;

    log::info!("Finished creating sample data.");
    Ok(summary)
}

/// First instant of each year the sample records are dated at.
struct SampleDates {
    year_2015: DateTimeWithTimeZone,
    year_1995: DateTimeWithTimeZone,
    year_1985: DateTimeWithTimeZone,
    year_1955: DateTimeWithTimeZone,
    year_1935: DateTimeWithTimeZone,
}

impl SampleDates {
    fn new() -> Result<Self, SeedError> {
        Ok(Self {
            year_2015: new_year(2015)?,
            year_1995: new_year(1995)?,
            year_1985: new_year(1985)?,
            year_1955: new_year(1955)?,
            year_1935: new_year(1935)?,
        })
    }
}

fn new_year(year: i32) -> Result<DateTimeWithTimeZone, SeedError> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .map(Into::into)
        .ok_or(SeedError::InvalidDate { year })
}

async fn create_records(txn: &DatabaseTransaction) -> Result<SampleDataSummary, SeedError> {
    let dates = SampleDates::new()?;
    let now: DateTimeWithTimeZone = Utc::now().into();

    let u1 = create_user(txn, now, "driver1@example.com", true).await?;
    let u2 = create_user(txn, now, "passenger2@example.com", false).await?;
    let u3 = create_user(txn, now, "passenger3@example.com", false).await?;
    let u4 = create_user(txn, now, "passenger4@example.com", false).await?;

    let vehicle_type_default = create_vehicle_type(txn, now, "delorean").await?;
    let vehicle_type_van = create_vehicle_type(txn, now, "delorean-van").await?;

    let tier_default = create_service_tier(txn, now, 5, &vehicle_type_default, false).await?;
    let tier_pool = create_service_tier(txn, now, 2, &vehicle_type_default, true).await?;
    create_service_tier(txn, now, 10, &vehicle_type_van, false).await?;
    let tier_eats = create_service_tier(txn, now, 0, &vehicle_type_default, false).await?;

    vehicle::ActiveModel {
        user_id: Set(u1.id),
        gigawatt_output_rating: Set(1.21),
        vehicle_type_id: Set(vehicle_type_default.id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("vehicle", e))?;

    let t1 = create_trip(
        txn,
        now,
        NewTrip {
            origin_date: dates.year_2015,
            destination_date: dates.year_1985,
            driver: &u1,
            passenger: Some(&u2),
            service_tier: &tier_default,
            order: None,
        },
    )
    .await?;
    let t2 = create_trip(
        txn,
        now,
        NewTrip {
            origin_date: dates.year_2015,
            destination_date: dates.year_1955,
            driver: &u1,
            passenger: Some(&u2),
            service_tier: &tier_pool,
            order: None,
        },
    )
    .await?;
    let t3 = create_trip(
        txn,
        now,
        NewTrip {
            origin_date: dates.year_1985,
            destination_date: dates.year_1955,
            driver: &u1,
            passenger: Some(&u3),
            service_tier: &tier_pool,
            order: None,
        },
    )
    .await?;

    let tpool = trip_pool::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("trip pool", e))?;
    let pooled_trip_ids = vec![t2.id, t3.id];
    attach_trips_to_pool(txn, now, &tpool, &pooled_trip_ids).await?;

    let invoice1 = create_invoice(txn, now, &u2, &t1, 500).await?;
    let invoice2 = create_invoice(txn, now, &u2, &t2, 200).await?;
    let invoice3 = create_invoice(txn, now, &u3, &t3, 200).await?;

    create_payment(txn, now, &invoice1, 500).await?;
    create_payment(txn, now, &invoice2, 200).await?;
    create_payment(txn, now, &invoice3, 200).await?;

    let restaurant1 = create_restaurant(
        txn,
        now,
        "Lizzie's Drive-Thru Burgers",
        dates.year_1985,
        Some(dates.year_1995),
    )
    .await?;
    let restaurant2 = create_restaurant(txn, now, "McDonald's", dates.year_1935, None).await?;

    let menu1 = create_menu(txn, now, &restaurant1, "Lizzie", dates.year_1985, None).await?;
    let menu2 = create_menu(
        txn,
        now,
        &restaurant2,
        "McDonalds' Original FoodDelivery::Menu",
        dates.year_1935,
        Some(dates.year_1955),
    )
    .await?;
    let menu3 = create_menu(
        txn,
        now,
        &restaurant2,
        "McDonalds' Updated FoodDelivery::Menu",
        dates.year_1955,
        Some(dates.year_1995),
    )
    .await?;

    let menu_item1 = create_menu_item(txn, now, &menu1, "Cheeseburger", 3).await?;
    create_menu_item(txn, now, &menu2, "McCheeseburger", 30).await?;
    create_menu_item(txn, now, &menu3, "Big Mac", 300).await?;

    for (percent_change, date) in [
        (1.1, dates.year_1955),
        (5.2, dates.year_1985),
        (10.2, dates.year_1995),
        (9.2, dates.year_2015),
    ] {
        inflation_adjustment::ActiveModel {
            percent_change: Set(percent_change),
            date: Set(date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| SeedError::database("inflation adjustment", e))?;
    }

    let o1 = create_order(txn, now, &u4, &[&menu_item1]).await?;
    let t_eats = create_trip(
        txn,
        now,
        NewTrip {
            origin_date: dates.year_2015,
            destination_date: dates.year_1985,
            driver: &u1,
            passenger: None,
            service_tier: &tier_eats,
            order: Some(&o1),
        },
    )
    .await?;

    Ok(SampleDataSummary {
        driver_id: u1.id,
        passenger_ids: vec![u2.id, u3.id, u4.id],
        trip_pool_id: tpool.id,
        pooled_trip_ids,
        order_id: o1.id,
        delivery_trip_id: t_eats.id,
    })
}

async fn create_user(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    email: &str,
    is_driver: bool,
) -> Result<user::Model, SeedError> {
    let encrypted_password =
        hash_password(SAMPLE_PASSWORD).map_err(|e| SeedError::PasswordHash {
            email: email.to_string(),
            message: e.to_string(),
        })?;

    let user = user::ActiveModel {
        email: Set(email.to_string()),
        encrypted_password: Set(encrypted_password),
        is_driver: Set(is_driver),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("user", e))?;

    log::debug!("Created user {} ({})", user.id, user.email);
    Ok(user)
}

async fn create_vehicle_type(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    name: &str,
) -> Result<vehicle_type::Model, SeedError> {
    vehicle_type::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("vehicle type", e))
}

async fn create_service_tier(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    rate: i32,
    vehicle_type: &vehicle_type::Model,
    is_eligible_for_trip_pooling: bool,
) -> Result<service_tier::Model, SeedError> {
    service_tier::ActiveModel {
        rate: Set(rate),
        vehicle_type_id: Set(vehicle_type.id),
        is_eligible_for_trip_pooling: Set(is_eligible_for_trip_pooling),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("service tier", e))
}

struct NewTrip<'a> {
    origin_date: DateTimeWithTimeZone,
    destination_date: DateTimeWithTimeZone,
    driver: &'a user::Model,
    passenger: Option<&'a user::Model>,
    service_tier: &'a service_tier::Model,
    order: Option<&'a order::Model>,
}

async fn create_trip(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    new_trip: NewTrip<'_>,
) -> Result<trip::Model, SeedError> {
    let trip = trip::ActiveModel {
        origin_date: Set(new_trip.origin_date),
        destination_date: Set(new_trip.destination_date),
        driver_id: Set(new_trip.driver.id),
        passenger_id: Set(new_trip.passenger.map(|p| p.id)),
        service_tier_id: Set(new_trip.service_tier.id),
        trip_pool_id: Set(None),
        order_id: Set(new_trip.order.map(|o| o.id)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("trip", e))?;

    log::debug!(
        "Created trip {} for driver {} under tier {}",
        trip.id,
        trip.driver_id,
        trip.service_tier_id
    );
    Ok(trip)
}

/// Points the given trips at `pool`, failing unless every one was updated.
async fn attach_trips_to_pool(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    pool: &trip_pool::Model,
    trip_ids: &[i32],
) -> Result<(), SeedError> {
    let result = trip::Entity::update_many()
        .col_expr(trip::Column::TripPoolId, Expr::value(pool.id))
        .col_expr(trip::Column::UpdatedAt, Expr::value(now))
        .filter(trip::Column::Id.is_in(trip_ids.iter().copied()))
        .exec(txn)
        .await
        .map_err(|e| SeedError::database("trip pool membership", e))?;

    if result.rows_affected != trip_ids.len() as u64 {
        return Err(SeedError::database(
            "trip pool membership",
            DbErr::RecordNotUpdated,
        ));
    }

    Ok(())
}

async fn create_invoice(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    billed: &user::Model,
    trip: &trip::Model,
    amount: i32,
) -> Result<invoice::Model, SeedError> {
    invoice::ActiveModel {
        user_id: Set(billed.id),
        trip_id: Set(trip.id),
        amount: Set(amount),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("invoice", e))
}

async fn create_payment(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    invoice: &invoice::Model,
    amount: i32,
) -> Result<payment::Model, SeedError> {
    payment::ActiveModel {
        invoice_id: Set(invoice.id),
        amount: Set(amount),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("payment", e))
}

async fn create_restaurant(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    name: &str,
    start_date: DateTimeWithTimeZone,
    end_date: Option<DateTimeWithTimeZone>,
) -> Result<restaurant::Model, SeedError> {
    restaurant::ActiveModel {
        name: Set(name.to_string()),
        start_date: Set(start_date),
        end_date: Set(end_date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("restaurant", e))
}

async fn create_menu(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    restaurant: &restaurant::Model,
    name: &str,
    start_date: DateTimeWithTimeZone,
    end_date: Option<DateTimeWithTimeZone>,
) -> Result<menu::Model, SeedError> {
    menu::ActiveModel {
        name: Set(name.to_string()),
        restaurant_id: Set(restaurant.id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("menu", e))
}

async fn create_menu_item(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    menu: &menu::Model,
    name: &str,
    price: i32,
) -> Result<menu_item::Model, SeedError> {
    menu_item::ActiveModel {
        name: Set(name.to_string()),
        menu_id: Set(menu.id),
        price: Set(price),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("menu item", e))
}

async fn create_order(
    txn: &DatabaseTransaction,
    now: DateTimeWithTimeZone,
    customer: &user::Model,
    menu_items: &[&menu_item::Model],
) -> Result<order::Model, SeedError> {
    let order = order::ActiveModel {
        user_id: Set(customer.id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(|e| SeedError::database("order", e))?;

    for item in menu_items {
        order_item::ActiveModel {
            order_id: Set(order.id),
            menu_item_id: Set(item.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| SeedError::database("order item", e))?;
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn sample_dates_start_each_year_at_midnight_utc() {
        let dates = SampleDates::new().unwrap();
        for (date, year) in [
            (dates.year_2015, 2015),
            (dates.year_1995, 1995),
            (dates.year_1985, 1985),
            (dates.year_1955, 1955),
            (dates.year_1935, 1935),
        ] {
            assert_eq!(date.year(), year);
            assert_eq!(date.ordinal(), 1);
            assert_eq!(date.offset().local_minus_utc(), 0);
            assert_eq!(date.timestamp() % 86_400, 0);
        }
    }
}
