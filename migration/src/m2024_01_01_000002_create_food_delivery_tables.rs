//! Migration to create the food delivery tables.
//!
//! Restaurants own dated menus, menus own priced items, and orders reference
//! menu items through the `order_items` join table.

use sea_orm_migration::prelude::*;

use crate::columns::{cascade_fk, pk_auto, timestamp_now};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurants::Id))
                    .col(ColumnDef::new(Restaurants::Name).text().not_null())
                    .col(
                        ColumnDef::new(Restaurants::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Restaurants::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_now(Restaurants::CreatedAt))
                    .col(timestamp_now(Restaurants::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(pk_auto(Menus::Id))
                    .col(ColumnDef::new(Menus::Name).text().not_null())
                    .col(ColumnDef::new(Menus::RestaurantId).integer().not_null())
                    .col(
                        ColumnDef::new(Menus::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Menus::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_now(Menus::CreatedAt))
                    .col(timestamp_now(Menus::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_menus_restaurant_id",
                        Menus::Table,
                        Menus::RestaurantId,
                        Restaurants::Table,
                        Restaurants::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItems::Id))
                    .col(ColumnDef::new(MenuItems::Name).text().not_null())
                    .col(ColumnDef::new(MenuItems::MenuId).integer().not_null())
                    .col(ColumnDef::new(MenuItems::Price).integer().not_null())
                    .col(timestamp_now(MenuItems::CreatedAt))
                    .col(timestamp_now(MenuItems::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_menu_items_menu_id",
                        MenuItems::Table,
                        MenuItems::MenuId,
                        Menus::Table,
                        Menus::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(ColumnDef::new(Orders::UserId).integer().not_null())
                    .col(timestamp_now(Orders::CreatedAt))
                    .col(timestamp_now(Orders::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_orders_user_id",
                        Orders::Table,
                        Orders::UserId,
                        Users::Table,
                        Users::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItems::Id))
                    .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
                    .col(ColumnDef::new(OrderItems::MenuItemId).integer().not_null())
                    .col(timestamp_now(OrderItems::CreatedAt))
                    .col(timestamp_now(OrderItems::UpdatedAt))
                    .foreign_key(&mut cascade_fk(
                        "fk_order_items_order_id",
                        OrderItems::Table,
                        OrderItems::OrderId,
                        Orders::Table,
                        Orders::Id,
                    ))
                    .foreign_key(&mut cascade_fk(
                        "fk_order_items_menu_item_id",
                        OrderItems::Table,
                        OrderItems::MenuItemId,
                        MenuItems::Table,
                        MenuItems::Id,
                    ))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MenuItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Restaurants {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Menus {
    Table,
    Id,
    Name,
    RestaurantId,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    Id,
    Name,
    MenuId,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    MenuItemId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
