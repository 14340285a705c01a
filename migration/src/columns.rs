//! Column helpers shared by the table migrations.

use sea_orm_migration::prelude::*;

/// Auto-incrementing integer primary key.
pub fn pk_auto<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// Timestamp column defaulting to the insertion time.
pub fn timestamp_now<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// Foreign key that cascades deletes from the referenced row.
pub fn cascade_fk<F, FC, T, TC>(
    name: &str,
    from: F,
    from_col: FC,
    to: T,
    to_col: TC,
) -> ForeignKeyCreateStatement
where
    F: IntoTableRef,
    FC: IntoIden,
    T: IntoTableRef,
    TC: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from(from, from_col)
        .to(to, to_col)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}
