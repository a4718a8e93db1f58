//! Database migrations for the global configuration

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_global_configuration::Migration)]
    }
}

mod m20250301_000001_create_global_configuration {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GlobalConfiguration::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GlobalConfiguration::Id)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(GlobalConfiguration::Label).string())
                        .col(ColumnDef::new(GlobalConfiguration::Description).text())
                        .col(ColumnDef::new(GlobalConfiguration::Url).string())
                        .col(ColumnDef::new(GlobalConfiguration::UserName).string())
                        .col(ColumnDef::new(GlobalConfiguration::Password).string())
                        .col(
                            ColumnDef::new(GlobalConfiguration::OptionalBlock)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(GlobalConfiguration::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(GlobalConfiguration::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum GlobalConfiguration {
        Table,
        Id,
        Label,
        Description,
        Url,
        UserName,
        Password,
        OptionalBlock,
        UpdatedAt,
    }
}
