use sea_orm_migration::prelude::*;

/// VIP 商城购买流水
#[derive(DeriveIden)]
enum RewardPurchases {
    Table,
    Id,
    UserId,
    RewardId,
    RewardName,
    Price,
    PurchasedAt,
}

/// 用户背包（商城购买所得物品）
#[derive(DeriveIden)]
enum UserInventory {
    Table,
    Id,
    UserId,
    ItemId,
    ItemName,
    ItemType,
    Description,
    ExpiresAt,
    Quantity,
    AcquiredAt,
    Used,
    UsedAt,
    Notes,
    Code,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RewardPurchases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RewardPurchases::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RewardPurchases::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RewardPurchases::RewardId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RewardPurchases::RewardName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RewardPurchases::Price)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RewardPurchases::PurchasedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserInventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserInventory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserInventory::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserInventory::ItemId).integer().not_null())
                    .col(
                        ColumnDef::new(UserInventory::ItemName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserInventory::ItemType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserInventory::Description).text().null())
                    // NULL = 永久有效
                    .col(
                        ColumnDef::new(UserInventory::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(UserInventory::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(UserInventory::AcquiredAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(UserInventory::Used)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserInventory::UsedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(UserInventory::Notes).text().null())
                    .col(ColumnDef::new(UserInventory::Code).string_len(32).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_inventory_user_used")
                    .table(UserInventory::Table)
                    .col(UserInventory::UserId)
                    .col(UserInventory::Used)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(UserInventory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(RewardPurchases::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
