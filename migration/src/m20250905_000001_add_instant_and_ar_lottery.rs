use sea_orm_migration::prelude::*;

/// 即时彩票游戏记录
#[derive(DeriveIden)]
enum InstantLotteryHistory {
    Table,
    Id,
    UserId,
    LotteryType,
    Amount,
    IsWin,
    Winnings,
    PlayedAt,
}

/// AR 彩票（购买时即确定结果）
#[derive(DeriveIden)]
enum ArLotteryTickets {
    Table,
    Id,
    UserId,
    IsWin,
    WinAmount,
    Viewed,
    ArModel,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InstantLotteryHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InstantLotteryHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InstantLotteryHistory::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstantLotteryHistory::LotteryType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstantLotteryHistory::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InstantLotteryHistory::IsWin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(InstantLotteryHistory::Winnings)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(InstantLotteryHistory::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // 冷却判断按 (user_id, lottery_type) 取最近一条
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_instant_history_user_type")
                    .table(InstantLotteryHistory::Table)
                    .col(InstantLotteryHistory::UserId)
                    .col(InstantLotteryHistory::LotteryType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArLotteryTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArLotteryTickets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArLotteryTickets::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArLotteryTickets::IsWin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ArLotteryTickets::WinAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ArLotteryTickets::Viewed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ArLotteryTickets::ArModel)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArLotteryTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ar_lottery_tickets_user")
                    .table(ArLotteryTickets::Table)
                    .col(ArLotteryTickets::UserId)
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
                    .table(ArLotteryTickets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(InstantLotteryHistory::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
