use crate::entities::{lottery_draw_entity as draws, ticket_entity as tickets, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::rules::{PrizeTier, TicketNumbers, vip, wallet};
use crate::services::user_service::load_user;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct LotteryService {
    pool: Arc<DatabaseConnection>,
}

impl LotteryService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    /// 未开奖的期次，按开奖时间升序
    pub async fn list_active_draws(&self) -> AppResult<Vec<DrawResponse>> {
        let list = draws::Entity::find()
            .filter(draws::Column::IsCompleted.eq(false))
            .order_by_asc(draws::Column::DrawDate)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn get_draw(&self, draw_id: i64) -> AppResult<DrawResponse> {
        Ok(self.find_draw(draw_id).await?.into())
    }

    /// 购票
    ///
    /// 1. 校验号码（6 个 1..=36 不重复）
    /// 2. 期次存在且未开奖
    /// 3. 余额不足时用水晶补足差额
    /// 4. 写入彩票（号码升序存储）
    pub async fn buy_ticket(
        &self,
        user_id: i64,
        draw_id: i64,
        request: BuyTicketRequest,
    ) -> AppResult<BuyTicketResponse> {
        let numbers = TicketNumbers::new(&request.numbers)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let txn = self.pool.begin().await?;

        let draw = draws::Entity::find_by_id(draw_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Lottery draw not found".to_string()))?;
        if draw.is_completed {
            return Err(AppError::Conflict("Lottery draw is already completed".to_string()));
        }

        let user = load_user(&txn, user_id).await?;
        let payment = wallet::plan_ticket_payment(user.balance, user.crystals, draw.ticket_price)
            .ok_or_else(|| {
                AppError::InsufficientFunds(format!(
                    "Ticket costs {}, not enough balance or crystals",
                    draw.ticket_price
                ))
            })?;

        let mut am = user.into_active_model();
        am.balance = Set(payment.balance_after);
        am.crystals = Set(payment.crystals_after);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        let ticket = tickets::ActiveModel {
            user_id: Set(user_id),
            lottery_draw_id: Set(draw_id),
            numbers: Set(Some(numbers.to_string())),
            is_winning: Set(false),
            purchased_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "User {user_id} bought ticket {} for draw {draw_id} ({numbers}), crystals spent {}",
            ticket.id,
            payment.crystals_spent
        );

        Ok(BuyTicketResponse {
            ticket: ticket.into(),
            balance: payment.balance_after,
            crystals: payment.crystals_after,
            crystals_spent: payment.crystals_spent,
        })
    }

    /// 用户在某期的彩票
    pub async fn list_draw_tickets(
        &self,
        user_id: i64,
        draw_id: i64,
    ) -> AppResult<Vec<TicketResponse>> {
        self.find_draw(draw_id).await?;
        let list = tickets::Entity::find()
            .filter(tickets::Column::UserId.eq(user_id))
            .filter(tickets::Column::LotteryDrawId.eq(draw_id))
            .order_by_desc(tickets::Column::PurchasedAt)
            .all(&*self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 用户所有彩票（分页，倒序）
    pub async fn list_user_tickets(
        &self,
        user_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<TicketResponse>> {
        let base_query = tickets::Entity::find().filter(tickets::Column::UserId.eq(user_id));

        let total = base_query.clone().count(&*self.pool).await? as i64;

        let items = base_query
            .order_by_desc(tickets::Column::PurchasedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&*self.pool)
            .await?;

        Ok(PaginatedResponse::from_params(
            items.into_iter().map(Into::into).collect(),
            params,
            total,
        ))
    }

    /// 开奖结算，随机生成中奖号码
    pub async fn settle_draw(&self, draw_id: i64) -> AppResult<SettlementResponse> {
        let winning = {
            let mut rng = rand::thread_rng();
            TicketNumbers::random(&mut rng)
        };
        self.settle_draw_with(draw_id, winning).await
    }

    /// 以给定中奖号码结算:
    /// 1. 期次存在且未开奖，标记完成并写入中奖号码
    /// 2. 逐张比对彩票，命中 3 个及以上为中奖
    /// 3. 中奖彩票标记 is_winning，按奖级给用户加余额 / VIP / 水晶
    ///
    /// 整个过程在一个事务内，中途失败全部回滚。
    pub(crate) async fn settle_draw_with(
        &self,
        draw_id: i64,
        winning: TicketNumbers,
    ) -> AppResult<SettlementResponse> {
        let txn = self.pool.begin().await?;

        let draw = draws::Entity::find_by_id(draw_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Lottery draw not found".to_string()))?;
        if draw.is_completed {
            return Err(AppError::Conflict("Lottery draw is already completed".to_string()));
        }
        let prize_pool = draw.prize_pool;

        {
            let mut am = draw.into_active_model();
            am.is_completed = Set(true);
            am.winning_numbers = Set(Some(winning.to_string()));
            am.update(&txn).await?;
        }

        let draw_tickets = tickets::Entity::find()
            .filter(tickets::Column::LotteryDrawId.eq(draw_id))
            .order_by_asc(tickets::Column::Id)
            .all(&txn)
            .await?;

        let (tickets_checked, matched) = evaluate_tickets(&winning, prize_pool, &draw_tickets);

        // 只有实际入账的中奖记录计入返回与派奖总额
        let mut winners = Vec::with_capacity(matched.len());
        for winner in matched {
            tickets::ActiveModel {
                id: Set(winner.ticket_id),
                is_winning: Set(true),
                ..Default::default()
            }
            .update(&txn)
            .await?;

            // 同一用户可能有多张中奖票，每次重新读取最新余额
            let Some(user) = users::Entity::find_by_id(winner.user_id).one(&txn).await? else {
                log::warn!(
                    "Winning ticket {} belongs to missing user {}, payout skipped",
                    winner.ticket_id,
                    winner.user_id
                );
                continue;
            };
            let balance = user.balance + winner.payout;
            let vip_level = vip::raise(user.vip_level, winner.vip_bonus);
            let crystals = user.crystals + winner.crystal_bonus;

            let mut am = user.into_active_model();
            am.balance = Set(balance);
            am.vip_level = Set(vip_level);
            am.crystals = Set(crystals);
            am.updated_at = Set(Utc::now());
            am.update(&txn).await?;

            winners.push(winner);
        }

        txn.commit().await?;

        let total_paid = winners.iter().map(|w| w.payout).sum();
        log::info!(
            "Draw {draw_id} settled with {winning}: {tickets_checked} tickets checked, {} winners, {total_paid} paid",
            winners.len()
        );

        Ok(SettlementResponse {
            draw_id,
            winning_numbers: winning.to_vec(),
            tickets_checked,
            winners,
            total_paid,
        })
    }

    async fn find_draw(&self, draw_id: i64) -> AppResult<draws::Model> {
        draws::Entity::find_by_id(draw_id)
            .one(&*self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Lottery draw not found".to_string()))
    }
}

/// 比对一期的全部彩票，返回 (参与比对数, 中奖列表)
///
/// 号码为空的彩票跳过，不计入比对数。
pub(crate) fn evaluate_tickets(
    winning: &TicketNumbers,
    prize_pool: i64,
    draw_tickets: &[tickets::Model],
) -> (usize, Vec<SettledWinner>) {
    let mut checked = 0;
    let mut winners = Vec::new();

    for ticket in draw_tickets {
        let Some(numbers) = ticket.numbers.as_deref().filter(|n| !n.trim().is_empty()) else {
            continue;
        };
        checked += 1;

        let matches = winning.count_matches(numbers);
        if let Some(tier) = PrizeTier::from_matches(matches) {
            winners.push(SettledWinner {
                ticket_id: ticket.id,
                user_id: ticket.user_id,
                matches,
                tier,
                payout: tier.payout(prize_pool),
                vip_bonus: tier.vip_bonus(),
                crystal_bonus: tier.crystal_bonus(),
            });
        }
    }

    (checked, winners)
}
