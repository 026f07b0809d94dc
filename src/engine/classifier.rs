// ==========================================
// 订单利润分析 - 订单分类与利润计算
// ==========================================
// 规则:
// 1. 配送费为 0 → 刷单，地推成本强制为 promoter_cost
// 2. 真实单利润 = 实收 - (配送费 + 美团推广 + 地推)
//    刷单利润   = 0 - (配送费 + 美团推广 + 地推)，不计实收
// 3. 总部抽成 = 实收 / 0.9 * 0.1（不区分类型）
// ==========================================

use crate::config::ProfitConfig;
use crate::domain::order::{OrderKind, OrderRecord, RawOrderRecord};
use tracing::{debug, instrument, trace};

/// 按配送费判定订单类型
pub fn classify_order_kind(postage_fee: f64) -> OrderKind {
    if postage_fee == 0.0 {
        OrderKind::Promotional
    } else {
        OrderKind::Genuine
    }
}

/// 客单利润
///
/// 刷单忽略 real_income，利润仅为成本的负值
pub fn derive_single_profit(
    kind: OrderKind,
    real_income: f64,
    postage_fee: f64,
    meituan_fee: f64,
    street_promoter: f64,
) -> f64 {
    let cost = postage_fee + meituan_fee + street_promoter;
    match kind {
        OrderKind::Genuine => real_income - cost,
        OrderKind::Promotional => 0.0 - cost,
    }
}

/// 总部抽成: real_income / commission_base_ratio * commission_rate
pub fn derive_commission(real_income: f64, config: &ProfitConfig) -> f64 {
    real_income / config.commission_base_ratio * config.commission_rate
}

// ==========================================
// OrderClassifier - 订单分类器
// ==========================================
pub struct OrderClassifier {
    config: ProfitConfig,
}

impl OrderClassifier {
    pub fn new(config: ProfitConfig) -> Self {
        Self { config }
    }

    /// 由原始记录生成完整订单
    pub fn classify(&self, raw: &RawOrderRecord) -> OrderRecord {
        let kind = classify_order_kind(raw.postage_fee);
        let meituan_fee = raw.meituan_fee.unwrap_or(self.config.meituan_fee);

        let (postage_fee, street_promoter) = match kind {
            OrderKind::Promotional => (0.0, self.config.promoter_cost),
            OrderKind::Genuine => (
                raw.postage_fee,
                raw.street_promoter
                    .unwrap_or(self.config.default_street_promoter),
            ),
        };

        let single_profit = derive_single_profit(
            kind,
            raw.real_income,
            postage_fee,
            meituan_fee,
            street_promoter,
        );
        let commission = derive_commission(raw.real_income, &self.config);
        trace!(
            row = raw.row_number,
            order_id = %raw.order_id,
            kind = kind.label(),
            single_profit,
            "订单已分类"
        );

        OrderRecord::new(
            raw,
            kind,
            postage_fee,
            meituan_fee,
            street_promoter,
            single_profit,
            commission,
        )
    }

    /// 批量分类（保持输入顺序）
    #[instrument(skip(self, raws), fields(count = raws.len()))]
    pub fn classify_all(&self, raws: Vec<RawOrderRecord>) -> Vec<OrderRecord> {
        let records: Vec<OrderRecord> = raws.iter().map(|raw| self.classify(raw)).collect();

        let promotional = records
            .iter()
            .filter(|r| r.kind().is_promotional())
            .count();
        debug!(
            genuine = records.len() - promotional,
            promotional = promotional,
            "订单分类完成"
        );

        records
    }
}

impl Default for OrderClassifier {
    fn default() -> Self {
        Self::new(ProfitConfig::default())
    }
}
