// ==========================================
// 订单利润分析 - 订单领域模型
// ==========================================
// RawOrderRecord: 导入中间结构（字段映射 → 此结构）
// OrderRecord: 分类后的完整订单，构造后不可变
// ==========================================

use crate::domain::fields::OrderField;
use serde::Serialize;

// ==========================================
// OrderKind - 订单类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    /// 真实单（配送费非 0）
    Genuine,
    /// 刷单（配送费为 0）
    Promotional,
}

impl OrderKind {
    pub fn is_promotional(self) -> bool {
        matches!(self, OrderKind::Promotional)
    }

    /// 报表 sheet 名
    pub fn label(self) -> &'static str {
        match self {
            OrderKind::Genuine => "真实单",
            OrderKind::Promotional => "刷单",
        }
    }
}

/// 解析配送费文本
///
/// 空字符串视为 0（与 "0" / "0.0" 同为刷单触发值）；
/// 无法解析时返回 None，由调用方报告类型转换错误
pub fn parse_postage_fee(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

// ==========================================
// RawOrderRecord - 导入中间结构体
// ==========================================
// 生命周期: 仅在导入 → 分类之间
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawOrderRecord {
    pub order_id: String,
    pub order_time: String,
    pub order_source: String,
    pub real_income: f64,
    pub postage_fee: f64,
    /// None → 使用 ProfitConfig::meituan_fee
    pub meituan_fee: Option<f64>,
    /// None → 使用 ProfitConfig::default_street_promoter（刷单时被强制覆写）
    pub street_promoter: Option<f64>,
    /// 源文件数据行号（从 1 开始，不含表头）
    pub row_number: usize,
}

impl RawOrderRecord {
    pub fn new(
        order_id: impl Into<String>,
        order_time: impl Into<String>,
        order_source: impl Into<String>,
        real_income: f64,
        postage_fee: f64,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_time: order_time.into(),
            order_source: order_source.into(),
            real_income,
            postage_fee,
            meituan_fee: None,
            street_promoter: None,
            row_number: 0,
        }
    }

    pub fn with_meituan_fee(mut self, fee: f64) -> Self {
        self.meituan_fee = Some(fee);
        self
    }

    pub fn with_street_promoter(mut self, cost: f64) -> Self {
        self.street_promoter = Some(cost);
        self
    }

    pub fn with_row_number(mut self, row_number: usize) -> Self {
        self.row_number = row_number;
        self
    }
}

// ==========================================
// OrderRecord - 分类后的订单
// ==========================================
// 红线: 仅由 OrderClassifier 构造，派生字段不可外部写入
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    order_id: String,
    order_time: String,
    order_source: String,
    real_income: f64,
    postage_fee: f64,
    meituan_fee: f64,
    street_promoter: f64,
    single_profit: f64,
    commission: f64,
    #[serde(skip)]
    kind: OrderKind,
}

impl OrderRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        raw: &RawOrderRecord,
        kind: OrderKind,
        postage_fee: f64,
        meituan_fee: f64,
        street_promoter: f64,
        single_profit: f64,
        commission: f64,
    ) -> Self {
        Self {
            order_id: raw.order_id.clone(),
            order_time: raw.order_time.clone(),
            order_source: raw.order_source.clone(),
            real_income: raw.real_income,
            postage_fee,
            meituan_fee,
            street_promoter,
            single_profit,
            commission,
            kind,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn order_time(&self) -> &str {
        &self.order_time
    }

    pub fn order_source(&self) -> &str {
        &self.order_source
    }

    pub fn real_income(&self) -> f64 {
        self.real_income
    }

    pub fn postage_fee(&self) -> f64 {
        self.postage_fee
    }

    pub fn meituan_fee(&self) -> f64 {
        self.meituan_fee
    }

    pub fn street_promoter(&self) -> f64 {
        self.street_promoter
    }

    pub fn single_profit(&self) -> f64 {
        self.single_profit
    }

    pub fn commission(&self) -> f64 {
        self.commission
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    /// 刷单承担的固定成本（美团推广 + 地推）
    pub fn carried_cost(&self) -> f64 {
        self.meituan_fee + self.street_promoter
    }

    /// 数值列取值（文本列返回 None）
    pub fn numeric_value(&self, field: OrderField) -> Option<f64> {
        match field {
            OrderField::RealIncome => Some(self.real_income),
            OrderField::PostageFee => Some(self.postage_fee),
            OrderField::MeituanFee => Some(self.meituan_fee),
            OrderField::StreetPromoter => Some(self.street_promoter),
            OrderField::SingleProfit => Some(self.single_profit),
            OrderField::Commission => Some(self.commission),
            OrderField::OrderId | OrderField::OrderTime | OrderField::OrderSource => None,
        }
    }

    /// 文本列取值（数值列返回 None）
    pub fn text_value(&self, field: OrderField) -> Option<&str> {
        match field {
            OrderField::OrderId => Some(&self.order_id),
            OrderField::OrderTime => Some(&self.order_time),
            OrderField::OrderSource => Some(&self.order_source),
            _ => None,
        }
    }
}
