// ==========================================
// 订单利润分析 - 订单簿
// ==========================================
// 用途: 单个源文件的分类 + 汇总结果
// 生命周期: 由 OrderBookAggregator 一次性构造，报表层只读
// ==========================================

use crate::domain::order::OrderRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// OrderSummary - 汇总统计（统计 sheet 一行）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub real_orders: usize,
    pub fake_orders: usize,
    pub total_income: f64,
    pub average_income: f64,
    pub reback_income: f64,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "实际单量: {}, 刷单量: {}, 实际总收入: {:.2}, 平均单利润: {:.2}, 总部需返点: {:.2}",
            self.real_orders, self.fake_orders, self.total_income, self.average_income, self.reback_income
        )
    }
}

// ==========================================
// OrderBook - 订单簿
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBook {
    summary: OrderSummary,
    real_table: Vec<OrderRecord>,
    promoter_table: Vec<OrderRecord>,
}

impl OrderBook {
    pub(crate) fn new(
        summary: OrderSummary,
        real_table: Vec<OrderRecord>,
        promoter_table: Vec<OrderRecord>,
    ) -> Self {
        Self {
            summary,
            real_table,
            promoter_table,
        }
    }

    pub fn summary(&self) -> OrderSummary {
        self.summary
    }

    pub fn real_orders(&self) -> usize {
        self.summary.real_orders
    }

    pub fn fake_orders(&self) -> usize {
        self.summary.fake_orders
    }

    pub fn total_income(&self) -> f64 {
        self.summary.total_income
    }

    pub fn average_income(&self) -> f64 {
        self.summary.average_income
    }

    pub fn reback_income(&self) -> f64 {
        self.summary.reback_income
    }

    /// 真实单（保持输入顺序）
    pub fn real_table(&self) -> &[OrderRecord] {
        &self.real_table
    }

    /// 刷单（保持输入顺序）
    pub fn promoter_table(&self) -> &[OrderRecord] {
        &self.promoter_table
    }

    pub fn total_orders(&self) -> usize {
        self.real_table.len() + self.promoter_table.len()
    }
}
