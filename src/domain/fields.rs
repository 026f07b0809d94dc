// ==========================================
// 订单利润分析 - 表头映射
// ==========================================
// 职责: 逻辑字段 ↔ 导出表中文列名（输入与报表共用）
// ==========================================

/// 订单字段（按 OrderRecord 声明顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    OrderId,
    OrderTime,
    OrderSource,
    RealIncome,
    PostageFee,
    MeituanFee,
    StreetPromoter,
    SingleProfit,
    Commission,
}

impl OrderField {
    /// 报表列顺序
    pub const ALL: [OrderField; 9] = [
        OrderField::OrderId,
        OrderField::OrderTime,
        OrderField::OrderSource,
        OrderField::RealIncome,
        OrderField::PostageFee,
        OrderField::MeituanFee,
        OrderField::StreetPromoter,
        OrderField::SingleProfit,
        OrderField::Commission,
    ];

    /// 源文件必须提供的列
    pub const INPUT: [OrderField; 5] = [
        OrderField::OrderId,
        OrderField::OrderTime,
        OrderField::OrderSource,
        OrderField::RealIncome,
        OrderField::PostageFee,
    ];

    /// 中文列名
    pub fn header(self) -> &'static str {
        match self {
            OrderField::OrderId => "订单编号",
            OrderField::OrderTime => "下单日期",
            OrderField::OrderSource => "来源平台",
            OrderField::RealIncome => "商家实收金额",
            OrderField::PostageFee => "总配送费",
            OrderField::MeituanFee => "美团推广成本",
            OrderField::StreetPromoter => "地推成本",
            OrderField::SingleProfit => "客单利润",
            OrderField::Commission => "总部抽成",
        }
    }

    /// 是否为文本列（其余为数值列）
    pub fn is_text(self) -> bool {
        matches!(
            self,
            OrderField::OrderId | OrderField::OrderTime | OrderField::OrderSource
        )
    }
}

/// 统计表列名: [real_orders, fake_orders, total_income, average_income, reback_income]
pub const SUMMARY_HEADERS: [&str; 5] = [
    "真实单量",
    "刷单量",
    "减除配送费刷单费推广费的总利润",
    "每单平均利润",
    "总部需返点",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_mapping() {
        let headers: Vec<&str> = OrderField::ALL.iter().map(|f| f.header()).collect();
        assert_eq!(
            headers,
            vec![
                "订单编号",
                "下单日期",
                "来源平台",
                "商家实收金额",
                "总配送费",
                "美团推广成本",
                "地推成本",
                "客单利润",
                "总部抽成",
            ]
        );
    }

    #[test]
    fn test_input_fields_are_prefix_of_all() {
        assert_eq!(&OrderField::ALL[..5], &OrderField::INPUT[..]);
        assert!(OrderField::INPUT[..3].iter().all(|f| f.is_text()));
        assert!(!OrderField::RealIncome.is_text());
    }
}
