use crate::math::integrate::quadratureerror::{
    QuadratureError,
    QuadratureResult
};

// ─────────────────────────────────────────────────────────────────────────────
// CompositeRule
// ─────────────────────────────────────────────────────────────────────────────
//
// 複合規則要求子區間數為區塊大小的倍數：
//   Simpson：每區塊 2 個子區間（3 點）
//   Milne  ：每區塊 4 個子區間（5 點）
//
// meshsize 一律只往上調整，保留呼叫端的最低解析度。
// meshsize == 1 沒有任何子區間，調整為恰好一個區塊。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeRule {
    Simpson,
    Milne
}

impl CompositeRule {
    pub fn block_size(&self) -> usize {
        match self {
            CompositeRule::Simpson => 2,
            CompositeRule::Milne => 4
        }
    }

    /// 實際使用的 meshsize。
    ///
    /// - `requested < 0`：`QuadratureError::InvalidArgument`
    /// - `requested == 0`：回傳 0（呼叫端直接回傳 0.0）
    /// - 其他：不小於 `requested` 的最小 m，使 `(m - 1)` 為 `block_size()` 的正整數倍
    pub fn effective_meshsize(&self, requested: i64) -> QuadratureResult<usize> {
        let requested = validate_meshsize(requested)?;
        if requested == 0 {
            return Ok(0);
        }

        let block = self.block_size();
        let intervals = (requested - 1).max(1);
        let remainder = intervals % block;
        let intervals = if remainder == 0 {
            intervals
        } else {
            intervals + block - remainder
        };
        Ok(intervals + 1)
    }
}

/// 共用的 meshsize 檢查：負值為錯誤，否則轉為 `usize`。
pub fn validate_meshsize(meshsize: i64) -> QuadratureResult<usize> {
    usize::try_from(meshsize).map_err(|_| QuadratureError::InvalidArgument { meshsize })
}
