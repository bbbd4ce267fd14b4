use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureError
// ─────────────────────────────────────────────────────────────────────────────

/// 對呼叫端可見的錯誤：目前只有負的 meshsize。
///
/// `legendre` 建表失敗不屬於此類，見 [`LegendreTableError`]。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadratureError {
    #[error("meshsize must be non-negative, got {meshsize}")]
    InvalidArgument { meshsize: i64 },
}

pub type QuadratureResult<T> = Result<T, QuadratureError>;

// ─────────────────────────────────────────────────────────────────────────────
// LegendreTableError
// ─────────────────────────────────────────────────────────────────────────────

/// Gauss-Legendre 節點 / 權重表建構失敗。
///
/// 每個變體帶有固定的數值代碼（`code()`），會隨 warning 一起送到 diagnostic sink。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LegendreTableError {
    #[error("order {order} exceeds the maximum supported order {max}")]
    OrderTooLarge { order: usize, max: usize },

    #[error("non-finite node or weight in table of order {order}")]
    NonFiniteTable { order: usize },

    #[error("Newton iteration did not converge for node {node} of order {order}")]
    NoConvergence { order: usize, node: usize },
}

impl LegendreTableError {
    pub fn code(&self) -> u32 {
        match self {
            LegendreTableError::OrderTooLarge { .. } => 1,
            LegendreTableError::NonFiniteTable { .. } => 2,
            LegendreTableError::NoConvergence { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuadratureError::InvalidArgument { meshsize: -3 };
        assert!(err.to_string().contains("-3"));

        let err = LegendreTableError::OrderTooLarge { order: 20_000, max: 10_000 };
        assert!(err.to_string().contains("20000"));
        assert!(err.to_string().contains("10000"));
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            LegendreTableError::OrderTooLarge { order: 2, max: 1 }.code(),
            LegendreTableError::NonFiniteTable { order: 2 }.code(),
            LegendreTableError::NoConvergence { order: 2, node: 0 }.code(),
        ];
        assert_eq!(codes, [1, 2, 3]);
    }
}
