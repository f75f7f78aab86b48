use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("存储错误: {0}")]
    Storage(String),
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("运单未找到: {id}")]
    ShipmentNotFound { id: String },
    #[error("司机未找到: {id}")]
    CarrierNotFound { id: String },
    #[error("片区未找到: {name}")]
    DistrictNotFound { name: String },
    #[error("片区已存在: {name}")]
    DistrictAlreadyExists { name: String },
    #[error("非法状态流转: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },
    #[error("数据验证失败: {0}")]
    Validation(String),
    #[error("配置错误: {0}")]
    Configuration(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl CourierError {
    pub fn storage_error<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
    pub fn shipment_not_found<S: Into<String>>(id: S) -> Self {
        Self::ShipmentNotFound { id: id.into() }
    }
    pub fn carrier_not_found<S: Into<String>>(id: S) -> Self {
        Self::CarrierNotFound { id: id.into() }
    }
    pub fn district_not_found<S: Into<String>>(name: S) -> Self {
        Self::DistrictNotFound { name: name.into() }
    }
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// 是否可通过重试恢复
    pub fn is_retryable(&self) -> bool {
        matches!(self, CourierError::Storage(_) | CourierError::Io(_))
    }

    /// 面向操作员的提示信息
    pub fn user_message(&self) -> &str {
        match self {
            CourierError::ShipmentNotFound { .. } => "请求的运单不存在",
            CourierError::CarrierNotFound { .. } => "请求的司机不存在",
            CourierError::DistrictNotFound { .. } => "请求的片区不存在",
            CourierError::DistrictAlreadyExists { .. } => "片区已在覆盖范围内",
            CourierError::InvalidStatusTransition { .. } => "当前状态不允许该操作",
            CourierError::Validation(_) => "输入数据验证失败",
            CourierError::Configuration(_) => "系统配置有误",
            _ => "系统内部错误，请稍后重试",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        let err = CourierError::carrier_not_found("truck-001");
        assert!(matches!(err, CourierError::CarrierNotFound { ref id } if id == "truck-001"));
        assert_eq!(err.user_message(), "请求的司机不存在");

        let err = CourierError::validation_error("容量必须为正数");
        assert_eq!(err.to_string(), "数据验证失败: 容量必须为正数");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(CourierError::storage_error("写入失败").is_retryable());
        assert!(!CourierError::shipment_not_found("s1").is_retryable());
        assert!(!CourierError::Validation("bad".into()).is_retryable());
    }
}
