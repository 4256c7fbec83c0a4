// ABOUTME: Fixed option catalogs and placeholder values for the job-posting wizard

/// Job types offered on the first step, in display order
pub const JOB_TYPES: &[&str] = &[
    "Cà phê",
    "Hồ tiêu",
    "Sầu riêng",
    "Thanh long",
    "Bưởi",
    "Nhổ sắn",
    "Làm cỏ",
    "Bón phân",
    "Tỉa cành",
    "Gặt lúa",
];

/// Sent when the owner leaves the location empty
pub const DEFAULT_LOCATION: &str = "Chưa cập nhật";
/// Benefits are not collected yet; every posting carries this text
pub const DEFAULT_BENEFITS: &str = "Bao ăn ở, Có xe đưa đón";
/// Deadlines are not collected yet
pub const DEFAULT_DEADLINE: &str = "2025-12-31";

pub const MSG_POSTED: &str = "Đăng tin thành công!";
pub const MSG_POST_FAILED: &str = "Đăng tin thất bại";
pub const MSG_UNEXPECTED: &str = "Có lỗi xảy ra";

/// Suggested title for a picked job type, e.g. "Tuyển thợ cà phê"
pub fn suggested_title(job_type: &str) -> String {
    format!("Tuyển thợ {}", job_type.to_lowercase())
}

/// Applicant information an owner can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementId {
    Name,
    Phone,
    Zalo,
    Photo,
    Available,
}

/// Always required, can't be deselected
pub const MANDATORY_REQUIREMENT: RequirementId = RequirementId::Phone;

impl RequirementId {
    pub fn all() -> &'static [RequirementId] {
        &[
            Self::Name,
            Self::Phone,
            Self::Zalo,
            Self::Photo,
            Self::Available,
        ]
    }

    /// Human-readable label, also what gets sent to the server
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Họ tên đầy đủ",
            Self::Phone => "Số điện thoại (Bắt buộc)",
            Self::Zalo => "Zalo (SĐT hoặc Link)",
            Self::Photo => "Ảnh chân dung",
            Self::Available => "Có thể đi ngay (1-2 ngày tới)",
        }
    }

    pub fn is_mandatory(&self) -> bool {
        *self == MANDATORY_REQUIREMENT
    }
}

/// How the wage is quoted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceType {
    #[default]
    Day,
    Kg,
}

impl PriceType {
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Kg,
            Self::Kg => Self::Day,
        }
    }

    /// Label used in the composed job description
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Theo ngày",
            Self::Kg => "Theo kg",
        }
    }

    /// Unit shown after the price, e.g. "350.000 / ngày"
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Day => "ngày",
            Self::Kg => "kg",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Day => "VD: 350.000",
            Self::Kg => "VD: 1.000",
        }
    }
}

/// Listing package. Shown for information only; nothing is charged or sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Package {
    #[default]
    Free,
    Vip1,
}

impl Package {
    pub fn all() -> &'static [Package] {
        &[Self::Free, Self::Vip1]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Free => "Miễn phí",
            Self::Vip1 => "VIP 1",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Free => "Tin thường",
            Self::Vip1 => "Đẩy top (20k)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_title_lowercases_vietnamese() {
        assert_eq!(suggested_title("Cà phê"), "Tuyển thợ cà phê");
        assert_eq!(suggested_title("Sầu riêng"), "Tuyển thợ sầu riêng");
    }

    #[test]
    fn test_only_phone_is_mandatory() {
        let mandatory: Vec<_> = RequirementId::all()
            .iter()
            .filter(|r| r.is_mandatory())
            .collect();
        assert_eq!(mandatory, vec![&RequirementId::Phone]);
    }

    #[test]
    fn test_price_type_toggle() {
        assert_eq!(PriceType::Day.toggled(), PriceType::Kg);
        assert_eq!(PriceType::Kg.toggled(), PriceType::Day);
        assert_eq!(PriceType::default().label(), "Theo ngày");
    }
}
