#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Failed,
}

impl DeliveryStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, DeliveryStatus::Pending)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryStatus::Sent)
    }

    /// Only a pending delivery can be settled, and only once.
    pub fn can_transition_to(&self, next: DeliveryStatus) -> bool {
        self.is_pending() && !next.is_pending()
    }

    pub fn parse(status: String) -> Result<DeliveryStatus, String> {
        match status.as_str() {
            "PENDING" => Ok(DeliveryStatus::Pending),
            "SENT" => Ok(DeliveryStatus::Sent),
            "FAILED" => Ok(DeliveryStatus::Failed),
            _ => Err(format!("{} is not a valid delivery status", status)),
        }
    }
}

impl AsRef<str> for DeliveryStatus {
    fn as_ref(&self) -> &str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::Sent => "SENT",
            DeliveryStatus::Failed => "FAILED",
        }
    }
}
