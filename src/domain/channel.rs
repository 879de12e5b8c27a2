use std::fmt;

/// Delivery medium a subscriber can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    Email,
    Sms,
    Push,
}

impl Channel {
    pub fn parse(channel: String) -> Result<Channel, String> {
        match channel.as_str() {
            "EMAIL" => Ok(Channel::Email),
            "SMS" => Ok(Channel::Sms),
            "PUSH" => Ok(Channel::Push),
            _ => Err(format!(
                "{} is not a valid channel. Use one of EMAIL, SMS, PUSH",
                channel
            )),
        }
    }
}

impl AsRef<str> for Channel {
    fn as_ref(&self) -> &str {
        match self {
            Channel::Email => "EMAIL",
            Channel::Sms => "SMS",
            Channel::Push => "PUSH",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
