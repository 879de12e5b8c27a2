use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SubscriberId(i32);

impl SubscriberId {
    pub fn parse(id: i32) -> Result<SubscriberId, String> {
        if id <= 0 {
            return Err(format!("{} is not a valid subscriber id", id));
        }

        Ok(Self(id))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
