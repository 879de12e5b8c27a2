const MIN_DIGITS: usize = 7;
const MAX_DIGITS: usize = 15;
const SEPARATORS: [char; 4] = [' ', '-', '(', ')'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberPhone(String);

impl SubscriberPhone {
    pub fn parse(phone: String) -> Result<SubscriberPhone, String> {
        let number = phone.strip_prefix('+').unwrap_or(&phone);
        let has_only_allowed_chars = number
            .chars()
            .all(|char| char.is_ascii_digit() || SEPARATORS.contains(&char));
        let digits = number.chars().filter(char::is_ascii_digit).count();

        if !has_only_allowed_chars || !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(format!("{} is not a valid phone number", phone));
        }

        Ok(Self(phone))
    }
}

impl AsRef<str> for SubscriberPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
