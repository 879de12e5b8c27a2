/// Counted in UTF-16 code units, so characters outside the BMP count twice.
const MAX_CHAR_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NotificationContent(String);

impl NotificationContent {
    pub fn parse(content: String) -> Result<NotificationContent, String> {
        if content.trim().is_empty() {
            return Err(String::from("Content is required and cannot be blank"));
        }

        if content.encode_utf16().count() > MAX_CHAR_LENGTH {
            return Err(format!(
                "Content must be between 1 and {} characters",
                MAX_CHAR_LENGTH
            ));
        }

        Ok(Self(content))
    }
}

impl AsRef<str> for NotificationContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
