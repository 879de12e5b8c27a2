use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Sports,
    Financial,
    Movies,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sports, Category::Financial, Category::Movies];

    pub fn parse(category: String) -> Result<Category, String> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_ref() == category)
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Accepted values are: {}",
                    category,
                    Self::accepted_values()
                )
            })
    }

    pub fn accepted_values() -> String {
        Self::ALL
            .iter()
            .map(|category| category.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Sports => "SPORTS",
            Category::Financial => "FINANCIAL",
            Category::Movies => "MOVIES",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
