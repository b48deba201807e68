use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// A declared name broken into lower-case words.
///
/// `productId`, `ProductId` and `product_id` all have the parts
/// `["product", "id"]`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .to_snake_case()
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self { parts }
    }

    pub fn camel_case(&self) -> String {
        self.snake_case().to_lower_camel_case()
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_snake_case(&self) -> String {
        self.snake_case().to_shouty_snake_case()
    }

    /// All words lower-cased with no separator.
    pub fn lower_case(&self) -> String {
        self.parts.concat()
    }

    /// All words upper-cased with no separator.
    pub fn upper_case(&self) -> String {
        self.parts.concat().to_uppercase()
    }
}
